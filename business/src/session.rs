//! Explicit session context.
//!
//! Every authorized operation takes a [`Session`] instead of reading tokens
//! from some ambient store. A session holds at most one [`Credential`]; the
//! CLI mirrors it into a token file so it survives restarts.

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

/// A pair of JWT tokens issued at login.
///
/// Serialized with the same keys the backend uses in its token responses,
/// so the CLI token file and test fixtures read naturally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Short-lived token attached as `Bearer` to authorized requests.
    #[serde(rename = "access_token")]
    pub access: String,
    /// Long-lived token accepted by the refresh endpoint.
    #[serde(rename = "refresh_token")]
    pub refresh: String,
}

impl Credential {
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: access.into(),
            refresh: refresh.into(),
        }
    }
}

/// Holds the credential for the current process.
#[derive(Debug, Clone, Default)]
pub struct Session {
    credential: Option<Credential>,
}

impl Session {
    /// A session with no credential.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session carrying an existing credential.
    pub fn with_credential(credential: Credential) -> Self {
        Self {
            credential: Some(credential),
        }
    }

    /// Whether a credential is present.
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    /// The credential, or `MissingCredential` when there is none.
    ///
    /// Callers check this before issuing any request, so an unauthenticated
    /// session never produces network traffic.
    pub fn require(&self) -> ApiResult<&Credential> {
        self.credential.as_ref().ok_or(ApiError::MissingCredential)
    }

    /// The access token for request builders, when present.
    pub fn access_token(&self) -> Option<&str> {
        self.credential.as_ref().map(|c| c.access.as_str())
    }

    /// Store a credential, replacing any previous one.
    pub fn establish(&mut self, credential: Credential) {
        self.credential = Some(credential);
    }

    /// Destroy the credential. Used by logout and after a 401.
    pub fn clear(&mut self) {
        self.credential = None;
    }

    /// Drop the credential when the error says the server rejected it.
    /// Returns true if the credential was destroyed.
    pub fn discard_if_rejected(&mut self, error: &ApiError) -> bool {
        if error.is_unauthorized() && self.credential.is_some() {
            log::warn!("stored credential rejected by server, discarding");
            self.credential = None;
            true
        } else {
            false
        }
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_session_is_unauthenticated() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert_eq!(session.require(), Err(ApiError::MissingCredential));
        assert_eq!(session.access_token(), None);
    }

    #[test]
    fn test_establish_and_clear() {
        let mut session = Session::anonymous();
        session.establish(Credential::new("T1", "T2"));
        assert!(session.is_authenticated());
        assert_eq!(session.access_token(), Some("T1"));

        session.clear();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_discard_if_rejected_on_401() {
        let mut session = Session::with_credential(Credential::new("T1", "T2"));
        assert!(session.discard_if_rejected(&ApiError::Status(401)));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_discard_if_rejected_keeps_credential_on_other_errors() {
        let mut session = Session::with_credential(Credential::new("T1", "T2"));
        assert!(!session.discard_if_rejected(&ApiError::Status(500)));
        assert!(!session.discard_if_rejected(&ApiError::transport("connection refused")));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_credential_serializes_with_token_file_keys() {
        let credential = Credential::new("T1", "T2");
        let json = serde_json::to_string(&credential).unwrap();
        assert_eq!(json, r#"{"access_token":"T1","refresh_token":"T2"}"#);

        let parsed: Credential = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, credential);
    }
}
