//! Operator workflow tests against a mock backend.
//!
//! These don't spawn the `sustaingo` binary (the prompts are interactive);
//! they drive the same library calls the commands make, including the token
//! file contract the CLI uses to carry a session across invocations.

use std::path::PathBuf;

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sustaingo_business::auth;
use sustaingo_business::resources::{AdminResource as _, AdminUser, Bag};
use sustaingo_business::{
    ActionOutcome, AdminConfig, AlwaysConfirm, ApiError, Credential, ResourceTable, Session,
    TableStatus,
};

/// One simulated operator: a mock backend plus the token file the CLI keeps
/// in its config directory.
struct ConsoleHarness {
    server: MockServer,
    config: AdminConfig,
    _dir: tempfile::TempDir,
    token_path: PathBuf,
}

impl ConsoleHarness {
    async fn new() -> Self {
        let server = MockServer::start().await;
        let config = AdminConfig::new(server.uri());
        let dir = tempfile::tempdir().unwrap();
        let token_path = dir.path().join("tokens");
        Self {
            server,
            config,
            _dir: dir,
            token_path,
        }
    }

    /// What `sustaingo login` does after a successful call.
    fn persist(&self, credential: &Credential) {
        let json = serde_json::to_string(credential).unwrap();
        std::fs::write(&self.token_path, json).unwrap();
    }

    /// What the next invocation does at startup.
    fn restore(&self) -> Session {
        match std::fs::read_to_string(&self.token_path) {
            Ok(content) => Session::with_credential(serde_json::from_str(&content).unwrap()),
            Err(_) => Session::anonymous(),
        }
    }

    /// What `sustaingo logout` and the 401 handler do.
    fn clear_tokens(&self) {
        std::fs::remove_file(&self.token_path).ok();
    }

    async fn mock_staff_login(&self) {
        Mock::given(method("POST"))
            .and(path("/api/login/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access": "T1",
                "refresh": "T2",
                "email": "a@x.com",
                "role": "customer",
                "is_staff": true
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    async fn mock_user_list(&self, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path("/api/admin/users/"))
            .and(header("Authorization", "Bearer T1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
                "id": 3,
                "first_name": "Lina",
                "email": "lina@example.com",
                "role": "customer",
                "is_active": true,
                "date_joined": "2025-03-11T09:12:44Z"
            }])))
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }
}

#[tokio::test]
async fn test_login_session_survives_into_the_next_invocation() {
    let harness = ConsoleHarness::new().await;
    harness.mock_staff_login().await;
    harness.mock_user_list(1).await;

    // First invocation: login and persist.
    let credential = auth::login(&harness.config, "a@x.com", "p").await.unwrap();
    assert_eq!(credential, Credential::new("T1", "T2"));
    harness.persist(&credential);

    // Second invocation: restore from disk and list users.
    let session = harness.restore();
    assert!(session.is_authenticated());

    let mut table = ResourceTable::<AdminUser>::new();
    table.load(&harness.config, &session).await.unwrap();
    assert_eq!(table.rows().len(), 1);
    assert_eq!(table.rows()[0].email, "lina@example.com");
}

#[tokio::test]
async fn test_denied_login_persists_nothing() {
    let harness = ConsoleHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/api/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access": "T1",
            "refresh": "T2",
            "is_staff": false
        })))
        .mount(&harness.server)
        .await;

    let err = auth::login(&harness.config, "a@x.com", "p")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Access denied. Not an admin.");

    // The CLI only persists on Ok, so the next invocation is anonymous.
    let session = harness.restore();
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_logged_out_invocation_makes_no_request() {
    let harness = ConsoleHarness::new().await;
    harness.mock_user_list(0).await;
    harness.clear_tokens();

    let session = harness.restore();
    let mut table = ResourceTable::<AdminUser>::new();
    let err = table.load(&harness.config, &session).await.unwrap_err();

    assert_eq!(err, ApiError::MissingCredential);
    assert_eq!(err.to_string(), "No token found. Please log in.");
}

#[tokio::test]
async fn test_delete_workflow_refetches_the_listing_once() {
    let harness = ConsoleHarness::new().await;
    // Initial list plus exactly one refetch after the delete.
    harness.mock_user_list(2).await;

    Mock::given(method("DELETE"))
        .and(path("/api/admin/user/3/delete/"))
        .and(header("Authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&harness.server)
        .await;

    let session = Session::with_credential(Credential::new("T1", "T2"));
    let mut table = ResourceTable::<AdminUser>::new();
    table.load(&harness.config, &session).await.unwrap();

    let delete = AdminUser::action("delete").unwrap();
    let outcome = table
        .execute(&harness.config, &session, &mut AlwaysConfirm, delete, "3")
        .await
        .unwrap();
    assert_eq!(outcome, ActionOutcome::Completed);
}

#[tokio::test]
async fn test_failed_bag_toggle_reports_fixed_message_and_skips_refetch() {
    let harness = ConsoleHarness::new().await;

    Mock::given(method("PATCH"))
        .and(path("/api/admin/bag/7/toggle-active/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&harness.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/bags/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&harness.server)
        .await;

    let session = Session::with_credential(Credential::new("T1", "T2"));
    let mut table = ResourceTable::<Bag>::new();

    let toggle = Bag::action("toggle-active").unwrap();
    let err = table
        .execute(&harness.config, &session, &mut AlwaysConfirm, toggle, "7")
        .await
        .unwrap_err();

    // The CLI prints the action's fixed message, then the error dimmed.
    assert_eq!(toggle.failure, "Failed to toggle bag status.");
    assert_eq!(err, ApiError::Status(500));
}

#[tokio::test]
async fn test_rejected_credential_clears_the_stored_session() {
    let harness = ConsoleHarness::new().await;
    harness.persist(&Credential::new("T1", "T2"));

    Mock::given(method("GET"))
        .and(path("/api/admin/users/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&harness.server)
        .await;

    let mut session = harness.restore();
    let mut table = ResourceTable::<AdminUser>::new();
    let err = table.load(&harness.config, &session).await.unwrap_err();

    // What the CLI failure path does with a 401.
    if session.discard_if_rejected(&err) {
        harness.clear_tokens();
    }

    assert_eq!(*table.status(), TableStatus::LoadFailed(err.to_string()));
    assert!(!session.is_authenticated());
    assert!(!harness.token_path.exists());
    assert!(!harness.restore().is_authenticated());
}
