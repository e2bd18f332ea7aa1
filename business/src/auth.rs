//! Login, token refresh, and registration flows.
//!
//! These functions perform network IO against the public auth endpoints and
//! map responses into [`Credential`]s or [`ApiError`]s. They never touch
//! persistent storage; the CLI decides what to do with a returned credential.

use serde::{Deserialize, Serialize};

use crate::config::AdminConfig;
use crate::error::{ApiError, ApiResult, extract_detail};
use crate::http::Client;
use crate::session::Credential;

/// Message shown when the login request is rejected without a usable detail.
pub const LOGIN_FAILED: &str = "Login failed";
/// Message shown when a non-staff account passes password checks.
pub const NOT_AN_ADMIN: &str = "Access denied. Not an admin.";
/// Message shown when registration fails without a usable detail.
pub const REGISTRATION_FAILED: &str = "Something went wrong.";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    // The backend keys the identifier field `username` but expects the email.
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access: String,
    refresh: String,
    #[serde(default)]
    is_staff: bool,
}

/// POST `/api/login/`
///
/// Returns a credential only for staff accounts. A 2xx response without
/// `is_staff: true` is rejected the same way a wrong password is, and no
/// token leaves this function.
pub async fn login(config: &AdminConfig, email: &str, password: &str) -> ApiResult<Credential> {
    let url = format!("{}/login/", config.api_url());

    let body = LoginRequest {
        username: email,
        password,
    };

    let response = Client::post(&url)
        .json(&body)
        .map_err(|e| ApiError::decode(format!("Failed to serialize request: {e}")))?
        .send()
        .await?;

    if !response.is_success() {
        return Err(ApiError::denied(extract_detail(
            &response.body,
            LOGIN_FAILED,
        )));
    }

    let login: LoginResponse = response
        .json()
        .map_err(|e| ApiError::decode(format!("Failed to parse LoginResponse: {e}")))?;

    if !login.is_staff {
        log::warn!("login succeeded for {email} but the account is not staff");
        return Err(ApiError::denied(NOT_AN_ADMIN));
    }

    Ok(Credential::new(login.access, login.refresh))
}

#[derive(Debug, Serialize)]
struct RefreshRequest<'a> {
    refresh: &'a str,
}

#[derive(Debug, Deserialize)]
struct RefreshResponse {
    access: String,
}

/// POST `/api/token/refresh/`
///
/// Exchanges a refresh token for a new access token. Callers decide whether
/// to retry anything; this crate never refreshes on its own.
pub async fn refresh_access(config: &AdminConfig, refresh: &str) -> ApiResult<String> {
    let url = format!("{}/token/refresh/", config.api_url());

    let response = Client::post(&url)
        .json(&RefreshRequest { refresh })
        .map_err(|e| ApiError::decode(format!("Failed to serialize request: {e}")))?
        .send()
        .await?;

    if !response.is_success() {
        return Err(ApiError::Status(response.status));
    }

    let refreshed: RefreshResponse = response
        .json()
        .map_err(|e| ApiError::decode(format!("Failed to parse RefreshResponse: {e}")))?;

    Ok(refreshed.access)
}

/// Input for the registration endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterInput {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub password: String,
    pub confirm_password: String,
}

/// A fresh account straight from registration.
#[derive(Debug, Clone)]
pub struct Registered {
    pub credential: Credential,
    pub role: String,
}

#[derive(Debug, Deserialize)]
struct RegisterResponse {
    refresh: String,
    access: String,
    role: String,
}

/// POST `/api/register/`
///
/// Returns `201 Created` with a token pair for the new account. The access
/// token is what profile creation must authenticate with.
pub async fn register(config: &AdminConfig, input: &RegisterInput) -> ApiResult<Registered> {
    let url = format!("{}/register/", config.api_url());

    let response = Client::post(&url)
        .json(input)
        .map_err(|e| ApiError::decode(format!("Failed to serialize request: {e}")))?
        .send()
        .await?;

    if !response.is_success() {
        return Err(ApiError::denied(extract_detail(
            &response.body,
            REGISTRATION_FAILED,
        )));
    }

    let registered: RegisterResponse = response
        .json()
        .map_err(|e| ApiError::decode(format!("Failed to parse RegisterResponse: {e}")))?;

    Ok(Registered {
        credential: Credential::new(registered.access, registered.refresh),
        role: registered.role,
    })
}

/// Input for NGO profile creation.
#[derive(Debug, Clone, Serialize)]
pub struct NgoProfileInput {
    pub organization_name: String,
    pub region: String,
    pub description: String,
    pub website: String,
    pub logo: String,
}

/// Input for vendor profile creation.
#[derive(Debug, Clone, Serialize)]
pub struct VendorProfileInput {
    pub name: String,
    pub description: String,
    pub delivery_time_minutes: u32,
    pub delivery_available: bool,
    pub logo: String,
}

/// POST `/api/create_ngo_profile/`
///
/// Must be called with the access token returned by [`register`].
pub async fn create_ngo_profile(
    config: &AdminConfig,
    access: &str,
    input: &NgoProfileInput,
) -> ApiResult<()> {
    post_profile(&format!("{}/create_ngo_profile/", config.api_url()), access, input).await
}

/// POST `/api/create_vendor_profile/`
pub async fn create_vendor_profile(
    config: &AdminConfig,
    access: &str,
    input: &VendorProfileInput,
) -> ApiResult<()> {
    post_profile(
        &format!("{}/create_vendor_profile/", config.api_url()),
        access,
        input,
    )
    .await
}

async fn post_profile<T: Serialize>(url: &str, access: &str, input: &T) -> ApiResult<()> {
    let response = Client::post(url)
        .bearer(Some(access))
        .json(input)
        .map_err(|e| ApiError::decode(format!("Failed to serialize request: {e}")))?
        .send()
        .await?;

    if !response.is_success() {
        return Err(ApiError::denied(extract_detail(
            &response.body,
            REGISTRATION_FAILED,
        )));
    }

    Ok(())
}
