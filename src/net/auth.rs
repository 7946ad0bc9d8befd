//! Auth endpoints: login, signup, and the current-user profile.
//!
//! Thin request/response shaping over [`ApiClient`]. Errors from the
//! request layer propagate unchanged.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde_json::Value;

use super::api::{ApiClient, ApiError};
use super::types::{AuthResponse, LoginRequest, SignupRequest, UserProfile};

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const SIGNUP_ENDPOINT: &str = "/auth/signup";
pub const PROFILE_ENDPOINT: &str = "/users/profile";

/// POST the credentials to the login endpoint.
///
/// When the response carries a token it is immediately set as the client's
/// active credential, so follow-up calls in the same flow are authenticated.
pub async fn login(api: &ApiClient, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
    let data = api.post_json(LOGIN_ENDPOINT, credentials).await?;
    let auth: AuthResponse = serde_json::from_value(data).unwrap_or_default();
    if let Some(token) = auth.bearer() {
        api.set_credential(token);
    }
    Ok(auth)
}

/// POST a new-account payload to the signup endpoint.
///
/// Never touches the credential; the server's response is returned opaquely.
pub async fn signup(api: &ApiClient, payload: &SignupRequest) -> Result<Value, ApiError> {
    api.post_json(SIGNUP_ENDPOINT, payload).await
}

/// Fetch the profile of the currently authenticated user.
pub async fn fetch_profile(api: &ApiClient) -> Result<UserProfile, ApiError> {
    let data = api.get(PROFILE_ENDPOINT).await?;
    serde_json::from_value(data).map_err(|e| ApiError::transport(format!("bad profile body: {e}")))
}
