//! Wire types shared with the store API.
//!
//! Deserialization is deliberately lenient: auth responses vary between
//! deployments (`token` vs `accessToken`, optional `user`), so every field
//! defaults rather than failing the whole payload.

use serde::{Deserialize, Serialize};

/// Access level attached to a user account.
///
/// Unknown values from the server degrade to [`Role::User`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Role {
    #[default]
    #[serde(rename = "USER")]
    User,
    #[serde(rename = "ADMIN")]
    Admin,
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ADMIN" => Role::Admin,
            _ => Role::User,
        }
    }
}

/// Identity of the signed-in user, as returned by the API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub id: String,
    #[serde(rename = "displayName", alias = "username")]
    pub display_name: String,
    pub role: Role,
}

/// Credentials posted to the login endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// New-account payload posted to the signup endpoint.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login response. The token may arrive under either field name.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AuthResponse {
    pub token: Option<String>,
    #[serde(rename = "accessToken")]
    pub access_token: Option<String>,
    pub user: Option<UserProfile>,
}

impl AuthResponse {
    /// The bearer token, preferring `token` over `accessToken`.
    pub fn bearer(&self) -> Option<&str> {
        self.token.as_deref().or(self.access_token.as_deref())
    }
}
