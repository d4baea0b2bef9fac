//! User and auth types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account owner as reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// New-account request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Credential login request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login or registration: a bearer token plus the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Password-reset initiation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Password-reset completion request. The emailed token travels as a
/// query parameter, not in this body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub new_password: String,
}

/// Plain acknowledgement envelope used by non-resource endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMessage {
    pub message: String,
    pub status_code: u16,
    /// Server-side timestamp, RFC 3339.
    pub time: String,
}

/// Claims carried in the bearer token payload.
///
/// Decoded client-side for display only. The backend remains the
/// authority on whether a token is actually accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthClaims {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    /// Expiry as seconds since the Unix epoch. Tokens without one
    /// never lapse client-side.
    #[serde(default)]
    pub exp: Option<i64>,
}
