//! Share link types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A public share link attached to a file.
///
/// The password itself never travels back to the client, only the
/// `has_password` flag the access dialog needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareLink {
    pub id: Uuid,
    /// Public URL, e.g. `https://cloudnest.dev/s/<token>`.
    pub url: String,
    /// `None` means the link never expires.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    pub has_password: bool,
}

impl ShareLink {
    /// Whether the link has lapsed as of `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at <= now,
            None => false,
        }
    }
}

/// Request to create a share link for a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRequest {
    pub file_id: Uuid,
    /// Plaintext password, hashed server-side. `None` leaves the link open.
    pub password: Option<String>,
    /// `None` creates a link that never expires.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Credentials presented when opening a shared link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkAccessRequest {
    pub password: Option<String>,
}

/// Successful link access: where to fetch the shared file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkAccessResponse {
    pub url: String,
}
