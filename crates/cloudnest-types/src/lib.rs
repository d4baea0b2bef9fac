//! CloudNest Types - Pure type definitions for the CloudNest client
//!
//! This crate contains only plain data types with no async runtime
//! dependencies, shared by the client engine and the CLI. Field names are
//! mapped to the backend's camelCase wire casing via serde.

pub mod criteria;
pub mod file;
pub mod link;
pub mod user;

pub use criteria::*;
pub use file::*;
pub use link::*;
pub use user::*;

use serde::{Deserialize, Serialize};

/// Default CloudNest API endpoint.
pub const DEFAULT_SERVER_URL: &str = "https://api.cloudnest.dev";

/// Settings persisted to disk by the CLI.
///
/// The `token` slot is the client's session store - the same role the
/// browser client gives its fixed localStorage key. Only the bearer token
/// and the display identity are kept; credentials are never written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub version: String,
    pub server_url: String,
    pub token: Option<String>,
    pub user_id: Option<String>,
    pub email: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            server_url: DEFAULT_SERVER_URL.to_string(),
            token: None,
            user_id: None,
            email: None,
        }
    }
}
