//! CLI command implementations

use anyhow::Result;
use chrono::Utc;
use cloudnest_core::{session, CloudNestError};

use crate::config::SettingsManager;

pub mod auth;
pub mod config;
pub mod files;
pub mod share;

/// Bearer token of the stored session.
///
/// A token whose decoded expiry has passed is treated the same as no
/// token at all. Tokens that do not decode are still returned, since
/// only the server can really judge them.
pub(crate) fn require_token() -> Result<String> {
    let token = SettingsManager::token()?.ok_or(CloudNestError::NotLoggedIn)?;
    if session::parse_claims(&token).is_ok() && session::active_claims(&token, Utc::now()).is_none()
    {
        return Err(CloudNestError::SessionExpired.into());
    }
    Ok(token)
}
