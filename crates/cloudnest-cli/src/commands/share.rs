//! Share link commands

use super::require_token;
use crate::api::Client;
use anyhow::Result;
use cloudnest_core::{compute_expiry, format_timestamp, CloudNestError, ExpiryPreset};
use cloudnest_types::LinkRequest;
use colored::Colorize;
use uuid::Uuid;

pub struct CreateOptions {
    pub file_id: Uuid,
    pub password: Option<String>,
    pub preset: Option<String>,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

pub async fn create(options: CreateOptions) -> Result<()> {
    let token = require_token()?;

    let (days, hours, minutes) = match options.preset.as_deref() {
        Some(preset) => ExpiryPreset::parse(preset)
            .ok_or_else(|| CloudNestError::InvalidInput {
                field: "expiry preset".into(),
                message: format!("{}. Expected 1h, 24h or 7d", preset),
            })?
            .fields(),
        None => (options.days, options.hours, options.minutes),
    };
    let enabled = days != 0 || hours != 0 || minutes != 0;
    let expires_at = compute_expiry(enabled, days, hours, minutes);

    let client = Client::new();
    let link = client
        .generate_link(
            &token,
            &LinkRequest {
                file_id: options.file_id,
                password: options.password,
                expires_at,
            },
        )
        .await?;

    println!("{}", "✅ Share link created!".green().bold());
    println!();
    println!("   URL:      {}", link.url.cyan());
    match link.expires_at {
        Some(expires_at) => println!("   Expires:  {}", format_timestamp(expires_at)),
        None => println!("   Expires:  never"),
    }
    println!(
        "   Password: {}",
        if link.has_password { "yes" } else { "no" }
    );

    Ok(())
}

pub async fn revoke(link_id: Uuid) -> Result<()> {
    let token = require_token()?;

    let client = Client::new();
    client.revoke_link(&token, link_id).await?;

    println!("{} Share link revoked", "✓".green());
    Ok(())
}

/// Opening a link needs no session, only the link token itself.
pub async fn access(link: &str, password: Option<&str>) -> Result<()> {
    let share_token = share_token_of(link);

    let client = Client::new();
    let access = client.access_link(share_token, password).await?;

    println!("{}", "🔓 Link unlocked".green().bold());
    println!();
    println!("   File URL: {}", access.url.cyan());

    Ok(())
}

/// Accept either a full share URL or a bare token.
fn share_token_of(link: &str) -> &str {
    let link = link.trim().trim_end_matches('/');
    match link.rsplit_once('/') {
        Some((_, token)) => token,
        None => link,
    }
}
