//! Config command - Manage CLI configuration

use crate::config::SettingsManager;
use anyhow::{Context, Result};
use chrono::Utc;
use cloudnest_core::{active_claims, expires_at, format_timestamp, parse_claims, CloudNestError};
use cloudnest_types::Settings;
use colored::Colorize;

/// Set the CloudNest server URL
pub async fn set_server(url: &str) -> Result<()> {
    let mut settings = SettingsManager::load().context("Failed to load settings")?;

    // Validate URL format
    let url = url.trim().trim_end_matches('/');
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(CloudNestError::Config(format!(
            "Invalid URL: {}. It must start with http:// or https://",
            url
        ))
        .into());
    }

    settings.server_url = url.to_string();

    SettingsManager::save(&settings).context("Failed to save settings")?;

    println!("{} Server URL set to: {}", "✓".green(), url.cyan());

    Ok(())
}

/// Show current configuration
pub async fn show() -> Result<()> {
    let settings = SettingsManager::load().context("Failed to load settings")?;

    println!("{}", "CloudNest Configuration".bold().underline());
    println!();

    println!("{}", "Server:".cyan().bold());
    println!("  URL: {}", settings.server_url);
    println!();

    println!("{}", "User:".cyan().bold());
    match (&settings.email, &settings.token) {
        (Some(email), Some(token)) => {
            // A token past its decoded expiry counts as logged out
            let decodes = parse_claims(token).is_ok();
            if decodes && active_claims(token, Utc::now()).is_none() {
                println!(
                    "  {}",
                    "Session expired. Run `cloudnest auth login` again".yellow()
                );
            } else {
                println!("  Email: {}", email);
                if let Some(user_id) = &settings.user_id {
                    println!("  ID:    {}", user_id);
                }
                match expires_at(token) {
                    Some(expiry) => {
                        println!("  Session expires: {}", format_timestamp(expiry).dimmed())
                    }
                    None if decodes => println!("  Session expires: never"),
                    None => println!("  Session token: {}", "unreadable".yellow()),
                }
            }
        }
        _ => println!("  {}", "Not logged in".yellow()),
    }
    println!();

    println!("{}", "Config Files:".cyan().bold());
    println!(
        "  Settings: {}",
        SettingsManager::settings_path()?
            .display()
            .to_string()
            .dimmed()
    );

    Ok(())
}

/// Reset configuration to defaults
pub async fn reset() -> Result<()> {
    use dialoguer::Confirm;

    let confirm = Confirm::new()
        .with_prompt("Are you sure you want to reset all configuration? This will log you out.")
        .default(false)
        .interact()?;

    if !confirm {
        println!("{}", "Reset cancelled.".yellow());
        return Ok(());
    }

    let default_settings = Settings::default();
    SettingsManager::save(&default_settings).context("Failed to save default settings")?;

    println!("{} Configuration reset to defaults.", "✓".green());
    println!("{}", "  You will need to login again.".dimmed());

    Ok(())
}
