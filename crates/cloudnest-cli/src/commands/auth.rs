//! Authentication commands

use crate::api::Client;
use crate::config::SettingsManager;
use anyhow::{Context, Result};
use chrono::Utc;
use cloudnest_core::{active_claims, expires_at, format_timestamp};
use colored::Colorize;

pub async fn login_interactive() -> Result<()> {
    println!("{}", "🔹 Login to CloudNest".blue().bold());
    println!();

    let email: String = dialoguer::Input::new()
        .with_prompt("Email")
        .interact_text()?;

    let password: String = dialoguer::Password::new()
        .with_prompt("Password")
        .interact()?;

    println!();
    println!("{}", "🔐 Authenticating...".dimmed());

    do_login(&email, &password).await
}

pub async fn login_non_interactive(email: &str, password: &str) -> Result<()> {
    println!("{}", "🔹 Login to CloudNest".blue().bold());
    println!();
    println!("   Email: {}", email.dimmed());
    println!("   Password: {}", "********".dimmed());
    println!();
    println!("{}", "🔐 Authenticating...".dimmed());

    do_login(email, password).await
}

async fn do_login(email: &str, password: &str) -> Result<()> {
    let client = Client::new();
    let auth = match client.login(email, password).await {
        Ok(auth) => auth,
        Err(e) => {
            let error_msg = e.to_string();
            if error_msg.contains("401") || error_msg.contains("Unauthorized") {
                anyhow::bail!("Invalid email or password");
            }
            return Err(e);
        }
    };

    let mut settings = SettingsManager::load()?;
    settings.token = Some(auth.token.clone());
    settings.user_id = Some(auth.user.id.to_string());
    settings.email = Some(auth.user.email.clone());
    SettingsManager::save(&settings)?;

    println!();
    println!("{}", "✅ Login successful!".green().bold());
    println!();
    println!("   Welcome, {}!", auth.user.name.cyan());
    if let Ok(files) = client.list_files(&auth.token).await {
        println!("   {} file(s) in your library", files.len());
    }

    Ok(())
}

pub async fn register() -> Result<()> {
    println!("{}", "🔹 Create a CloudNest account".blue().bold());
    println!();

    let name: String = dialoguer::Input::new().with_prompt("Name").interact_text()?;

    let email: String = dialoguer::Input::new()
        .with_prompt("Email")
        .interact_text()?;

    // Mismatched confirmation re-prompts before anything is sent
    let password: String = dialoguer::Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    println!();
    println!("{}", "🔐 Creating account...".dimmed());

    let client = Client::new();
    let auth = client.register(&name, &email, &password).await?;

    let mut settings = SettingsManager::load()?;
    settings.token = Some(auth.token.clone());
    settings.user_id = Some(auth.user.id.to_string());
    settings.email = Some(auth.user.email.clone());
    SettingsManager::save(&settings)?;

    println!();
    println!("{}", "✅ Account created!".green().bold());
    println!();
    println!("   Welcome, {}!", auth.user.name.cyan());

    Ok(())
}

pub async fn logout() -> Result<()> {
    let mut settings = SettingsManager::load()?;

    if settings.token.is_none() {
        println!("{}", "⚠️  Not logged in".yellow());
        return Ok(());
    }

    // Sessions are stateless server-side, dropping the token is enough
    settings.token = None;
    settings.user_id = None;
    settings.email = None;
    SettingsManager::save(&settings)?;

    println!("{}", "✅ Logged out successfully".green());
    Ok(())
}

pub async fn whoami() -> Result<()> {
    let settings = SettingsManager::load()?;

    let Some(token) = settings.token else {
        println!("{}", "⚠️  Not logged in".yellow());
        return Ok(());
    };

    // Claims are decoded locally, the server still validates every call
    match active_claims(&token, Utc::now()) {
        Some(claims) => {
            println!("{}", "👤 User Info".blue().bold());
            println!();
            println!("   ID:    {}", claims.user_id.to_string().dimmed());
            println!("   Email: {}", claims.email.cyan());
            println!("   Name:  {}", claims.name);
            if let Some(expiry) = expires_at(&token) {
                println!("   Session expires: {}", format_timestamp(expiry).dimmed());
            }
        }
        None => {
            println!(
                "{}",
                "⚠️  Session expired or invalid. Run `cloudnest auth login` again".yellow()
            );
        }
    }

    Ok(())
}

pub async fn forgot_password(email: Option<&str>) -> Result<()> {
    let email = match email {
        Some(email) => email.to_string(),
        None => dialoguer::Input::new()
            .with_prompt("Email")
            .interact_text()
            .context("Failed to read email")?,
    };

    let client = Client::new();
    let message = client.forgot_password(&email).await?;

    println!("{} {}", "✓".green(), message.message);
    Ok(())
}

pub async fn reset_password(reset_token: Option<&str>) -> Result<()> {
    let reset_token = match reset_token {
        Some(token) => token.to_string(),
        None => dialoguer::Input::new()
            .with_prompt("Reset token")
            .interact_text()
            .context("Failed to read reset token")?,
    };

    let new_password: String = dialoguer::Password::new()
        .with_prompt("New password")
        .with_confirmation("Confirm new password", "Passwords do not match")
        .interact()?;

    let client = Client::new();
    let message = client.reset_password(&reset_token, &new_password).await?;

    println!("{} {}", "✓".green(), message.message);
    println!("{}", "  You can now login with the new password.".dimmed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use cloudnest_types::{AuthResponse, LoginRequest, Settings, User};
    use uuid::Uuid;

    async fn stub_login(
        Json(req): Json<LoginRequest>,
    ) -> Result<Json<AuthResponse>, (StatusCode, Json<serde_json::Value>)> {
        if req.email == "dana@example.com" && req.password == "open-sesame" {
            Ok(Json(AuthResponse {
                token: "e2e-token".into(),
                user: User {
                    id: Uuid::new_v4(),
                    name: "Dana".into(),
                    email: req.email,
                },
            }))
        } else {
            Err((
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({ "message": "Invalid email or password" })),
            ))
        }
    }

    async fn spawn_login_stub() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let router = Router::new().route("/auth/login", post(stub_login));
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_login_stores_session_only_on_success() -> Result<()> {
        let _guard = crate::config::ENV_LOCK
            .lock()
            .unwrap_or_else(|e| e.into_inner());

        // 1. Point the CLI at a temp home and a stub server
        let temp_dir = tempfile::tempdir()?;
        std::env::set_var("CLOUDNEST_HOME", temp_dir.path());
        let mut settings = Settings::default();
        settings.server_url = spawn_login_stub().await;
        SettingsManager::save(&settings)?;

        // 2. Wrong credentials leave no session behind
        assert!(do_login("dana@example.com", "wrong").await.is_err());
        assert!(SettingsManager::load()?.token.is_none());

        // 3. Valid credentials persist the session
        do_login("dana@example.com", "open-sesame").await?;
        let stored = SettingsManager::load()?;
        assert_eq!(stored.token.as_deref(), Some("e2e-token"));
        assert_eq!(stored.email.as_deref(), Some("dana@example.com"));

        std::env::remove_var("CLOUDNEST_HOME");
        Ok(())
    }
}
