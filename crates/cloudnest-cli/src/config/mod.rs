//! Configuration management

use anyhow::{Context, Result};
use cloudnest_types::Settings;
use std::path::PathBuf;

pub struct SettingsManager;

impl SettingsManager {
    /// Get the CloudNest home directory (~/.cloudnest)
    pub fn cloudnest_home() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("CLOUDNEST_HOME") {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".cloudnest"))
    }

    /// Get the settings file path
    pub fn settings_path() -> Result<PathBuf> {
        Ok(Self::cloudnest_home()?.join("settings.json"))
    }

    /// Load settings from disk, writing defaults on first run
    pub fn load() -> Result<Settings> {
        let path = Self::settings_path()?;

        if !path.exists() {
            let settings = Settings::default();
            Self::save(&settings)?;
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        let settings: Settings = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {:?}", path))?;

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(settings: &Settings) -> Result<()> {
        let path = Self::settings_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        let content =
            serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;

        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write settings to {:?}", path))?;

        // Set permissions on Unix (restrict to owner only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Bearer token of the stored session, if any
    pub fn token() -> Result<Option<String>> {
        Ok(Self::load()?.token)
    }
}

/// Tests that redirect CLOUDNEST_HOME must hold this while they run,
/// the variable is process-wide.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_lifecycle() -> Result<()> {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        // 1. Redirect the config home to a temp dir
        let temp_dir = tempfile::tempdir()?;
        std::env::set_var("CLOUDNEST_HOME", temp_dir.path());

        // 2. First load writes defaults
        let settings = SettingsManager::load()?;
        assert!(settings.token.is_none());
        assert_eq!(settings.server_url, cloudnest_types::DEFAULT_SERVER_URL);
        assert!(SettingsManager::settings_path()?.exists());

        // 3. Mutations round-trip through disk
        let mut settings = settings;
        settings.token = Some("session-token".into());
        settings.email = Some("dana@example.com".into());
        SettingsManager::save(&settings)?;

        let reloaded = SettingsManager::load()?;
        assert_eq!(reloaded.token.as_deref(), Some("session-token"));
        assert_eq!(reloaded.email.as_deref(), Some("dana@example.com"));
        assert_eq!(SettingsManager::token()?.as_deref(), Some("session-token"));

        // 4. The file is private to the owner
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(SettingsManager::settings_path()?)?
                .permissions()
                .mode();
            assert_eq!(mode & 0o777, 0o600);
        }

        std::env::remove_var("CLOUDNEST_HOME");
        Ok(())
    }
}
