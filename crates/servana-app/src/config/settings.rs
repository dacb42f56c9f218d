//! Settings loader for `config.toml`

use std::path::{Path, PathBuf};

use super::types::Settings;
use servana_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "servana";

const DEFAULT_CONFIG: &str = r#"# Servana Configuration

[ui]
# "system" samples the terminal appearance at startup; "light" or "dark" pin it
theme = "system"

[chat]
min_delay_ms = 1000
max_delay_ms = 3000

[payment]
key = "rzp_test_servana"
latency_ms = 1500
# "approve" or "decline"
outcome = "approve"
# decline_reason = "Card declined"
prefill_email = "user@example.com"
prefill_contact = "9191919191"
prefill_name = "User Name"

[identity]
name = "John Doe"
email = "john@example.com"
latency_ms = 800
# "complete" or "cancel"
outcome = "complete"
"#;

/// Default location: `<config_dir>/servana/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILENAME)
}

/// Load settings from `path`, falling back to defaults.
///
/// A missing file is normal; an unreadable or invalid file is logged and
/// ignored.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match read_settings(path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!("Failed to load {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Strict variant of [`load_settings`] that surfaces every failure
pub fn read_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let settings = toml::from_str(&content)?;
    Ok(settings)
}

/// Write a commented default config to `path` unless one already exists.
///
/// Returns `true` if a file was written.
pub fn init_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", dir.display(), e)))?;
    }
    std::fs::write(path, DEFAULT_CONFIG).context("Failed to write default config")?;
    info!("Wrote default config to {:?}", path);
    Ok(true)
}
