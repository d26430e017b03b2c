//! Settings loading from `nexus.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, SETTINGS_FILE, Settings};

/// Load settings from `path`, or from `nexus.toml` in the working directory.
///
/// A missing default file yields the built-in defaults; a missing explicit file is
/// an error. A relative `data_dir` is resolved against the settings file's directory.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, AppError> {
    let explicit = path.is_some();
    let path = path.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from(SETTINGS_FILE));

    if !path.exists() {
        if explicit {
            return Err(AppError::config_error(format!(
                "Settings file not found: {}",
                path.display()
            )));
        }
        debug!("no {} found, using defaults", SETTINGS_FILE);
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(&path)?;
    let mut settings = parse_settings(&content)?;

    if settings.storage.data_dir.is_relative() {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            settings.storage.data_dir = parent.join(&settings.storage.data_dir);
        }
    }

    debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Parse and validate settings content.
pub fn parse_settings(content: &str) -> Result<Settings, AppError> {
    let settings: Settings = toml::from_str(content)?;
    settings.validate()?;
    Ok(settings)
}
