use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::models::settings::AppSettings;

const SETTINGS_FILE_NAME: &str = "settings.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Loads and stores [`AppSettings`] as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `settings.toml` in the platform config directory, or the current
    /// directory when no home directory can be resolved.
    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "Ken24T", "RewardTasks") {
            dirs.config_dir().join(SETTINGS_FILE_NAME)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for settings");
            PathBuf::from(SETTINGS_FILE_NAME)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read settings. A missing file yields the defaults.
    pub fn load(&self) -> Result<AppSettings, SettingsError> {
        if !self.path.exists() {
            log::info!("No settings at {}; using defaults", self.path.display());
            return Ok(AppSettings::default());
        }

        let raw = std::fs::read_to_string(&self.path).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;
        let settings: AppSettings = toml::from_str(&raw)?;
        settings.validate().map_err(SettingsError::Invalid)?;
        Ok(settings)
    }

    /// Like [`SettingsService::load`], but logs failures and falls back to
    /// defaults.
    pub fn load_or_default(&self) -> AppSettings {
        match self.load() {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("Failed to load settings, using defaults: {err}");
                AppSettings::default()
            }
        }
    }

    pub fn save(&self, settings: &AppSettings) -> Result<(), SettingsError> {
        settings.validate().map_err(SettingsError::Invalid)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let raw = toml::to_string_pretty(settings)?;
        std::fs::write(&self.path, raw).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}
