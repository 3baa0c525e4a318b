use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_BACKGROUND_TRACK: &str = "Audio/BackgroundMusic";
pub const DEFAULT_VOLUME: f32 = 0.5;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("default_volume must be between 0.0 and 1.0, got {0}")]
    InvalidVolume(f32),
    #[error("failed to determine settings directory")]
    SettingsDirNotFound,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Where the mute flag and other preferences are stored.
    pub settings_file: Option<PathBuf>,
    pub background_track: String,
    /// Unmuted music volume.
    pub default_volume: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settings_file: None,
            background_track: DEFAULT_BACKGROUND_TRACK.to_string(),
            default_volume: DEFAULT_VOLUME,
        }
    }
}

impl AppConfig {
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig =
            serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the given config file, or the built-in defaults when none is given.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_yaml_file(path),
            None => Ok(Self::default()),
        }
    }

    /// An explicit override wins over the config file, which wins over the
    /// per-user config directory.
    pub fn resolve_settings_path(&self, override_path: Option<&str>) -> Result<PathBuf, ConfigError> {
        if let Some(path) = override_path {
            return Ok(PathBuf::from(path));
        }
        if let Some(path) = &self.settings_file {
            return Ok(path.clone());
        }
        default_settings_path()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.default_volume) {
            return Err(ConfigError::InvalidVolume(self.default_volume));
        }
        Ok(())
    }
}

pub fn default_settings_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("com", "arborquote", "arborquote")
        .ok_or(ConfigError::SettingsDirNotFound)?;
    Ok(proj_dirs.config_dir().join("settings.yaml"))
}
