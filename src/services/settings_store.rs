use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const SOUND_MUTED_KEY: &str = "SoundMuted";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write settings file {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(serde_yaml::Error),
}

/// Flat boolean preferences that survive between runs.
pub trait SettingsStore {
    /// Missing keys read as `false`.
    fn get_bool(&self, key: &str) -> bool;
    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), SettingsError>;
}

#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: BTreeMap<String, bool>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get_bool(&self, key: &str) -> bool {
        self.values.get(key).copied().unwrap_or(false)
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), SettingsError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Settings kept in a YAML map on disk, rewritten on every change.
#[derive(Debug)]
pub struct YamlSettingsStore {
    path: PathBuf,
    values: BTreeMap<String, bool>,
}

impl YamlSettingsStore {
    /// Opens the store at `path`. A missing file is an empty store and is
    /// only created on the first write.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|source| SettingsError::Read {
                path: path.clone(),
                source,
            })?;
            deserialize_settings(&contents, &path)?
        } else {
            BTreeMap::new()
        };
        log::debug!("Opened settings store {} with {} entries", path.display(), values.len());
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        let yaml = serde_yaml::to_string(&self.values).map_err(SettingsError::Serialize)?;
        std::fs::write(&self.path, yaml).map_err(|source| SettingsError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl SettingsStore for YamlSettingsStore {
    fn get_bool(&self, key: &str) -> bool {
        self.values.get(key).copied().unwrap_or(false)
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), SettingsError> {
        self.values.insert(key.to_string(), value);
        self.save()
    }
}

fn deserialize_settings(
    input: &str,
    origin_path: &Path,
) -> Result<BTreeMap<String, bool>, SettingsError> {
    if input.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    serde_yaml::from_str(input).map_err(|source| SettingsError::Parse {
        path: origin_path.to_path_buf(),
        source,
    })
}
