//! Optional `grocer.ron` configuration read from the working directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use grocer_engine::{TrackerPaths, DEFAULT_BACKUP_PATH, DEFAULT_INPUT_PATH};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logging::LogDestination;

pub const CONFIG_FILENAME: &str = "grocer.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub input_path: PathBuf,
    pub backup_path: PathBuf,
    pub log: LogDestination,
    pub log_path: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            backup_path: PathBuf::from(DEFAULT_BACKUP_PATH),
            log: LogDestination::File,
            log_path: PathBuf::from("grocer.log"),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    pub fn tracker_paths(&self) -> TrackerPaths {
        TrackerPaths::new(&self.input_path, &self.backup_path)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Where the config came from, for logging once the logger exists.
#[derive(Debug)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
    Fallback(ConfigError),
}

/// Load `grocer.ron` from `dir`. A missing file is not an error.
pub fn load_config(dir: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(ConfigError::Read { path, source }),
    };
    ron::from_str(&content)
        .map(Some)
        .map_err(|source| ConfigError::Parse { path, source })
}

/// Like [`load_config`], but never fails: problems fall back to defaults.
pub fn resolve_config(dir: &Path) -> (AppConfig, ConfigSource) {
    match load_config(dir) {
        Ok(Some(config)) => (config, ConfigSource::File(dir.join(CONFIG_FILENAME))),
        Ok(None) => (AppConfig::default(), ConfigSource::Defaults),
        Err(err) => (AppConfig::default(), ConfigSource::Fallback(err)),
    }
}
