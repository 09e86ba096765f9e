use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const DEFAULT_INPUT_PATH: &str = "CS210_Project_Three_Input_File.txt";
pub const DEFAULT_BACKUP_PATH: &str = "frequency.dat";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerPaths {
    pub input: PathBuf,
    pub backup: PathBuf,
}

impl TrackerPaths {
    pub fn new(input: impl Into<PathBuf>, backup: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            backup: backup.into(),
        }
    }
}

impl Default for TrackerPaths {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH, DEFAULT_BACKUP_PATH)
    }
}

/// Fatal setup failures. Either one ends the program.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("Error opening input file: {}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error opening output file: {}", path.display())]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InitError {
    pub fn path(&self) -> &Path {
        match self {
            InitError::InputUnavailable { path, .. } | InitError::OutputUnavailable { path, .. } => {
                path.as_path()
            }
        }
    }
}
