//! Grocer engine: file IO around the frequency table.
mod load;
mod persist;
mod tracker;
mod types;

pub use load::load_table;
pub use persist::{write_backup, write_entries};
pub use tracker::initialize;
pub use types::{InitError, TrackerPaths, DEFAULT_BACKUP_PATH, DEFAULT_INPUT_PATH};
