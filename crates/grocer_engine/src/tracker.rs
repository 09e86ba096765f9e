use engine_logging::{engine_error, engine_info};
use grocer_core::FrequencyTable;

use crate::{load_table, write_backup, InitError, TrackerPaths};

/// Load the input and mirror it to the backup file.
///
/// The input is read completely before the backup is touched, so a missing
/// input leaves no backup behind.
pub fn initialize(paths: &TrackerPaths) -> Result<FrequencyTable, InitError> {
    engine_info!(
        "Initializing tracker input={:?} backup={:?}",
        paths.input,
        paths.backup
    );
    let result = load_table(&paths.input).and_then(|table| {
        write_backup(&paths.backup, &table)?;
        engine_info!(
            "Backed up {} items ({} tokens) to {:?}",
            table.len(),
            table.total(),
            paths.backup
        );
        Ok(table)
    });
    if let Err(err) = &result {
        engine_error!("Initialization failed for {:?}: {}", err.path(), err);
    }
    result
}
