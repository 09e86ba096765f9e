use std::fs;
use std::path::Path;

use engine_logging::engine_debug;
use grocer_core::FrequencyTable;

use crate::InitError;

/// Read `path` once and tally its tokens.
///
/// Invalid UTF-8 is replaced rather than rejected; only failing to open or
/// read the file is an error.
pub fn load_table(path: &Path) -> Result<FrequencyTable, InitError> {
    let bytes = fs::read(path).map_err(|source| InitError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    let table = FrequencyTable::from_text(&text);
    engine_debug!(
        "Read {} bytes from {:?}: {} tokens, {} distinct",
        bytes.len(),
        path,
        table.total(),
        table.len()
    );
    Ok(table)
}
