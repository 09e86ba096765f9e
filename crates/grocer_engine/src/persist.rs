use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use grocer_core::FrequencyTable;

use crate::InitError;

/// Backup lines: `<item> <count>` per line, ordered by item.
pub fn write_entries<W: Write>(out: &mut W, table: &FrequencyTable) -> io::Result<()> {
    for (item, count) in table.list_all() {
        writeln!(out, "{item} {count}")?;
    }
    Ok(())
}

/// Open `path` for writing, truncating it, and write every entry.
///
/// Symlinks are followed, so the file they point at is what gets updated.
pub fn write_backup(path: &Path, table: &FrequencyTable) -> Result<(), InitError> {
    let write = || -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        write_entries(&mut out, table)?;
        out.flush()
    };
    write().map_err(|source| InitError::OutputUnavailable {
        path: path.to_path_buf(),
        source,
    })
}
