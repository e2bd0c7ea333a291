use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::Result;
use crate::rows::Row;

/// Write generated rows as a pretty-printed JSON array.
/// Returns the number of bytes written.
pub fn write_rows_json(path: &Path, rows: &[Row]) -> Result<u64> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writer.flush()?;
    Ok(std::fs::metadata(path)?.len())
}
