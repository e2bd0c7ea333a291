use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use glasssuite_core::{CellValue, FieldDef};

use crate::rows::Row;

/// Write generated rows as CSV, headed by the field identifiers.
/// Returns the number of bytes written.
pub fn write_rows_csv(path: &Path, fields: &[FieldDef], rows: &[Row]) -> Result<u64, csv::Error> {
    let cells: Vec<Vec<CellValue>> = rows.iter().map(Row::cells).collect();
    write_cells_csv(path, fields, cells.iter().map(Vec::as_slice))
}

/// Write already-projected cell rows as CSV. Used for grid-view exports
/// where filtering and sorting have reordered the generated rows.
pub fn write_cells_csv<'a, I>(path: &Path, fields: &[FieldDef], rows: I) -> Result<u64, csv::Error>
where
    I: IntoIterator<Item = &'a [CellValue]>,
{
    let writer = BufWriter::new(File::create(path).map_err(csv::Error::from)?);
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    let header: Vec<&str> = fields.iter().map(|field| field.id).collect();
    writer.write_record(&header)?;

    for row in rows {
        let record: Vec<String> = row.iter().map(CellValue::to_csv).collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
