//! Grid writers.
//!
//! CSV output has a positional header (the column ids themselves, not
//! semantic names) followed by one record per row. Empty cells are empty
//! fields. By default the file starts with a UTF-8 byte order mark so
//! spreadsheet tools detect the encoding.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;

use crate::error::{GridError, Result};
use crate::table::Grid;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// CSV writer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Write the column-id header record.
    pub header: bool,
    /// Prefix the output with a UTF-8 byte order mark.
    pub bom: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            header: true,
            bom: true,
        }
    }
}

/// Write `grid` as CSV.
pub fn write_csv<W: Write>(grid: &Grid, mut writer: W, options: &CsvOptions) -> Result<()> {
    if options.bom {
        writer.write_all(UTF8_BOM)?;
    }
    let mut wtr = WriterBuilder::new().from_writer(writer);
    if options.header {
        wtr.write_record(grid.header())?;
    }
    for row in grid.rows() {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `grid` as pretty-printed JSON.
pub fn write_json<W: Write>(grid: &Grid, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, grid)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Render `grid` as a CSV string (no BOM is added unless requested).
pub fn csv_string(grid: &Grid, options: &CsvOptions) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(grid, &mut buf, options)?;
    String::from_utf8(buf).map_err(|e| GridError::Io(std::io::Error::other(e)))
}

/// Create `path` and write `grid` to it in `format`.
pub fn write_grid_file(
    grid: &Grid,
    path: &Path,
    format: OutputFormat,
    csv_options: &CsvOptions,
) -> Result<()> {
    let file = File::create(path).map_err(|source| GridError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;
    let writer = BufWriter::new(file);
    match format {
        OutputFormat::Csv => write_csv(grid, writer, csv_options),
        OutputFormat::Json => write_json(grid, writer),
    }
}
