//! Format-independent access to sheets.
//!
//! Readers return every row as a `Vec<String>`, with trailing empty cells
//! removed so CSV and XLSX inputs look the same to callers. Writers address rows
//! by absolute 0-based index and must be fed rows in increasing order.

use std::path::Path;

use crate::delimited::{self, CsvWriter};
use crate::error::FormatError;
use crate::workbook::{self, XlsxWriter};

pub type Row = Vec<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Csv,
    Xlsx,
}

impl SheetFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, FormatError> {
        let ext: String = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(SheetFormat::Csv),
            "xlsx" | "xlsm" => Ok(SheetFormat::Xlsx),
            _ => Err(FormatError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Start from an empty sheet, replacing any existing file.
    #[default]
    Overwrite,
    /// Keep the rows of an existing file and continue after the last one.
    Append,
}

/// A sheet being written. The target file is only replaced in [`SheetWriter::finish`];
/// a writer dropped before that leaves it untouched.
pub trait SheetWriter {
    /// Index of the first row not yet written. `0` means the sheet is empty.
    fn next_row(&self) -> u32;

    fn write_row(&mut self, row: u32, cells: &[String]) -> Result<(), FormatError>;

    /// Spans `value` over `first_row..=last_row` in column `col`.
    fn merge_column(
        &mut self,
        col: u16,
        first_row: u32,
        last_row: u32,
        value: &str,
    ) -> Result<(), FormatError>;

    fn set_column_widths(&mut self, widths: &[f64]) -> Result<(), FormatError>;

    fn finish(self: Box<Self>) -> Result<(), FormatError>;
}

pub fn read_rows(path: &Path) -> Result<Vec<Row>, FormatError> {
    let rows: Vec<Row> = match SheetFormat::from_path(path)? {
        SheetFormat::Csv => delimited::read_rows(path)?,
        SheetFormat::Xlsx => workbook::read_rows(path)?,
    };
    Ok(rows.into_iter().map(trim_trailing_empty).collect())
}

pub fn open_writer(path: &Path, mode: WriteMode) -> Result<Box<dyn SheetWriter>, FormatError> {
    let writer: Box<dyn SheetWriter> = match SheetFormat::from_path(path)? {
        SheetFormat::Csv => Box::new(CsvWriter::open(path, mode)?),
        SheetFormat::Xlsx => Box::new(XlsxWriter::open(path, mode)?),
    };
    Ok(writer)
}

/// Writes `rows` from the top of a new sheet, replacing any existing file.
pub fn write_all(path: &Path, rows: &[Row], widths: &[f64]) -> Result<(), FormatError> {
    let mut writer: Box<dyn SheetWriter> = open_writer(path, WriteMode::Overwrite)?;
    for (idx, row) in rows.iter().enumerate() {
        writer.write_row(idx as u32, row)?;
    }
    writer.set_column_widths(widths)?;
    writer.finish()
}

fn trim_trailing_empty(mut row: Row) -> Row {
    while row.last().is_some_and(|cell| cell.is_empty()) {
        row.pop();
    }
    row
}
