//! XLSX sheets.
//!
//! Reading goes through `calamine`, writing through `rust_xlsxwriter`. The
//! writer keeps the whole workbook in memory and saves it once in
//! [`SheetWriter::finish`]; a writer dropped early leaves the target untouched.

use std::path::{Path, PathBuf};

use calamine::{Data, Reader, Xlsx, open_workbook, open_workbook_auto};
use rust_xlsxwriter::{Format, FormatAlign, Workbook};
use tracing::debug;

use crate::error::FormatError;
use crate::sheet::{Row, SheetWriter, WriteMode};

/// Worksheet read by default and the only one written.
pub const SHEET_NAME: &str = "Sheet1";

/// `Sheet1`, or the first worksheet when there is none by that name.
fn sheet_name(path: &Path, names: &[String]) -> Result<String, FormatError> {
    names
        .iter()
        .find(|name| name.as_str() == SHEET_NAME)
        .or_else(|| names.first())
        .cloned()
        .ok_or_else(|| FormatError::NoWorksheet(path.to_path_buf()))
}

/// Reads `Sheet1`, or the first worksheet when there is none by that name.
pub fn read_rows(path: &Path) -> Result<Vec<Row>, FormatError> {
    let mut workbook = open_workbook_auto(path)?;
    let name: String = sheet_name(path, &workbook.sheet_names())?;

    let range = workbook.worksheet_range(&name)?;
    let Some((last_row, last_col)) = range.end() else {
        return Ok(Vec::new());
    };

    // Positions are absolute so a sheet starting below A1 keeps its layout.
    let rows: Vec<Row> = (0..=last_row)
        .map(|row| {
            (0..=last_col)
                .map(|col| range.get_value((row, col)).map(cell_text).unwrap_or_default())
                .collect()
        })
        .collect();
    Ok(rows)
}

/// A merged block as `(first_row, first_col, last_row, last_col)`.
pub type MergedRange = (u32, u16, u32, u16);

/// Merged ranges of the sheet [`read_rows`] reads.
pub fn read_merged_ranges(path: &Path) -> Result<Vec<MergedRange>, FormatError> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(calamine::Error::from)?;
    workbook.load_merged_regions().map_err(calamine::Error::from)?;
    let name: String = sheet_name(path, &workbook.sheet_names())?;

    let ranges: Vec<MergedRange> = workbook
        .merged_regions_by_sheet(&name)
        .into_iter()
        .map(|(_, _, dims)| (dims.start.0, dims.start.1 as u16, dims.end.0, dims.end.1 as u16))
        .collect();
    Ok(ranges)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub struct XlsxWriter {
    path: PathBuf,
    workbook: Workbook,
    merge_format: Format,
    next_row: u32,
}

impl XlsxWriter {
    /// In append mode the rows and merged ranges of an existing workbook are
    /// copied over first.
    pub fn open(path: &Path, mode: WriteMode) -> Result<Self, FormatError> {
        let mut workbook = Workbook::new();
        workbook.add_worksheet().set_name(SHEET_NAME)?;

        let mut writer = Self {
            path: path.to_path_buf(),
            workbook,
            merge_format: Format::new()
                .set_align(FormatAlign::VerticalCenter)
                .set_text_wrap(),
            next_row: 0,
        };

        if mode == WriteMode::Append && path.exists() {
            let existing: Vec<Row> = read_rows(path)?;
            debug!("appending to {} after {} rows", path.display(), existing.len());
            for (idx, row) in existing.iter().enumerate() {
                writer.write_row(idx as u32, row)?;
            }
            for range in read_merged_ranges(path)? {
                writer.restore_merge(range, &existing)?;
            }
        }

        Ok(writer)
    }

    fn restore_merge(&mut self, range: MergedRange, rows: &[Row]) -> Result<(), FormatError> {
        let (first_row, first_col, last_row, last_col) = range;
        if first_row == last_row && first_col == last_col {
            return Ok(());
        }
        let value: &str = rows
            .get(first_row as usize)
            .and_then(|row| row.get(first_col as usize))
            .map(String::as_str)
            .unwrap_or_default();

        let worksheet = self.workbook.worksheet_from_index(0)?;
        worksheet.merge_range(first_row, first_col, last_row, last_col, value, &self.merge_format)?;
        Ok(())
    }
}

impl SheetWriter for XlsxWriter {
    fn next_row(&self) -> u32 {
        self.next_row
    }

    fn write_row(&mut self, row: u32, cells: &[String]) -> Result<(), FormatError> {
        if row != self.next_row {
            return Err(FormatError::RowOutOfOrder {
                expected: self.next_row,
                got: row,
            });
        }

        let worksheet = self.workbook.worksheet_from_index(0)?;
        for (col, value) in cells.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            worksheet.write_string(row, col as u16, value.as_str())?;
        }
        self.next_row = row + 1;
        Ok(())
    }

    fn merge_column(
        &mut self,
        col: u16,
        first_row: u32,
        last_row: u32,
        value: &str,
    ) -> Result<(), FormatError> {
        let worksheet = self.workbook.worksheet_from_index(0)?;
        if last_row <= first_row {
            worksheet.write_string_with_format(first_row, col, value, &self.merge_format)?;
        } else {
            worksheet.merge_range(first_row, col, last_row, col, value, &self.merge_format)?;
        }
        Ok(())
    }

    fn set_column_widths(&mut self, widths: &[f64]) -> Result<(), FormatError> {
        let worksheet = self.workbook.worksheet_from_index(0)?;
        for (col, width) in widths.iter().enumerate() {
            worksheet.set_column_width(col as u16, *width)?;
        }
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<(), FormatError> {
        let XlsxWriter { path, mut workbook, .. } = *self;
        workbook.save(&path)?;
        Ok(())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
