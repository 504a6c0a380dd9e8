//! CSV sheets.
//!
//! CSV has no notion of merged cells or column widths, so those requests are
//! accepted and dropped. Every row is written in full, which keeps the file
//! usable on its own.
//!
//! Rows go to a sibling `.partial` file that replaces the target in
//! [`SheetWriter::finish`], so a failed run leaves the previous file as it was.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::FormatError;
use crate::sheet::{Row, SheetWriter, WriteMode};

pub fn read_rows(path: &Path) -> Result<Vec<Row>, FormatError> {
    let file: File = File::open(path).map_err(|e| FormatError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows: Vec<Row> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

pub struct CsvWriter {
    path: PathBuf,
    partial: PathBuf,
    writer: csv::Writer<File>,
    next_row: u32,
}

/// `report.csv` → `report.csv.partial`.
fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".partial");
    PathBuf::from(name)
}

impl CsvWriter {
    pub fn open(path: &Path, mode: WriteMode) -> Result<Self, FormatError> {
        let existing: u32 = match mode {
            WriteMode::Append if path.exists() => read_rows(path)?.len() as u32,
            _ => 0,
        };

        let partial: PathBuf = partial_path(path);
        let file: File = if existing > 0 {
            debug!("appending to {} after {existing} rows", path.display());
            std::fs::copy(path, &partial).map_err(|e| FormatError::io(&partial, e))?;
            open_for_append(&partial)?
        } else {
            File::create(&partial).map_err(|e| FormatError::io(&partial, e))?
        };

        let writer = csv::WriterBuilder::new().flexible(true).from_writer(file);

        Ok(Self {
            path: path.to_path_buf(),
            partial,
            writer,
            next_row: existing,
        })
    }
}

impl SheetWriter for CsvWriter {
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
        self.writer.write_record(cells)?;
        self.next_row += 1;
        Ok(())
    }

    fn merge_column(
        &mut self,
        col: u16,
        first_row: u32,
        last_row: u32,
        _value: &str,
    ) -> Result<(), FormatError> {
        debug!("csv has no merged cells, skipping column {col} rows {first_row}..={last_row}");
        Ok(())
    }

    fn set_column_widths(&mut self, _widths: &[f64]) -> Result<(), FormatError> {
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<(), FormatError> {
        let CsvWriter {
            path,
            partial,
            mut writer,
            ..
        } = *self;
        writer.flush().map_err(|e| FormatError::io(&partial, e))?;
        drop(writer);
        std::fs::rename(&partial, &path).map_err(|e| FormatError::io(&path, e))
    }
}

fn open_for_append(path: &Path) -> Result<File, FormatError> {
    let mut file: File = OpenOptions::new()
        .read(true)
        .append(true)
        .open(path)
        .map_err(|e| FormatError::io(path, e))?;

    let len: u64 = file.metadata().map_err(|e| FormatError::io(path, e))?.len();
    if len > 0 {
        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))
            .and_then(|_| file.read_exact(&mut last))
            .map_err(|e| FormatError::io(path, e))?;
        if last[0] != b'\n' {
            file.write_all(b"\n").map_err(|e| FormatError::io(path, e))?;
        }
    }
    Ok(file)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
