//! Writes a [`Report`] through a [`SheetWriter`].
//!
//! The sink is opened once per run and owned by the caller. A fresh sheet gets
//! the header; an appended one continues after its last row, so reports should
//! be built with [`ReportSink::next_row`] as their start.

use std::path::Path;

use scansheet_formats::{self as formats, FormatError, SheetWriter, WriteMode};
use tracing::debug;

use super::{Column, HEADER_ROW, Report};

pub struct ReportSink {
    writer: Box<dyn SheetWriter>,
}

impl ReportSink {
    pub fn open(path: &Path, mode: WriteMode) -> Result<Self, FormatError> {
        Self::from_writer(formats::open_writer(path, mode)?)
    }

    /// Wraps an already opened writer, writing the header if the sheet is empty.
    pub fn from_writer(mut writer: Box<dyn SheetWriter>) -> Result<Self, FormatError> {
        if writer.next_row() == HEADER_ROW {
            let header: Vec<String> = Column::ALL.iter().map(|c| c.header().to_string()).collect();
            writer.write_row(HEADER_ROW, &header)?;
        }
        Ok(Self { writer })
    }

    pub fn next_row(&self) -> u32 {
        self.writer.next_row()
    }

    pub fn write(&mut self, report: &Report) -> Result<(), FormatError> {
        for row in &report.rows {
            self.writer.write_row(row.index, &row.cells())?;
        }

        for merge in &report.merges {
            let Some(first) = report.row_at(merge.first_row) else {
                continue;
            };
            for column in merge.columns {
                self.writer.merge_column(
                    column.index(),
                    merge.first_row,
                    merge.last_row,
                    first.cell(*column),
                )?;
            }
        }

        debug!(
            "wrote {} rows and {} merged groups",
            report.rows.len(),
            report.merges.len()
        );
        Ok(())
    }

    /// Applies column widths and saves.
    pub fn finish(mut self) -> Result<(), FormatError> {
        let widths: Vec<f64> = Column::ALL.iter().map(|c| c.width()).collect();
        self.writer.set_column_widths(&widths)?;
        self.writer.finish()
    }
}
