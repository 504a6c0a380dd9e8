//! Pulls the port-less rows out of a finished report.
//!
//! These are the hosts worth a second look: no IP, nothing open, or a failed
//! scan. The header row is kept so the result opens like any other report.

use std::path::Path;

use anyhow::Context;
use scansheet_common::success;
use scansheet_formats::{self as formats, Row};

use crate::report::Column;

pub fn portless_rows(rows: &[Row]) -> Vec<Row> {
    let port_col: usize = Column::Port.index() as usize;
    let mut kept: Vec<Row> = rows.iter().take(1).cloned().collect();

    kept.extend(rows.iter().skip(1).filter(|row| {
        let has_content: bool = row.iter().any(|cell| !cell.trim().is_empty());
        let port: &str = row.get(port_col).map(|c| c.trim()).unwrap_or_default();
        has_content && port.is_empty()
    }).cloned());

    kept
}

/// Returns the number of data rows written.
pub fn extract_unscanned(report: &Path, output: &Path) -> anyhow::Result<usize> {
    let rows: Vec<Row> = formats::read_rows(report)
        .with_context(|| format!("failed to read report {}", report.display()))?;
    let kept: Vec<Row> = portless_rows(&rows);

    let widths: Vec<f64> = Column::ALL.iter().map(|c| c.width()).collect();
    formats::write_all(output, &kept, &widths)
        .with_context(|| format!("failed to write {}", output.display()))?;

    let count: usize = kept.len().saturating_sub(1);
    success!("{count} rows without ports written to {}", output.display());
    Ok(count)
}
