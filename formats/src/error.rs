use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unable to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("reading workbook: {0}")]
    WorkbookRead(#[from] calamine::Error),

    #[error("writing workbook: {0}")]
    WorkbookWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported sheet format: {0} (expected .csv or .xlsx)")]
    UnsupportedFormat(PathBuf),

    #[error("{0} contains no worksheet")]
    NoWorksheet(PathBuf),

    #[error("rows must be written in order: expected row {expected}, got {got}")]
    RowOutOfOrder { expected: u32, got: u32 },
}

impl FormatError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FormatError::Io {
            path: path.into(),
            source,
        }
    }
}
