//! Sheet and key/value file formats.
//!
//! Everything here moves rows of strings in and out of files; no knowledge of
//! scans or rosters lives in this crate. The format is picked from the file
//! extension, see [`SheetFormat::from_path`].

pub mod delimited;
pub mod error;
pub mod json;
pub mod sheet;
pub mod workbook;

pub use error::FormatError;
pub use sheet::{Row, SheetFormat, SheetWriter, WriteMode, open_writer, read_rows, write_all};
