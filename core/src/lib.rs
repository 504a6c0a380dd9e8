//! Scan-output parsing and report aggregation.
//!
//! The pipeline, leaf first:
//! * [`parser`]: raw scanner text → [`ScanResult`](scansheet_common::models::scan::ScanResult).
//! * [`roster`]: sheet rows → ordered roster entries.
//! * [`scanner`]: runs the external scanner for every roster IP.
//! * [`aggregator`]: joins results onto the roster, in roster order.
//! * [`report`]: expands groups into sheet rows plus merge directives.
//! * [`export`]: drives the above into a report file.
//!
//! [`names`] and [`unscanned`] are small sheet utilities built on the same formats.

pub mod aggregator;
pub mod export;
pub mod names;
pub mod parser;
pub mod report;
pub mod roster;
pub mod scanner;
pub mod unscanned;
