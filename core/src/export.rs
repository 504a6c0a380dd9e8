//! Turns scan results into a report file.

use std::path::Path;

use anyhow::Context;
use scansheet_common::models::roster::RosterEntry;
use scansheet_formats::WriteMode;

use crate::aggregator::{self, ReportRowGroup, ScanResults};
use crate::report::{self, Report, sink::ReportSink};

/// Aggregates, builds and writes the report in one go.
///
/// The sink is opened first so an appended report starts after the rows already
/// in the file. Nothing is saved unless every row and merge was accepted.
pub fn write_report(
    path: &Path,
    mode: WriteMode,
    roster: &[RosterEntry],
    results: &ScanResults,
) -> anyhow::Result<Report> {
    let mut sink: ReportSink = ReportSink::open(path, mode)
        .with_context(|| format!("failed to open report {}", path.display()))?;

    let groups: Vec<ReportRowGroup> = aggregator::aggregate(roster, results);
    let report: Report = report::build_from(&groups, sink.next_row());

    sink.write(&report)
        .with_context(|| format!("failed to write report {}", path.display()))?;
    sink.finish()
        .with_context(|| format!("failed to save report {}", path.display()))?;

    Ok(report)
}
