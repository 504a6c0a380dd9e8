//! Joins per-IP scan results onto the roster.
//!
//! The roster is the only ordering authority: one group per roster entry, in
//! roster order, whatever order the results arrived in. Entries without an IP,
//! or whose IP was never scanned, still get a group with an empty result.
//! Entries sharing an IP each get their own group over the same result.

use std::collections::HashMap;

use scansheet_common::models::{roster::RosterEntry, scan::ScanResult};

/// Scan results keyed by the IP string exactly as it appears in the roster.
pub type ScanResults = HashMap<String, ScanResult>;

static EMPTY_RESULT: ScanResult = ScanResult {
    os_details: Vec::new(),
    os_guesses: Vec::new(),
    ports: Vec::new(),
};

/// One roster entry paired with its scan outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRowGroup<'a> {
    pub entry: &'a RosterEntry,
    pub result: &'a ScanResult,
}

impl ReportRowGroup<'_> {
    /// Rows this group expands to: one per port, at least one.
    pub fn row_count(&self) -> usize {
        self.result.ports.len().max(1)
    }
}

pub fn aggregate<'a>(roster: &'a [RosterEntry], results: &'a ScanResults) -> Vec<ReportRowGroup<'a>> {
    roster
        .iter()
        .map(|entry| ReportRowGroup {
            entry,
            result: lookup(entry, results),
        })
        .collect()
}

fn lookup<'a>(entry: &RosterEntry, results: &'a ScanResults) -> &'a ScanResult {
    if !entry.has_target() {
        return &EMPTY_RESULT;
    }
    results.get(&entry.ip).unwrap_or(&EMPTY_RESULT)
}
