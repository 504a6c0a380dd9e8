//! Builds the roster from a sheet: header row first, then one host per row.
//!
//! Columns are positional: identifier, name, domain/address, IP. Anything past
//! the fourth column belongs to other tools and is ignored here.

use std::path::Path;

use anyhow::Context;
use scansheet_common::{models::roster::RosterEntry, success};
use scansheet_formats::{self as formats, Row};

pub fn load(path: &Path) -> anyhow::Result<Vec<RosterEntry>> {
    let rows: Vec<Row> = formats::read_rows(path)
        .with_context(|| format!("failed to read roster {}", path.display()))?;
    let roster: Vec<RosterEntry> = from_rows(&rows);

    let with_ip: usize = roster.iter().filter(|entry| entry.has_target()).count();
    success!(
        "Loaded {} roster entries ({with_ip} with an IP) from {}",
        roster.len(),
        path.display()
    );
    Ok(roster)
}

/// Skips the header, then keeps every row with at least one identity column filled.
pub fn from_rows(rows: &[Row]) -> Vec<RosterEntry> {
    rows.iter().skip(1).filter_map(|row| entry_from_row(row)).collect()
}

fn entry_from_row(row: &Row) -> Option<RosterEntry> {
    let (identifier, name, domain) = (cell(row, 0), cell(row, 1), cell(row, 2));
    if identifier.is_empty() && name.is_empty() && domain.is_empty() {
        return None;
    }

    Some(RosterEntry::new(identifier, name, domain, cell(row, 3)))
}

fn cell(row: &Row, idx: usize) -> &str {
    row.get(idx).map(|c| c.trim()).unwrap_or_default()
}
