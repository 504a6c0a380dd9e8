//! # IP List Input
//!
//! The alternative to a roster sheet: a bare list of IPs, either from a file
//! (one per line) or a comma-separated argument. Entries are not validated;
//! whatever the user typed is handed to the scanner as-is.

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::models::roster::RosterEntry;
use crate::success;

/// Splits a comma-separated list (e.g. `"10.0.0.1, 10.0.0.2"`).
pub fn parse_commas(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits file contents into one entry per non-blank line.
pub fn parse_lines(s: &str) -> Vec<String> {
    s.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn read_ip_file(path: &Path) -> anyhow::Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("unable to open IP list {}", path.display()))?;
    Ok(parse_lines(&contents))
}

/// Turns an IP list into roster entries with empty identity columns, keeping order.
pub fn to_roster(ips: Vec<String>) -> Vec<RosterEntry> {
    let len: usize = ips.len();
    let unit: &str = if len == 1 { "IP address has been" } else { "IP addresses have been" };
    success!("{len} {unit} parsed successfully");

    ips.into_iter().map(RosterEntry::from_ip).collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
