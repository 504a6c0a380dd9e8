//! The **abstraction** over the external scanner and the per-host scan loop.
//!
//! [`HostScanner`] is the only way the rest of the crate reaches the scanner
//! process. [`scan_roster`] walks the roster one host at a time and never
//! aborts: a host whose scan fails gets a sentinel [`ScanResult::failed`] and
//! the loop moves on.
//!
//! Results are keyed by IP, so a scheduler that scans hosts concurrently can
//! replace the loop without touching aggregation or report building.

use std::collections::HashSet;
use std::process::ExitStatus;

use async_trait::async_trait;
use scansheet_common::{
    error, info,
    models::{roster::RosterEntry, scan::ScanResult},
};
use thiserror::Error;
use tracing::debug;

use crate::aggregator::ScanResults;
use crate::parser;

mod nmap;

pub use nmap::NmapScanner;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    Exited {
        program: String,
        status: ExitStatus,
        /// Combined stdout and stderr captured before the exit.
        output: String,
    },
}

/// Runs one scan session against one IP.
#[async_trait]
pub trait HostScanner: Send + Sync {
    /// Returns the scanner's combined stdout and stderr.
    async fn scan(&self, ip: &str) -> Result<String, ScanError>;
}

/// Reported after every finished host.
#[derive(Debug, Clone, Copy)]
pub struct ScanProgress<'a> {
    /// 1-based position among the hosts of this run.
    pub position: usize,
    pub total: usize,
    pub ip: &'a str,
    pub result: &'a ScanResult,
}

/// Distinct non-empty IPs of the roster, in order of first appearance.
pub fn scan_targets(roster: &[RosterEntry]) -> Vec<&str> {
    let mut seen: HashSet<&str> = HashSet::new();
    roster
        .iter()
        .filter(|entry| entry.has_target())
        .map(|entry| entry.ip.as_str())
        .filter(|ip| seen.insert(*ip))
        .collect()
}

/// Scans every target of the roster sequentially.
///
/// Entries sharing an IP are scanned once; the aggregator joins the result to
/// each of them.
pub async fn scan_roster<F>(
    scanner: &dyn HostScanner,
    roster: &[RosterEntry],
    mut on_scanned: F,
) -> ScanResults
where
    F: FnMut(ScanProgress<'_>),
{
    let targets: Vec<&str> = scan_targets(roster);
    let total: usize = targets.len();
    let mut results = ScanResults::with_capacity(total);

    for (idx, ip) in targets.into_iter().enumerate() {
        info!("Scanning {ip} ({}/{total})", idx + 1);
        let result: ScanResult = scan_host(scanner, ip).await;

        on_scanned(ScanProgress {
            position: idx + 1,
            total,
            ip,
            result: &result,
        });
        results.insert(ip.to_string(), result);
    }

    results
}

/// Scans and parses one host, turning any failure into a sentinel result.
pub async fn scan_host(scanner: &dyn HostScanner, ip: &str) -> ScanResult {
    match scanner.scan(ip).await {
        Ok(output) => parser::parse(&output),
        Err(err) => {
            error!("Scan of {ip} failed: {err}");
            if let ScanError::Exited { output, .. } = &err {
                debug!("captured output of failed scan of {ip}:\n{output}");
            }
            ScanResult::failed(err)
        }
    }
}
