use std::fmt::Display;

use super::port::PortRecord;

/// Prefix of the single OS-detail entry carried by a failed scan.
pub const SCAN_FAILED_MARKER: &str = "Scan failed: ";

/// Structured outcome of one scan session.
///
/// Three shapes matter downstream:
/// * **empty**: no scan was attempted, or nothing matched.
/// * **failed**: the scanner could not run; see [`ScanResult::failed`].
/// * **populated**: OS findings and/or ports in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub os_details: Vec<String>,
    pub os_guesses: Vec<String>,
    pub ports: Vec<PortRecord>,
}

impl ScanResult {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sentinel for a scan attempt that failed. The error ends up in the OS column.
    pub fn failed(err: impl Display) -> Self {
        Self {
            os_details: vec![format!("{SCAN_FAILED_MARKER}{err}")],
            os_guesses: Vec::new(),
            ports: Vec::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.ports.is_empty()
            && self.os_details.len() == 1
            && self.os_details[0].starts_with(SCAN_FAILED_MARKER)
    }

    pub fn is_empty(&self) -> bool {
        self.os_details.is_empty() && self.os_guesses.is_empty() && self.ports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_result_carries_marker() {
        let result = ScanResult::failed("exit status: 1");
        assert!(result.is_failed());
        assert_eq!(result.os_details, vec!["Scan failed: exit status: 1"]);
        assert!(result.ports.is_empty());
    }

    #[test]
    fn empty_is_not_failed() {
        let result = ScanResult::empty();
        assert!(result.is_empty());
        assert!(!result.is_failed());
    }
}
