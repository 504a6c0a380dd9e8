//! Parser for nmap's normal (human-readable) output.
//!
//! Only three things are picked out of a scan session:
//! * the first `OS details:` line,
//! * the first `Aggressive OS guesses:` line,
//! * every `<port>/<tcp|udp> <state> <service...>` line, in document order.
//!
//! Anything else is ignored. A session that matches nothing is not an error,
//! it simply parses to an empty [`ScanResult`].

use std::sync::LazyLock;

use regex::{Captures, Regex};
use scansheet_common::models::{
    port::{PortRecord, Protocol},
    scan::ScanResult,
};

static OS_DETAILS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"OS details: (.+)").expect("valid OS details pattern"));

static OS_GUESSES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Aggressive OS guesses: (.+)").expect("valid OS guesses pattern")
});

static PORT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)/(tcp|udp)\s+([A-Za-z0-9_]+)\s+(.*)").expect("valid port line pattern")
});

pub fn parse(raw: &str) -> ScanResult {
    ScanResult {
        os_details: first_capture(&OS_DETAILS, raw).into_iter().collect(),
        os_guesses: first_capture(&OS_GUESSES, raw).into_iter().collect(),
        ports: raw.lines().filter_map(parse_port_line).collect(),
    }
}

/// Trimmed rest-of-line after the first occurrence of the pattern's anchor.
fn first_capture(pattern: &Regex, raw: &str) -> Option<String> {
    pattern
        .captures(raw)
        .map(|caps| caps[1].trim().to_string())
}

fn parse_port_line(line: &str) -> Option<PortRecord> {
    let caps: Captures = PORT_LINE.captures(line)?;
    let protocol: Protocol = caps[2].parse().ok()?;
    let (service, version) = split_service(&caps[4]);

    Some(PortRecord::new(&caps[1], protocol, &caps[3], service, version))
}

/// Splits the text after the state column into `(service, version)`.
///
/// The leading token and the remainder are swapped when both exist: for
/// `microsoft-ds Windows Server` the service column gets `Windows Server` and the
/// version column gets `microsoft-ds`. Existing reports rely on this column
/// layout, so it is kept as-is.
fn split_service(tail: &str) -> (&str, &str) {
    let tail: &str = tail.trim();
    match tail.split_once(char::is_whitespace) {
        Some((leading, rest)) => (rest.trim(), leading),
        None => (tail, ""),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
