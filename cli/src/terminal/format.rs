use crate::terminal::colors;
use colored::*;
use scansheet_common::models::port::PortRecord;
use scansheet_common::models::scan::ScanResult;

fn port_value(port: &PortRecord) -> ColoredString {
    let mut text: String = format!("{} {}", port.state, port.service);
    if !port.version.is_empty() {
        text.push_str(&format!(" ({})", port.version));
    }
    text.color(colors::PORT)
}

fn joined_or(values: &[String], fallback: &str) -> ColoredString {
    if values.is_empty() {
        fallback.color(colors::SEPARATOR)
    } else {
        values.join(", ").color(colors::TEXT_DEFAULT)
    }
}

/// Tree lines for one scanned host.
pub fn result_to_key_value_pairs(result: &ScanResult) -> Vec<(String, ColoredString)> {
    if result.is_failed() {
        let reason: String = result.os_details.join(" ");
        return vec![(String::from("Status"), reason.color(colors::FAILURE))];
    }

    let mut pairs: Vec<(String, ColoredString)> = vec![
        (String::from("OS"), joined_or(&result.os_details, "No OS detected")),
    ];
    if !result.os_guesses.is_empty() {
        pairs.push((String::from("Guess"), joined_or(&result.os_guesses, "")));
    }

    if result.ports.is_empty() {
        pairs.push((String::from("Ports"), "none found".color(colors::SEPARATOR)));
    }
    for port in &result.ports {
        pairs.push((port.to_string(), port_value(port)));
    }

    pairs
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use scansheet_common::models::port::Protocol;

    fn keys(pairs: &[(String, ColoredString)]) -> Vec<&str> {
        pairs.iter().map(|(k, _)| k.as_str()).collect()
    }

    #[test]
    fn host_without_os_or_ports() {
        let pairs = result_to_key_value_pairs(&ScanResult::empty());
        assert_eq!(keys(&pairs), vec!["OS", "Ports"]);
        assert_eq!(&*pairs[0].1, "No OS detected");
    }

    #[test]
    fn ports_are_keyed_by_number_and_protocol() {
        let result = ScanResult {
            os_details: vec!["Linux 5.4".into()],
            os_guesses: vec![],
            ports: vec![
                PortRecord::new("22", Protocol::Tcp, "open", "ssh", "OpenSSH 8.2"),
                PortRecord::new("161", Protocol::Udp, "open", "snmp", ""),
            ],
        };
        let pairs = result_to_key_value_pairs(&result);
        assert_eq!(keys(&pairs), vec!["OS", "22/tcp", "161/udp"]);
        assert_eq!(&*pairs[1].1, "open ssh (OpenSSH 8.2)");
        assert_eq!(&*pairs[2].1, "open snmp");
    }

    #[test]
    fn failed_scan_shows_reason() {
        let pairs = result_to_key_value_pairs(&ScanResult::failed("boom"));
        assert_eq!(keys(&pairs), vec!["Status"]);
        assert!(pairs[0].1.contains("boom"));
    }
}
