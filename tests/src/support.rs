#![cfg(test)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use scansheet_core::scanner::{HostScanner, ScanError};

pub const WEB_HOST: &str = "\
Starting Nmap 7.94 ( https://nmap.org )
Nmap scan report for 10.1.0.5
PORT    STATE SERVICE  VERSION
22/tcp  open  ssh      OpenSSH 8.9p1 Ubuntu
80/tcp  open  http     nginx 1.18.0
443/tcp open  https
OS details: Linux 5.0 - 5.14
Nmap done: 1 IP address (1 host up) scanned in 12.31 seconds
";

pub const QUIET_HOST: &str = "\
Starting Nmap 7.94 ( https://nmap.org )
Note: Host seems down. If it is really up, but blocking our ping probes, try -Pn
Nmap done: 1 IP address (0 hosts up) scanned in 3.04 seconds
";

pub const PRINTER: &str = "\
Nmap scan report for 10.1.0.9
9100/tcp open jetdirect
Aggressive OS guesses: HP LaserJet M402dn (96%), HP LaserJet Pro (91%)
";

/// Replays canned scanner output per IP; unknown IPs fail to start.
pub struct ReplayScanner {
    outputs: HashMap<String, String>,
    pub calls: Mutex<Vec<String>>,
}

impl ReplayScanner {
    pub fn new(outputs: &[(&str, &str)]) -> Self {
        Self {
            outputs: outputs
                .iter()
                .map(|(ip, out)| (ip.to_string(), out.to_string()))
                .collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HostScanner for ReplayScanner {
    async fn scan(&self, ip: &str) -> Result<String, ScanError> {
        self.calls.lock().unwrap().push(ip.to_string());
        match self.outputs.get(ip) {
            Some(out) => Ok(out.clone()),
            None => Err(ScanError::Spawn {
                program: "replay".into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such host"),
            }),
        }
    }
}

/// Fresh path under the temp dir, unique per test name and process.
pub fn temp_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("scansheet-{}-{}", std::process::id(), name));
    let _ = std::fs::remove_file(&path);
    path
}

pub fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}
