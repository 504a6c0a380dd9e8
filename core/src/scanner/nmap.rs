use std::process::{Output, Stdio};

use async_trait::async_trait;
use scansheet_common::config::Config;
use tokio::process::Command;

use super::{HostScanner, ScanError};

/// Runs `<program> <args...> <ip>` and captures everything it prints.
#[derive(Debug, Clone)]
pub struct NmapScanner {
    program: String,
    args: Vec<String>,
}

impl NmapScanner {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.program.clone(), cfg.scan_arg_list())
    }

    /// The command line for one target, for logs.
    pub fn command_line(&self, ip: &str) -> String {
        let mut parts: Vec<&str> = vec![self.program.as_str()];
        parts.extend(self.args.iter().map(String::as_str));
        parts.push(ip);
        parts.join(" ")
    }
}

#[async_trait]
impl HostScanner for NmapScanner {
    async fn scan(&self, ip: &str) -> Result<String, ScanError> {
        tracing::debug!("running {}", self.command_line(ip));

        let output: Output = Command::new(&self.program)
            .args(&self.args)
            .arg(ip)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| ScanError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let mut text: String = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(ScanError::Exited {
                program: self.program.clone(),
                status: output.status,
                output: text,
            });
        }
        Ok(text)
    }
}
