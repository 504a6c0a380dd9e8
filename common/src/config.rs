use std::path::PathBuf;

/// Default scanner binary.
pub const DEFAULT_PROGRAM: &str = "nmap";

/// Default scanner arguments: service/version detection plus OS detection.
pub const DEFAULT_SCAN_ARGS: &str = "-sV -O";

/// Resolved options for one `scan` run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Scanner binary, looked up on `PATH` unless absolute.
    pub program: String,
    /// Arguments placed before the target IP, split on whitespace.
    pub scan_args: String,
    /// Where the report is written. `None` only prints results.
    pub export: Option<PathBuf>,
    /// Resume after the last row of an existing report instead of overwriting it.
    pub append: bool,
    /// Suppresses headers and per-host trees.
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            scan_args: DEFAULT_SCAN_ARGS.to_string(),
            export: None,
            append: false,
            quiet: false,
        }
    }
}

impl Config {
    /// Scanner arguments as passed to the process, empty pieces dropped.
    pub fn scan_arg_list(&self) -> Vec<String> {
        self.scan_args
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}
