pub mod scan;

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};
use scansheet_common::config::{Config, DEFAULT_PROGRAM, DEFAULT_SCAN_ARGS};

#[derive(Parser)]
#[command(name = "scansheet")]
#[command(version, about = "Turns nmap scans of a host roster into a spreadsheet report.")]
pub struct CommandLine {
    /// Only print warnings, errors and the final summary
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan every host of a roster or IP list and build a report
    #[command(alias = "s")]
    Scan(ScanArgs),
    /// Save the unit → site name pairs of a sheet as JSON
    #[command(alias = "x")]
    Extract {
        /// Sheet to read (.xlsx or .csv)
        #[arg(short, long)]
        source: PathBuf,
        /// JSON file to write, defaults to the sheet path with a .json extension
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Fill empty site names of a sheet from a JSON map
    #[command(alias = "b")]
    Backfill {
        /// JSON map of unit → site name
        #[arg(short, long)]
        json: PathBuf,
        /// Sheet to read (.xlsx or .csv)
        #[arg(short, long)]
        source: PathBuf,
        /// Sheet to write
        #[arg(short, long)]
        export: PathBuf,
    },
    /// Copy the rows without a port out of a report
    #[command(alias = "u")]
    Unscanned {
        /// Report to read (.xlsx or .csv)
        #[arg(short, long)]
        source: PathBuf,
        /// Sheet to write
        #[arg(short, long)]
        export: PathBuf,
    },
}

#[derive(Args)]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .args(["source", "file", "ips"])
))]
pub struct ScanArgs {
    /// Roster sheet (.xlsx or .csv): unit, site name, site address, IP
    #[arg(short, long)]
    pub source: Option<PathBuf>,
    /// File with one IP per line
    #[arg(short, long)]
    pub file: Option<PathBuf>,
    /// Comma-separated list of IPs
    #[arg(short, long)]
    pub ips: Option<String>,
    /// Scanner arguments, placed before the target IP
    #[arg(short, long, default_value = DEFAULT_SCAN_ARGS, allow_hyphen_values = true)]
    pub args: String,
    /// Scanner binary
    #[arg(long, default_value = DEFAULT_PROGRAM)]
    pub program: String,
    /// Report to write (.xlsx or .csv)
    #[arg(short, long)]
    pub export: Option<PathBuf>,
    /// Keep the rows of an existing report and add after them
    #[arg(long, requires = "export")]
    pub append: bool,
}

/// Where the hosts of a scan come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanInput {
    Roster(PathBuf),
    IpFile(PathBuf),
    IpList(String),
}

impl ScanArgs {
    pub fn input(&self) -> anyhow::Result<ScanInput> {
        match (&self.source, &self.file, &self.ips) {
            (Some(path), None, None) => Ok(ScanInput::Roster(path.clone())),
            (None, Some(path), None) => Ok(ScanInput::IpFile(path.clone())),
            (None, None, Some(list)) => Ok(ScanInput::IpList(list.clone())),
            _ => anyhow::bail!("exactly one of --source, --file or --ips is required"),
        }
    }

    pub fn to_config(&self, quiet: bool) -> Config {
        Config {
            program: self.program.clone(),
            scan_args: self.args.clone(),
            export: self.export.clone(),
            append: self.append,
            quiet,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
