use std::time::{Duration, Instant};

use colored::*;
use scansheet_common::config::Config;
use scansheet_common::input;
use scansheet_common::models::roster::RosterEntry;
use scansheet_common::success;
use scansheet_core::aggregator::ScanResults;
use scansheet_core::scanner::{self, NmapScanner, ScanProgress};
use scansheet_core::{export, roster};
use scansheet_formats::WriteMode;
use tracing::{Instrument, Span, info, info_span};

use crate::commands::ScanInput;
use crate::terminal::{colors, format, print, progress};

pub async fn scan(source: ScanInput, cfg: &Config) -> anyhow::Result<()> {
    let roster: Vec<RosterEntry> = load_roster(&source)?;
    let total: usize = scanner::scan_targets(&roster).len();

    if total == 0 {
        print::nothing_to_scan();
    }

    let nmap = NmapScanner::from_config(cfg);
    info!("Scanner command: {}", nmap.command_line("<ip>"));

    let start: Instant = Instant::now();
    let span: Span = info_span!("scan");
    progress::start(&span, total);

    let results: ScanResults = scanner::scan_roster(&nmap, &roster, |done| {
        progress::advance(&span, done.ip);
        if !cfg.quiet {
            print_host(&done);
        }
    })
    .instrument(span.clone())
    .await;
    drop(span);

    let elapsed: Duration = start.elapsed();

    if let Some(path) = &cfg.export {
        let mode: WriteMode = if cfg.append { WriteMode::Append } else { WriteMode::Overwrite };
        let report = export::write_report(path, mode, &roster, &results)?;
        success!(
            "Wrote {} rows to {} starting at row {}",
            report.rows.len(),
            path.display(),
            report.first_row
        );
    } else {
        info!("No export path given, results were only printed");
    }

    print_summary(&roster, &results, elapsed, cfg);
    Ok(())
}

fn load_roster(source: &ScanInput) -> anyhow::Result<Vec<RosterEntry>> {
    match source {
        ScanInput::Roster(path) => roster::load(path),
        ScanInput::IpFile(path) => Ok(input::to_roster(input::read_ip_file(path)?)),
        ScanInput::IpList(list) => Ok(input::to_roster(input::parse_commas(list))),
    }
}

fn print_host(done: &ScanProgress<'_>) {
    print::tree_head(done.position, done.ip);
    print::as_tree_one_level(format::result_to_key_value_pairs(done.result));
}

fn print_summary(roster: &[RosterEntry], results: &ScanResults, elapsed: Duration, cfg: &Config) {
    let failed: usize = results.values().filter(|r| r.is_failed()).count();
    let without_ip: usize = roster.iter().filter(|e| !e.has_target()).count();

    print::fat_separator();
    print::GLOBAL_KEY_WIDTH.set(7);

    print::aligned_line("Hosts", results.len().to_string());
    let failed_value: ColoredString = if failed > 0 {
        failed.to_string().color(colors::FAILURE)
    } else {
        failed.to_string().color(colors::PRIMARY)
    };
    print::aligned_line("Failed", failed_value);
    print::aligned_line("No IP", without_ip.to_string());
    print::aligned_line("Elapsed", format!("{:.2}s", elapsed.as_secs_f64()));
    if let Some(path) = &cfg.export {
        print::aligned_line("Report", path.display().to_string());
    }

    print::end_of_program();
}
