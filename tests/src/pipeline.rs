#![cfg(test)]

use std::path::Path;

use scansheet_common::input;
use scansheet_common::models::roster::RosterEntry;
use scansheet_common::models::scan::SCAN_FAILED_MARKER;
use scansheet_core::aggregator::ScanResults;
use scansheet_core::report::{Column, FIRST_DATA_ROW};
use scansheet_core::{export, roster, scanner};
use scansheet_formats::{self as formats, Row, WriteMode, workbook};

use crate::support::{PRINTER, QUIET_HOST, ReplayScanner, WEB_HOST, row, temp_path};

const ROSTER_CSV: &str = "\
Unit,Site Name,Site Address,IP
U1,Main Office,1 High St,10.1.0.5
U2,Depot,2 Low Rd,
U3,Annex,3 Side St,10.1.0.5
U4,Print Room,4 Back Ln,10.1.0.9
U5,Closet,5 Dark Ct,10.1.0.77
";

fn write_roster(name: &str) -> std::path::PathBuf {
    let path = temp_path(name);
    std::fs::write(&path, ROSTER_CSV).unwrap();
    path
}

async fn scan(roster: &[RosterEntry], scanner: &ReplayScanner) -> ScanResults {
    let mut seen: Vec<usize> = Vec::new();
    let results = scanner::scan_roster(scanner, roster, |done| seen.push(done.position)).await;
    let expected: Vec<usize> = (1..=seen.len()).collect();
    assert_eq!(seen, expected, "progress positions must count up from 1");
    results
}

fn cell<'a>(row: &'a Row, column: Column) -> &'a str {
    row.get(column.index() as usize).map(String::as_str).unwrap_or_default()
}

fn replay() -> ReplayScanner {
    ReplayScanner::new(&[("10.1.0.5", WEB_HOST), ("10.1.0.9", PRINTER)])
}

#[tokio::test]
async fn roster_to_csv_report() {
    let roster_path = write_roster("roster-csv.csv");
    let report_path = temp_path("report.csv");

    let roster: Vec<RosterEntry> = roster::load(&roster_path).unwrap();
    assert_eq!(roster.len(), 5);

    let scanner = replay();
    let results = scan(&roster, &scanner).await;
    assert_eq!(scanner.calls(), vec!["10.1.0.5", "10.1.0.9", "10.1.0.77"]);

    let report = export::write_report(&report_path, WriteMode::Overwrite, &roster, &results).unwrap();
    assert_eq!(report.first_row, FIRST_DATA_ROW);
    assert_eq!(report.rows.len(), 9);

    let rows: Vec<Row> = formats::read_rows(&report_path).unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(
        rows[0],
        row(&[
            "Unit", "Site Name", "Site Address", "IP", "Port", "Service", "OS", "OS Guess", "Note",
            "Protocol", "Version", "State"
        ])
    );

    assert_eq!(
        rows[1],
        row(&[
            "U1", "Main Office", "1 High St", "10.1.0.5", "22", "OpenSSH 8.9p1 Ubuntu",
            "Linux 5.0 - 5.14", " ", "", "tcp", "ssh", "open"
        ])
    );
    assert_eq!(cell(&rows[2], Column::Port), "80");
    assert_eq!(cell(&rows[2], Column::Identifier), "U1");
    assert_eq!(cell(&rows[3], Column::Port), "443");
    assert_eq!(cell(&rows[3], Column::Service), "https");

    // no IP: one row, identity only
    assert_eq!(rows[4], row(&["U2", "Depot", "2 Low Rd", "", "", "", " ", " "]));

    // same IP as U1, joined to the same result
    let annex: Vec<&str> = rows[5..8].iter().map(|r| cell(r, Column::Port)).collect();
    assert_eq!(annex, vec!["22", "80", "443"]);
    assert!(rows[5..8].iter().all(|r| cell(r, Column::Identifier) == "U3"));

    assert_eq!(cell(&rows[8], Column::Port), "9100");
    assert_eq!(cell(&rows[8], Column::Os), " ");
    assert_eq!(
        cell(&rows[8], Column::OsGuess),
        "HP LaserJet M402dn (96%), HP LaserJet Pro (91%)"
    );

    assert_eq!(cell(&rows[9], Column::Identifier), "U5");
    assert!(cell(&rows[9], Column::Os).starts_with(SCAN_FAILED_MARKER));
    assert_eq!(cell(&rows[9], Column::Port), "");
}

#[tokio::test]
async fn xlsx_report_merges_identity_cells() {
    let roster_path = write_roster("roster-xlsx.csv");
    let report_path = temp_path("report.xlsx");

    let roster: Vec<RosterEntry> = roster::load(&roster_path).unwrap();
    let results = scan(&roster, &replay()).await;
    let report = export::write_report(&report_path, WriteMode::Overwrite, &roster, &results).unwrap();

    // U1 and U3 have three ports each
    assert_eq!(report.merges.len(), 2);
    assert_eq!((report.merges[0].first_row, report.merges[0].last_row), (1, 3));
    assert_eq!((report.merges[1].first_row, report.merges[1].last_row), (5, 7));

    let rows: Vec<Row> = formats::read_rows(&report_path).unwrap();
    assert_eq!(rows.len(), 10);

    assert_eq!(cell(&rows[1], Column::Identifier), "U1");
    assert_eq!(cell(&rows[1], Column::Os), "Linux 5.0 - 5.14");
    for merged in &rows[2..4] {
        for column in Column::MERGED {
            assert_eq!(cell(merged, column), "", "{column:?} should only be set in the top cell");
        }
    }
    let ports: Vec<&str> = rows[1..4].iter().map(|r| cell(r, Column::Port)).collect();
    assert_eq!(ports, vec!["22", "80", "443"]);
    let versions: Vec<&str> = rows[1..4].iter().map(|r| cell(r, Column::Version)).collect();
    assert_eq!(versions, vec!["ssh", "http", ""]);

    assert_eq!(cell(&rows[4], Column::Identifier), "U2");
    assert!(cell(&rows[9], Column::Os).starts_with(SCAN_FAILED_MARKER));
}

async fn append_twice(report_path: &Path) -> Vec<Row> {
    let first: Vec<RosterEntry> = input::to_roster(input::parse_commas("10.1.0.5"));
    let second: Vec<RosterEntry> = input::to_roster(input::parse_commas("10.1.0.9, 10.2.0.1"));
    let scanner = ReplayScanner::new(&[
        ("10.1.0.5", WEB_HOST),
        ("10.1.0.9", PRINTER),
        ("10.2.0.1", QUIET_HOST),
    ]);

    let results = scan(&first, &scanner).await;
    let report = export::write_report(report_path, WriteMode::Append, &first, &results).unwrap();
    assert_eq!(report.first_row, FIRST_DATA_ROW);
    assert_eq!(report.end_row(), 4);

    let results = scan(&second, &scanner).await;
    let report = export::write_report(report_path, WriteMode::Append, &second, &results).unwrap();
    assert_eq!(report.first_row, 4);
    assert_eq!(report.end_row(), 6);

    formats::read_rows(report_path).unwrap()
}

#[tokio::test]
async fn csv_append_keeps_earlier_rows() {
    let rows = append_twice(&temp_path("append.csv")).await;

    assert_eq!(rows.len(), 6);
    assert_eq!(cell(&rows[0], Column::Identifier), "Unit");
    let ips: Vec<&str> = rows[1..].iter().map(|r| cell(r, Column::Ip)).collect();
    assert_eq!(ips, vec!["10.1.0.5", "10.1.0.5", "10.1.0.5", "10.1.0.9", "10.2.0.1"]);

    // host that was down: no ports, placeholders for both OS columns
    assert_eq!(cell(&rows[5], Column::Port), "");
    assert_eq!(cell(&rows[5], Column::Os), " ");
}

#[tokio::test]
async fn xlsx_append_keeps_earlier_rows() {
    let path = temp_path("append.xlsx");
    let rows = append_twice(&path).await;

    assert_eq!(rows.len(), 6);
    assert_eq!(cell(&rows[0], Column::State), "State");

    let ips: Vec<&str> = rows[1..].iter().map(|r| cell(r, Column::Ip)).collect();
    assert_eq!(ips, vec!["10.1.0.5", "", "", "10.1.0.9", "10.2.0.1"]);
    let ports: Vec<&str> = rows[1..4].iter().map(|r| cell(r, Column::Port)).collect();
    assert_eq!(ports, vec!["22", "80", "443"]);

    // the first run's group is still merged after the second run appended
    let mut merged = workbook::read_merged_ranges(&path).unwrap();
    merged.sort();
    let mut expected: Vec<workbook::MergedRange> = Column::MERGED
        .iter()
        .map(|c| (1, c.index(), 3, c.index()))
        .collect();
    expected.sort();
    assert_eq!(merged, expected);
}

#[tokio::test]
async fn failed_write_can_be_retried() {
    let roster: Vec<RosterEntry> = input::to_roster(input::parse_commas("10.1.0.5"));
    let scanner = replay();
    let results = scan(&roster, &scanner).await;

    let missing_dir = temp_path("no-such-dir").join("report.csv");
    assert!(export::write_report(&missing_dir, WriteMode::Overwrite, &roster, &results).is_err());

    let report_path = temp_path("retry.csv");
    let report = export::write_report(&report_path, WriteMode::Overwrite, &roster, &results).unwrap();
    assert_eq!(report.rows.len(), 3);
    assert_eq!(scanner.calls().len(), 1);
}
