#![cfg(test)]

use scansheet_core::report::Column;
use scansheet_core::{export, names, scanner, unscanned};
use scansheet_common::input;
use scansheet_formats::json::KeyValueStore;
use scansheet_formats::{self as formats, Row, WriteMode};

use crate::support::{QUIET_HOST, ReplayScanner, WEB_HOST, row, temp_path};

#[test]
fn extract_then_backfill() {
    let source = temp_path("names-source.csv");
    let blanks = temp_path("names-blanks.csv");
    let json = temp_path("names.json");
    let filled = temp_path("names-filled.xlsx");

    formats::write_all(
        &source,
        &[
            row(&["Unit", "Site Name", "Site Address", "IP"]),
            row(&["U1", "Main Office", "1 High St", "10.1.0.5"]),
            row(&["U2", "Depot", "2 Low Rd", ""]),
        ],
        &[],
    )
    .unwrap();
    formats::write_all(
        &blanks,
        &[
            row(&["Unit", "Site Name"]),
            row(&["U2", "", "2 Low Rd"]),
            row(&["U9", ""]),
            row(&["U1", "Renamed"]),
        ],
        &[],
    )
    .unwrap();

    let (path, count) = names::extract(&source, Some(&json)).unwrap();
    assert_eq!(path, json);
    assert_eq!(count, 2);

    let store = KeyValueStore::load(&json).unwrap();
    assert_eq!(store.get("U1"), Some("Main Office"));
    assert_eq!(store.get("U2"), Some("Depot"));

    let changed: usize = names::backfill(&json, &blanks, &filled).unwrap();
    assert_eq!(changed, 1);

    let rows: Vec<Row> = formats::read_rows(&filled).unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0][1], "Site Name");
    assert_eq!(rows[1][..3], row(&["U2", "Depot", "2 Low Rd"])[..]);
    assert_eq!(rows[2][0], "U9");
    assert!(rows[2].get(1).is_none_or(|name| name.is_empty()));
    assert_eq!(rows[3][1], "Renamed");
}

#[tokio::test]
async fn unscanned_rows_from_report() {
    let report_path = temp_path("unscanned-report.csv");
    let output = temp_path("unscanned-out.csv");

    let mut roster = input::to_roster(input::parse_commas("10.1.0.5,10.2.0.1,10.3.0.1"));
    roster.push(scansheet_common::models::roster::RosterEntry::new("U7", "Depot", "", ""));

    let scanner = ReplayScanner::new(&[("10.1.0.5", WEB_HOST), ("10.2.0.1", QUIET_HOST)]);
    let results = scanner::scan_roster(&scanner, &roster, |_| {}).await;
    export::write_report(&report_path, WriteMode::Overwrite, &roster, &results).unwrap();

    let count: usize = unscanned::extract_unscanned(&report_path, &output).unwrap();
    assert_eq!(count, 3);

    let rows: Vec<Row> = formats::read_rows(&output).unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0][0], Column::Identifier.header());

    let ips: Vec<&str> = rows[1..]
        .iter()
        .map(|r| r.get(Column::Ip.index() as usize).map(String::as_str).unwrap_or_default())
        .collect();
    // down host, failed scan, entry without IP
    assert_eq!(ips, vec!["10.2.0.1", "10.3.0.1", ""]);
}
