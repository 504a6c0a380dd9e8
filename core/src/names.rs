//! Site-name bookkeeping for roster sheets.
//!
//! [`extract`] collects identifier → name pairs from a sheet into a JSON file;
//! [`backfill`] uses such a file to fill in rows whose name cell was left empty.

use std::path::{Path, PathBuf};

use anyhow::Context;
use scansheet_common::success;
use scansheet_formats::{self as formats, Row, json::KeyValueStore};

/// Rows are padded to at least this many columns by [`backfill`].
pub const BACKFILL_COLUMNS: usize = 8;

pub const BACKFILL_WIDTHS: [f64; BACKFILL_COLUMNS] = [30.0, 30.0, 30.0, 15.0, 15.0, 20.0, 20.0, 20.0];

/// Identifier (column 0) to name (column 1) for every data row that has both.
/// Later rows win over earlier ones.
pub fn collect_names(rows: &[Row]) -> KeyValueStore {
    let mut names = KeyValueStore::new();
    for row in rows.iter().skip(1) {
        let (Some(key), Some(value)) = (row.first(), row.get(1)) else {
            continue;
        };
        if !key.is_empty() && !value.is_empty() {
            names.insert(key.as_str(), value.as_str());
        }
    }
    names
}

/// `hosts.xlsx` → `hosts.json`, in the same directory.
pub fn default_json_path(sheet: &Path) -> PathBuf {
    sheet.with_extension("json")
}

/// Reads `sheet` and saves its names to `output` (or next to the sheet).
/// Returns the written path and the number of names.
pub fn extract(sheet: &Path, output: Option<&Path>) -> anyhow::Result<(PathBuf, usize)> {
    let rows: Vec<Row> = formats::read_rows(sheet)
        .with_context(|| format!("failed to read {}", sheet.display()))?;
    let names: KeyValueStore = collect_names(&rows);

    let target: PathBuf = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_json_path(sheet));
    names
        .save(&target)
        .with_context(|| format!("failed to save {}", target.display()))?;

    success!("Saved {} names to {}", names.len(), target.display());
    Ok((target, names.len()))
}

/// Fills empty name cells from `names`. Returns how many cells were filled.
pub fn backfill_rows(rows: &mut [Row], names: &KeyValueStore) -> usize {
    let mut filled: usize = 0;
    for (idx, row) in rows.iter_mut().enumerate() {
        if row.len() < BACKFILL_COLUMNS {
            row.resize(BACKFILL_COLUMNS, String::new());
        }
        if idx == 0 || !row[1].is_empty() || row[0].is_empty() {
            continue;
        }
        if let Some(name) = names.get(&row[0]) {
            row[1] = name.to_string();
            filled += 1;
        }
    }
    filled
}

/// Copies `input` to `output`, filling empty names from the JSON map at `json`.
pub fn backfill(json: &Path, input: &Path, output: &Path) -> anyhow::Result<usize> {
    let names: KeyValueStore = KeyValueStore::load(json)
        .with_context(|| format!("failed to load names from {}", json.display()))?;
    let mut rows: Vec<Row> = formats::read_rows(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let filled: usize = backfill_rows(&mut rows, &names);

    formats::write_all(output, &rows, &BACKFILL_WIDTHS)
        .with_context(|| format!("failed to write {}", output.display()))?;

    success!("Filled {filled} names, {} rows written to {}", rows.len(), output.display());
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn names_need_key_and_value() {
        let rows = vec![
            row(&["Unit", "Site Name"]),
            row(&["u1", "Portal"]),
            row(&["u2", ""]),
            row(&["", "Orphan"]),
            row(&["u3"]),
            row(&["u1", "Portal v2"]),
        ];
        let names = collect_names(&rows);
        assert_eq!(names.len(), 1);
        assert_eq!(names.get("u1"), Some("Portal v2"));
    }

    #[test]
    fn backfill_only_touches_empty_known_names() {
        let mut names = KeyValueStore::new();
        names.insert("u1", "Portal");
        names.insert("Unit", "should not touch header");

        let mut rows = vec![
            row(&["Unit", ""]),
            row(&["u1", ""]),
            row(&["u1", "Kept"]),
            row(&["u2"]),
            row(&["", ""]),
            row(&["u1", "", "", "", "", "", "", "", "extra"]),
        ];
        let filled = backfill_rows(&mut rows, &names);

        assert_eq!(filled, 2);
        assert_eq!(rows[0][1], "");
        assert_eq!(rows[1][1], "Portal");
        assert_eq!(rows[2][1], "Kept");
        assert_eq!(rows[3][1], "");
        assert_eq!(rows[5][1], "Portal");
        assert!(rows[..5].iter().all(|r| r.len() == BACKFILL_COLUMNS));
        assert_eq!(rows[5].len(), 9);
    }

    #[test]
    fn json_path_sits_next_to_sheet() {
        assert_eq!(
            default_json_path(Path::new("/data/hosts.xlsx")),
            PathBuf::from("/data/hosts.json")
        );
    }
}
