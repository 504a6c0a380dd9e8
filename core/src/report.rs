//! # Report Builder
//!
//! Expands row groups into physical sheet rows and records which cells are
//! spanned across a group.
//!
//! A group with `k` ports becomes `k` rows, a group without ports becomes one
//! row with blank port columns. Identity and OS columns repeat on every row of
//! a group, which is what allows them to be merged; port columns never are.
//! Building is pure: the same groups and start row always give the same report.

use scansheet_common::models::{port::PortRecord, roster::RosterEntry};

use crate::aggregator::ReportRowGroup;

pub mod sink;

/// Sheet row of the header. Data starts right below it.
pub const HEADER_ROW: u32 = 0;
pub const FIRST_DATA_ROW: u32 = HEADER_ROW + 1;

/// Cell text used when a group has no OS entries, so the cell never collapses.
pub const EMPTY_OS_PLACEHOLDER: &str = " ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Identifier,
    Name,
    Domain,
    Ip,
    Port,
    Service,
    Os,
    OsGuess,
    Note,
    Protocol,
    Version,
    State,
}

impl Column {
    pub const ALL: [Column; 12] = [
        Column::Identifier,
        Column::Name,
        Column::Domain,
        Column::Ip,
        Column::Port,
        Column::Service,
        Column::Os,
        Column::OsGuess,
        Column::Note,
        Column::Protocol,
        Column::Version,
        Column::State,
    ];

    /// Columns spanned across the rows of one group.
    pub const MERGED: [Column; 7] = [
        Column::Identifier,
        Column::Name,
        Column::Domain,
        Column::Ip,
        Column::Os,
        Column::OsGuess,
        Column::Note,
    ];

    pub fn index(self) -> u16 {
        self as u16
    }

    pub fn header(self) -> &'static str {
        match self {
            Column::Identifier => "Unit",
            Column::Name => "Site Name",
            Column::Domain => "Site Address",
            Column::Ip => "IP",
            Column::Port => "Port",
            Column::Service => "Service",
            Column::Os => "OS",
            Column::OsGuess => "OS Guess",
            Column::Note => "Note",
            Column::Protocol => "Protocol",
            Column::Version => "Version",
            Column::State => "State",
        }
    }

    pub fn width(self) -> f64 {
        match self {
            Column::Identifier | Column::Port | Column::Protocol | Column::State => 10.0,
            Column::Name | Column::Ip | Column::Service | Column::Version => 15.0,
            Column::Domain | Column::Note => 20.0,
            Column::Os | Column::OsGuess => 25.0,
        }
    }

    pub fn is_merged(self) -> bool {
        Column::MERGED.contains(&self)
    }
}

/// One sheet row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhysicalRow {
    pub index: u32,
    pub identifier: String,
    pub name: String,
    pub domain: String,
    pub ip: String,
    pub port: String,
    pub service: String,
    pub os: String,
    pub os_guess: String,
    pub note: String,
    pub protocol: String,
    pub version: String,
    pub state: String,
}

impl PhysicalRow {
    pub fn cell(&self, column: Column) -> &str {
        match column {
            Column::Identifier => &self.identifier,
            Column::Name => &self.name,
            Column::Domain => &self.domain,
            Column::Ip => &self.ip,
            Column::Port => &self.port,
            Column::Service => &self.service,
            Column::Os => &self.os,
            Column::OsGuess => &self.os_guess,
            Column::Note => &self.note,
            Column::Protocol => &self.protocol,
            Column::Version => &self.version,
            Column::State => &self.state,
        }
    }

    /// Cells in sheet column order.
    pub fn cells(&self) -> Vec<String> {
        Column::ALL
            .iter()
            .map(|column| self.cell(*column).to_string())
            .collect()
    }

    fn with_port(mut self, port: &PortRecord) -> Self {
        self.port = port.port.clone();
        self.service = port.service.clone();
        self.protocol = port.protocol.to_string();
        self.version = port.version.clone();
        self.state = port.state.clone();
        self
    }
}

/// Rows `first_row..=last_row` share the values of [`Column::MERGED`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeDirective {
    pub first_row: u32,
    pub last_row: u32,
    pub columns: &'static [Column],
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub first_row: u32,
    pub rows: Vec<PhysicalRow>,
    pub merges: Vec<MergeDirective>,
}

impl Report {
    pub fn row_at(&self, index: u32) -> Option<&PhysicalRow> {
        let offset: u32 = index.checked_sub(self.first_row)?;
        self.rows.get(offset as usize)
    }

    /// First row index after this report.
    pub fn end_row(&self) -> u32 {
        self.first_row + self.rows.len() as u32
    }
}

pub fn build(groups: &[ReportRowGroup]) -> Report {
    build_from(groups, FIRST_DATA_ROW)
}

/// Same as [`build`], with data starting at `first_row` (e.g. after existing rows).
pub fn build_from(groups: &[ReportRowGroup], first_row: u32) -> Report {
    let mut report = Report {
        first_row,
        ..Report::default()
    };
    let mut current: u32 = first_row;

    for group in groups {
        let start: u32 = current;
        let base: PhysicalRow = identity_row(group);

        if group.result.ports.is_empty() {
            report.rows.push(PhysicalRow {
                index: current,
                ..base
            });
            current += 1;
            continue;
        }

        for port in &group.result.ports {
            let row = PhysicalRow {
                index: current,
                ..base.clone()
            };
            report.rows.push(row.with_port(port));
            current += 1;
        }

        if current > start + 1 {
            report.merges.push(MergeDirective {
                first_row: start,
                last_row: current - 1,
                columns: &Column::MERGED,
            });
        }
    }

    report
}

fn identity_row(group: &ReportRowGroup) -> PhysicalRow {
    let entry: &RosterEntry = group.entry;
    PhysicalRow {
        identifier: entry.identifier.clone(),
        name: entry.name.clone(),
        domain: entry.domain.clone(),
        ip: entry.ip.clone(),
        os: join_or_placeholder(&group.result.os_details),
        os_guess: join_or_placeholder(&group.result.os_guesses),
        ..PhysicalRow::default()
    }
}

fn join_or_placeholder(entries: &[String]) -> String {
    if entries.is_empty() {
        EMPTY_OS_PLACEHOLDER.to_string()
    } else {
        entries.join("\n")
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
