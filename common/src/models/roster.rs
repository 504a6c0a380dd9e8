/// One known host. Roster order is the order of the report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterEntry {
    pub identifier: String,
    pub name: String,
    pub domain: String,
    /// Empty means there is nothing to scan for this entry.
    pub ip: String,
}

impl RosterEntry {
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        domain: impl Into<String>,
        ip: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            domain: domain.into(),
            ip: ip.into(),
        }
    }

    /// Entry for a bare IP with no identity columns, as produced from IP lists.
    pub fn from_ip(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            ..Self::default()
        }
    }

    pub fn has_target(&self) -> bool {
        !self.ip.is_empty()
    }
}
