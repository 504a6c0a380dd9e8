use std::fmt;
use std::str::FromStr;

/// Transport protocol of a port line. Anything else is not a port line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    Tcp,
    Udp,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Tcp => "tcp",
            Protocol::Udp => "udp",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tcp" => Ok(Protocol::Tcp),
            "udp" => Ok(Protocol::Udp),
            other => Err(format!("unsupported protocol: {other}")),
        }
    }
}

/// A single `<port>/<proto> <state> <service...>` line.
///
/// The port stays a string so scanner artifacts survive untouched into the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortRecord {
    pub port: String,
    pub protocol: Protocol,
    pub state: String,
    pub service: String,
    pub version: String,
}

impl PortRecord {
    pub fn new(
        port: impl Into<String>,
        protocol: Protocol,
        state: impl Into<String>,
        service: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            port: port.into(),
            protocol,
            state: state.into(),
            service: service.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for PortRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.port, self.protocol)
    }
}
