//! # Scan Models
//!
//! Plain data shared between the parser, the aggregator and the report builder.
//!
//! * [`port::PortRecord`]: one port line as the scanner printed it.
//! * [`scan::ScanResult`]: everything parsed from one scan session.
//! * [`roster::RosterEntry`]: one known host, in roster order.

pub mod port;
pub mod roster;
pub mod scan;
