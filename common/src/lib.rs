//! Shared types for `scansheet`.
//!
//! * [`models`]: scan results, roster entries and the parsed port records.
//! * [`config`]: the resolved run configuration handed to the core.
//! * [`input`]: plain IP list sources (file or comma-separated).
//!
//! The logging macros exported here wrap `tracing` so every crate reports
//! through the same targets the CLI formatter knows about.

pub mod config;
pub mod input;
pub mod models;

#[doc(hidden)]
pub use tracing as __tracing;

/// Target for raw console output, printed without a status symbol.
pub const PRINT_TARGET: &str = "scansheet::print";

/// Target for lines that report a finished step.
pub const SUCCESS_TARGET: &str = "scansheet::success";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "scansheet::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::__tracing::error!($($arg)*)
    };
}
