//! End-to-end runs of the scan pipeline against real sheet files.

mod support;

mod pipeline;
mod utilities;
