//! CLI library components for the plant log parser.

pub mod logging;
