#![deny(unsafe_code)]

//! Parse pipeline orchestration.
//!
//! [`ParseEngine`] wires the header detector, header mapper, value parser,
//! validator and confidence reconciler into a single synchronous pass over
//! a raw grid, then assembles the aggregate [`ParseReport`].
//!
//! [`ParseReport`]: plantlog_model::ParseReport

mod duplicates;
mod engine;
mod report;

pub use duplicates::duplicate_warnings;
pub use engine::ParseEngine;
