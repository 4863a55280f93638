#![deny(unsafe_code)]

//! Header classification and mapping.
//!
//! Turns raw header strings into per-column [`MappingResult`]s through a
//! chain of: non-parameter classification, an optional external mapping
//! oracle, and a deterministic lexical fallback. Oracle failures never
//! surface to callers; the fallback result silently substitutes.
//!
//! [`MappingResult`]: plantlog_model::MappingResult

mod classify;
mod detect;
mod fuzzy;
mod infer;
mod mapper;
mod oracle;
mod similarity;
mod strategy;

pub use classify::non_parameter_reason;
pub use detect::detect_header_row;
pub use fuzzy::FuzzyMatcher;
pub use infer::infer_asset;
pub use mapper::HeaderMapper;
pub use oracle::{MappingOracle, OracleContext, OracleError, OracleReply};
pub use strategy::{FallbackMapping, FuzzyStrategy, MapStrategyError, MappingStrategy, OracleStrategy};
