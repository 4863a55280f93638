#![deny(unsafe_code)]

//! Core data model for the plant measurement sheet parser.
//!
//! Defines the canonical catalog entries ([`Parameter`], [`Asset`]), the
//! typed cell representation ([`CellValue`]), per-column mapping decisions
//! ([`MappingResult`]), per-cell parse results ([`ParsedCell`]), and the
//! aggregate [`ParseReport`] consumed by downstream pipelines.

mod catalog;
mod cell;
mod enums;
mod error;
mod mapping;
mod report;

pub use catalog::{Asset, Parameter};
pub use cell::CellValue;
pub use enums::{AssetType, Confidence, ParamCategory};
pub use error::ModelError;
pub use mapping::{MappingResult, ParsedCell, UnmappedColumn};
pub use report::{ParseMetadata, ParseReport, ParseStatus};
