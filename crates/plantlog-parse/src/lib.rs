#![deny(unsafe_code)]

//! Pure per-cell logic: the numeric parsing cascade, parameter-specific
//! sanity validation, and the downgrade-only confidence reconciliation.
//!
//! Everything here is deterministic and side-effect-free; the pipeline can
//! run these functions across cells in any order or in parallel.

mod confidence;
mod method;
mod validate;
mod value;

pub use confidence::{cell_notes, reconcile_confidence};
pub use method::ParseMethod;
pub use validate::{Validity, validate_value};
pub use value::parse_value;
