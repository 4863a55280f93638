#![deny(unsafe_code)]

//! Immutable catalogs of canonical parameters and assets.
//!
//! The [`Registry`] is built once at startup from the built-in catalogs and
//! shared by reference into every pipeline component. Iteration order is the
//! catalog declaration order, which lexical matching relies on for stable
//! tie-breaking.

mod builtin;
mod error;
mod registry;

pub use builtin::{builtin_assets, builtin_parameters};
pub use error::RegistryError;
pub use registry::Registry;
