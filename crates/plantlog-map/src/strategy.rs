//! Mapping strategies and the oracle-then-fuzzy fallback composition.

use std::str::FromStr;

use plantlog_model::{Confidence, MappingResult};
use plantlog_registry::Registry;
use thiserror::Error;

use crate::fuzzy::FuzzyMatcher;
use crate::oracle::{MappingOracle, OracleContext, OracleError};

/// Reason a strategy could not produce a mapping.
#[derive(Debug, Error)]
pub enum MapStrategyError {
    #[error(transparent)]
    Oracle(#[from] OracleError),
    #[error("oracle reply rejected: {0}")]
    RejectedReply(String),
}

/// A capability that maps one header, or signals failure so a composed
/// fallback can take over.
pub trait MappingStrategy {
    fn attempt_mapping(&self, header: &str) -> Result<MappingResult, MapStrategyError>;
}

/// Strategy backed by the external oracle.
///
/// Replies are sanity-checked against the registry: an unknown parameter or
/// asset id, or an unparseable confidence, rejects the reply and triggers
/// the fallback.
pub struct OracleStrategy<'a> {
    oracle: &'a dyn MappingOracle,
    registry: &'a Registry,
    context: &'a OracleContext,
}

impl<'a> OracleStrategy<'a> {
    pub fn new(
        oracle: &'a dyn MappingOracle,
        registry: &'a Registry,
        context: &'a OracleContext,
    ) -> Self {
        Self {
            oracle,
            registry,
            context,
        }
    }
}

impl MappingStrategy for OracleStrategy<'_> {
    fn attempt_mapping(&self, header: &str) -> Result<MappingResult, MapStrategyError> {
        let reply = self.oracle.map_header(header, self.context)?;

        if let Some(param) = &reply.param_name {
            if self.registry.parameter(param).is_none() {
                return Err(MapStrategyError::RejectedReply(format!(
                    "unknown parameter id: {param}"
                )));
            }
        }
        if let Some(asset) = &reply.asset_name {
            if self.registry.asset(asset).is_none() {
                return Err(MapStrategyError::RejectedReply(format!(
                    "unknown asset id: {asset}"
                )));
            }
        }
        let confidence = Confidence::from_str(&reply.confidence)
            .map_err(|error| MapStrategyError::RejectedReply(error.to_string()))?;

        Ok(MappingResult {
            header: header.to_string(),
            param_name: reply.param_name,
            asset_name: reply.asset_name,
            confidence,
            reason: reply.reason.unwrap_or_else(|| "Oracle mapping".to_string()),
        })
    }
}

/// Strategy backed by the deterministic lexical matcher. Never fails.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyStrategy<'a> {
    matcher: FuzzyMatcher<'a>,
}

impl<'a> FuzzyStrategy<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            matcher: FuzzyMatcher::new(registry),
        }
    }
}

impl MappingStrategy for FuzzyStrategy<'_> {
    fn attempt_mapping(&self, header: &str) -> Result<MappingResult, MapStrategyError> {
        Ok(self.matcher.match_header(header))
    }
}

/// Tries the primary strategy and unconditionally falls back to the
/// secondary on any failure signal. The primary's error is logged at debug
/// level and then discarded.
pub struct FallbackMapping<P, S> {
    primary: P,
    secondary: S,
}

impl<P, S> FallbackMapping<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P: MappingStrategy, S: MappingStrategy> MappingStrategy for FallbackMapping<P, S> {
    fn attempt_mapping(&self, header: &str) -> Result<MappingResult, MapStrategyError> {
        match self.primary.attempt_mapping(header) {
            Ok(result) => Ok(result),
            Err(error) => {
                tracing::debug!(header, %error, "primary mapping strategy failed; using fallback");
                self.secondary.attempt_mapping(header)
            }
        }
    }
}
