//! Per-column header mapping orchestration.

use std::collections::BTreeMap;

use plantlog_model::MappingResult;
use plantlog_registry::Registry;

use crate::classify::non_parameter_reason;
use crate::oracle::{MappingOracle, OracleContext};
use crate::strategy::{FallbackMapping, FuzzyStrategy, MappingStrategy, OracleStrategy};

/// Orchestrates, per column: non-parameter classification, then the oracle
/// (when configured), then the deterministic fuzzy fallback.
///
/// Oracle failures are absorbed here; callers always receive one
/// [`MappingResult`] per column.
pub struct HeaderMapper<'a> {
    registry: &'a Registry,
    oracle: Option<&'a dyn MappingOracle>,
    context: OracleContext,
}

impl<'a> HeaderMapper<'a> {
    /// Mapper using only the deterministic fallback.
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            oracle: None,
            context: OracleContext::from_registry(registry),
        }
    }

    /// Mapper that consults the oracle first.
    pub fn with_oracle(registry: &'a Registry, oracle: &'a dyn MappingOracle) -> Self {
        Self {
            registry,
            oracle: Some(oracle),
            context: OracleContext::from_registry(registry),
        }
    }

    /// Map every header, keyed by column index.
    pub fn map_headers(&self, headers: &[String]) -> BTreeMap<usize, MappingResult> {
        headers
            .iter()
            .enumerate()
            .map(|(col, header)| (col, self.map_one(header)))
            .collect()
    }

    fn map_one(&self, header: &str) -> MappingResult {
        if let Some(reason) = non_parameter_reason(header) {
            return MappingResult::unmapped(header, reason);
        }

        let fuzzy = FuzzyStrategy::new(self.registry);
        let outcome = match self.oracle {
            Some(oracle) => FallbackMapping::new(
                OracleStrategy::new(oracle, self.registry, &self.context),
                fuzzy,
            )
            .attempt_mapping(header),
            None => fuzzy.attempt_mapping(header),
        };

        match outcome {
            Ok(result) => result,
            // The fuzzy fallback is infallible, so this arm only fires if a
            // future strategy composition forgets a terminal fallback.
            Err(error) => MappingResult::unmapped(header, format!("mapping failed: {error}")),
        }
    }
}
