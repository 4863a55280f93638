//! Contract for the optional external mapping oracle.
//!
//! The oracle is the only pipeline component permitted to block on external
//! I/O. Implementations own their timeout; every failure mode is expressed
//! as an [`OracleError`] so the calling strategy can deliberately discard it
//! and substitute the deterministic fallback.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use plantlog_registry::Registry;

/// Registry catalogs serialized for the oracle.
#[derive(Debug, Clone, Serialize)]
pub struct OracleContext {
    pub registries: serde_json::Value,
}

impl OracleContext {
    pub fn from_registry(registry: &Registry) -> Self {
        Self {
            registries: registry.context_json(),
        }
    }
}

/// A well-formed reply from the oracle.
///
/// `param_name` and `asset_name` must reference registry ids; the calling
/// strategy rejects replies that do not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleReply {
    pub param_name: Option<String>,
    pub asset_name: Option<String>,
    pub confidence: String,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Failure modes of an oracle call.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("oracle is not available")]
    Unavailable,
    #[error("oracle call timed out")]
    Timeout,
    #[error("oracle transport error: {0}")]
    Transport(String),
    #[error("malformed oracle reply: {0}")]
    Malformed(String),
}

/// An external classifier consulted before the deterministic fallback.
///
/// Implementations must bound the call with a timeout and map every
/// failure (transport, timeout, unparseable output) to an [`OracleError`];
/// the error never propagates past the mapping strategy boundary.
pub trait MappingOracle: Send + Sync {
    fn map_header(&self, header: &str, context: &OracleContext) -> Result<OracleReply, OracleError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_deserializes_with_missing_reason() {
        let reply: OracleReply = serde_json::from_str(
            r#"{"param_name": "coal_consumption", "asset_name": null, "confidence": "high"}"#,
        )
        .unwrap();
        assert_eq!(reply.param_name.as_deref(), Some("coal_consumption"));
        assert!(reply.reason.is_none());
    }

    #[test]
    fn context_embeds_catalogs() {
        let registry = Registry::builtin();
        let context = OracleContext::from_registry(&registry);
        assert!(context.registries["parameters"].is_array());
        assert!(context.registries["assets"].is_array());
    }
}
