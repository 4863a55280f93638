use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown confidence level: {0}")]
    InvalidConfidence(String),
    #[error("unknown parameter category: {0}")]
    InvalidCategory(String),
    #[error("unknown asset type: {0}")]
    InvalidAssetType(String),
}
