use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("duplicate parameter name: {0}")]
    DuplicateParameter(String),
    #[error("duplicate asset name: {0}")]
    DuplicateAsset(String),
    #[error("parameter {param} lists unknown asset: {asset}")]
    UnknownApplicableAsset { param: String, asset: String },
}
