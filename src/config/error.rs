use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
