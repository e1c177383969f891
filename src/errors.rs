use pace_config::ConfigError;
use pace_domain::DomainError;
use thiserror::Error;

/// Failures surfaced at the edges of the engine: configuration, calendar
/// windows, strict validation, and decoding foreign input.
#[derive(Debug, Error)]
pub enum PaceError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
