use thiserror::Error;

/// Top-level error type for flexion-core.
#[derive(Debug, Error)]
pub enum FlexionError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration errors.
///
/// Only loading and validating a configuration can fail. Runtime setters
/// clamp out-of-range input instead of rejecting it.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid bending_angle: {0} (must be within [0, 180])")]
    InvalidBendingAngle(f32),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}
