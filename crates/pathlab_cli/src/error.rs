//! Error types for the pathlab binary.

use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Process or correlation construction error
    #[error("Model error: {0}")]
    Model(#[from] pathlab_models::ModelError),

    /// Time grid construction error
    #[error("Time grid error: {0}")]
    Grid(#[from] pathlab_core::types::TimeGridError),

    /// Simulation settings error
    #[error("Simulation error: {0}")]
    Simulation(#[from] pathlab_paths::ConfigError),

    /// Export serialisation error
    #[error("Serialisation error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid command line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
