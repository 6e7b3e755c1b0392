//! CLI error types.

use thiserror::Error;

/// Convenience result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// A referenced file or directory does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// An argument value is not usable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Dataset loading failed.
    #[error(transparent)]
    Loader(#[from] adapter_loader::LoaderError),

    /// The pipeline aborted.
    #[error(transparent)]
    Model(#[from] mrio_model::ModelError),

    /// Region partition construction failed.
    #[error(transparent)]
    Partition(#[from] mrio_core::types::PartitionError),

    /// Result serialisation failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
