//! CLI-specific error types
//!
//! Any of these stops start-up; `main` prints it and exits non-zero.

use thiserror::Error;
use tracing_subscriber::util::TryInitError;

use crate::http_server::ServerError;
use crate::store::StoreError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// `.env` exists but could not be read
    #[error("Cannot load .env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    /// Logger could not be installed
    #[error("Cannot initialize logging: {0}")]
    Logging(#[from] TryInitError),

    /// Async runtime could not be built
    #[error("Cannot start runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// Store could not be opened
    #[error("Cannot open store: {0}")]
    Store(#[from] StoreError),

    /// Server failed to bind or serve
    #[error(transparent)]
    Server(#[from] ServerError),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
