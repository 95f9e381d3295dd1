//! CLI command implementation
//!
//! Boot order: `.env`, arguments, logging, runtime, store, server.

use crate::http_server::{PhonebookServer, ServerConfig};
use crate::observability::init_logger;
use crate::store;

use super::args::Cli;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the server until shutdown
pub fn run() -> CliResult<()> {
    load_env_file()?;

    let cli = Cli::parse_args();
    init_logger(cli.log_format)?;

    // One worker thread; requests interleave only at await points.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;

    runtime.block_on(serve(cli.server_config()))
}

fn load_env_file() -> CliResult<()> {
    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(err.into()),
    }
}

/// Open the configured store and serve on the configured address
pub async fn serve(config: ServerConfig) -> CliResult<()> {
    let store = store::open(&config.store).await?;
    tracing::info!(store = %config.store, "store opened");

    PhonebookServer::new(config, store).start().await?;
    Ok(())
}
