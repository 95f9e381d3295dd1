//! CLI argument definitions using clap
//!
//! Every flag falls back to an environment variable, so the server can be
//! configured entirely through the environment (or a `.env` file):
//!
//! ```text
//! PORT=3001 phonebook
//! phonebook --port 3001 --store file:./people.json --static-dir ./dist
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::http_server::ServerConfig;
use crate::observability::LogFormat;
use crate::store::StoreLocation;

/// Phonebook - a small phonebook REST service
#[derive(Parser, Debug)]
#[command(name = "phonebook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Directory holding the front-end bundle
    #[arg(long, env = "STATIC_DIR", default_value = "dist")]
    pub static_dir: PathBuf,

    /// Store location: `memory` or `file:<path>`
    #[arg(long, env = "PHONEBOOK_STORE", default_value = "memory")]
    pub store: StoreLocation,

    /// Allowed CORS origin (repeatable, or comma separated); any origin if unset
    #[arg(long = "cors-origin", env = "CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    /// Log line format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Server settings from the parsed arguments
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            static_dir: self.static_dir.clone(),
            store: self.store.clone(),
            cors_origins: self.cors_origins.clone(),
        }
    }
}
