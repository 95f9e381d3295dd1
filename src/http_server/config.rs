//! HTTP Server Configuration
//!
//! Configuration for the phonebook server: bind address, static bundle
//! directory, store location and CORS settings.

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;
use tokio::net::lookup_host;

use crate::store::StoreLocation;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Host could not be resolved
    #[error("Cannot resolve listen address '{addr}': {source}")]
    Unresolvable {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// Host resolved to no addresses at all
    #[error("Listen address '{0}' resolved to nothing")]
    NoAddress(String),
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Directory holding the front-end bundle (default: "dist")
    pub static_dir: PathBuf,

    /// Where person documents live (default: memory)
    pub store: StoreLocation,

    /// CORS allowed origins; empty means any origin
    pub cors_origins: Vec<String>,
}

pub(crate) fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub(crate) fn default_static_dir() -> PathBuf {
    PathBuf::from("dist")
}

impl ServerConfig {
    /// Create a config for the given port with all other settings defaulted
    pub fn with_port(port: u16) -> Self {
        Self {
            host: default_host(),
            port,
            static_dir: default_static_dir(),
            store: StoreLocation::default(),
            cors_origins: Vec::new(),
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Resolve the addresses to bind
    ///
    /// The host may be an IPv4 or IPv6 literal or a name such as
    /// `localhost`.
    pub async fn listen_addrs(&self) -> Result<Vec<SocketAddr>, ConfigError> {
        let addrs: Vec<SocketAddr> = lookup_host((self.host.as_str(), self.port))
            .await
            .map_err(|source| ConfigError::Unresolvable {
                addr: self.socket_addr(),
                source,
            })?
            .collect();

        if addrs.is_empty() {
            return Err(ConfigError::NoAddress(self.socket_addr()));
        }
        Ok(addrs)
    }
}
