//! Observability for the phonebook server
//!
//! Logging goes through `tracing`. This module only installs the
//! subscriber; call sites use the `tracing` macros directly.
//!
//! # Log targets
//!
//! - `phonebook::access` - one line per HTTP request
//! - `phonebook::http_server::errors` - one line per rejected or failed request
//! - `tower_http::trace` - request spans (debug level)

mod logger;

pub use logger::{init_logger, LogFormat, DEFAULT_FILTER};
