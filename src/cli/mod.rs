//! CLI module for the phonebook server
//!
//! Parses flags and environment, sets up logging and the runtime, then
//! hands over to [`crate::http_server::PhonebookServer`].

mod args;
mod commands;
mod errors;

pub use args::Cli;
pub use commands::{run, serve};
pub use errors::{CliError, CliResult};
