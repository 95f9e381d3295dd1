//! phonebook - a small phonebook REST service backed by a document store
//!
//! - [`store`]: the document store boundary and its implementations
//! - [`http_server`]: routes, handlers and error translation
//! - [`observability`]: logging setup
//! - [`cli`]: process start-up

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
