//! # Phonebook HTTP Server Module
//!
//! Routing, request handling and error translation for the phonebook API.
//!
//! # Endpoints
//!
//! - `GET /api/persons` - List all people
//! - `POST /api/persons` - Add a person
//! - `GET|PUT|DELETE /api/persons/:id` - Read, replace or remove one person
//! - `GET /info` - Phonebook size and server time
//! - anything else - static bundle, or `404 {"error": "unknown endpoint"}`

pub mod access_log;
pub mod config;
pub mod errors;
pub mod info_routes;
pub mod person_routes;
pub mod server;

pub use config::{ConfigError, ServerConfig};
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use person_routes::PhonebookState;
pub use server::{PhonebookServer, ServerError};
