//! Store location parsing
//!
//! Accepted forms:
//! - `memory`
//! - `file:<path>`

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Where person documents are kept
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StoreLocation {
    /// Volatile, lost on exit
    #[default]
    Memory,
    /// JSON document file
    File(PathBuf),
}

/// Unrecognized store location string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported store location '{0}' (expected 'memory' or 'file:<path>')")]
pub struct InvalidStoreLocation(pub String);

impl FromStr for StoreLocation {
    type Err = InvalidStoreLocation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("memory") {
            return Ok(Self::Memory);
        }
        match trimmed.strip_prefix("file:") {
            Some(path) if !path.is_empty() => Ok(Self::File(PathBuf::from(path))),
            _ => Err(InvalidStoreLocation(s.to_string())),
        }
    }
}

impl fmt::Display for StoreLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::File(path) => write!(f, "file:{}", path.display()),
        }
    }
}
