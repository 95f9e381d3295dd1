//! Document identifiers
//!
//! Ids are 24 lowercase hex characters: 4 bytes of creation time in
//! seconds followed by 8 random bytes.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::StoreError;

/// Length of an encoded id
pub const ID_LEN: usize = 24;

/// Identifier assigned to a person by the store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonId(String);

impl PersonId {
    /// Generate a fresh id
    pub fn generate() -> Self {
        // Wraps in 2106, same as other 32-bit document timestamps.
        let seconds = Utc::now().timestamp() as u32;
        let random = Uuid::new_v4();

        let mut encoded = String::with_capacity(ID_LEN);
        for byte in seconds
            .to_be_bytes()
            .iter()
            .chain(random.as_bytes().iter().take(8))
        {
            encoded.push_str(&format!("{:02x}", byte));
        }
        Self(encoded)
    }

    /// Parse an id supplied by a client
    ///
    /// Uppercase hex is accepted and normalized.
    pub fn parse(value: &str) -> Result<Self, StoreError> {
        if value.len() == ID_LEN && value.bytes().all(|b| b.is_ascii_hexdigit()) {
            Ok(Self(value.to_ascii_lowercase()))
        } else {
            Err(StoreError::MalformedId(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PersonId {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PersonId> for String {
    fn from(id: PersonId) -> Self {
        id.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_well_formed() {
        let id = PersonId::generate();
        assert_eq!(id.as_str().len(), ID_LEN);
        assert!(PersonId::parse(id.as_str()).is_ok());
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(PersonId::generate(), PersonId::generate());
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        for bad in ["", "1", "5f1d7a2b9c8e4d3f2a1b0c9", "zz1d7a2b9c8e4d3f2a1b0c9d", "5f1d7a2b9c8e4d3f2a1b0c9d0"] {
            assert!(matches!(
                PersonId::parse(bad),
                Err(StoreError::MalformedId(_))
            ));
        }
    }

    #[test]
    fn test_parse_normalizes_case() {
        let id = PersonId::parse("5F1D7A2B9C8E4D3F2A1B0C9D").unwrap();
        assert_eq!(id.as_str(), "5f1d7a2b9c8e4d3f2a1b0c9d");
    }

    #[test]
    fn test_serde_uses_plain_string() {
        let id = PersonId::parse("5f1d7a2b9c8e4d3f2a1b0c9d").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"5f1d7a2b9c8e4d3f2a1b0c9d\"");

        let bad: Result<PersonId, _> = serde_json::from_str("\"nope\"");
        assert!(bad.is_err());
    }
}
