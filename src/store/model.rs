//! Person documents

use serde::{Deserialize, Serialize};

use super::id::PersonId;

/// A stored phonebook entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub number: String,
}

/// Unvalidated person fields as received from a client
///
/// Absent and `null` fields both deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
}

impl PersonDraft {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            number: Some(number.into()),
        }
    }

    /// Both fields were supplied
    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.number.is_some()
    }
}
