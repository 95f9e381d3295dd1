//! # Person Store
//!
//! The persistence boundary for phonebook entries.
//!
//! Handlers only see the [`PersonStore`] trait. Ids arrive as raw strings
//! and are parsed here, so a malformed id surfaces as
//! [`StoreError::MalformedId`] from the store itself.
//!
//! # Implementations
//!
//! - [`MemoryStore`] - volatile, in-process
//! - [`FileStore`] - JSON document file, rewritten on each mutation

mod collection;
mod errors;
mod file;
mod id;
mod location;
mod memory;
mod model;
mod validation;

use std::sync::Arc;

use async_trait::async_trait;

pub use errors::{StoreError, StoreResult};
pub use file::FileStore;
pub use id::{PersonId, ID_LEN};
pub use location::{InvalidStoreLocation, StoreLocation};
pub use memory::MemoryStore;
pub use model::{Person, PersonDraft};
pub use validation::{FieldError, ValidationError};

/// Document store holding phonebook entries
///
/// Every method is one round trip to the store. Implementations own their
/// concurrency control; mutations must be atomic with respect to each
/// other, including the name uniqueness check.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// All people in the store's natural order
    async fn find_all(&self) -> StoreResult<Vec<Person>>;

    /// Number of stored people
    async fn count(&self) -> StoreResult<usize>;

    /// Look up one person; `Ok(None)` when the id is well-formed but unknown
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Person>>;

    /// Validate and store a new person, assigning its id
    async fn insert(&self, draft: PersonDraft) -> StoreResult<Person>;

    /// Replace name and number of an existing person
    async fn replace(&self, id: &str, draft: PersonDraft) -> StoreResult<Option<Person>>;

    /// Remove a person, returning it if it existed
    async fn delete(&self, id: &str) -> StoreResult<Option<Person>>;
}

/// Open the store described by `location`
pub async fn open(location: &StoreLocation) -> StoreResult<Arc<dyn PersonStore>> {
    let store: Arc<dyn PersonStore> = match location {
        StoreLocation::Memory => Arc::new(MemoryStore::new()),
        StoreLocation::File(path) => Arc::new(FileStore::open(path).await?),
    };
    Ok(store)
}
