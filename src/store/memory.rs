//! Volatile in-process store

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::collection::Collection;
use super::errors::StoreResult;
use super::id::PersonId;
use super::model::{Person, PersonDraft};
use super::PersonStore;

/// Store that keeps people in memory for the life of the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    collection: RwLock<Collection>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersonStore for MemoryStore {
    async fn find_all(&self) -> StoreResult<Vec<Person>> {
        Ok(self.collection.read().await.people().to_vec())
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.collection.read().await.len())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Person>> {
        let id = PersonId::parse(id)?;
        Ok(self.collection.read().await.get(&id).cloned())
    }

    async fn insert(&self, draft: PersonDraft) -> StoreResult<Person> {
        self.collection.write().await.insert(draft)
    }

    async fn replace(&self, id: &str, draft: PersonDraft) -> StoreResult<Option<Person>> {
        let id = PersonId::parse(id)?;
        self.collection.write().await.replace(&id, draft)
    }

    async fn delete(&self, id: &str) -> StoreResult<Option<Person>> {
        let id = PersonId::parse(id)?;
        Ok(self.collection.write().await.remove(&id))
    }
}
