//! JSON file backed store
//!
//! The whole collection is rewritten after every mutation. Writes go to a
//! sibling temp file first and are renamed into place.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use super::collection::Collection;
use super::errors::StoreResult;
use super::id::PersonId;
use super::model::{Person, PersonDraft};
use super::PersonStore;

/// Store persisted to a single JSON document file
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    collection: Mutex<Collection>,
}

impl FileStore {
    /// Open the store, loading existing people if the file exists
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        let collection = match fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Collection::new(),
            Ok(bytes) => Collection::from_people(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Collection::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(
            path = %path.display(),
            people = collection.len(),
            "opened file store"
        );

        Ok(Self {
            path,
            collection: Mutex::new(collection),
        })
    }

    /// Apply a mutation to a copy, persist it, then swap it in
    ///
    /// A failed write leaves the in-memory state untouched.
    async fn mutate<T>(
        &self,
        apply: impl FnOnce(&mut Collection) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let mut guard = self.collection.lock().await;
        let mut next = guard.clone();
        let result = apply(&mut next)?;

        self.persist(&next).await?;
        *guard = next;
        Ok(result)
    }

    async fn persist(&self, collection: &Collection) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let bytes = serde_json::to_vec_pretty(collection.people())?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, bytes).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl PersonStore for FileStore {
    async fn find_all(&self) -> StoreResult<Vec<Person>> {
        Ok(self.collection.lock().await.people().to_vec())
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.collection.lock().await.len())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Person>> {
        let id = PersonId::parse(id)?;
        Ok(self.collection.lock().await.get(&id).cloned())
    }

    async fn insert(&self, draft: PersonDraft) -> StoreResult<Person> {
        self.mutate(|collection| collection.insert(draft)).await
    }

    async fn replace(&self, id: &str, draft: PersonDraft) -> StoreResult<Option<Person>> {
        let id = PersonId::parse(id)?;
        self.mutate(|collection| collection.replace(&id, draft)).await
    }

    async fn delete(&self, id: &str) -> StoreResult<Option<Person>> {
        let id = PersonId::parse(id)?;
        self.mutate(|collection| Ok(collection.remove(&id))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_opens_empty() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::open(tmp.path().join("people.json")).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_people_survive_reopen() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("people.json");

        let store = FileStore::open(&path).await.unwrap();
        let arto = store
            .insert(PersonDraft::new("Arto Hellas", "040-123456"))
            .await
            .unwrap();
        let dan = store
            .insert(PersonDraft::new("Dan Abramov", "12-43-234345"))
            .await
            .unwrap();
        store.delete(dan.id.as_str()).await.unwrap();
        drop(store);

        let reopened = FileStore::open(&path).await.unwrap();
        assert_eq!(reopened.find_all().await.unwrap(), vec![arto]);
    }

    #[tokio::test]
    async fn test_rejected_write_is_not_persisted() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("people.json");

        let store = FileStore::open(&path).await.unwrap();
        let err = store
            .insert(PersonDraft::new("Ada", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_corrupted_file_is_reported() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("people.json");
        std::fs::write(&path, b"{not json").unwrap();

        let err = FileStore::open(&path).await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupted(_)));
    }
}
