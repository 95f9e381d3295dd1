//! In-memory person collection
//!
//! Shared by every store implementation. Callers hold the store lock for
//! the whole of each method call, so the name check and the write are one
//! atomic step.

use super::errors::{StoreError, StoreResult};
use super::id::PersonId;
use super::model::{Person, PersonDraft};
use super::validation::validate;

/// People in insertion order
#[derive(Debug, Clone, Default)]
pub struct Collection {
    people: Vec<Person>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a collection from previously stored people
    pub fn from_people(people: Vec<Person>) -> Self {
        Self { people }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn get(&self, id: &PersonId) -> Option<&Person> {
        self.people.iter().find(|p| &p.id == id)
    }

    /// Validate and append a new person
    pub fn insert(&mut self, draft: PersonDraft) -> StoreResult<Person> {
        let valid = validate(draft)?;
        self.ensure_name_free(&valid.name, None)?;

        let mut id = PersonId::generate();
        while self.get(&id).is_some() {
            id = PersonId::generate();
        }

        let person = Person {
            id,
            name: valid.name,
            number: valid.number,
        };
        self.people.push(person.clone());
        Ok(person)
    }

    /// Replace both fields of an existing person
    ///
    /// Validation runs before the lookup, so an invalid draft is rejected
    /// even when the id is unknown.
    pub fn replace(&mut self, id: &PersonId, draft: PersonDraft) -> StoreResult<Option<Person>> {
        let valid = validate(draft)?;
        self.ensure_name_free(&valid.name, Some(id))?;

        let Some(person) = self.people.iter_mut().find(|p| &p.id == id) else {
            return Ok(None);
        };
        person.name = valid.name;
        person.number = valid.number;
        Ok(Some(person.clone()))
    }

    /// Remove a person, returning it if it existed
    pub fn remove(&mut self, id: &PersonId) -> Option<Person> {
        let index = self.people.iter().position(|p| &p.id == id)?;
        Some(self.people.remove(index))
    }

    fn ensure_name_free(&self, name: &str, except: Option<&PersonId>) -> StoreResult<()> {
        let taken = self
            .people
            .iter()
            .any(|p| p.name == name && Some(&p.id) != except);

        if taken {
            Err(StoreError::DuplicateName(name.to_string()))
        } else {
            Ok(())
        }
    }
}
