//! Person repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide list/get/save/exists/delete/seed over person records.
//! - Generate strictly increasing ids, never reused after deletion.
//!
//! # Invariants
//! - Id generation and insertion happen under one write lock, so concurrent
//!   saves never share an id.
//! - Saving a record with an explicit id moves the sequence past that id.
//! - `delete` is idempotent; surfacing not-found is the service's job.
//! - `update` never resurrects a deleted record: the existence check and
//!   the write share one lock.

use crate::model::person::{Person, PersonId};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for person storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// A writer panicked while holding the store lock.
    LockPoisoned,
    /// No further ids can be generated.
    IdSpaceExhausted,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LockPoisoned => write!(f, "person store lock is poisoned"),
            Self::IdSpaceExhausted => write!(f, "person id sequence is exhausted"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for person storage.
pub trait PersonRepository {
    /// Returns every stored record; callers must not rely on the order.
    fn list(&self) -> RepoResult<Vec<Person>>;
    fn get(&self, id: PersonId) -> RepoResult<Option<Person>>;
    /// Inserts with a generated id when `person.id` is `None`, otherwise
    /// upserts at the given id. Returns the stored record.
    fn save(&self, person: Person) -> RepoResult<Person>;
    /// Applies `apply` to the stored record in place, read and write under
    /// one lock. Returns `None` without calling `apply` when `id` is absent.
    fn update<F>(&self, id: PersonId, apply: F) -> RepoResult<Option<Person>>
    where
        F: FnOnce(&mut Person);
    fn exists(&self, id: PersonId) -> RepoResult<bool>;
    fn delete(&self, id: PersonId) -> RepoResult<()>;
    /// Bulk insert; ids are assigned in encounter order.
    fn seed(&self, people: Vec<Person>) -> RepoResult<Vec<Person>>;
}

#[derive(Debug, Default)]
struct StoreState {
    last_id: PersonId,
    records: BTreeMap<PersonId, Person>,
}

impl StoreState {
    fn store(&mut self, mut person: Person) -> RepoResult<Person> {
        let id = match person.id {
            Some(id) => id,
            None => self
                .last_id
                .checked_add(1)
                .ok_or(RepoError::IdSpaceExhausted)?,
        };
        self.last_id = self.last_id.max(id);
        person.id = Some(id);
        self.records.insert(id, person.clone());
        Ok(person)
    }
}

/// Process-local person store.
#[derive(Debug, Default)]
pub struct InMemoryPersonRepository {
    state: RwLock<StoreState>,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> RepoResult<usize> {
        Ok(self.read()?.records.len())
    }

    pub fn is_empty(&self) -> RepoResult<bool> {
        Ok(self.read()?.records.is_empty())
    }

    fn read(&self) -> RepoResult<RwLockReadGuard<'_, StoreState>> {
        self.state.read().map_err(|_| RepoError::LockPoisoned)
    }

    fn write(&self) -> RepoResult<RwLockWriteGuard<'_, StoreState>> {
        self.state.write().map_err(|_| RepoError::LockPoisoned)
    }
}

impl PersonRepository for InMemoryPersonRepository {
    fn list(&self) -> RepoResult<Vec<Person>> {
        Ok(self.read()?.records.values().cloned().collect())
    }

    fn get(&self, id: PersonId) -> RepoResult<Option<Person>> {
        Ok(self.read()?.records.get(&id).cloned())
    }

    fn save(&self, person: Person) -> RepoResult<Person> {
        self.write()?.store(person)
    }

    fn update<F>(&self, id: PersonId, apply: F) -> RepoResult<Option<Person>>
    where
        F: FnOnce(&mut Person),
    {
        let mut state = self.write()?;
        let Some(person) = state.records.get_mut(&id) else {
            return Ok(None);
        };
        apply(person);
        // id is immutable once assigned
        person.id = Some(id);
        Ok(Some(person.clone()))
    }

    fn exists(&self, id: PersonId) -> RepoResult<bool> {
        Ok(self.read()?.records.contains_key(&id))
    }

    fn delete(&self, id: PersonId) -> RepoResult<()> {
        self.write()?.records.remove(&id);
        Ok(())
    }

    fn seed(&self, people: Vec<Person>) -> RepoResult<Vec<Person>> {
        let mut state = self.write()?;
        people
            .into_iter()
            .map(|person| state.store(person))
            .collect()
    }
}
