//! In-memory record stores for development and testing
//!
//! Nothing here persists. Records are cloned in and out of `DashMap`s so the
//! stores can be shared freely across tasks.

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use brewsheet_domain::{Character, CharacterId, HomebrewId, HomebrewRecord, UserId};

use super::ports::{AuthPort, CharacterRepo, HomebrewRepo, RepoError};

/// Character store keyed by id.
#[derive(Default)]
pub struct InMemoryCharacterRepo {
    characters: DashMap<CharacterId, Character>,
}

impl InMemoryCharacterRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a character.
    pub fn insert(&self, character: Character) {
        self.characters.insert(character.id, character);
    }
}

#[async_trait]
impl CharacterRepo for InMemoryCharacterRepo {
    async fn get(&self, id: CharacterId, owner: UserId) -> Result<Option<Character>, RepoError> {
        Ok(self
            .characters
            .get(&id)
            .filter(|entry| entry.owner_id == owner)
            .map(|entry| entry.value().clone()))
    }
}

/// Homebrew store keyed by id.
#[derive(Default)]
pub struct InMemoryHomebrewRepo {
    records: DashMap<HomebrewId, HomebrewRecord>,
}

impl InMemoryHomebrewRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a record.
    pub fn insert(&self, record: HomebrewRecord) {
        self.records.insert(record.id, record);
    }

    pub fn remove(&self, id: HomebrewId) -> Option<HomebrewRecord> {
        self.records.remove(&id).map(|(_, record)| record)
    }
}

#[async_trait]
impl HomebrewRepo for InMemoryHomebrewRepo {
    async fn get(&self, id: HomebrewId) -> Result<Option<HomebrewRecord>, RepoError> {
        Ok(self.records.get(&id).map(|entry| entry.value().clone()))
    }

    async fn get_batch(&self, ids: &[HomebrewId]) -> Result<Vec<HomebrewRecord>, RepoError> {
        Ok(ids
            .iter()
            .filter_map(|id| self.records.get(id).map(|entry| entry.value().clone()))
            .collect())
    }
}

/// Session flag flipped by whatever handles sign-in.
#[derive(Debug, Default)]
pub struct SessionAuth {
    signed_in: AtomicBool,
}

impl SessionAuth {
    pub fn signed_in() -> Self {
        Self {
            signed_in: AtomicBool::new(true),
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn set_signed_in(&self, signed_in: bool) {
        self.signed_in.store(signed_in, Ordering::SeqCst);
    }
}

#[async_trait]
impl AuthPort for SessionAuth {
    async fn ensure_authenticated(&self) -> bool {
        self.signed_in.load(Ordering::SeqCst)
    }
}
