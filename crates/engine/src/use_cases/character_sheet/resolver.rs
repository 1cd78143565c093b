//! Resolve references use case - loads a character and every homebrew record
//! it points at.

use std::collections::HashMap;
use std::sync::Arc;

use brewsheet_domain::{
    CharacterId, HomebrewId, HomebrewRecord, HomebrewType, ResolvedReferences, UserId,
};

use super::error::CharacterSheetError;
use crate::infrastructure::ports::{CharacterRepo, HomebrewRepo};

/// Fetches a character, then its race/class/background/faith concurrently,
/// then its inventory items in one batch.
///
/// Only the character fetch can fail. Every other lookup degrades to "absent"
/// with a warning, whether the id dangles, the record has the wrong type or
/// the store errors.
pub struct ResolveReferences {
    character_repo: Arc<dyn CharacterRepo>,
    homebrew_repo: Arc<dyn HomebrewRepo>,
}

impl ResolveReferences {
    pub fn new(character_repo: Arc<dyn CharacterRepo>, homebrew_repo: Arc<dyn HomebrewRepo>) -> Self {
        Self {
            character_repo,
            homebrew_repo,
        }
    }

    pub async fn execute(
        &self,
        character_id: CharacterId,
        user_id: UserId,
    ) -> Result<ResolvedReferences, CharacterSheetError> {
        let character = self
            .character_repo
            .get(character_id, user_id)
            .await?
            .ok_or(CharacterSheetError::NotFound(character_id))?;

        let (race, class, background, faith) = tokio::join!(
            self.lookup(character_id, character.race_id, HomebrewType::Race),
            self.lookup(character_id, character.class_id, HomebrewType::Class),
            self.lookup(character_id, character.background_id, HomebrewType::Background),
            self.lookup(character_id, character.faith_id, HomebrewType::Faith),
        );

        let items = self.lookup_items(character_id, &character.item_ids()).await;

        Ok(ResolvedReferences {
            character,
            race,
            class,
            background,
            faith,
            items,
        })
    }

    async fn lookup(
        &self,
        character_id: CharacterId,
        id: Option<HomebrewId>,
        expected: HomebrewType,
    ) -> Option<HomebrewRecord> {
        let id = id?;
        match self.homebrew_repo.get(id).await {
            Ok(Some(record)) if record.is(expected) => Some(record),
            Ok(Some(record)) => {
                tracing::warn!(
                    character_id = %character_id,
                    homebrew_id = %id,
                    expected = %expected,
                    found = %record.kind,
                    "Reference points at a record of the wrong type"
                );
                None
            }
            Ok(None) => {
                tracing::warn!(
                    character_id = %character_id,
                    homebrew_id = %id,
                    relation = %expected,
                    "Missing reference"
                );
                None
            }
            Err(e) => {
                tracing::warn!(
                    character_id = %character_id,
                    homebrew_id = %id,
                    relation = %expected,
                    error = %e,
                    "Reference lookup failed"
                );
                None
            }
        }
    }

    async fn lookup_items(
        &self,
        character_id: CharacterId,
        ids: &[HomebrewId],
    ) -> HashMap<HomebrewId, HomebrewRecord> {
        if ids.is_empty() {
            return HashMap::new();
        }
        let records = match self.homebrew_repo.get_batch(ids).await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    character_id = %character_id,
                    requested = ids.len(),
                    error = %e,
                    "Inventory lookup failed"
                );
                return HashMap::new();
            }
        };

        let items: HashMap<HomebrewId, HomebrewRecord> =
            records.into_iter().map(|record| (record.id, record)).collect();
        if items.len() < ids.len() {
            tracing::warn!(
                character_id = %character_id,
                requested = ids.len(),
                found = items.len(),
                "Missing inventory references"
            );
        }
        items
    }
}
