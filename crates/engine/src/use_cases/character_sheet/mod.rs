//! Character sheet use cases.
//!
//! Loads a character sheet: auth gate, reference resolution, derivation and
//! reconciliation with device-local state. The returned [`SheetSession`]
//! carries the user's HP, toggle and tab mutations.

mod error;
mod local_state;
mod resolver;
mod session;

pub use error::CharacterSheetError;
pub use local_state::{LocalState, LocalStateStore};
pub use resolver::ResolveReferences;
pub use session::{SheetSession, SheetView};

use std::sync::Arc;

use brewsheet_domain::{CalculationEngine, CharacterId, DerivedSheet, UserId};

use crate::infrastructure::ports::{
    AuthPort, CharacterRepo, HomebrewRepo, KeyValueStore, NotificationPort, Severity,
};

/// Container for character sheet use cases.
pub struct CharacterSheetUseCases {
    auth: Arc<dyn AuthPort>,
    notifier: Arc<dyn NotificationPort>,
    calculations: Arc<dyn CalculationEngine>,
    resolver: ResolveReferences,
    local_state: LocalStateStore,
}

impl CharacterSheetUseCases {
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        homebrew_repo: Arc<dyn HomebrewRepo>,
        auth: Arc<dyn AuthPort>,
        notifier: Arc<dyn NotificationPort>,
        store: Arc<dyn KeyValueStore>,
        calculations: Arc<dyn CalculationEngine>,
    ) -> Self {
        Self {
            auth,
            notifier,
            calculations,
            resolver: ResolveReferences::new(character_repo, homebrew_repo),
            local_state: LocalStateStore::new(store),
        }
    }

    /// Load a sheet for `user_id`.
    ///
    /// Not being signed in or asking for a character that is missing (or not
    /// yours) is reported to the user and returned as an error; nothing is
    /// rendered in that case.
    pub async fn load(
        &self,
        character_id: CharacterId,
        user_id: UserId,
    ) -> Result<SheetSession, CharacterSheetError> {
        let result = self.try_load(character_id, user_id).await;
        if let Err(e) = &result {
            match e.user_message() {
                Some(message) => self.notifier.notify(message, Severity::Error),
                None => tracing::error!(
                    character_id = %character_id,
                    error = %e,
                    "Failed to load character sheet"
                ),
            }
        }
        result
    }

    async fn try_load(
        &self,
        character_id: CharacterId,
        user_id: UserId,
    ) -> Result<SheetSession, CharacterSheetError> {
        if !self.auth.ensure_authenticated().await {
            return Err(CharacterSheetError::Unauthenticated);
        }

        let refs = self.resolver.execute(character_id, user_id).await?;
        let sheet = DerivedSheet::derive(self.calculations.as_ref(), &refs);

        tracing::info!(
            character_id = %character_id,
            level = sheet.level,
            max_hp = sheet.combat.max_hp,
            features = sheet.features.len(),
            "Character sheet loaded"
        );

        Ok(SheetSession::open(
            sheet,
            self.local_state.clone(),
            self.notifier.clone(),
        ))
    }
}
