//! Record store ports.

use async_trait::async_trait;
use brewsheet_domain::{Character, CharacterId, HomebrewId, HomebrewRecord, UserId};

use super::error::RepoError;

// =============================================================================
// Character Store
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    /// Fetch a character owned by `owner`. Someone else's character reads as
    /// `None`, same as a missing one.
    async fn get(&self, id: CharacterId, owner: UserId) -> Result<Option<Character>, RepoError>;
}

// =============================================================================
// Homebrew Store
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HomebrewRepo: Send + Sync {
    async fn get(&self, id: HomebrewId) -> Result<Option<HomebrewRecord>, RepoError>;

    /// Fetch many records at once. Ids with no record are left out.
    async fn get_batch(&self, ids: &[HomebrewId]) -> Result<Vec<HomebrewRecord>, RepoError>;
}
