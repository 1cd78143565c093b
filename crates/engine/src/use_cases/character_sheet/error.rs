//! Character sheet operation errors.

use crate::infrastructure::ports::RepoError;
use brewsheet_domain::CharacterId;

/// Errors that can occur while loading a character sheet.
///
/// Missing homebrew references, malformed local state and bad HP input are
/// recovered where they happen and never show up here.
#[derive(Debug, thiserror::Error)]
pub enum CharacterSheetError {
    #[error("Character not found: {0}")]
    NotFound(CharacterId),

    #[error("Not signed in")]
    Unauthenticated,

    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl CharacterSheetError {
    /// Text for the notification shown to the user, if this error gets one.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::NotFound(_) => Some("Character not found."),
            Self::Unauthenticated => Some("Please sign in to view this character."),
            Self::Repo(_) => None,
        }
    }
}
