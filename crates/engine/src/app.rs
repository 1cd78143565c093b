//! Application state and composition.

use std::sync::Arc;

use brewsheet_domain::{CalculationEngine, Dnd5eSystem};

use crate::infrastructure::{
    config::{EngineConfig, StateBackend},
    notifier::TracingNotifier,
    ports::{AuthPort, CharacterRepo, HomebrewRepo, KeyValueStore, NotificationPort},
    storage::{FileKeyValueStore, MemoryKeyValueStore},
};
use crate::use_cases;

/// Main application state.
///
/// Holds the injected ports and the use cases built on them.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
    pub notifier: Arc<dyn NotificationPort>,
    pub local_store: Arc<dyn KeyValueStore>,
}

/// Container for the record stores the engine reads from.
pub struct Repositories {
    pub character: Arc<dyn CharacterRepo>,
    pub homebrew: Arc<dyn HomebrewRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub character_sheet: use_cases::CharacterSheetUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        repositories: Repositories,
        auth: Arc<dyn AuthPort>,
        notifier: Arc<dyn NotificationPort>,
        local_store: Arc<dyn KeyValueStore>,
    ) -> Self {
        let calculations: Arc<dyn CalculationEngine> = Arc::new(Dnd5eSystem::new());

        let character_sheet = use_cases::CharacterSheetUseCases::new(
            repositories.character.clone(),
            repositories.homebrew.clone(),
            auth,
            notifier.clone(),
            local_store.clone(),
            calculations,
        );

        Self {
            repositories,
            use_cases: UseCases { character_sheet },
            notifier,
            local_store,
        }
    }

    /// Wire the app from configuration. Record stores and auth come from the
    /// host; local storage follows `config` and notifications go to the log.
    pub fn from_config(
        config: &EngineConfig,
        repositories: Repositories,
        auth: Arc<dyn AuthPort>,
    ) -> Self {
        let local_store: Arc<dyn KeyValueStore> = match config.state_backend {
            StateBackend::Memory => Arc::new(MemoryKeyValueStore::new()),
            StateBackend::File => Arc::new(FileKeyValueStore::open(&config.state_path)),
        };
        tracing::info!(
            backend = ?config.state_backend,
            path = ?config.state_path,
            "Local state storage ready"
        );

        Self::new(repositories, auth, Arc::new(TracingNotifier), local_store)
    }
}
