pub mod character_sheet;
pub mod common;
pub mod entities;
pub mod error;
pub mod game_systems;
pub mod ids;
pub mod value_objects;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    BackgroundData, Character, ClassData, CustomFeature, HomebrewRecord, HomebrewStatus,
    HomebrewType, InventoryEntry, ItemData, LevelEntry, RaceData,
};

pub use error::DomainError;

// Re-export game system traits and types
pub use game_systems::{CalculationEngine, Dnd5eSystem};

// Re-export character sheet types
pub use character_sheet::{
    accumulate_features, derive_actions, parse_amount, AbilityLine, AccumulatedFeature,
    CheckLine, CombatStats, DerivedSheet, HitPoints, HpEditorState, InventoryLine, Lineage,
    ResolvedReferences, SectionPresence, SheetAction, SheetSection, Tab, TabGate,
};

// Re-export ID types
pub use ids::{CharacterId, HomebrewId, UserId};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{Ability, AbilityScores, HitDie, Level};
