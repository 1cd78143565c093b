//! Domain entities
//!
//! `Character` and `HomebrewRecord` are the stored records; `ClassData`,
//! `RaceData`, `BackgroundData` and `ItemData` are lenient views over a
//! homebrew record's payload.

mod background;
mod character;
mod class;
mod homebrew;
mod item;
mod race;

pub use background::BackgroundData;
pub use character::{Character, InventoryEntry};
pub use class::{ClassData, CustomFeature, LevelEntry};
pub use homebrew::{HomebrewRecord, HomebrewStatus, HomebrewType};
pub use item::ItemData;
pub use race::RaceData;
