//! Character sheet derivation.
//!
//! Turns a character plus its resolved homebrew records into the numbers and
//! sections a sheet shows. Everything here is pure: the engine crate does the
//! fetching and persistence, then hands a [`ResolvedReferences`] in.
//!
//! - [`DerivedSheet`] assembles abilities, skills, combat stats, actions,
//!   features and inventory.
//! - [`HitPoints`] reconciles stored HP with the computed maximum and applies
//!   damage/heal/temp edits.
//! - [`TabGate`] decides which sections get a tab and which one is active.

mod actions;
mod combat;
mod features;
mod hit_points;
mod references;
mod sheet;
mod tabs;

pub use actions::{derive_actions, SheetAction, UNARMED_STRIKE};
pub use combat::CombatStats;
pub use features::{accumulate_features, AccumulatedFeature, NO_DESCRIPTION};
pub use hit_points::{parse_amount, HitPoints, HpEditorState};
pub use references::ResolvedReferences;
pub use sheet::{AbilityLine, CheckLine, DerivedSheet, InventoryLine, Lineage};
pub use tabs::{SectionPresence, SheetSection, Tab, TabGate};
