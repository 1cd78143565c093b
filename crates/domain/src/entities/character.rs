//! Character entity - a user's assembled character
//!
//! Relations to race/class/background/faith are plain homebrew ids. Nothing
//! guarantees they still resolve; the sheet treats a dangling id as absent.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::value_objects::{AbilityScores, Level};
use crate::{CharacterId, HomebrewId, UserId};

/// A character record as stored by the character store.
///
/// # ADR-008 Tier 4: Simple Data Struct
///
/// All fields are public. `level` and `ability_scores` normalize themselves on
/// deserialization, so there is no invalid state to guard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub owner_id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: Level,
    #[serde(default, deserialize_with = "loose_id")]
    pub race_id: Option<HomebrewId>,
    #[serde(default, deserialize_with = "loose_id")]
    pub class_id: Option<HomebrewId>,
    #[serde(default, deserialize_with = "loose_id")]
    pub background_id: Option<HomebrewId>,
    #[serde(default, deserialize_with = "loose_id")]
    pub faith_id: Option<HomebrewId>,
    #[serde(default)]
    pub ability_scores: AbilityScores,
    #[serde(default)]
    pub inventory: Vec<InventoryEntry>,
    #[serde(default)]
    pub notes: String,
    /// Array or object depending on who wrote it
    #[serde(default)]
    pub spells: Value,
    #[serde(default)]
    pub pets: Value,
}

impl Character {
    pub fn new(owner_id: UserId, name: impl Into<String>) -> Self {
        Self {
            id: CharacterId::new(),
            owner_id,
            name: name.into(),
            level: Level::default(),
            race_id: None,
            class_id: None,
            background_id: None,
            faith_id: None,
            ability_scores: AbilityScores::new(),
            inventory: Vec::new(),
            notes: String::new(),
            spells: Value::Null,
            pets: Value::Null,
        }
    }

    pub fn with_level(mut self, level: i64) -> Self {
        self.level = Level::clamped(level);
        self
    }

    pub fn with_race(mut self, race_id: HomebrewId) -> Self {
        self.race_id = Some(race_id);
        self
    }

    pub fn with_class(mut self, class_id: HomebrewId) -> Self {
        self.class_id = Some(class_id);
        self
    }

    pub fn with_background(mut self, background_id: HomebrewId) -> Self {
        self.background_id = Some(background_id);
        self
    }

    pub fn with_faith(mut self, faith_id: HomebrewId) -> Self {
        self.faith_id = Some(faith_id);
        self
    }

    pub fn with_ability_scores(mut self, scores: AbilityScores) -> Self {
        self.ability_scores = scores;
        self
    }

    pub fn with_item(mut self, entry: InventoryEntry) -> Self {
        self.inventory.push(entry);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_spells(mut self, spells: Value) -> Self {
        self.spells = spells;
        self
    }

    pub fn with_pets(mut self, pets: Value) -> Self {
        self.pets = pets;
        self
    }

    /// Distinct item ids referenced by the inventory, in inventory order.
    pub fn item_ids(&self) -> Vec<HomebrewId> {
        let mut ids: Vec<HomebrewId> = Vec::new();
        for id in self.inventory.iter().filter_map(|e| e.item_id) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }
}

/// One inventory line: an item reference plus denormalized display data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryEntry {
    #[serde(default, deserialize_with = "loose_id")]
    pub item_id: Option<HomebrewId>,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "loose_weight")]
    pub weight: Option<f64>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// Reads a reference id, treating null, blanks and malformed ids as absent.
fn loose_id<'de, D>(deserializer: D) -> Result<Option<HomebrewId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(|s| s.parse::<HomebrewId>().ok()))
}

fn loose_weight<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

impl InventoryEntry {
    pub fn new(item_id: HomebrewId, name: impl Into<String>) -> Self {
        Self {
            item_id: Some(item_id),
            name: name.into(),
            weight: None,
            quantity: 1,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
}
