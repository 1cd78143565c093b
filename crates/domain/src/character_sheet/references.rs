//! The character plus every homebrew record it points at.

use std::collections::HashMap;

use crate::entities::{
    BackgroundData, Character, ClassData, HomebrewRecord, HomebrewType, InventoryEntry, ItemData,
    RaceData,
};
use crate::HomebrewId;

/// Output of reference resolution: each relation mapped to its record or
/// `None`. A `None` means "absent" whatever the cause (no id, dangling id,
/// lookup failure, wrong record type).
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedReferences {
    pub character: Character,
    pub race: Option<HomebrewRecord>,
    pub class: Option<HomebrewRecord>,
    pub background: Option<HomebrewRecord>,
    pub faith: Option<HomebrewRecord>,
    pub items: HashMap<HomebrewId, HomebrewRecord>,
}

impl ResolvedReferences {
    /// A character with nothing resolved.
    pub fn bare(character: Character) -> Self {
        Self {
            character,
            race: None,
            class: None,
            background: None,
            faith: None,
            items: HashMap::new(),
        }
    }

    pub fn class_data(&self) -> ClassData {
        self.class
            .as_ref()
            .map(|r| ClassData::from_data(&r.data))
            .unwrap_or_default()
    }

    pub fn race_data(&self) -> RaceData {
        self.race
            .as_ref()
            .map(|r| RaceData::from_data(&r.data))
            .unwrap_or_default()
    }

    pub fn background_data(&self) -> BackgroundData {
        self.background
            .as_ref()
            .map(|r| BackgroundData::from_data(&r.data))
            .unwrap_or_default()
    }

    /// Inventory lines paired with their resolved record, if any.
    pub fn inventory(&self) -> impl Iterator<Item = (&InventoryEntry, Option<&HomebrewRecord>)> {
        self.character
            .inventory
            .iter()
            .map(|entry| (entry, entry.item_id.and_then(|id| self.items.get(&id))))
    }

    /// Resolved item records of type `item`, once each, in inventory order.
    pub fn item_records(&self) -> Vec<(&HomebrewRecord, ItemData)> {
        self.character
            .item_ids()
            .into_iter()
            .filter_map(|id| self.items.get(&id))
            .filter(|record| record.is(HomebrewType::Item))
            .map(|record| (record, ItemData::from(record)))
            .collect()
    }
}
