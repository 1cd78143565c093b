//! Item payload view - armor, shields and weapons.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::homebrew::HomebrewRecord;
use crate::common::{field, leading_i64, loose_string, loose_string_list};

/// Authored armor classes are clamped into this range.
pub const MAX_ARMOR_CLASS: i64 = 99;

/// Lenient view over an item record's `data`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemData {
    /// Free-form category (e.g., "Heavy Armor", "Shield", "Weapon")
    pub item_type: Option<String>,
    /// Explicit armor class granted when worn
    pub armor_class: Option<i64>,
    /// Damage expression (e.g., "1d8 slashing")
    pub damage: Option<String>,
    pub properties: Vec<String>,
}

impl ItemData {
    pub fn from_data(data: &Value) -> Self {
        Self {
            item_type: field(data, &["type", "itemType", "item_type", "category"])
                .and_then(loose_string),
            armor_class: field(data, &["ac", "armorClass", "armor_class", "AC"])
                .and_then(leading_i64)
                .map(|ac| ac.clamp(0, MAX_ARMOR_CLASS)),
            damage: field(data, &["damage", "dmg"]).and_then(loose_string),
            properties: field(data, &["properties", "props"])
                .map(loose_string_list)
                .unwrap_or_default(),
        }
    }

    /// Shield detection: item type or record name containing "shield".
    pub fn is_shield(&self, record_name: &str) -> bool {
        let mentions_shield = |s: &str| s.to_lowercase().contains("shield");
        self.item_type.as_deref().is_some_and(mentions_shield) || mentions_shield(record_name)
    }

    pub fn has_property(&self, property: &str) -> bool {
        self.properties
            .iter()
            .any(|p| p.to_lowercase().contains(property))
    }
}

impl From<&HomebrewRecord> for ItemData {
    fn from(record: &HomebrewRecord) -> Self {
        Self::from_data(&record.data)
    }
}
