//! Class payload view - hit die, progression table and custom features.
//!
//! Class authors have used several field names over time; every reader here
//! accepts all of them and defaults whatever is missing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::{field, loose_i64, loose_string, loose_string_list, none_if_blank};
use crate::value_objects::HitDie;

const HIT_DIE_KEYS: &[&str] = &["hitDie", "hit_die", "hitDice", "hit_dice", "hd", "hitdie"];
const PROGRESSION_KEYS: &[&str] = &["progression", "levels", "table"];
const CUSTOM_FEATURE_KEYS: &[&str] = &["customFeatures", "custom_features", "features"];
const DESCRIPTION_KEYS: &[&str] = &["description", "desc", "text"];
const PROFICIENCY_KEYS: &[&str] = &["proficiencies", "proficiency"];

/// One row of a class progression table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelEntry {
    pub level: i64,
    pub features: Vec<String>,
}

impl LevelEntry {
    pub fn new(level: i64, features: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            level,
            features: features.into_iter().map(Into::into).collect(),
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        let level = field(value, &["level", "lvl"]).and_then(loose_i64)?;
        let features = field(value, &["features", "feature"])
            .map(loose_string_list)
            .unwrap_or_default();
        Some(Self { level, features })
    }
}

/// An author-written feature description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFeature {
    pub name: String,
    /// HTML or plain text
    pub description: Option<String>,
}

impl CustomFeature {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        let name = field(value, &["name", "title"]).and_then(loose_string)?;
        let description = field(value, DESCRIPTION_KEYS)
            .and_then(Value::as_str)
            .and_then(none_if_blank)
            .map(str::to_string);
        Some(Self { name, description })
    }
}

/// Lenient view over a class record's `data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassData {
    /// `None` when no field parses to a standard die
    pub hit_die: Option<u8>,
    pub progression: Vec<LevelEntry>,
    pub custom_features: Vec<CustomFeature>,
    pub proficiencies: Vec<String>,
}

impl ClassData {
    pub fn from_data(data: &Value) -> Self {
        let hit_die = HIT_DIE_KEYS
            .iter()
            .filter_map(|key| field(data, &[*key]))
            .find_map(HitDie::parse)
            .map(|die| die.faces());

        let progression = field(data, PROGRESSION_KEYS)
            .and_then(Value::as_array)
            .map(|rows| rows.iter().filter_map(LevelEntry::from_value).collect())
            .unwrap_or_default();

        let custom_features = field(data, CUSTOM_FEATURE_KEYS)
            .and_then(Value::as_array)
            .map(|rows| rows.iter().filter_map(CustomFeature::from_value).collect())
            .unwrap_or_default();

        let proficiencies = field(data, PROFICIENCY_KEYS)
            .map(proficiency_lines)
            .unwrap_or_default();

        Self {
            hit_die,
            progression,
            custom_features,
            proficiencies,
        }
    }

    /// The parsed hit die, or d8.
    pub fn hit_die_or_default(&self) -> HitDie {
        self.hit_die
            .and_then(|faces| HitDie::from_faces(i64::from(faces)))
            .unwrap_or_default()
    }
}

/// Flattens a proficiency field that may be a list, a string or an object of
/// category → list (`{"armor": ["Light"], "weapons": "Simple"}`).
pub(crate) fn proficiency_lines(value: &Value) -> Vec<String> {
    match value {
        Value::Object(map) => map
            .iter()
            .filter_map(|(category, entries)| {
                let entries = loose_string_list(entries);
                if entries.is_empty() {
                    None
                } else {
                    Some(format!("{}: {}", category, entries.join(", ")))
                }
            })
            .collect(),
        other => loose_string_list(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_canonical_shape() {
        let data = ClassData::from_data(&json!({
            "hitDie": "d12",
            "progression": [
                {"level": 1, "features": ["Rage", "Unarmored Defense"]},
                {"level": "2", "features": "Reckless Attack, Danger Sense"}
            ],
            "customFeatures": [
                {"name": "Rage", "description": "<p>You enter a rage.</p>"},
                {"name": "Danger Sense"}
            ],
            "proficiencies": ["Light armor", "Shields"]
        }));

        assert_eq!(data.hit_die, Some(12));
        assert_eq!(data.progression.len(), 2);
        assert_eq!(data.progression[1].level, 2);
        assert_eq!(
            data.progression[1].features,
            vec!["Reckless Attack", "Danger Sense"]
        );
        assert_eq!(data.custom_features.len(), 2);
        assert!(data.custom_features[1].description.is_none());
        assert_eq!(data.proficiencies, vec!["Light armor", "Shields"]);
    }

    #[test]
    fn accepts_historical_field_names() {
        let data = ClassData::from_data(&json!({
            "hit_dice": "1d10",
            "levels": [{"lvl": 3, "feature": ["Martial Archetype"]}],
            "custom_features": [{"title": "Martial Archetype", "text": "Pick one."}]
        }));

        assert_eq!(data.hit_die, Some(10));
        assert_eq!(data.progression, vec![LevelEntry::new(3, ["Martial Archetype"])]);
        assert_eq!(
            data.custom_features[0].description.as_deref(),
            Some("Pick one.")
        );
    }

    #[test]
    fn skips_unparseable_hit_die_fields_in_order() {
        let data = ClassData::from_data(&json!({"hitDie": "huge", "hd": 6}));
        assert_eq!(data.hit_die, Some(6));
    }

    #[test]
    fn garbage_payload_reads_as_empty() {
        let data = ClassData::from_data(&json!("not an object"));
        assert_eq!(data, ClassData::default());
        assert_eq!(data.hit_die_or_default(), HitDie::D8);

        let data = ClassData::from_data(&json!({"hitDie": 20, "progression": {"1": "Rage"}}));
        assert_eq!(data.hit_die_or_default(), HitDie::D8);
        assert!(data.progression.is_empty());
    }

    #[test]
    fn rows_without_level_are_dropped() {
        let data = ClassData::from_data(&json!({
            "progression": [{"features": ["Orphan"]}, {"level": 1, "features": ["Kept"]}]
        }));
        assert_eq!(data.progression, vec![LevelEntry::new(1, ["Kept"])]);
    }

    #[test]
    fn proficiency_objects_flatten_per_category() {
        let lines = proficiency_lines(&json!({"armor": ["Light", "Medium"], "tools": []}));
        assert_eq!(lines, vec!["armor: Light, Medium"]);
    }
}
