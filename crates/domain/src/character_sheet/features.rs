//! Class feature accumulation across the progression table.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::common::{normalize_key, strip_decorations};
use crate::entities::{ClassData, LevelEntry};
use crate::value_objects::Level;

/// Shown for a granted feature the class author never described.
pub const NO_DESCRIPTION: &str = "No description yet.";

/// A feature the character has gained, attributed to the first level that
/// granted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccumulatedFeature {
    pub name: String,
    pub first_level: u8,
    pub description: String,
}

impl AccumulatedFeature {
    pub fn has_description(&self) -> bool {
        self.description != NO_DESCRIPTION
    }
}

/// Every feature granted at or below `level`, deduplicated by normalized name.
pub fn accumulate_features(class: &ClassData, level: Level) -> Vec<AccumulatedFeature> {
    let mut rows: Vec<&LevelEntry> = class
        .progression
        .iter()
        .filter(|row| row.level <= i64::from(level.get()))
        .collect();
    // sort_by_key is stable, equal levels keep authored order
    rows.sort_by_key(|row| row.level);

    let descriptions = description_index(class);

    let mut seen = HashSet::new();
    let mut features = Vec::new();
    for row in rows {
        for raw in &row.features {
            let key = normalize_key(raw);
            if key.is_empty() || seen.contains(&key) {
                continue;
            }
            let description = descriptions
                .get(&key)
                .map(|d| d.to_string())
                .unwrap_or_else(|| NO_DESCRIPTION.to_string());
            features.push(AccumulatedFeature {
                name: strip_decorations(raw),
                first_level: Level::clamped(row.level).get(),
                description,
            });
            seen.insert(key);
        }
    }
    features
}

/// First described custom feature per normalized name.
fn description_index(class: &ClassData) -> HashMap<String, &str> {
    let mut index = HashMap::new();
    for feature in &class.custom_features {
        let Some(description) = feature.description.as_deref() else {
            continue;
        };
        let key = normalize_key(&feature.name);
        if !key.is_empty() {
            index.entry(key).or_insert(description);
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::CustomFeature;
    use serde_json::json;

    fn class(progression: Vec<LevelEntry>) -> ClassData {
        ClassData {
            progression,
            ..ClassData::default()
        }
    }

    #[test]
    fn repeated_feature_is_granted_once_at_first_level() {
        let class = class(vec![
            LevelEntry::new(1, ["Rage"]),
            LevelEntry::new(5, ["rage "]),
        ]);
        let features = accumulate_features(&class, Level::clamped(5));
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].name, "Rage");
        assert_eq!(features[0].first_level, 1);
        assert_eq!(features[0].description, NO_DESCRIPTION);
        assert!(!features[0].has_description());
    }

    #[test]
    fn levels_above_character_are_skipped() {
        let class = class(vec![
            LevelEntry::new(1, ["Second Wind"]),
            LevelEntry::new(2, ["Action Surge"]),
            LevelEntry::new(3, ["Martial Archetype"]),
        ]);
        let names: Vec<String> = accumulate_features(&class, Level::clamped(2))
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["Second Wind", "Action Surge"]);
    }

    #[test]
    fn unordered_progression_is_walked_by_level() {
        let class = class(vec![
            LevelEntry::new(3, ["Extra Attack", "Brutal Critical"]),
            LevelEntry::new(1, ["Unarmored Defense"]),
            LevelEntry::new(3, ["Danger Sense"]),
            LevelEntry::new(1, ["★ Extra Attack ★"]),
        ]);
        let features = accumulate_features(&class, Level::clamped(3));
        let summary: Vec<(&str, u8)> = features
            .iter()
            .map(|f| (f.name.as_str(), f.first_level))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Unarmored Defense", 1),
                ("Extra Attack", 1),
                ("Brutal Critical", 3),
                ("Danger Sense", 3),
            ]
        );
    }

    #[test]
    fn descriptions_match_normalized_names() {
        let class = ClassData {
            progression: vec![LevelEntry::new(1, ["**Sneak   Attack**", "Thieves' Cant"])],
            custom_features: vec![
                CustomFeature::new("sneak attack", "<p>Extra damage once per turn.</p>"),
                CustomFeature::new("Sneak Attack", "ignored duplicate"),
            ],
            ..ClassData::default()
        };
        let features = accumulate_features(&class, Level::clamped(1));
        assert_eq!(features[0].name, "Sneak Attack");
        assert_eq!(features[0].description, "<p>Extra damage once per turn.</p>");
        assert_eq!(features[1].description, NO_DESCRIPTION);
    }

    #[test]
    fn blank_names_and_empty_tables_produce_nothing() {
        assert!(accumulate_features(&ClassData::default(), Level::clamped(20)).is_empty());

        let class = class(vec![LevelEntry::new(1, ["  ", "***"])]);
        assert!(accumulate_features(&class, Level::clamped(1)).is_empty());
    }

    #[test]
    fn reads_authored_class_payload() {
        let data = ClassData::from_data(&json!({
            "levels": [
                {"lvl": "2", "features": "Cunning Action, Expertise"},
                {"level": 1, "feature": ["Expertise"]}
            ]
        }));
        let features = accumulate_features(&data, Level::clamped(2));
        let names: Vec<&str> = features.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Expertise", "Cunning Action"]);
        assert_eq!(features[0].first_level, 1);
    }
}
