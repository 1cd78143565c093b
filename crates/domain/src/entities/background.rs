//! Background payload view.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::class::proficiency_lines;
use crate::common::{field, none_if_blank};

/// Lenient view over a background record's `data`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundData {
    pub description: Option<String>,
    pub proficiencies: Vec<String>,
}

impl BackgroundData {
    pub fn from_data(data: &Value) -> Self {
        let description = field(data, &["description", "desc", "text"])
            .and_then(Value::as_str)
            .and_then(none_if_blank)
            .map(str::to_string);
        let proficiencies = field(
            data,
            &["proficiencies", "skillProficiencies", "skill_proficiencies"],
        )
        .map(proficiency_lines)
        .unwrap_or_default();

        Self {
            description,
            proficiencies,
        }
    }
}
