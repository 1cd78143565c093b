//! Race payload view.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::{field, loose_string};

/// Lenient view over a race record's `data`.
///
/// Distances are kept as authored (`30`, `"30ft"`, `"fly 30"`) and formatted
/// later by the sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceData {
    pub speed: Option<String>,
    pub darkvision: Option<String>,
}

impl RaceData {
    pub fn from_data(data: &Value) -> Self {
        Self {
            speed: field(data, &["speed", "walkSpeed", "walk_speed"]).and_then(loose_string),
            darkvision: field(data, &["darkvision", "darkVision", "dark_vision"])
                .and_then(loose_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_numbers_and_strings() {
        let data = RaceData::from_data(&json!({"speed": 25, "darkVision": "60 feet"}));
        assert_eq!(data.speed.as_deref(), Some("25"));
        assert_eq!(data.darkvision.as_deref(), Some("60 feet"));
    }

    #[test]
    fn blank_and_missing_are_none() {
        let data = RaceData::from_data(&json!({"speed": "  "}));
        assert_eq!(data, RaceData::default());
    }
}
