//! Homebrew record entity - user-authored content with an opaque payload
//!
//! Every record carries a fixed type tag and a versionless `data` blob. The
//! payload shape depends on the type and is read through the lenient views in
//! the sibling modules (`ClassData`, `RaceData`, ...), never deserialized
//! strictly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DomainError;
use crate::{HomebrewId, UserId};

/// Kind of homebrew content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomebrewType {
    Item,
    Monster,
    Class,
    Spell,
    Race,
    Background,
    Feat,
    Subclass,
    Pet,
    Faith,
    /// Unknown type for forward compatibility
    #[serde(other)]
    Unknown,
}

impl HomebrewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Monster => "monster",
            Self::Class => "class",
            Self::Spell => "spell",
            Self::Race => "race",
            Self::Background => "background",
            Self::Feat => "feat",
            Self::Subclass => "subclass",
            Self::Pet => "pet",
            Self::Faith => "faith",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for HomebrewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HomebrewType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "item" => Ok(Self::Item),
            "monster" => Ok(Self::Monster),
            "class" => Ok(Self::Class),
            "spell" => Ok(Self::Spell),
            "race" => Ok(Self::Race),
            "background" => Ok(Self::Background),
            "feat" => Ok(Self::Feat),
            "subclass" => Ok(Self::Subclass),
            "pet" => Ok(Self::Pet),
            "faith" => Ok(Self::Faith),
            _ => Err(DomainError::parse(format!("Unknown homebrew type: {}", s))),
        }
    }
}

/// Lifecycle of a homebrew record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomebrewStatus {
    #[default]
    Draft,
    Public,
    /// Unknown status for forward compatibility
    #[serde(other)]
    Unknown,
}

/// A user-authored content item.
///
/// # ADR-008 Tier 4: Simple Data Struct
///
/// This is a data-carrying struct with no invariants to protect. All fields are public
/// because the payload is untrusted anyway - readers default whatever they cannot use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomebrewRecord {
    pub id: HomebrewId,
    pub owner_id: UserId,
    #[serde(rename = "type")]
    pub kind: HomebrewType,
    #[serde(default)]
    pub status: HomebrewStatus,
    #[serde(default)]
    pub name: String,
    /// Type-specific payload (JSON - no schema, no migrations)
    #[serde(default)]
    pub data: Value,
}

impl HomebrewRecord {
    pub fn new(owner_id: UserId, kind: HomebrewType, name: impl Into<String>) -> Self {
        Self {
            id: HomebrewId::new(),
            owner_id,
            kind,
            status: HomebrewStatus::Draft,
            name: name.into(),
            data: Value::Null,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    pub fn with_status(mut self, status: HomebrewStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is(&self, kind: HomebrewType) -> bool {
        self.kind == kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_wire_shape() {
        let owner = UserId::new();
        let id = HomebrewId::new();
        let record: HomebrewRecord = serde_json::from_value(json!({
            "id": id.to_string(),
            "ownerId": owner.to_string(),
            "type": "class",
            "status": "public",
            "name": "Barbarian",
            "data": {"hitDie": 12}
        }))
        .unwrap();

        assert_eq!(record.id, id);
        assert!(record.is(HomebrewType::Class));
        assert_eq!(record.status, HomebrewStatus::Public);
        assert_eq!(record.data["hitDie"], 12);
    }

    #[test]
    fn unknown_tags_do_not_reject_the_record() {
        let record: HomebrewRecord = serde_json::from_value(json!({
            "id": HomebrewId::new().to_string(),
            "ownerId": UserId::new().to_string(),
            "type": "vehicle",
            "status": "archived"
        }))
        .unwrap();

        assert_eq!(record.kind, HomebrewType::Unknown);
        assert_eq!(record.status, HomebrewStatus::Unknown);
        assert!(record.data.is_null());
    }

    #[test]
    fn type_round_trips_through_str() {
        for kind in [HomebrewType::Item, HomebrewType::Faith, HomebrewType::Subclass] {
            assert_eq!(kind.as_str().parse::<HomebrewType>().unwrap(), kind);
        }
        assert!("vehicle".parse::<HomebrewType>().is_err());
    }
}
