//! The six ability scores.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::loose_i64;
use crate::error::DomainError;

/// Score assumed when an ability is missing (modifier 0).
pub const DEFAULT_SCORE: i32 = 10;
pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ability {
    #[serde(rename = "STR")]
    Strength,
    #[serde(rename = "DEX")]
    Dexterity,
    #[serde(rename = "CON")]
    Constitution,
    #[serde(rename = "INT")]
    Intelligence,
    #[serde(rename = "WIS")]
    Wisdom,
    #[serde(rename = "CHA")]
    Charisma,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    /// Three-letter abbreviation used as the storage key.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for Ability {
    type Err = DomainError;

    /// Case-insensitive; accepts abbreviations and full names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "str" | "strength" => Ok(Self::Strength),
            "dex" | "dexterity" => Ok(Self::Dexterity),
            "con" | "constitution" => Ok(Self::Constitution),
            "int" | "intelligence" => Ok(Self::Intelligence),
            "wis" | "wisdom" => Ok(Self::Wisdom),
            "cha" | "charisma" => Ok(Self::Charisma),
            _ => Err(DomainError::parse(format!("Unknown ability: {}", s))),
        }
    }
}

/// Ability scores as authored on the character record.
///
/// Reading is lenient: keys are matched case-insensitively, unknown keys and
/// non-numeric values are dropped, scores are clamped to 1-30 and a missing
/// ability reads as 10.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value", into = "BTreeMap<String, i32>")]
pub struct AbilityScores {
    scores: BTreeMap<Ability, i32>,
}

impl AbilityScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, ability: Ability, score: i32) -> Self {
        self.set(ability, score);
        self
    }

    pub fn set(&mut self, ability: Ability, score: i32) {
        self.scores
            .insert(ability, score.clamp(MIN_SCORE, MAX_SCORE));
    }

    /// Score for an ability, defaulting to 10 when absent.
    pub fn score(&self, ability: Ability) -> i32 {
        self.scores.get(&ability).copied().unwrap_or(DEFAULT_SCORE)
    }

    /// Whether the ability was present on the record.
    pub fn contains(&self, ability: Ability) -> bool {
        self.scores.contains_key(&ability)
    }
}

impl From<Value> for AbilityScores {
    fn from(value: Value) -> Self {
        let mut scores = Self::new();
        if let Value::Object(map) = value {
            for (key, raw) in map {
                let (Ok(ability), Some(score)) = (key.parse::<Ability>(), loose_i64(&raw)) else {
                    continue;
                };
                let score = score.clamp(i64::from(MIN_SCORE), i64::from(MAX_SCORE)) as i32;
                scores.set(ability, score);
            }
        }
        scores
    }
}

impl From<AbilityScores> for BTreeMap<String, i32> {
    fn from(scores: AbilityScores) -> Self {
        scores
            .scores
            .into_iter()
            .map(|(ability, score)| (ability.abbreviation().to_string(), score))
            .collect()
    }
}
