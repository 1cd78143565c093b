//! D&D 5th Edition game system implementation.
//!
//! Implements the calculation rules the character sheet needs for D&D 5e.

use std::sync::OnceLock;

use super::traits::CalculationEngine;
use crate::value_objects::{Ability, HitDie, Level};

/// Shown wherever a value is absent.
pub const PLACEHOLDER: &str = "—";

/// Shield AC bonus.
pub const SHIELD_BONUS: i32 = 2;

/// The eighteen standard skills with their governing ability.
pub const SKILLS: [(&str, Ability); 18] = [
    ("Acrobatics", Ability::Dexterity),
    ("Animal Handling", Ability::Wisdom),
    ("Arcana", Ability::Intelligence),
    ("Athletics", Ability::Strength),
    ("Deception", Ability::Charisma),
    ("History", Ability::Intelligence),
    ("Insight", Ability::Wisdom),
    ("Intimidation", Ability::Charisma),
    ("Investigation", Ability::Intelligence),
    ("Medicine", Ability::Wisdom),
    ("Nature", Ability::Intelligence),
    ("Perception", Ability::Wisdom),
    ("Performance", Ability::Charisma),
    ("Persuasion", Ability::Charisma),
    ("Religion", Ability::Intelligence),
    ("Sleight of Hand", Ability::Dexterity),
    ("Stealth", Ability::Dexterity),
    ("Survival", Ability::Wisdom),
];

static LEADING_NUMBER_REGEX: OnceLock<Option<regex_lite::Regex>> = OnceLock::new();

fn leading_number_regex() -> Option<&'static regex_lite::Regex> {
    LEADING_NUMBER_REGEX
        .get_or_init(|| regex_lite::Regex::new(r"^\s*(\d+)").ok())
        .as_ref()
}

/// D&D 5th Edition game system.
pub struct Dnd5eSystem;

impl Default for Dnd5eSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Dnd5eSystem {
    /// Create a new D&D 5e system instance.
    pub fn new() -> Self {
        Self
    }
}

impl CalculationEngine for Dnd5eSystem {
    fn ability_modifier(&self, score: i32) -> i32 {
        // Rust's / rounds toward zero, the rules floor
        (score - 10).div_euclid(2)
    }

    fn proficiency_bonus(&self, level: Level) -> i32 {
        ((i32::from(level.get()) - 1) / 4) + 2
    }

    fn calculate_ac(
        &self,
        dex_modifier: i32,
        armor_ac: Option<i32>,
        shield_bonus: Option<i32>,
    ) -> i32 {
        // Authored armor AC is final; unarmored is 10 + DEX
        let base_ac = armor_ac.unwrap_or(10_i32.saturating_add(dex_modifier));
        base_ac.saturating_add(shield_bonus.unwrap_or(0))
    }

    fn calculate_max_hp(&self, level: Level, hit_die: HitDie, constitution_modifier: i32) -> i32 {
        // Average per level for every level, first included
        let per_level = hit_die.average() + f64::from(constitution_modifier);
        let total = (f64::from(level.get()) * per_level).round() as i32;
        total.max(1)
    }

    fn passive_score(&self, ability_modifier: i32) -> i32 {
        10 + ability_modifier
    }
}

/// Renders a modifier with an explicit sign: `+2`, `+0`, `-1`.
pub fn format_modifier(modifier: i32) -> String {
    format!("{:+}", modifier)
}

/// Normalizes an authored distance.
///
/// A leading number becomes `"<n> ft."`; anything else passes through
/// unchanged; absent or blank becomes the placeholder dash.
pub fn format_distance(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return PLACEHOLDER.to_string();
    };
    match leading_number_regex()
        .and_then(|re| re.captures(raw))
        .and_then(|caps| caps.get(1))
    {
        Some(number) => format!("{} ft.", number.as_str()),
        None => raw.to_string(),
    }
}
