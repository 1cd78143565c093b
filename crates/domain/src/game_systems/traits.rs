//! Game system traits for sheet calculations.
//!
//! The sheet only ever asks these questions; keeping them behind a trait lets
//! a house-ruled system swap formulas without touching the derivation code.

use crate::value_objects::{Ability, AbilityScores, HitDie, Level};

/// Calculation rules that vary per game system.
///
/// Implements the mathematical formulas specific to each TTRPG.
pub trait CalculationEngine: Send + Sync {
    /// Calculate ability modifier from score.
    ///
    /// For D&D-like systems: floor((score - 10) / 2)
    fn ability_modifier(&self, score: i32) -> i32;

    /// Calculate proficiency bonus from character level.
    ///
    /// For D&D 5e: ((level - 1) / 4) + 2
    fn proficiency_bonus(&self, level: Level) -> i32;

    /// Calculate Armor Class from the best armor and an optional shield.
    fn calculate_ac(&self, dex_modifier: i32, armor_ac: Option<i32>, shield_bonus: Option<i32>)
        -> i32;

    /// Calculate max HP for a character.
    fn calculate_max_hp(&self, level: Level, hit_die: HitDie, constitution_modifier: i32) -> i32;

    /// Calculate a passive score (perception, investigation, insight).
    fn passive_score(&self, ability_modifier: i32) -> i32;

    /// Modifier for one ability; a missing score reads as 10.
    fn modifier_for(&self, scores: &AbilityScores, ability: Ability) -> i32 {
        self.ability_modifier(scores.score(ability))
    }
}
