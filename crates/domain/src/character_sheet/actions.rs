//! Attacks listed on the actions tab.

use serde::{Deserialize, Serialize};

use super::references::ResolvedReferences;
use crate::entities::ItemData;
use crate::game_systems::{format_modifier, CalculationEngine};
use crate::value_objects::Ability;

pub const UNARMED_STRIKE: &str = "Unarmed Strike";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetAction {
    pub name: String,
    pub ability: Ability,
    pub to_hit: i32,
    /// Damage as authored, e.g. "1d8 slashing"
    pub damage: String,
    pub damage_bonus: i32,
}

impl SheetAction {
    pub fn to_hit_display(&self) -> String {
        format_modifier(self.to_hit)
    }

    pub fn damage_display(&self) -> String {
        if self.damage_bonus == 0 {
            self.damage.clone()
        } else {
            format!("{} {}", self.damage, format_modifier(self.damage_bonus))
        }
    }
}

/// Unarmed strike first, then one attack per weapon in the inventory.
pub fn derive_actions(engine: &dyn CalculationEngine, refs: &ResolvedReferences) -> Vec<SheetAction> {
    let mut actions = vec![unarmed_strike(engine, refs)];
    actions.extend(
        refs.item_records()
            .into_iter()
            .filter_map(|(record, item)| weapon_attack(engine, refs, &record.name, &item)),
    );
    actions
}

fn unarmed_strike(engine: &dyn CalculationEngine, refs: &ResolvedReferences) -> SheetAction {
    let str_mod = engine.modifier_for(&refs.character.ability_scores, Ability::Strength);
    let proficiency = engine.proficiency_bonus(refs.character.level);
    SheetAction {
        name: UNARMED_STRIKE.to_string(),
        ability: Ability::Strength,
        to_hit: str_mod + proficiency,
        damage: format!("{} bludgeoning", (1 + str_mod).max(1)),
        damage_bonus: 0,
    }
}

fn weapon_attack(
    engine: &dyn CalculationEngine,
    refs: &ResolvedReferences,
    name: &str,
    item: &ItemData,
) -> Option<SheetAction> {
    let damage = item.damage.clone()?;
    let scores = &refs.character.ability_scores;
    let str_mod = engine.modifier_for(scores, Ability::Strength);
    let dex_mod = engine.modifier_for(scores, Ability::Dexterity);

    let dex_eligible = item.has_property("finesse") || item.has_property("ranged");
    let (ability, modifier) = if dex_eligible && dex_mod > str_mod {
        (Ability::Dexterity, dex_mod)
    } else {
        (Ability::Strength, str_mod)
    };

    Some(SheetAction {
        name: name.to_string(),
        ability,
        to_hit: modifier + engine.proficiency_bonus(refs.character.level),
        damage,
        damage_bonus: modifier,
    })
}
