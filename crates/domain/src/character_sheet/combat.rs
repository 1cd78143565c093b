//! Derived combat stats: AC, max HP, initiative, passive senses, movement.

use serde::{Deserialize, Serialize};

use super::references::ResolvedReferences;
use crate::game_systems::{format_distance, format_modifier, CalculationEngine, SHIELD_BONUS};
use crate::value_objects::Ability;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatStats {
    pub armor_class: i32,
    pub max_hp: i32,
    /// Faces of the hit die actually used for `max_hp`
    pub hit_die: u8,
    pub initiative: i32,
    pub initiative_display: String,
    pub passive_perception: i32,
    pub passive_investigation: i32,
    pub passive_insight: i32,
    pub speed: String,
    pub darkvision: String,
}

impl CombatStats {
    pub fn derive(engine: &dyn CalculationEngine, refs: &ResolvedReferences) -> Self {
        let scores = &refs.character.ability_scores;
        let level = refs.character.level;
        let dex = engine.modifier_for(scores, Ability::Dexterity);
        let con = engine.modifier_for(scores, Ability::Constitution);
        let int = engine.modifier_for(scores, Ability::Intelligence);
        let wis = engine.modifier_for(scores, Ability::Wisdom);

        let hit_die = refs.class_data().hit_die_or_default();
        let race = refs.race_data();

        Self {
            armor_class: armor_class(engine, refs, dex),
            max_hp: engine.calculate_max_hp(level, hit_die, con),
            hit_die: hit_die.faces(),
            initiative: dex,
            initiative_display: format_modifier(dex),
            passive_perception: engine.passive_score(wis),
            passive_investigation: engine.passive_score(int),
            passive_insight: engine.passive_score(wis),
            speed: format_distance(race.speed.as_deref()),
            darkvision: format_distance(race.darkvision.as_deref()),
        }
    }
}

/// Best armor wins (never summed); any shield adds its bonus once.
fn armor_class(engine: &dyn CalculationEngine, refs: &ResolvedReferences, dex: i32) -> i32 {
    let mut best_armor: Option<i32> = None;
    let mut has_shield = false;

    for (record, item) in refs.item_records() {
        if item.is_shield(&record.name) {
            has_shield = true;
            continue;
        }
        if let Some(ac) = item.armor_class {
            let ac = i32::try_from(ac).unwrap_or(i32::MAX);
            best_armor = Some(best_armor.map_or(ac, |best| best.max(ac)));
        }
    }

    engine.calculate_ac(dex, best_armor, has_shield.then_some(SHIELD_BONUS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Character, HomebrewRecord, HomebrewType, InventoryEntry};
    use crate::game_systems::{Dnd5eSystem, PLACEHOLDER};
    use crate::value_objects::AbilityScores;
    use crate::UserId;
    use serde_json::{json, Value};

    fn refs_with_items(dex: i32, items: Vec<HomebrewRecord>) -> ResolvedReferences {
        let owner = UserId::new();
        let mut character = Character::new(owner, "Tester")
            .with_ability_scores(AbilityScores::new().with(Ability::Dexterity, dex));
        for item in &items {
            character = character.with_item(InventoryEntry::new(item.id, item.name.clone()));
        }
        let mut refs = ResolvedReferences::bare(character);
        for item in items {
            refs.items.insert(item.id, item);
        }
        refs
    }

    fn item(name: &str, data: Value) -> HomebrewRecord {
        HomebrewRecord::new(UserId::new(), HomebrewType::Item, name).with_data(data)
    }

    #[test]
    fn no_armor_uses_ten_plus_dex() {
        let refs = refs_with_items(14, vec![]);
        let stats = CombatStats::derive(&Dnd5eSystem::new(), &refs);
        assert_eq!(stats.armor_class, 12);
    }

    #[test]
    fn armor_plus_shield() {
        let refs = refs_with_items(
            14,
            vec![
                item("Splint", json!({"type": "Heavy Armor", "ac": 16})),
                item("Shield", json!({"type": "Shield"})),
            ],
        );
        let stats = CombatStats::derive(&Dnd5eSystem::new(), &refs);
        assert_eq!(stats.armor_class, 18);
    }

    #[test]
    fn multiple_armor_pieces_take_maximum() {
        let refs = refs_with_items(
            10,
            vec![
                item("Leather", json!({"ac": 11})),
                item("Plate", json!({"ac": "18"})),
                item("Chain Shirt", json!({"armorClass": 13})),
            ],
        );
        let stats = CombatStats::derive(&Dnd5eSystem::new(), &refs);
        assert_eq!(stats.armor_class, 18);
    }

    #[test]
    fn textual_armor_class_uses_leading_number() {
        let refs = refs_with_items(
            10,
            vec![item("Studded Hide", json!({"ac": "14 + Dex modifier (max 2)"}))],
        );
        let stats = CombatStats::derive(&Dnd5eSystem::new(), &refs);
        assert_eq!(stats.armor_class, 14);
    }

    #[test]
    fn absurd_armor_class_with_shield_does_not_overflow() {
        let refs = refs_with_items(
            10,
            vec![
                item("Cursed Plate", json!({"ac": 99999999999_i64})),
                item("Shield", json!({})),
            ],
        );
        let stats = CombatStats::derive(&Dnd5eSystem::new(), &refs);
        assert_eq!(stats.armor_class, 101);
    }

    #[test]
    fn shield_alone_adds_to_unarmored() {
        let refs = refs_with_items(16, vec![item("Wooden Shield", json!({"ac": 2}))]);
        let stats = CombatStats::derive(&Dnd5eSystem::new(), &refs);
        assert_eq!(stats.armor_class, 15);
    }

    #[test]
    fn non_item_records_are_ignored_for_ac() {
        let monster =
            HomebrewRecord::new(UserId::new(), HomebrewType::Monster, "Golem").with_data(json!({"ac": 20}));
        let refs = refs_with_items(10, vec![monster]);
        let stats = CombatStats::derive(&Dnd5eSystem::new(), &refs);
        assert_eq!(stats.armor_class, 10);
    }

    #[test]
    fn hp_falls_back_to_d8_without_class() {
        let mut refs = refs_with_items(10, vec![]);
        refs.character = refs.character.clone().with_level(3);
        let stats = CombatStats::derive(&Dnd5eSystem::new(), &refs);
        assert_eq!(stats.hit_die, 8);
        // 3 * 4.5 = 13.5 -> 14
        assert_eq!(stats.max_hp, 14);
    }

    #[test]
    fn hp_reads_class_hit_die_and_con() {
        let owner = UserId::new();
        let class = HomebrewRecord::new(owner, HomebrewType::Class, "Barbarian")
            .with_data(json!({"hitDie": "d12"}));
        let character = Character::new(owner, "Brakka")
            .with_level(2)
            .with_class(class.id)
            .with_ability_scores(AbilityScores::new().with(Ability::Constitution, 16));
        let mut refs = ResolvedReferences::bare(character);
        refs.class = Some(class);

        let stats = CombatStats::derive(&Dnd5eSystem::new(), &refs);
        // 2 * (6.5 + 3) = 19
        assert_eq!(stats.max_hp, 19);
        assert_eq!(stats.hit_die, 12);
    }

    #[test]
    fn initiative_and_passives() {
        let owner = UserId::new();
        let character = Character::new(owner, "Scout").with_ability_scores(
            AbilityScores::new()
                .with(Ability::Dexterity, 8)
                .with(Ability::Wisdom, 15)
                .with(Ability::Intelligence, 12),
        );
        let refs = ResolvedReferences::bare(character);
        let stats = CombatStats::derive(&Dnd5eSystem::new(), &refs);

        assert_eq!(stats.initiative, -1);
        assert_eq!(stats.initiative_display, "-1");
        assert_eq!(stats.passive_perception, 12);
        assert_eq!(stats.passive_insight, 12);
        assert_eq!(stats.passive_investigation, 11);
    }

    #[test]
    fn race_distances() {
        let owner = UserId::new();
        let race = HomebrewRecord::new(owner, HomebrewType::Race, "Dwarf")
            .with_data(json!({"speed": 25, "darkvision": "Superior"}));
        let mut refs = ResolvedReferences::bare(Character::new(owner, "Thorin"));
        refs.race = Some(race);

        let stats = CombatStats::derive(&Dnd5eSystem::new(), &refs);
        assert_eq!(stats.speed, "25 ft.");
        assert_eq!(stats.darkvision, "Superior");

        refs.race = None;
        let stats = CombatStats::derive(&Dnd5eSystem::new(), &refs);
        assert_eq!(stats.speed, PLACEHOLDER);
        assert_eq!(stats.darkvision, PLACEHOLDER);
    }
}
