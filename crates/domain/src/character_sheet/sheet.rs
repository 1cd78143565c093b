//! The fully derived sheet for one character.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::actions::{derive_actions, SheetAction};
use super::combat::CombatStats;
use super::features::{accumulate_features, AccumulatedFeature};
use super::references::ResolvedReferences;
use super::tabs::SectionPresence;
use crate::common::{has_content, none_if_blank};
use crate::entities::HomebrewRecord;
use crate::game_systems::{format_modifier, CalculationEngine, PLACEHOLDER, SKILLS};
use crate::value_objects::{Ability, AbilityScores};
use crate::CharacterId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityLine {
    pub ability: Ability,
    pub score: i32,
    pub modifier: i32,
    pub modifier_display: String,
}

/// A skill or saving throw. Only the base ability modifier applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckLine {
    pub name: String,
    pub ability: Ability,
    pub modifier: i32,
    pub modifier_display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryLine {
    pub name: String,
    pub quantity: u32,
    pub weight: Option<f64>,
    /// False when the item record is gone or was never linked
    pub resolved: bool,
}

/// Names of the linked homebrew records, `"—"` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lineage {
    pub race: String,
    pub class: String,
    pub background: String,
    pub faith: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedSheet {
    pub character_id: CharacterId,
    pub name: String,
    pub level: u8,
    pub lineage: Lineage,
    pub proficiency_bonus: i32,
    pub proficiency_display: String,
    pub abilities: Vec<AbilityLine>,
    pub saving_throws: Vec<CheckLine>,
    pub skills: Vec<CheckLine>,
    pub combat: CombatStats,
    pub actions: Vec<SheetAction>,
    pub features: Vec<AccumulatedFeature>,
    pub proficiencies: Vec<String>,
    pub background_description: Option<String>,
    pub inventory: Vec<InventoryLine>,
    pub spells: Value,
    pub pets: Value,
    pub notes: String,
}

impl DerivedSheet {
    pub fn derive(engine: &dyn CalculationEngine, refs: &ResolvedReferences) -> Self {
        let character = &refs.character;
        let scores = &character.ability_scores;
        let proficiency_bonus = engine.proficiency_bonus(character.level);

        let abilities = Ability::ALL
            .into_iter()
            .map(|ability| {
                let modifier = engine.modifier_for(scores, ability);
                AbilityLine {
                    ability,
                    score: scores.score(ability),
                    modifier,
                    modifier_display: format_modifier(modifier),
                }
            })
            .collect();

        let saving_throws = Ability::ALL
            .into_iter()
            .map(|ability| check(engine, scores, ability.display_name(), ability))
            .collect();

        let skills = SKILLS
            .iter()
            .map(|(name, ability)| check(engine, scores, name, *ability))
            .collect();

        let class = refs.class_data();
        let background = refs.background_data();

        let mut proficiencies: Vec<String> = Vec::new();
        for line in class.proficiencies.iter().chain(&background.proficiencies) {
            if !proficiencies.contains(line) {
                proficiencies.push(line.clone());
            }
        }

        let inventory = refs
            .inventory()
            .map(|(entry, record)| InventoryLine {
                name: record
                    .and_then(|r| none_if_blank(&r.name))
                    .or_else(|| none_if_blank(&entry.name))
                    .unwrap_or(PLACEHOLDER)
                    .to_string(),
                quantity: entry.quantity,
                weight: entry.weight,
                resolved: record.is_some(),
            })
            .collect();

        Self {
            character_id: character.id,
            name: character.name.clone(),
            level: character.level.get(),
            lineage: Lineage {
                race: record_name(refs.race.as_ref()),
                class: record_name(refs.class.as_ref()),
                background: record_name(refs.background.as_ref()),
                faith: record_name(refs.faith.as_ref()),
            },
            proficiency_bonus,
            proficiency_display: format_modifier(proficiency_bonus),
            abilities,
            saving_throws,
            skills,
            combat: CombatStats::derive(engine, refs),
            actions: derive_actions(engine, refs),
            features: accumulate_features(&class, character.level),
            proficiencies,
            background_description: background.description,
            inventory,
            spells: character.spells.clone(),
            pets: character.pets.clone(),
            notes: character.notes.clone(),
        }
    }

    /// What each optional section has to show.
    pub fn presence(&self) -> SectionPresence {
        SectionPresence {
            spells: has_content(&self.spells),
            inventory: !self.inventory.is_empty(),
            features: !self.features.is_empty(),
            background: self.lineage.background != PLACEHOLDER
                || self.background_description.is_some(),
            proficiencies: !self.proficiencies.is_empty(),
            pets: has_content(&self.pets),
            notes: none_if_blank(&self.notes).is_some(),
        }
    }
}

fn check(
    engine: &dyn CalculationEngine,
    scores: &AbilityScores,
    name: &str,
    ability: Ability,
) -> CheckLine {
    let modifier = engine.modifier_for(scores, ability);
    CheckLine {
        name: name.to_string(),
        ability,
        modifier,
        modifier_display: format_modifier(modifier),
    }
}

fn record_name(record: Option<&HomebrewRecord>) -> String {
    record
        .and_then(|r| none_if_blank(&r.name))
        .unwrap_or(PLACEHOLDER)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Character, HomebrewType, InventoryEntry};
    use crate::game_systems::Dnd5eSystem;
    use crate::{HomebrewId, UserId};
    use serde_json::json;

    #[test]
    fn bare_character_gets_defaults_everywhere() {
        let refs = ResolvedReferences::bare(Character::new(UserId::new(), "Blank"));
        let sheet = DerivedSheet::derive(&Dnd5eSystem::new(), &refs);

        assert_eq!(sheet.level, 1);
        assert_eq!(sheet.proficiency_display, "+2");
        assert!(sheet.abilities.iter().all(|a| a.score == 10 && a.modifier == 0));
        assert_eq!(sheet.skills.len(), 18);
        assert_eq!(sheet.saving_throws.len(), 6);
        assert_eq!(sheet.lineage.class, PLACEHOLDER);
        assert_eq!(sheet.combat.armor_class, 10);
        assert_eq!(sheet.combat.max_hp, 5);
        assert_eq!(sheet.actions.len(), 1);
        assert_eq!(sheet.presence(), SectionPresence::default());
    }

    #[test]
    fn skills_and_saves_use_base_modifier_only() {
        let character = Character::new(UserId::new(), "Sly")
            .with_level(9)
            .with_ability_scores(AbilityScores::new().with(Ability::Dexterity, 17));
        let sheet = DerivedSheet::derive(&Dnd5eSystem::new(), &ResolvedReferences::bare(character));

        let stealth = sheet.skills.iter().find(|s| s.name == "Stealth").unwrap();
        assert_eq!(stealth.modifier_display, "+3");
        let dex_save = sheet
            .saving_throws
            .iter()
            .find(|s| s.ability == Ability::Dexterity)
            .unwrap();
        assert_eq!(dex_save.modifier, 3);
    }

    #[test]
    fn presence_follows_content() {
        let owner = UserId::new();
        let background = HomebrewRecord::new(owner, HomebrewType::Background, "Sage")
            .with_data(json!({"skillProficiencies": ["Arcana", "History"]}));
        let class = HomebrewRecord::new(owner, HomebrewType::Class, "Wizard").with_data(json!({
            "proficiencies": {"weapons": ["Daggers"], "armor": []},
            "progression": [{"level": 1, "features": ["Arcane Recovery"]}]
        }));
        let character = Character::new(owner, "Elminster")
            .with_class(class.id)
            .with_background(background.id)
            .with_notes("  ")
            .with_spells(json!({"cantrips": ["Light"]}))
            .with_pets(json!([]));
        let mut refs = ResolvedReferences::bare(character);
        refs.class = Some(class);
        refs.background = Some(background);

        let sheet = DerivedSheet::derive(&Dnd5eSystem::new(), &refs);
        let presence = sheet.presence();
        assert!(presence.spells);
        assert!(presence.features);
        assert!(presence.background);
        assert!(presence.proficiencies);
        assert!(!presence.inventory);
        assert!(!presence.pets);
        assert!(!presence.notes);
        assert_eq!(
            sheet.proficiencies,
            vec!["weapons: Daggers", "Arcana", "History"]
        );
        assert_eq!(sheet.lineage.class, "Wizard");
    }

    #[test]
    fn inventory_prefers_record_name_and_flags_dangling() {
        let owner = UserId::new();
        let rope = HomebrewRecord::new(owner, HomebrewType::Item, "Hempen Rope");
        let character = Character::new(owner, "Packer")
            .with_item(InventoryEntry::new(rope.id, "rope (old name)").with_weight(10.0))
            .with_item(InventoryEntry::new(HomebrewId::new(), "Lost Lantern"));
        let mut refs = ResolvedReferences::bare(character);
        refs.items.insert(rope.id, rope);

        let sheet = DerivedSheet::derive(&Dnd5eSystem::new(), &refs);
        assert_eq!(sheet.inventory[0].name, "Hempen Rope");
        assert_eq!(sheet.inventory[0].weight, Some(10.0));
        assert!(sheet.inventory[0].resolved);
        assert_eq!(sheet.inventory[1].name, "Lost Lantern");
        assert!(!sheet.inventory[1].resolved);
        assert!(sheet.presence().inventory);
    }
}
