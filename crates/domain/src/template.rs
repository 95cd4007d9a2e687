//! Character template: the validated description a character is built from.

use serde::{Deserialize, Serialize};

use crate::abilities::AbilityScores;
use crate::error::DomainError;

/// Races supported by the 2014 ruleset.
pub const SUPPORTED_RACES: [&str; 9] = [
    "dragonborn",
    "dwarf",
    "elf",
    "gnome",
    "half-elf",
    "half-orc",
    "halfling",
    "human",
    "tiefling",
];

/// Classes supported by the 2014 ruleset.
pub const SUPPORTED_CLASSES: [&str; 12] = [
    "barbarian",
    "bard",
    "cleric",
    "druid",
    "fighter",
    "monk",
    "paladin",
    "ranger",
    "rogue",
    "sorcerer",
    "warlock",
    "wizard",
];

/// Spell levels in an empty template (cantrips through 9th level).
pub const SPELL_LEVELS: usize = 10;

/// Equipment names, one list per equipment kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateInventory {
    #[serde(alias = "Armor")]
    pub armor: Vec<String>,
    #[serde(alias = "Weapons")]
    pub weapons: Vec<String>,
    #[serde(alias = "Items")]
    pub items: Vec<String>,
}

impl TemplateInventory {
    pub fn len(&self) -> usize {
        self.armor.len() + self.weapons.len() + self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Spell names by spell level; `level[0]` holds cantrips.
///
/// Empty levels are legal and mean no spells are known at that level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpellNames {
    #[serde(alias = "Level")]
    pub level: Vec<Vec<String>>,
}

impl SpellNames {
    pub fn total(&self) -> usize {
        self.level.iter().map(Vec::len).sum()
    }
}

/// A character description as written by the player.
///
/// Unknown keys are rejected so a misspelled list fails to load instead of
/// coming back empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CharacterTemplate {
    pub name: String,
    pub level: i32,
    pub race: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subrace: Option<String>,
    pub class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subclass: Option<String>,
    pub ability_scores: AbilityScores,
    #[serde(default)]
    pub proficiencies: Vec<String>,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(default)]
    pub inventory: TemplateInventory,
    #[serde(default)]
    pub spells: SpellNames,
}

impl CharacterTemplate {
    /// Scaffold with neutral scores and ten empty spell levels.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            level: 1,
            race: String::new(),
            subrace: None,
            class: String::new(),
            subclass: None,
            ability_scores: AbilityScores::uniform(10),
            proficiencies: Vec::new(),
            expertise: Vec::new(),
            inventory: TemplateInventory::default(),
            spells: SpellNames {
                level: vec![Vec::new(); SPELL_LEVELS],
            },
        }
    }

    pub fn is_proficient(&self, name: &str) -> bool {
        self.proficiencies.iter().any(|p| p == name)
    }

    pub fn has_expertise(&self, name: &str) -> bool {
        self.expertise.iter().any(|e| e == name)
    }

    /// Check level, race, class and ability score ranges.
    ///
    /// The build pipeline assumes a template has passed this check; it does
    /// not re-validate.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(1..=20).contains(&self.level) {
            return Err(DomainError::validation(format!(
                "invalid level {}. Must be in range [1, 20]",
                self.level
            )));
        }

        let race = self.race.to_lowercase();
        if !SUPPORTED_RACES.contains(&race.as_str()) {
            return Err(DomainError::validation(format!(
                "no valid 5e 2014 race provided: '{}'",
                self.race
            )));
        }

        let class = self.class.to_lowercase();
        if !SUPPORTED_CLASSES.contains(&class.as_str()) {
            return Err(DomainError::validation(format!(
                "no valid 5e 2014 class provided: '{}'",
                self.class
            )));
        }

        self.ability_scores.validate()
    }
}
