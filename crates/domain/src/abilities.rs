//! Ability scores, racial bonuses and saving throws.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::progression::proficiency_bonus;
use crate::resources::{Class, Race};

/// The six abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
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

    /// Abbreviation used by the reference service (`STR`, `DEX`, ...).
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

    /// Exact, case-sensitive match against the service abbreviations.
    pub fn from_abbreviation(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.abbreviation() == name)
    }

    pub fn name(&self) -> &'static str {
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
        f.write_str(self.name())
    }
}

impl FromStr for Ability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_abbreviation(s)
            .or_else(|| Self::ALL.into_iter().find(|a| a.name().eq_ignore_ascii_case(s)))
            .ok_or_else(|| DomainError::parse(format!("Unknown ability: {}", s)))
    }
}

/// Modifier for a raw score: `floor((score - 10) / 2)`.
///
/// Rust's `/` truncates toward zero, so floor division goes through `div_euclid`.
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// Six ability scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    #[serde(alias = "Strength")]
    pub strength: i32,
    #[serde(alias = "Dexterity")]
    pub dexterity: i32,
    #[serde(alias = "Constitution")]
    pub constitution: i32,
    #[serde(alias = "Intelligence")]
    pub intelligence: i32,
    #[serde(alias = "Wisdom")]
    pub wisdom: i32,
    #[serde(alias = "Charisma")]
    pub charisma: i32,
}

impl AbilityScores {
    pub fn new(
        strength: i32,
        dexterity: i32,
        constitution: i32,
        intelligence: i32,
        wisdom: i32,
        charisma: i32,
    ) -> Self {
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }

    pub fn uniform(score: i32) -> Self {
        Self::new(score, score, score, score, score, score)
    }

    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    fn get_mut(&mut self, ability: Ability) -> &mut i32 {
        match ability {
            Ability::Strength => &mut self.strength,
            Ability::Dexterity => &mut self.dexterity,
            Ability::Constitution => &mut self.constitution,
            Ability::Intelligence => &mut self.intelligence,
            Ability::Wisdom => &mut self.wisdom,
            Ability::Charisma => &mut self.charisma,
        }
    }

    pub fn modifier(&self, ability: Ability) -> i32 {
        ability_modifier(self.get(ability))
    }

    /// Every score must be in `[0, 20]`.
    pub fn validate(&self) -> Result<(), DomainError> {
        for ability in Ability::ALL {
            let score = self.get(ability);
            if score < 0 {
                return Err(DomainError::validation(format!(
                    "ability score for {} is too low -> {}. Must be in range [0, 20]",
                    ability, score
                )));
            }
            if score > 20 {
                return Err(DomainError::validation(format!(
                    "ability score for {} is too high -> {}. Must be in range [0, 20]",
                    ability, score
                )));
            }
        }
        Ok(())
    }
}

/// What to do with a racial bonus naming an ability outside `STR`..`CHA`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownAbilityPolicy {
    /// Ignore the entry and keep applying the remaining bonuses.
    #[default]
    Skip,
    /// Stop applying bonuses at the first unrecognised entry.
    Stop,
}

impl FromStr for UnknownAbilityPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "stop" => Ok(Self::Stop),
            other => Err(DomainError::parse(format!(
                "Unknown ability policy: {}",
                other
            ))),
        }
    }
}

/// Add the race's ability bonuses, in order, to a copy of `base`.
pub fn apply_racial_bonuses(
    base: AbilityScores,
    race: &Race,
    policy: UnknownAbilityPolicy,
) -> AbilityScores {
    let mut scores = base;
    for bonus in &race.ability_bonuses {
        match Ability::from_abbreviation(&bonus.ability_score.name) {
            Some(ability) => *scores.get_mut(ability) += bonus.bonus,
            None => match policy {
                UnknownAbilityPolicy::Skip => continue,
                UnknownAbilityPolicy::Stop => break,
            },
        }
    }
    scores
}

/// Saving throw bonus per ability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingThrows {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl SavingThrows {
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }
}

/// Each save starts at its modifier; the class's saves add the proficiency bonus.
pub fn build_saving_throws(level: i32, scores: &AbilityScores, class: &Class) -> SavingThrows {
    let prof_bonus = proficiency_bonus(level);
    let mut saves = AbilityScores {
        strength: scores.modifier(Ability::Strength),
        dexterity: scores.modifier(Ability::Dexterity),
        constitution: scores.modifier(Ability::Constitution),
        intelligence: scores.modifier(Ability::Intelligence),
        wisdom: scores.modifier(Ability::Wisdom),
        charisma: scores.modifier(Ability::Charisma),
    };

    for save in &class.saving_throws {
        if let Some(ability) = Ability::from_abbreviation(&save.name) {
            *saves.get_mut(ability) += prof_bonus;
        }
    }

    SavingThrows {
        strength: saves.strength,
        dexterity: saves.dexterity,
        constitution: saves.constitution,
        intelligence: saves.intelligence,
        wisdom: saves.wisdom,
        charisma: saves.charisma,
    }
}
