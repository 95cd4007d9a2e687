use serde::{Deserialize, Serialize};

use super::ApiReference;

/// Ability score increase granted by a race.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityBonus {
    /// Ability reference; `name` holds the abbreviation (`STR`, `DEX`, ...).
    pub ability_score: ApiReference,
    pub bonus: i32,
}

impl AbilityBonus {
    pub fn new(ability: &str, bonus: i32) -> Self {
        let index = ability.to_lowercase();
        Self {
            ability_score: ApiReference::new(
                index.clone(),
                ability,
                format!("/api/ability-scores/{}", index),
            ),
            bonus,
        }
    }
}

/// A playable race.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Race {
    pub index: String,
    pub name: String,
    pub speed: i32,
    pub ability_bonuses: Vec<AbilityBonus>,
    pub age: String,
    pub alignment: String,
    pub size: String,
    pub size_description: String,
    pub starting_proficiencies: Vec<ApiReference>,
    pub languages: Vec<ApiReference>,
    pub language_desc: String,
    pub traits: Vec<ApiReference>,
    pub subraces: Vec<ApiReference>,
    pub url: String,
}
