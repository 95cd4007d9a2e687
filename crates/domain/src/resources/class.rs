use serde::{Deserialize, Serialize};

use super::ApiReference;

/// A character class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Class {
    pub index: String,
    pub name: String,
    pub hit_die: i32,
    pub proficiencies: Vec<ApiReference>,
    /// Saving throw proficiencies; `name` holds the ability abbreviation.
    pub saving_throws: Vec<ApiReference>,
    pub subclasses: Vec<ApiReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spellcasting: Option<Spellcasting>,
    pub url: String,
}

/// Spellcasting block for caster classes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spellcasting {
    pub level: i32,
    pub spellcasting_ability: ApiReference,
}
