use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ApiReference;
use crate::template::SpellNames;

/// A spell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spell {
    pub index: String,
    pub name: String,
    pub desc: Vec<String>,
    pub higher_level: Vec<String>,
    pub range: String,
    pub components: Vec<String>,
    pub ritual: bool,
    pub duration: String,
    pub concentration: bool,
    pub casting_time: String,
    pub level: i32,
    pub attack_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<SpellDamage>,
    pub school: ApiReference,
    pub classes: Vec<ApiReference>,
    pub subclasses: Vec<ApiReference>,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellDamage {
    pub damage_type: ApiReference,
    pub damage_at_character_level: BTreeMap<String, String>,
}

/// Spells known, indexed by spell level then position.
///
/// The shape is fixed when the book is created from the template's spell names
/// and never changes afterwards; resolution fills slots in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Spellbook(Vec<Vec<Spell>>);

impl Spellbook {
    /// One empty slot per requested spell, same level and index as its name.
    pub fn shaped_like(names: &SpellNames) -> Self {
        Self(
            names
                .level
                .iter()
                .map(|level| vec![Spell::default(); level.len()])
                .collect(),
        )
    }

    pub fn shape(&self) -> Vec<usize> {
        self.0.iter().map(Vec::len).collect()
    }

    pub fn matches_shape(&self, names: &SpellNames) -> bool {
        self.0.len() == names.level.len()
            && self
                .0
                .iter()
                .zip(&names.level)
                .all(|(slots, names)| slots.len() == names.len())
    }

    pub fn levels(&self) -> &[Vec<Spell>] {
        &self.0
    }

    pub fn get(&self, level: usize, index: usize) -> Option<&Spell> {
        self.0.get(level).and_then(|slots| slots.get(index))
    }

    /// Mutable slot access; cannot grow or shrink the book.
    pub fn slot_mut(&mut self, level: usize, index: usize) -> Option<&mut Spell> {
        self.0.get_mut(level).and_then(|slots| slots.get_mut(index))
    }

    /// Total number of spells across all levels.
    pub fn len(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
