//! Reference resources fetched from the rules service.
//!
//! Every resource kind is created empty, handed to a fetcher through a
//! [`ReferenceTarget`], and populated in place from the service's JSON payload.
//! Once populated a resource is never mutated again.

mod class;
mod equipment;
mod race;
mod spell;

pub use class::{Class, Spellcasting};
pub use equipment::{
    Armor, ArmorClass, Cost, Damage, EquipmentBase, Inventory, Item, Weapon, WeaponRange,
};
pub use race::{AbilityBonus, Race};
pub use spell::{Spell, SpellDamage, Spellbook};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Endpoint category on the reference service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Races,
    Classes,
    Equipment,
    Spells,
}

impl Category {
    /// Path segment under the service base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Races => "races",
            Self::Classes => "classes",
            Self::Equipment => "equipment",
            Self::Spells => "spells",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// The six resource kinds a character references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Race,
    Class,
    Armor,
    Weapon,
    Item,
    Spell,
}

impl ResourceKind {
    pub fn category(&self) -> Category {
        match self {
            Self::Race => Category::Races,
            Self::Class => Category::Classes,
            Self::Armor | Self::Weapon | Self::Item => Category::Equipment,
            Self::Spell => Category::Spells,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Race => "race",
            Self::Class => "class",
            Self::Armor => "armor",
            Self::Weapon => "weapon",
            Self::Item => "item",
            Self::Spell => "spell",
        };
        f.write_str(name)
    }
}

/// Link to another resource as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiReference {
    pub index: String,
    pub name: String,
    pub url: String,
}

impl ApiReference {
    pub fn new(index: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Mutable handle to one empty resource, tagged by kind.
///
/// Fetchers receive this instead of a concrete type so a single object-safe
/// capability can populate any resource kind.
#[derive(Debug)]
pub enum ReferenceTarget<'a> {
    Race(&'a mut Race),
    Class(&'a mut Class),
    Armor(&'a mut Armor),
    Weapon(&'a mut Weapon),
    Item(&'a mut Item),
    Spell(&'a mut Spell),
}

impl ReferenceTarget<'_> {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Race(_) => ResourceKind::Race,
            Self::Class(_) => ResourceKind::Class,
            Self::Armor(_) => ResourceKind::Armor,
            Self::Weapon(_) => ResourceKind::Weapon,
            Self::Item(_) => ResourceKind::Item,
            Self::Spell(_) => ResourceKind::Spell,
        }
    }

    pub fn category(&self) -> Category {
        self.kind().category()
    }

    /// Decode a JSON payload into the target.
    ///
    /// On error the target is left untouched.
    pub fn populate(&mut self, body: &[u8]) -> Result<(), serde_json::Error> {
        match self {
            Self::Race(target) => **target = serde_json::from_slice(body)?,
            Self::Class(target) => **target = serde_json::from_slice(body)?,
            Self::Armor(target) => **target = serde_json::from_slice(body)?,
            Self::Weapon(target) => **target = serde_json::from_slice(body)?,
            Self::Item(target) => **target = serde_json::from_slice(body)?,
            Self::Spell(target) => **target = serde_json::from_slice(body)?,
        }
        Ok(())
    }
}

/// A resource model that can be fetched by name.
pub trait Resource: Default + Send + 'static {
    const KIND: ResourceKind;

    fn as_target(&mut self) -> ReferenceTarget<'_>;
}

macro_rules! impl_resource {
    ($ty:ident) => {
        impl Resource for $ty {
            const KIND: ResourceKind = ResourceKind::$ty;

            fn as_target(&mut self) -> ReferenceTarget<'_> {
                ReferenceTarget::$ty(self)
            }
        }
    };
}

impl_resource!(Race);
impl_resource!(Class);
impl_resource!(Armor);
impl_resource!(Weapon);
impl_resource!(Item);
impl_resource!(Spell);
