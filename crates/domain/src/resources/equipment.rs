use serde::{Deserialize, Serialize};

use super::ApiReference;

/// Fields shared by every piece of equipment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentBase {
    pub index: String,
    pub name: String,
    pub desc: Vec<String>,
    pub special: Vec<String>,
    pub equipment_category: ApiReference,
    pub cost: Cost,
    pub weight: f64,
    pub properties: Vec<ApiReference>,
    pub contents: Vec<ApiReference>,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cost {
    pub quantity: i32,
    pub unit: String,
}

/// Armor such as padded, leather, chain mail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Armor {
    #[serde(flatten)]
    pub base: EquipmentBase,
    pub armor_category: String,
    pub armor_class: ArmorClass,
    pub str_minimum: i32,
    pub stealth_disadvantage: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmorClass {
    pub base: i32,
    /// Whether the Dexterity modifier adds to `base`.
    pub dex_bonus: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bonus: Option<i32>,
}

/// Weapons such as longbow or rapier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weapon {
    #[serde(flatten)]
    pub base: EquipmentBase,
    pub weapon_category: String,
    pub weapon_range: String,
    pub category_range: String,
    pub damage: Damage,
    pub range: WeaponRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two_handed_damage: Option<Damage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Damage {
    pub damage_dice: String,
    pub damage_type: ApiReference,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponRange {
    pub normal: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long: Option<i32>,
}

/// Adventuring gear and other items (abacus, rope, alchemist's fire).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    #[serde(flatten)]
    pub base: EquipmentBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gear_category: Option<ApiReference>,
}

/// Resolved equipment, each list in the template's order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inventory {
    pub armor: Vec<Armor>,
    pub weapons: Vec<Weapon>,
    pub items: Vec<Item>,
}

impl Inventory {
    /// The armor piece used for AC: the first one listed.
    pub fn first_armor(&self) -> Option<&Armor> {
        self.armor.first()
    }

    pub fn is_empty(&self) -> bool {
        self.armor.is_empty() && self.weapons.is_empty() && self.items.is_empty()
    }
}
