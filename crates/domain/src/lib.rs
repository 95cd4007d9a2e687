//! Character construction rules for the 2014 fifth edition ruleset.
//!
//! Pure and synchronous: resource models decoded from the reference service,
//! the player's template, and the derivations that turn both into a
//! [`Character`]. Randomness is injected by the caller.

pub mod abilities;
pub mod character;
pub mod combat;
pub mod error;
pub mod progression;
pub mod resources;
pub mod skills;
pub mod slug;
pub mod template;

pub use error::DomainError;

pub use abilities::{
    ability_modifier, apply_racial_bonuses, build_saving_throws, Ability, AbilityScores,
    SavingThrows, UnknownAbilityPolicy,
};
pub use character::{assemble_character, Character, ResolvedResources};
pub use combat::{
    armor_class, average_hit_die, build_combat_stats, hit_points, CombatStats, HitPointMethod,
    BASE_SPEED,
};
pub use progression::{proficiency_bonus, PROFICIENCY_BONUS_OUT_OF_RANGE};
pub use resources::{
    AbilityBonus, ApiReference, Armor, ArmorClass, Category, Class, Cost, Damage, EquipmentBase,
    Inventory, Item, Race, ReferenceTarget, Resource, ResourceKind, Spell, SpellDamage,
    Spellbook, Spellcasting, Weapon, WeaponRange,
};
pub use skills::{build_skill, build_skill_list, Skill, SkillList, SkillName};
pub use slug::slugify;
pub use template::{
    CharacterTemplate, SpellNames, TemplateInventory, SPELL_LEVELS, SUPPORTED_CLASSES,
    SUPPORTED_RACES,
};
