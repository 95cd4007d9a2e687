//! Hit points, armor class and speed.

use serde::{Deserialize, Serialize};

use crate::abilities::{Ability, AbilityScores};
use crate::error::DomainError;
use crate::resources::{Armor, Class};

/// Walking speed given to every character.
pub const BASE_SPEED: i32 = 30;

/// Unarmored base before ability modifiers.
const UNARMORED_BASE: i32 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    pub hp: i32,
    pub temp_hp: i32,
    pub ac: i32,
    pub speed: i32,
}

/// How hit points are determined per level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitPointMethod {
    #[default]
    Average,
    Rolled,
}

impl HitPointMethod {
    pub fn from_roll_flag(roll: bool) -> Self {
        if roll {
            Self::Rolled
        } else {
            Self::Average
        }
    }
}

/// Fixed per-level average for a hit die.
pub fn average_hit_die(hit_die: i32) -> Result<i32, DomainError> {
    match hit_die {
        6 => Ok(4),
        8 => Ok(5),
        10 => Ok(6),
        12 => Ok(7),
        other => Err(DomainError::unsupported_hit_die(other)),
    }
}

/// Hit points summed over every level up to `level`.
///
/// Each level contributes either the die average or one roll, plus the
/// Constitution modifier. `roll` receives the die size and must return a value
/// in `[1, die]`.
pub fn hit_points(
    level: i32,
    scores: &AbilityScores,
    hit_die: i32,
    method: HitPointMethod,
    roll: &mut dyn FnMut(i32) -> i32,
) -> Result<i32, DomainError> {
    let con_mod = scores.modifier(Ability::Constitution);

    match method {
        HitPointMethod::Average => {
            let average = average_hit_die(hit_die)?;
            Ok((1..=level).map(|_| average + con_mod).sum())
        }
        HitPointMethod::Rolled => {
            if hit_die < 1 {
                return Err(DomainError::unsupported_hit_die(hit_die));
            }
            Ok((1..=level).map(|_| roll(hit_die) + con_mod).sum())
        }
    }
}

/// Armor class from worn armor, else the class's unarmored defense.
///
/// Class names are matched case-sensitively against the display names the
/// reference service returns.
pub fn armor_class(scores: &AbilityScores, class: &Class, armor: Option<&Armor>) -> i32 {
    let dex_mod = scores.modifier(Ability::Dexterity);

    if let Some(armor) = armor {
        let mut ac = armor.armor_class.base;
        if armor.armor_class.dex_bonus {
            ac += dex_mod;
        }
        return ac;
    }

    match class.name.as_str() {
        "Barbarian" => UNARMORED_BASE + dex_mod + scores.modifier(Ability::Constitution),
        "Monk" => UNARMORED_BASE + dex_mod + scores.modifier(Ability::Wisdom),
        _ => UNARMORED_BASE + dex_mod,
    }
}

pub fn build_combat_stats(
    level: i32,
    scores: &AbilityScores,
    class: &Class,
    method: HitPointMethod,
    armor: Option<&Armor>,
    roll: &mut dyn FnMut(i32) -> i32,
) -> Result<CombatStats, DomainError> {
    let hp = hit_points(level, scores, class.hit_die, method, roll)?;

    Ok(CombatStats {
        hp,
        temp_hp: 0,
        ac: armor_class(scores, class, armor),
        speed: BASE_SPEED,
    })
}
