//! The assembled character record.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::abilities::{
    apply_racial_bonuses, build_saving_throws, Ability, AbilityScores, SavingThrows,
    UnknownAbilityPolicy,
};
use crate::combat::{build_combat_stats, CombatStats, HitPointMethod};
use crate::error::DomainError;
use crate::resources::{Class, Inventory, Race, Spellbook};
use crate::skills::{build_skill_list, SkillList};
use crate::template::CharacterTemplate;

/// Everything fetched from the reference service for one template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedResources {
    pub race: Race,
    pub class: Class,
    pub inventory: Inventory,
    pub spellbook: Spellbook,
}

/// A fully built character. Never updated after assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub level: i32,
    pub race: Race,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subrace: Option<String>,
    pub class: Class,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subclass: Option<String>,
    pub stats: CombatStats,
    pub ability_scores: AbilityScores,
    pub saving_throws: SavingThrows,
    pub skills: SkillList,
    #[serde(default)]
    pub proficiencies: Vec<String>,
    #[serde(default)]
    pub inventory: Inventory,
    #[serde(default)]
    pub spells: Spellbook,
}

/// Derive scores, skills, saves and combat stats, then build the record.
///
/// Racial bonuses are applied first; every later step reads the adjusted
/// scores. `roll` is only called for [`HitPointMethod::Rolled`].
pub fn assemble_character(
    template: &CharacterTemplate,
    resources: ResolvedResources,
    method: HitPointMethod,
    policy: UnknownAbilityPolicy,
    roll: &mut dyn FnMut(i32) -> i32,
) -> Result<Character, DomainError> {
    let ResolvedResources {
        race,
        class,
        inventory,
        spellbook,
    } = resources;

    let ability_scores = apply_racial_bonuses(template.ability_scores, &race, policy);
    let skills = build_skill_list(template, &ability_scores);
    let saving_throws = build_saving_throws(template.level, &ability_scores, &class);
    let stats = build_combat_stats(
        template.level,
        &ability_scores,
        &class,
        method,
        inventory.first_armor(),
        roll,
    )?;

    Ok(Character {
        name: template.name.clone(),
        level: template.level,
        race,
        subrace: template.subrace.clone(),
        class,
        subclass: template.subclass.clone(),
        stats,
        ability_scores,
        saving_throws,
        skills,
        proficiencies: template.proficiencies.clone(),
        inventory,
        spells: spellbook,
    })
}

fn signed(value: i32) -> String {
    format!("{:+}", value)
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Level: {}", self.level)?;
        match &self.subrace {
            Some(subrace) => writeln!(f, "Race: {} ({})", self.race.name, subrace)?,
            None => writeln!(f, "Race: {}", self.race.name)?,
        }
        match &self.subclass {
            Some(subclass) => writeln!(f, "Class: {} ({})", self.class.name, subclass)?,
            None => writeln!(f, "Class: {}", self.class.name)?,
        }
        writeln!(
            f,
            "HP: {}  Temp HP: {}  AC: {}  Speed: {}",
            self.stats.hp, self.stats.temp_hp, self.stats.ac, self.stats.speed
        )?;
        writeln!(f)?;

        writeln!(f, "Ability Scores:")?;
        for ability in Ability::ALL {
            writeln!(
                f,
                "    - {:<13} {:>2} ({})",
                format!("{}:", ability),
                self.ability_scores.get(ability),
                signed(self.ability_scores.modifier(ability))
            )?;
        }

        writeln!(f, "Saving Throws:")?;
        for ability in Ability::ALL {
            writeln!(
                f,
                "    - {:<13} {}",
                format!("{}:", ability),
                signed(self.saving_throws.get(ability))
            )?;
        }

        writeln!(f, "Skills:")?;
        for skill in self.skills.iter() {
            let marker = match (skill.proficient, skill.expertise) {
                (_, true) => "**",
                (true, false) => "*",
                (false, false) => "",
            };
            writeln!(
                f,
                "    - {:<16} {} ({}){}",
                format!("{}:", skill.name),
                signed(skill.bonus),
                skill.ability.abbreviation(),
                marker
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Equipment:")?;
        writeln!(f, "    - Armor:")?;
        for armor in &self.inventory.armor {
            writeln!(f, "        - {}", armor.base.name)?;
        }
        writeln!(f, "    - Weapons:")?;
        for weapon in &self.inventory.weapons {
            writeln!(f, "        - {}", weapon.base.name)?;
        }
        writeln!(f, "    - Items:")?;
        for item in &self.inventory.items {
            writeln!(f, "        - {}", item.base.name)?;
        }

        if !self.spells.is_empty() {
            writeln!(f)?;
            writeln!(f, "Spells:")?;
            for (level, spells) in self.spells.levels().iter().enumerate() {
                if spells.is_empty() {
                    continue;
                }
                if level == 0 {
                    writeln!(f, "  Cantrips:")?;
                } else {
                    writeln!(f, "  Level {}:", level)?;
                }
                for spell in spells {
                    writeln!(f, "    - {}", spell.name)?;
                }
            }
        }

        Ok(())
    }
}
