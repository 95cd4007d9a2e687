//! Skills and their bonuses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::abilities::{Ability, AbilityScores};
use crate::error::DomainError;
use crate::progression::proficiency_bonus;
use crate::template::CharacterTemplate;

/// The eighteen skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillName {
    Athletics,
    Acrobatics,
    SleightOfHand,
    Stealth,
    Arcana,
    History,
    Investigation,
    Nature,
    Religion,
    AnimalHandling,
    Insight,
    Medicine,
    Perception,
    Survival,
    Deception,
    Intimidation,
    Performance,
    Persuasion,
}

impl SkillName {
    pub const ALL: [SkillName; 18] = [
        SkillName::Athletics,
        SkillName::Acrobatics,
        SkillName::SleightOfHand,
        SkillName::Stealth,
        SkillName::Arcana,
        SkillName::History,
        SkillName::Investigation,
        SkillName::Nature,
        SkillName::Religion,
        SkillName::AnimalHandling,
        SkillName::Insight,
        SkillName::Medicine,
        SkillName::Perception,
        SkillName::Survival,
        SkillName::Deception,
        SkillName::Intimidation,
        SkillName::Performance,
        SkillName::Persuasion,
    ];

    /// Spelling used in templates' proficiency and expertise lists.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Athletics => "Athletics",
            Self::Acrobatics => "Acrobatics",
            Self::SleightOfHand => "SleightOfHand",
            Self::Stealth => "Stealth",
            Self::Arcana => "Arcana",
            Self::History => "History",
            Self::Investigation => "Investigation",
            Self::Nature => "Nature",
            Self::Religion => "Religion",
            Self::AnimalHandling => "AnimalHandling",
            Self::Insight => "Insight",
            Self::Medicine => "Medicine",
            Self::Perception => "Perception",
            Self::Survival => "Survival",
            Self::Deception => "Deception",
            Self::Intimidation => "Intimidation",
            Self::Performance => "Performance",
            Self::Persuasion => "Persuasion",
        }
    }

    /// Human-readable name ("Sleight of Hand").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::SleightOfHand => "Sleight of Hand",
            Self::AnimalHandling => "Animal Handling",
            other => other.as_str(),
        }
    }

    pub fn governing_ability(&self) -> Ability {
        match self {
            Self::Athletics => Ability::Strength,
            Self::Acrobatics | Self::SleightOfHand | Self::Stealth => Ability::Dexterity,
            Self::Arcana | Self::History | Self::Investigation | Self::Nature | Self::Religion => {
                Ability::Intelligence
            }
            Self::AnimalHandling
            | Self::Insight
            | Self::Medicine
            | Self::Perception
            | Self::Survival => Ability::Wisdom,
            Self::Deception | Self::Intimidation | Self::Performance | Self::Persuasion => {
                Ability::Charisma
            }
        }
    }
}

impl fmt::Display for SkillName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for SkillName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|skill| skill.as_str() == s || skill.display_name() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown skill: {}", s)))
    }
}

/// A single skill on the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: SkillName,
    pub ability: Ability,
    pub bonus: i32,
    pub proficient: bool,
    pub expertise: bool,
}

/// Bonus for one skill.
///
/// Starts at the governing ability's modifier. Proficiency adds the proficiency
/// bonus, expertise adds it again; the two are checked independently.
pub fn build_skill(template: &CharacterTemplate, scores: &AbilityScores, name: SkillName) -> Skill {
    let ability = name.governing_ability();
    let prof_bonus = proficiency_bonus(template.level);
    let mut bonus = scores.modifier(ability);

    let proficient = template.is_proficient(name.as_str());
    if proficient {
        bonus += prof_bonus;
    }
    let expertise = template.has_expertise(name.as_str());
    if expertise {
        bonus += prof_bonus;
    }

    Skill {
        name,
        ability,
        bonus,
        proficient,
        expertise,
    }
}

/// All eighteen skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SkillList {
    pub athletics: Skill,
    pub acrobatics: Skill,
    pub sleight_of_hand: Skill,
    pub stealth: Skill,
    pub arcana: Skill,
    pub history: Skill,
    pub investigation: Skill,
    pub nature: Skill,
    pub religion: Skill,
    pub animal_handling: Skill,
    pub insight: Skill,
    pub medicine: Skill,
    pub perception: Skill,
    pub survival: Skill,
    pub deception: Skill,
    pub intimidation: Skill,
    pub performance: Skill,
    pub persuasion: Skill,
}

impl SkillList {
    pub fn get(&self, name: SkillName) -> &Skill {
        match name {
            SkillName::Athletics => &self.athletics,
            SkillName::Acrobatics => &self.acrobatics,
            SkillName::SleightOfHand => &self.sleight_of_hand,
            SkillName::Stealth => &self.stealth,
            SkillName::Arcana => &self.arcana,
            SkillName::History => &self.history,
            SkillName::Investigation => &self.investigation,
            SkillName::Nature => &self.nature,
            SkillName::Religion => &self.religion,
            SkillName::AnimalHandling => &self.animal_handling,
            SkillName::Insight => &self.insight,
            SkillName::Medicine => &self.medicine,
            SkillName::Perception => &self.perception,
            SkillName::Survival => &self.survival,
            SkillName::Deception => &self.deception,
            SkillName::Intimidation => &self.intimidation,
            SkillName::Performance => &self.performance,
            SkillName::Persuasion => &self.persuasion,
        }
    }

    /// Skills in the fixed sheet order.
    pub fn iter(&self) -> impl Iterator<Item = &Skill> + '_ {
        SkillName::ALL.into_iter().map(move |name| self.get(name))
    }
}

pub fn build_skill_list(template: &CharacterTemplate, scores: &AbilityScores) -> SkillList {
    let skill = |name| build_skill(template, scores, name);
    SkillList {
        athletics: skill(SkillName::Athletics),
        acrobatics: skill(SkillName::Acrobatics),
        sleight_of_hand: skill(SkillName::SleightOfHand),
        stealth: skill(SkillName::Stealth),
        arcana: skill(SkillName::Arcana),
        history: skill(SkillName::History),
        investigation: skill(SkillName::Investigation),
        nature: skill(SkillName::Nature),
        religion: skill(SkillName::Religion),
        animal_handling: skill(SkillName::AnimalHandling),
        insight: skill(SkillName::Insight),
        medicine: skill(SkillName::Medicine),
        perception: skill(SkillName::Perception),
        survival: skill(SkillName::Survival),
        deception: skill(SkillName::Deception),
        intimidation: skill(SkillName::Intimidation),
        performance: skill(SkillName::Performance),
        persuasion: skill(SkillName::Persuasion),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rogue(level: i32, proficiencies: &[&str], expertise: &[&str]) -> CharacterTemplate {
        CharacterTemplate {
            name: "Vex".into(),
            level,
            race: "halfling".into(),
            class: "rogue".into(),
            ability_scores: AbilityScores::new(8, 16, 12, 13, 10, 14),
            proficiencies: proficiencies.iter().map(|s| s.to_string()).collect(),
            expertise: expertise.iter().map(|s| s.to_string()).collect(),
            ..CharacterTemplate::empty()
        }
    }

    #[test]
    fn governing_ability_table() {
        let expected = [
            (SkillName::Athletics, Ability::Strength),
            (SkillName::Acrobatics, Ability::Dexterity),
            (SkillName::SleightOfHand, Ability::Dexterity),
            (SkillName::Stealth, Ability::Dexterity),
            (SkillName::Arcana, Ability::Intelligence),
            (SkillName::History, Ability::Intelligence),
            (SkillName::Investigation, Ability::Intelligence),
            (SkillName::Nature, Ability::Intelligence),
            (SkillName::Religion, Ability::Intelligence),
            (SkillName::AnimalHandling, Ability::Wisdom),
            (SkillName::Insight, Ability::Wisdom),
            (SkillName::Medicine, Ability::Wisdom),
            (SkillName::Perception, Ability::Wisdom),
            (SkillName::Survival, Ability::Wisdom),
            (SkillName::Deception, Ability::Charisma),
            (SkillName::Intimidation, Ability::Charisma),
            (SkillName::Performance, Ability::Charisma),
            (SkillName::Persuasion, Ability::Charisma),
        ];
        assert_eq!(expected.len(), SkillName::ALL.len());
        for (skill, ability) in expected {
            assert_eq!(skill.governing_ability(), ability, "{}", skill);
        }
    }

    #[test]
    fn untrained_skill_is_just_the_modifier() {
        let template = rogue(1, &[], &[]);
        let skill = build_skill(&template, &template.ability_scores, SkillName::Athletics);

        assert_eq!(skill.bonus, -1);
        assert!(!skill.proficient);
        assert!(!skill.expertise);
    }

    #[test]
    fn proficiency_adds_bonus_once() {
        let template = rogue(5, &["Stealth"], &[]);
        let skill = build_skill(&template, &template.ability_scores, SkillName::Stealth);

        assert_eq!(skill.bonus, 3 + 3);
        assert!(skill.proficient);
        assert!(!skill.expertise);
    }

    #[test]
    fn proficiency_and_expertise_stack() {
        let template = rogue(5, &["Stealth"], &["Stealth"]);
        let skill = build_skill(&template, &template.ability_scores, SkillName::Stealth);

        assert_eq!(skill.bonus, 3 + 2 * 3);
        assert!(skill.proficient);
        assert!(skill.expertise);
    }

    #[test]
    fn expertise_without_proficiency_still_adds_once() {
        let template = rogue(1, &[], &["Deception"]);
        let skill = build_skill(&template, &template.ability_scores, SkillName::Deception);

        assert_eq!(skill.bonus, 2 + 2);
        assert!(!skill.proficient);
        assert!(skill.expertise);
    }

    #[test]
    fn names_match_template_spelling_exactly() {
        let template = rogue(1, &["Sleight of Hand", "stealth"], &[]);
        let list = build_skill_list(&template, &template.ability_scores);

        assert!(!list.sleight_of_hand.proficient);
        assert!(!list.stealth.proficient);

        let template = rogue(1, &["SleightOfHand"], &[]);
        let list = build_skill_list(&template, &template.ability_scores);
        assert!(list.sleight_of_hand.proficient);
    }

    #[test]
    fn skill_list_has_all_eighteen_in_order() {
        let template = rogue(1, &[], &[]);
        let list = build_skill_list(&template, &template.ability_scores);

        let names: Vec<SkillName> = list.iter().map(|s| s.name).collect();
        assert_eq!(names, SkillName::ALL.to_vec());
        assert_eq!(list.get(SkillName::Persuasion).bonus, 2);
        assert_eq!(list.get(SkillName::Arcana).bonus, 1);
    }

    #[test]
    fn uses_passed_scores_not_template_scores() {
        let template = rogue(1, &[], &[]);
        let adjusted = AbilityScores {
            strength: 12,
            ..template.ability_scores
        };
        let skill = build_skill(&template, &adjusted, SkillName::Athletics);
        assert_eq!(skill.bonus, 1);
    }

    #[test]
    fn out_of_range_level_applies_sentinel() {
        let template = rogue(0, &["Stealth"], &[]);
        let skill = build_skill(&template, &template.ability_scores, SkillName::Stealth);
        assert_eq!(skill.bonus, 3 - 1);
    }

    #[test]
    fn skill_name_parses_both_spellings() {
        assert_eq!("AnimalHandling".parse::<SkillName>().unwrap(), SkillName::AnimalHandling);
        assert_eq!("Animal Handling".parse::<SkillName>().unwrap(), SkillName::AnimalHandling);
        assert!("Cooking".parse::<SkillName>().is_err());
    }
}
