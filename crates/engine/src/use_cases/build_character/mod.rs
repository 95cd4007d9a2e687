//! Character build use case.
//!
//! Resolves the template's references, then derives scores, skills, saves and
//! combat stats in one pass. Nothing is returned unless every step succeeds.

mod error;

pub use error::BuildError;

use std::sync::Arc;

use charforge_domain::{
    assemble_character, Character, CharacterTemplate, HitPointMethod, UnknownAbilityPolicy,
};

use crate::infrastructure::ports::RandomPort;
use crate::use_cases::resolve::ResolveCharacter;

pub struct BuildCharacter {
    resolve: ResolveCharacter,
    random: Arc<dyn RandomPort>,
    policy: UnknownAbilityPolicy,
}

impl BuildCharacter {
    pub fn new(
        resolve: ResolveCharacter,
        random: Arc<dyn RandomPort>,
        policy: UnknownAbilityPolicy,
    ) -> Self {
        Self {
            resolve,
            random,
            policy,
        }
    }

    pub async fn execute(
        &self,
        template: &CharacterTemplate,
        method: HitPointMethod,
    ) -> Result<Character, BuildError> {
        tracing::info!(
            name = %template.name,
            level = template.level,
            race = %template.race,
            class = %template.class,
            "Building character"
        );

        let resources = self.resolve.resolve(template).await?;

        let mut roll = |die: i32| self.random.gen_range(1, die);
        let character = assemble_character(template, resources, method, self.policy, &mut roll)?;

        tracing::info!(
            name = %character.name,
            hp = character.stats.hp,
            ac = character.stats.ac,
            "Character built"
        );
        Ok(character)
    }
}
