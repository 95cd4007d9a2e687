//! Reference resolution use case.
//!
//! Fetches every resource a template names, grouped into stages that run one
//! after another: race and class, then inventory, then spells. Within a stage
//! every lookup is its own spawned task and the stage waits for all of them
//! before looking at results. A failed stage stops the pipeline; sibling
//! lookups already launched in that stage still run to completion.

mod error;

pub use error::{ResolveError, ResolveStage};

use std::sync::Arc;

use futures_util::future::{join, join3, join_all};
use tokio::task::{JoinError, JoinHandle};

use charforge_domain::{
    Armor, CharacterTemplate, Class, Inventory, Item, Race, ResolvedResources, Resource, Spell,
    SpellNames, Spellbook, TemplateInventory, Weapon,
};

use crate::infrastructure::ports::{FetchError, ReferenceFetcher};

type Worker<R> = JoinHandle<Result<R, FetchError>>;

/// Resolves a template's references through a [`ReferenceFetcher`].
#[derive(Clone)]
pub struct ResolveCharacter {
    fetcher: Arc<dyn ReferenceFetcher>,
}

impl ResolveCharacter {
    pub fn new(fetcher: Arc<dyn ReferenceFetcher>) -> Self {
        Self { fetcher }
    }

    /// Resolve race, class, inventory and spells, failing on the first bad stage.
    pub async fn resolve(
        &self,
        template: &CharacterTemplate,
    ) -> Result<ResolvedResources, ResolveError> {
        let (race, class) = self.resolve_race_and_class(template).await?;
        let inventory = self.resolve_inventory(&template.inventory).await?;

        let mut spellbook = Spellbook::shaped_like(&template.spells);
        self.resolve_spells(&template.spells, &mut spellbook).await?;

        Ok(ResolvedResources {
            race,
            class,
            inventory,
            spellbook,
        })
    }

    /// Race and class lookups, run concurrently.
    pub async fn resolve_race_and_class(
        &self,
        template: &CharacterTemplate,
    ) -> Result<(Race, Class), ResolveError> {
        let stage = ResolveStage::RaceAndClass;
        tracing::info!(stage = %stage, race = %template.race, class = %template.class, "Resolving stage");

        let race = self.spawn::<Race>(&template.race);
        let class = self.spawn::<Class>(&template.class);
        let (race, class) = join(race, class).await;

        let race = settle(stage, template.race.clone(), race);
        let class = settle(stage, template.class.clone(), class);
        let resolved = (race?, class?);

        tracing::info!(stage = %stage, "Stage resolved");
        Ok(resolved)
    }

    /// One lookup per armor, weapon and item name; lists keep the template's order.
    pub async fn resolve_inventory(
        &self,
        names: &TemplateInventory,
    ) -> Result<Inventory, ResolveError> {
        let stage = ResolveStage::Inventory;
        tracing::info!(stage = %stage, count = names.len(), "Resolving stage");

        let armor = self.spawn_all::<Armor>(&names.armor);
        let weapons = self.spawn_all::<Weapon>(&names.weapons);
        let items = self.spawn_all::<Item>(&names.items);

        let (armor, weapons, items) = join3(
            collect(stage, armor),
            collect(stage, weapons),
            collect(stage, items),
        )
        .await;

        let inventory = Inventory {
            armor: armor?,
            weapons: weapons?,
            items: items?,
        };

        tracing::info!(stage = %stage, count = names.len(), "Stage resolved");
        Ok(inventory)
    }

    /// Fill every slot of `book` from the name at the same level and index.
    ///
    /// `book` must already have the shape of `names`; a mismatch is rejected
    /// before any lookup starts.
    pub async fn resolve_spells(
        &self,
        names: &SpellNames,
        book: &mut Spellbook,
    ) -> Result<(), ResolveError> {
        let stage = ResolveStage::Spells;

        if !book.matches_shape(names) {
            return Err(ResolveError::SpellbookShape {
                expected: names.level.iter().map(Vec::len).collect(),
                actual: book.shape(),
            });
        }

        tracing::info!(stage = %stage, count = names.total(), "Resolving stage");

        let workers = self.spawn_all::<Spell>(names.level.iter().flatten());
        let spells = collect(stage, workers).await?;

        let slots = names
            .level
            .iter()
            .enumerate()
            .flat_map(|(level, spells)| (0..spells.len()).map(move |index| (level, index)));
        for ((level, index), spell) in slots.zip(spells) {
            if let Some(slot) = book.slot_mut(level, index) {
                *slot = spell;
            }
        }

        tracing::info!(stage = %stage, count = names.total(), "Stage resolved");
        Ok(())
    }

    fn spawn<R: Resource>(&self, name: &str) -> Worker<R> {
        let fetcher = Arc::clone(&self.fetcher);
        let name = name.to_string();

        tokio::spawn(async move {
            let mut resource = R::default();
            let result = fetcher.fetch(resource.as_target(), &name).await;
            result.map(|()| resource)
        })
    }

    fn spawn_all<'a, R: Resource>(
        &self,
        names: impl IntoIterator<Item = &'a String>,
    ) -> Vec<(String, Worker<R>)> {
        names
            .into_iter()
            .map(|name| (name.clone(), self.spawn::<R>(name)))
            .collect()
    }
}

/// Turn one finished worker into a resource or a stage error.
fn settle<R: Resource>(
    stage: ResolveStage,
    name: String,
    joined: Result<Result<R, FetchError>, JoinError>,
) -> Result<R, ResolveError> {
    match joined {
        Ok(Ok(resource)) => Ok(resource),
        Ok(Err(source)) => {
            tracing::warn!(
                stage = %stage,
                kind = %R::KIND,
                name = %name,
                error = %source,
                "Reference lookup failed"
            );
            Err(ResolveError::Fetch {
                stage,
                kind: R::KIND,
                name,
                source,
            })
        }
        Err(join_error) => {
            tracing::warn!(stage = %stage, kind = %R::KIND, name = %name, error = %join_error, "Fetch worker did not complete");
            Err(ResolveError::WorkerPanicked {
                stage,
                message: join_error.to_string(),
            })
        }
    }
}

/// Wait for every worker, then return all resources in launch order or the
/// error of the earliest failed position.
async fn collect<R: Resource>(
    stage: ResolveStage,
    workers: Vec<(String, Worker<R>)>,
) -> Result<Vec<R>, ResolveError> {
    let (names, handles): (Vec<String>, Vec<Worker<R>>) = workers.into_iter().unzip();
    let joined = join_all(handles).await;

    let mut resolved = Vec::with_capacity(joined.len());
    let mut first_error = None;
    for (name, result) in names.into_iter().zip(joined) {
        match settle(stage, name, result) {
            Ok(resource) => resolved.push(resource),
            Err(e) => {
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(resolved),
    }
}
