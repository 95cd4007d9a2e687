//! Test fixtures and test doubles.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{StubFetcher, fixtures};
//!
//! #[tokio::test]
//! async fn resolves_dwarf() {
//!     let fetcher = StubFetcher::new()
//!         .with_fixture(ResourceKind::Race, "Dwarf", fixtures::race("Dwarf", &[("CON", 2)]));
//!     // ... test logic
//! }
//! ```

pub mod fixtures;

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use charforge_domain::{slugify, ReferenceTarget, ResourceKind};
use serde_json::Value;

use crate::infrastructure::ports::{FetchError, ReferenceFetcher};

/// In-memory reference service.
///
/// Lookups are keyed by category path and slug, exactly like the real client,
/// so `"Fire Bolt"` and `"fire bolt"` hit the same fixture. Unknown keys answer
/// with a 404 status error.
#[derive(Default)]
pub struct StubFetcher {
    fixtures: HashMap<String, Value>,
    failures: HashMap<String, FetchError>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<String>>,
    finished: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(kind: ResourceKind, name: &str) -> String {
        format!("{}/{}", kind.category().path(), slugify(name))
    }

    pub fn with_fixture(mut self, kind: ResourceKind, name: &str, body: Value) -> Self {
        self.fixtures.insert(Self::key(kind, name), body);
        self
    }

    /// Make a lookup fail with `error` (after its delay, if any).
    pub fn with_failure(mut self, kind: ResourceKind, name: &str, error: FetchError) -> Self {
        self.failures.insert(Self::key(kind, name), error);
        self
    }

    /// Hold a lookup back so completion order differs from launch order.
    pub fn with_delay(mut self, kind: ResourceKind, name: &str, delay: Duration) -> Self {
        self.delays.insert(Self::key(kind, name), delay);
        self
    }

    /// Keys of every lookup, in the order they started.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Keys of every lookup, in the order they completed.
    pub fn finished(&self) -> Vec<String> {
        self.finished
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }

    /// Number of lookups against one category path.
    pub fn calls_to(&self, category: &str) -> usize {
        let prefix = format!("{}/", category);
        self.calls()
            .iter()
            .filter(|key| key.starts_with(&prefix))
            .count()
    }
}

#[async_trait]
impl ReferenceFetcher for StubFetcher {
    async fn fetch(&self, mut target: ReferenceTarget<'_>, name: &str) -> Result<(), FetchError> {
        let key = Self::key(target.kind(), name);
        let url = format!("stub://{}", key);

        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(key.clone());

        if let Some(delay) = self.delays.get(&key) {
            tokio::time::sleep(*delay).await;
        }

        self.finished
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(key.clone());

        if let Some(error) = self.failures.get(&key) {
            return Err(error.clone());
        }

        let Some(fixture) = self.fixtures.get(&key) else {
            return Err(FetchError::status(url, 404, "Not Found", ""));
        };
        let body = serde_json::to_vec(fixture).map_err(|e| FetchError::decode(&url, e))?;
        target.populate(&body).map_err(|e| FetchError::decode(url, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charforge_domain::{Race, Resource, Spell};

    #[tokio::test]
    async fn serves_fixture_by_slug() {
        let fetcher = StubFetcher::new().with_fixture(
            ResourceKind::Spell,
            "Fire Bolt",
            fixtures::spell("Fire Bolt", 0),
        );

        let mut spell = Spell::default();
        fetcher.fetch(spell.as_target(), "fire bolt").await.unwrap();

        assert_eq!(spell.name, "Fire Bolt");
        assert_eq!(fetcher.calls(), vec!["spells/fire-bolt".to_string()]);
    }

    #[tokio::test]
    async fn unknown_name_is_not_found() {
        let fetcher = StubFetcher::new();
        let mut race = Race::default();

        let err = fetcher.fetch(race.as_target(), "Kender").await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(fetcher.calls_to("races"), 1);
    }

    #[tokio::test]
    async fn injected_failure_wins_over_fixture() {
        let fetcher = StubFetcher::new()
            .with_fixture(ResourceKind::Race, "Elf", fixtures::race("Elf", &[]))
            .with_failure(
                ResourceKind::Race,
                "Elf",
                FetchError::transport("stub://races/elf", "connection reset"),
            );

        let mut race = Race::default();
        let err = fetcher.fetch(race.as_target(), "Elf").await.unwrap_err();

        assert!(matches!(err, FetchError::Transport { .. }));
    }

    #[tokio::test]
    async fn mistyped_fixture_is_decode_error() {
        let fetcher = StubFetcher::new().with_fixture(
            ResourceKind::Race,
            "Elf",
            serde_json::json!({"name": "Elf", "speed": "fast"}),
        );

        let mut race = Race::default();
        let err = fetcher.fetch(race.as_target(), "Elf").await.unwrap_err();

        assert!(matches!(err, FetchError::Decode { .. }));
        assert_eq!(err.url(), "stub://races/elf");
    }
}
