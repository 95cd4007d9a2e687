//! Reference resolution errors.

use std::fmt;

use charforge_domain::ResourceKind;

use crate::infrastructure::ports::FetchError;

/// Fetch groups, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveStage {
    RaceAndClass,
    Inventory,
    Spells,
}

impl fmt::Display for ResolveStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RaceAndClass => "race and class",
            Self::Inventory => "inventory",
            Self::Spells => "spells",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Failed to fetch {kind} '{name}' ({stage}): {source}")]
    Fetch {
        stage: ResolveStage,
        kind: ResourceKind,
        name: String,
        #[source]
        source: FetchError,
    },

    #[error("Spellbook shape {actual:?} does not match spell names {expected:?}")]
    SpellbookShape {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("Fetch worker failed to complete ({stage}): {message}")]
    WorkerPanicked { stage: ResolveStage, message: String },
}

impl ResolveError {
    pub fn stage(&self) -> ResolveStage {
        match self {
            Self::Fetch { stage, .. } | Self::WorkerPanicked { stage, .. } => *stage,
            Self::SpellbookShape { .. } => ResolveStage::Spells,
        }
    }

    /// The underlying lookup failure, if there was one.
    pub fn fetch_error(&self) -> Option<&FetchError> {
        match self {
            Self::Fetch { source, .. } => Some(source),
            _ => None,
        }
    }
}
