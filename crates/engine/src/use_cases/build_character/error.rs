//! Character build errors.

use charforge_domain::DomainError;

use crate::use_cases::resolve::ResolveError;

/// Errors that can occur while building a character.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Could not resolve references: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Could not derive character: {0}")]
    Domain(#[from] DomainError),
}
