//! External service ports.

use async_trait::async_trait;
use charforge_domain::ReferenceTarget;

use super::error::FetchError;

// =============================================================================
// Reference Data Port
// =============================================================================

/// Looks up one named resource and decodes it into an empty target.
///
/// `name` is the label as the player wrote it; implementations slugify it and
/// pick the endpoint from the target's category. On error the target's
/// contents are unspecified.
#[async_trait]
pub trait ReferenceFetcher: Send + Sync {
    async fn fetch(&self, target: ReferenceTarget<'_>, name: &str) -> Result<(), FetchError>;
}
