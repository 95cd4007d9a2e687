//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - Reference data lookups (could swap the public 5e API for a local mirror)
//! - Random (for testing)

mod error;
mod external;
mod testing;

// =============================================================================
// External Service Ports
// =============================================================================
pub use error::FetchError;
pub use external::ReferenceFetcher;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::RandomPort;

#[cfg(test)]
pub use testing::MockRandomPort;
