//! Unified error types for the domain layer
//!
//! Derivation and template validation share one error type so callers can
//! report failures without falling back to strings or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., level or ability score out of range)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Hit die size has no average and cannot be rolled
    #[error("Unsupported hit die: d{0}")]
    UnsupportedHitDie(i32),

    /// Parse error (for enums parsed from names)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for template constraint violations.
    ///
    /// Use this when a value is outside the range the rules allow:
    /// - Level outside 1-20
    /// - Ability score outside 0-20
    /// - Race or class not in the supported ruleset
    ///
    /// # Example
    /// ```ignore
    /// if !(1..=20).contains(&level) {
    ///     return Err(DomainError::validation("invalid level"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an unsupported hit die error
    pub fn unsupported_hit_die(hit_die: i32) -> Self {
        Self::UnsupportedHitDie(hit_die)
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
