//! Use cases - User story orchestration.
//!
//! `resolve` fetches a template's references; `build_character` turns the
//! resolved references into a finished character.

pub mod build_character;
pub mod resolve;

pub use build_character::{BuildCharacter, BuildError};
pub use resolve::{ResolveCharacter, ResolveError, ResolveStage};
