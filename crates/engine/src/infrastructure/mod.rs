//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies and the
//! file collaborators used by the CLI.

pub mod character_files;
pub mod dnd5e_api;
pub mod ports;
pub mod random;
pub mod settings;
pub mod template_files;
