//! Charforge Engine library.
//!
//! Builds fifth edition characters from TOML templates by pulling reference
//! data from a 5e rules API.
//!
//! ## Structure
//!
//! - `use_cases/` - Reference resolution and character building
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Test doubles shared by unit tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
