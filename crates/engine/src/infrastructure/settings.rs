//! Application settings read from the environment.
//!
//! Supported environment variables:
//! - `CHARFORGE_API_BASE_URL`: reference API base URL
//! - `CHARFORGE_HTTP_TIMEOUT_SECS`: per-request timeout (range: 1-600)
//! - `CHARFORGE_TEMPLATE_DIR`: where bare template file names are looked up
//! - `CHARFORGE_CHARACTER_DIR`: where built characters are saved
//! - `CHARFORGE_UNKNOWN_ABILITY`: `skip` or `stop` for unrecognised racial bonuses
//!
//! Unparseable values are ignored with a warning and the default is kept.
//! A `.env` file in the working directory is loaded first by the binary.

use std::path::{Path, PathBuf};

use charforge_domain::UnknownAbilityPolicy;

use crate::infrastructure::dnd5e_api::{DEFAULT_DND5E_API_BASE_URL, DEFAULT_DND5E_API_TIMEOUT_SECS};

pub const DEFAULT_TEMPLATE_DIR: &str = "templates";
pub const DEFAULT_CHARACTER_DIR: &str = "characters";

/// Load `<dir>/.env` into the process environment.
///
/// Variables that are already set are not overridden.
pub fn load_dotenv(dir: &Path) -> Result<PathBuf, dotenvy::Error> {
    let path = dir.join(".env");
    dotenvy::from_path(&path)?;
    Ok(path)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub api_base_url: String,
    pub http_timeout_secs: u64,
    pub template_dir: PathBuf,
    pub character_dir: PathBuf,
    pub unknown_ability: UnknownAbilityPolicy,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_DND5E_API_BASE_URL.to_string(),
            http_timeout_secs: DEFAULT_DND5E_API_TIMEOUT_SECS,
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            character_dir: PathBuf::from(DEFAULT_CHARACTER_DIR),
            unknown_ability: UnknownAbilityPolicy::default(),
        }
    }
}

impl AppSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(url) = lookup("CHARFORGE_API_BASE_URL").filter(|v| !v.trim().is_empty()) {
            settings.api_base_url = url.trim().to_string();
        }

        if let Some(val) = lookup("CHARFORGE_HTTP_TIMEOUT_SECS") {
            match val.trim().parse::<u64>() {
                Ok(secs) if (1..=600).contains(&secs) => settings.http_timeout_secs = secs,
                Ok(secs) => {
                    tracing::warn!(secs, "CHARFORGE_HTTP_TIMEOUT_SECS out of range [1, 600], ignoring")
                }
                Err(_) => tracing::warn!(
                    val = %val,
                    "CHARFORGE_HTTP_TIMEOUT_SECS is not a valid u64, ignoring"
                ),
            }
        }

        if let Some(dir) = lookup("CHARFORGE_TEMPLATE_DIR").filter(|v| !v.trim().is_empty()) {
            settings.template_dir = PathBuf::from(dir);
        }

        if let Some(dir) = lookup("CHARFORGE_CHARACTER_DIR").filter(|v| !v.trim().is_empty()) {
            settings.character_dir = PathBuf::from(dir);
        }

        if let Some(val) = lookup("CHARFORGE_UNKNOWN_ABILITY") {
            match val.parse::<UnknownAbilityPolicy>() {
                Ok(policy) => settings.unknown_ability = policy,
                Err(_) => tracing::warn!(
                    val = %val,
                    "CHARFORGE_UNKNOWN_ABILITY must be 'skip' or 'stop', ignoring"
                ),
            }
        }

        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let settings = AppSettings::from_lookup(lookup(&[]));
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.api_base_url, DEFAULT_DND5E_API_BASE_URL);
        assert_eq!(settings.http_timeout_secs, 30);
        assert_eq!(settings.template_dir, PathBuf::from("templates"));
        assert_eq!(settings.character_dir, PathBuf::from("characters"));
        assert_eq!(settings.unknown_ability, UnknownAbilityPolicy::Skip);
    }

    #[test]
    fn reads_every_variable() {
        let settings = AppSettings::from_lookup(lookup(&[
            ("CHARFORGE_API_BASE_URL", "http://localhost:3000/api/2014"),
            ("CHARFORGE_HTTP_TIMEOUT_SECS", "5"),
            ("CHARFORGE_TEMPLATE_DIR", "/tmp/templates"),
            ("CHARFORGE_CHARACTER_DIR", "/tmp/out"),
            ("CHARFORGE_UNKNOWN_ABILITY", "Stop"),
        ]));

        assert_eq!(settings.api_base_url, "http://localhost:3000/api/2014");
        assert_eq!(settings.http_timeout_secs, 5);
        assert_eq!(settings.template_dir, PathBuf::from("/tmp/templates"));
        assert_eq!(settings.character_dir, PathBuf::from("/tmp/out"));
        assert_eq!(settings.unknown_ability, UnknownAbilityPolicy::Stop);
    }

    #[test]
    fn bad_values_keep_defaults() {
        let settings = AppSettings::from_lookup(lookup(&[
            ("CHARFORGE_API_BASE_URL", "   "),
            ("CHARFORGE_HTTP_TIMEOUT_SECS", "soon"),
            ("CHARFORGE_UNKNOWN_ABILITY", "maybe"),
        ]));
        assert_eq!(settings, AppSettings::default());

        let settings = AppSettings::from_lookup(lookup(&[("CHARFORGE_HTTP_TIMEOUT_SECS", "0")]));
        assert_eq!(settings.http_timeout_secs, 30);
    }

    #[test]
    fn dotenv_loads_from_given_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".env"),
            "CHARFORGE_DOTENV_LOAD_CHECK=from-file\n",
        )
        .unwrap();

        let path = load_dotenv(dir.path()).unwrap();

        assert_eq!(path, dir.path().join(".env"));
        assert_eq!(
            std::env::var("CHARFORGE_DOTENV_LOAD_CHECK").unwrap(),
            "from-file"
        );
    }

    #[test]
    fn missing_dotenv_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dotenv(dir.path()).unwrap_err();
        assert!(err.not_found());
    }
}
