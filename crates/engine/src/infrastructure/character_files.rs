//! Built characters saved as JSON.

use std::path::{Path, PathBuf};

use charforge_domain::Character;

#[derive(Debug, thiserror::Error)]
pub enum CharacterFileError {
    #[error("Character has no name to save under")]
    MissingName,

    #[error("Could not access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not serialize character: {0}")]
    Serialization(String),

    #[error("Could not parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

impl CharacterFileError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// `<lower-cased name>.json`
pub fn character_file_name(character: &Character) -> String {
    format!("{}.json", character.name.to_lowercase())
}

/// Where a `load --file` argument points.
///
/// A bare name is looked up inside `character_dir` and gets `.json` appended
/// when it has no extension.
pub fn resolve_character_path(character_dir: &Path, arg: &str) -> PathBuf {
    let given = Path::new(arg);

    let mut path = match given.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => given.to_path_buf(),
        _ => character_dir.join(given),
    };
    if path.extension().is_none() {
        path.set_extension("json");
    }
    path
}

/// Write `character` into `dir` as pretty JSON, replacing any previous save.
pub fn save_character(dir: &Path, character: &Character) -> Result<PathBuf, CharacterFileError> {
    if character.name.trim().is_empty() {
        return Err(CharacterFileError::MissingName);
    }

    std::fs::create_dir_all(dir).map_err(|e| CharacterFileError::io(dir, e))?;

    let json = serde_json::to_string_pretty(character)
        .map_err(|e| CharacterFileError::Serialization(e.to_string()))?;

    let path = dir.join(character_file_name(character));
    std::fs::write(&path, json).map_err(|e| CharacterFileError::io(&path, e))?;

    tracing::info!(path = %path.display(), name = %character.name, "Saved character");
    Ok(path)
}

pub fn load_character(path: &Path) -> Result<Character, CharacterFileError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CharacterFileError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| CharacterFileError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use charforge_domain::{
        assemble_character, AbilityScores, CharacterTemplate, Class, HitPointMethod, Race,
        ResolvedResources, UnknownAbilityPolicy,
    };

    fn character(name: &str) -> Character {
        let template = CharacterTemplate {
            name: name.into(),
            level: 2,
            race: "human".into(),
            class: "fighter".into(),
            ability_scores: AbilityScores::new(15, 13, 14, 10, 12, 8),
            ..CharacterTemplate::empty()
        };
        let resources = ResolvedResources {
            race: Race {
                name: "Human".into(),
                ..Default::default()
            },
            class: Class {
                name: "Fighter".into(),
                hit_die: 10,
                ..Default::default()
            },
            ..Default::default()
        };
        assemble_character(
            &template,
            resources,
            HitPointMethod::Average,
            UnknownAbilityPolicy::Skip,
            &mut |_| 1,
        )
        .unwrap()
    }

    #[test]
    fn saves_under_lowercase_name_and_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("characters");
        let original = character("Sir Roland");

        let path = save_character(&out, &original).unwrap();

        assert_eq!(path, out.join("sir roland.json"));
        let loaded = load_character(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn bare_name_resolves_into_character_dir() {
        let dir = Path::new("characters");
        assert_eq!(
            resolve_character_path(dir, "ada"),
            PathBuf::from("characters/ada.json")
        );
        assert_eq!(
            resolve_character_path(dir, "saves/ada.json"),
            PathBuf::from("saves/ada.json")
        );
    }

    #[test]
    fn save_overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut hero = character("Ada");
        save_character(dir.path(), &hero).unwrap();

        hero.level = 3;
        let path = save_character(dir.path(), &hero).unwrap();

        assert_eq!(load_character(&path).unwrap().level, 3);
    }

    #[test]
    fn unnamed_character_is_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let err = save_character(dir.path(), &character("  ")).unwrap_err();
        assert!(matches!(err, CharacterFileError::MissingName));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.json");
        std::fs::write(&path, "{\"name\": 5}").unwrap();

        let err = load_character(&path).unwrap_err();
        assert!(matches!(err, CharacterFileError::Parse { .. }));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_character(&dir.path().join("ghost.json")).unwrap_err();
        assert!(matches!(err, CharacterFileError::Io { .. }));
    }
}
