//! TOML character templates on disk.

use std::path::{Path, PathBuf};

use charforge_domain::{CharacterTemplate, DomainError};

/// File name written by [`write_empty_template`].
pub const EMPTY_TEMPLATE_FILE: &str = "template.toml";

const TEMPLATE_EXTENSION: &str = "toml";

#[derive(Debug, thiserror::Error)]
pub enum TemplateFileError {
    #[error("Incorrect file type: {0} (expected .toml)")]
    UnsupportedExtension(String),

    #[error("Could not access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Could not encode template: {0}")]
    Encode(String),

    #[error("Invalid template: {0}")]
    Invalid(#[from] DomainError),
}

impl TemplateFileError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Where a `--file` argument points.
///
/// A bare file name is looked up inside `template_dir`; anything with a
/// directory component is used as given. A missing extension becomes `.toml`.
pub fn resolve_template_path(template_dir: &Path, arg: &str) -> Result<PathBuf, TemplateFileError> {
    let given = Path::new(arg);

    let mut path = match given.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => given.to_path_buf(),
        _ => template_dir.join(given),
    };

    match path.extension().and_then(|ext| ext.to_str()) {
        None => {
            path.set_extension(TEMPLATE_EXTENSION);
        }
        Some(TEMPLATE_EXTENSION) => {}
        Some(other) => return Err(TemplateFileError::UnsupportedExtension(format!(".{}", other))),
    }

    Ok(path)
}

/// Parse template text without validating it.
pub fn parse_template(path: &Path, contents: &str) -> Result<CharacterTemplate, TemplateFileError> {
    toml::from_str(contents).map_err(|e| TemplateFileError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Read, parse and validate a template.
pub fn load_template(path: &Path) -> Result<CharacterTemplate, TemplateFileError> {
    let contents = std::fs::read_to_string(path).map_err(|e| TemplateFileError::io(path, e))?;
    let template = parse_template(path, &contents)?;
    template.validate()?;

    tracing::debug!(path = %path.display(), name = %template.name, "Loaded character template");
    Ok(template)
}

/// Write a blank template into `dir`, creating the directory if needed.
pub fn write_empty_template(dir: &Path) -> Result<PathBuf, TemplateFileError> {
    std::fs::create_dir_all(dir).map_err(|e| TemplateFileError::io(dir, e))?;

    let contents = toml::to_string_pretty(&CharacterTemplate::empty())
        .map_err(|e| TemplateFileError::Encode(e.to_string()))?;

    let path = dir.join(EMPTY_TEMPLATE_FILE);
    std::fs::write(&path, contents).map_err(|e| TemplateFileError::io(&path, e))?;

    tracing::info!(path = %path.display(), "Wrote empty template");
    Ok(path)
}
