//! URL slug normalization for reference-data lookups.

/// Normalize a human-entered name into the path segment the reference service uses.
///
/// Lowercases, replaces every space with a hyphen, then strips apostrophes.
/// `"Tasha's Hideous Laughter"` becomes `"tashas-hideous-laughter"`.
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-").replace('\'', "")
}
