//! Movie catalog loading and lookup
//!
//! The catalog is a JSON array of movie records loaded from disk.
//! Records are normalized once at load time: titles lose a trailing
//! "(YYYY)" year suffix and are trimmed. Lookups are case-insensitive.

use std::path::Path;

use thiserror::Error;

use crate::models::MovieRecord;

/// Errors from catalog loading.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// In-memory movie catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<MovieRecord>,
}

impl Catalog {
    /// Build a catalog from already-parsed records.
    pub fn new(movies: Vec<MovieRecord>) -> Self {
        let movies = movies.into_iter().map(normalize).collect();
        Self { movies }
    }

    /// Parse a catalog from a JSON array string.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let movies: Vec<MovieRecord> = serde_json::from_str(json)?;
        Ok(Self::new(movies))
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// All movies in catalog order.
    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// All titles, sorted and deduplicated.
    pub fn titles(&self) -> Vec<String> {
        let mut titles: Vec<String> = self.movies.iter().map(|m| m.title.clone()).collect();
        titles.sort();
        titles.dedup();
        titles
    }

    /// Find a movie by title, ignoring case and surrounding whitespace.
    pub fn get(&self, title: &str) -> Option<&MovieRecord> {
        self.position(title).map(|i| &self.movies[i])
    }

    /// Index of a movie by title, ignoring case and surrounding whitespace.
    pub fn position(&self, title: &str) -> Option<usize> {
        let wanted = title.trim().to_lowercase();
        self.movies
            .iter()
            .position(|m| m.title.to_lowercase() == wanted)
    }
}

/// Normalize a record at load time.
///
/// Titles in the dataset sometimes carry a "(YYYY)" suffix; the year is
/// not a separate column, so the suffix is stripped for clean display
/// and matching.
fn normalize(mut record: MovieRecord) -> MovieRecord {
    record.title = clean_title(&record.title);
    record
}

/// Strip a trailing "(YYYY)" from a title and trim whitespace.
pub fn clean_title(title: &str) -> String {
    let cleaned = regex::Regex::new(r"\(\d{4}\)")
        .map(|re| re.replace_all(title, "").into_owned())
        .unwrap_or_else(|_| title.to_string());
    cleaned.trim().to_string()
}
