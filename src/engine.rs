//! Content-based movie recommendation engine
//!
//! Builds term-count vectors from each movie's features (genre, cast,
//! director, production house, plot) and ranks movies by cosine
//! similarity. Name-like fields keep multi-word values as atomic tokens
//! ("Ridley Scott" is one feature, not two), plot text is tokenized
//! word by word.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::models::MovieRecord;

/// Vocabulary cap: only the most frequent terms across the catalog
/// become features.
pub const MAX_FEATURES: usize = 5000;

/// Minimum token length kept as a feature.
const MIN_TOKEN_LEN: usize = 2;

/// Common English words excluded from plot features.
const STOPWORDS: &[&str] = &[
    "a", "about", "after", "again", "all", "also", "an", "and", "any", "are", "as", "at", "be",
    "because", "been", "before", "being", "between", "both", "but", "by", "can", "could", "did",
    "do", "does", "down", "during", "each", "few", "for", "from", "had", "has", "have", "he",
    "her", "here", "him", "his", "how", "if", "in", "into", "is", "it", "its", "just", "more",
    "most", "my", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other",
    "our", "out", "over", "own", "same", "she", "so", "some", "such", "than", "that", "the",
    "their", "them", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your",
];

// =============================================================================
// Errors
// =============================================================================

/// Errors from recommendation requests.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The requested title is not in the catalog.
    #[error("movie '{0}' not found in catalog")]
    MovieNotFound(String),
    /// The catalog is empty or failed to load.
    #[error("movie catalog not available")]
    CatalogUnavailable,
}

// =============================================================================
// Results
// =============================================================================

/// A recommended movie with its similarity score.
#[derive(Debug, Clone, Serialize)]
pub struct Scored {
    pub movie: MovieRecord,
    pub score: f64,
}

/// Result of a recommendation request: the matched movie plus its
/// nearest neighbours, best first.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub current_movie: MovieRecord,
    pub recommendations: Vec<Scored>,
    pub count: usize,
}

// =============================================================================
// Engine
// =============================================================================

/// Recommendation engine over a loaded catalog.
///
/// Vectors are computed once at build time; `recommend` is read-only
/// after that.
#[derive(Debug)]
pub struct Engine {
    catalog: Catalog,
    /// Sparse term-count vector per movie: (term id, count), sorted by id.
    vectors: Vec<Vec<(u32, u32)>>,
    /// Euclidean norm per vector, cached for cosine similarity.
    norms: Vec<f64>,
}

impl Engine {
    /// Build the engine from a catalog, computing the feature
    /// vocabulary and one count vector per movie.
    pub fn build(catalog: Catalog) -> Self {
        let docs: Vec<Vec<String>> = catalog.movies().iter().map(feature_tokens).collect();

        // Corpus-wide term frequencies
        let mut freq: HashMap<&str, u64> = HashMap::new();
        for doc in &docs {
            for token in doc {
                *freq.entry(token.as_str()).or_insert(0) += 1;
            }
        }

        // Keep the MAX_FEATURES most frequent terms; ties broken
        // alphabetically so the vocabulary is deterministic
        let mut candidates: Vec<(&str, u64)> = freq.into_iter().collect();
        candidates.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        candidates.truncate(MAX_FEATURES);

        let mut vocab: Vec<&str> = candidates.into_iter().map(|(t, _)| t).collect();
        vocab.sort_unstable();
        let term_ids: HashMap<&str, u32> = vocab
            .iter()
            .enumerate()
            .map(|(i, t)| (*t, i as u32))
            .collect();

        // One sparse count vector per movie
        let mut vectors = Vec::with_capacity(docs.len());
        let mut norms = Vec::with_capacity(docs.len());
        for doc in &docs {
            let mut counts: HashMap<u32, u32> = HashMap::new();
            for token in doc {
                if let Some(&id) = term_ids.get(token.as_str()) {
                    *counts.entry(id).or_insert(0) += 1;
                }
            }
            let mut vector: Vec<(u32, u32)> = counts.into_iter().collect();
            vector.sort_unstable_by_key(|&(id, _)| id);

            let norm = vector
                .iter()
                .map(|&(_, c)| (c as f64) * (c as f64))
                .sum::<f64>()
                .sqrt();

            vectors.push(vector);
            norms.push(norm);
        }

        Self {
            catalog,
            vectors,
            norms,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Cosine similarity between two movies by catalog index.
    ///
    /// Zero vectors (a movie with no usable features) are similar to
    /// nothing, including themselves.
    pub fn similarity(&self, a: usize, b: usize) -> f64 {
        let denom = self.norms[a] * self.norms[b];
        if denom == 0.0 {
            return 0.0;
        }
        dot(&self.vectors[a], &self.vectors[b]) / denom
    }

    /// Recommend up to `limit` movies similar to `title`.
    ///
    /// `limit` is clamped to 1..=20. The matched movie itself is
    /// excluded; ties keep catalog order.
    pub fn recommend(&self, title: &str, limit: usize) -> Result<Recommendation, EngineError> {
        if self.catalog.is_empty() {
            return Err(EngineError::CatalogUnavailable);
        }

        let index = self
            .catalog
            .position(title)
            .ok_or_else(|| EngineError::MovieNotFound(title.trim().to_string()))?;

        let limit = limit.clamp(1, 20);

        let mut scored: Vec<(usize, f64)> = (0..self.catalog.len())
            .filter(|&j| j != index)
            .map(|j| (j, self.similarity(index, j)))
            .collect();
        // Stable sort: equal scores keep catalog order
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(limit);

        let recommendations: Vec<Scored> = scored
            .into_iter()
            .map(|(j, score)| Scored {
                movie: self.catalog.movies()[j].clone(),
                score,
            })
            .collect();

        Ok(Recommendation {
            current_movie: self.catalog.movies()[index].clone(),
            count: recommendations.len(),
            recommendations,
        })
    }
}

/// Dot product of two sparse vectors sorted by term id.
fn dot(a: &[(u32, u32)], b: &[(u32, u32)]) -> f64 {
    let mut sum = 0.0;
    let mut ai = 0;
    let mut bi = 0;
    while ai < a.len() && bi < b.len() {
        match a[ai].0.cmp(&b[bi].0) {
            std::cmp::Ordering::Less => ai += 1,
            std::cmp::Ordering::Greater => bi += 1,
            std::cmp::Ordering::Equal => {
                sum += (a[ai].1 as f64) * (b[bi].1 as f64);
                ai += 1;
                bi += 1;
            }
        }
    }
    sum
}

// =============================================================================
// Tokenization
// =============================================================================

/// Extract feature tokens for one movie.
pub fn feature_tokens(record: &MovieRecord) -> Vec<String> {
    let mut tokens = Vec::new();
    for field in [
        &record.genre,
        &record.cast,
        &record.director,
        &record.production_house,
    ] {
        tokens.extend(name_tokens(field));
    }
    tokens.extend(word_tokens(&record.plot));
    tokens
}

/// Tokenize a list-like field (genres, cast, crew): split on commas and
/// slashes, then glue the words of each entry into one atomic token so
/// full names stay distinct features.
fn name_tokens(field: &str) -> Vec<String> {
    field
        .split([',', '/'])
        .map(|entry| {
            entry
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|t| keep_token(t))
        .collect()
}

/// Tokenize free text (plot): split on non-alphanumeric boundaries,
/// lowercase, drop stopwords and short tokens.
fn word_tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .map(str::to_lowercase)
        .filter(|t| keep_token(t))
        .collect()
}

fn keep_token(token: &str) -> bool {
    token.len() >= MIN_TOKEN_LEN && !STOPWORDS.contains(&token)
}

// =============================================================================
// Unit Tests
// =============================================================================
