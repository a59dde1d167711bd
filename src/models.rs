//! Data structures and types for MovieFlix
//!
//! Contains the shared models used across the application:
//! - **Movie**: the four-field record consumed by the card component
//! - **Artwork**: presence/absence of artwork and its interactivity
//! - **MovieRecord**: a full catalog entry with all display metadata

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Card Models
// =============================================================================

/// Display record for a single movie card.
///
/// This is the complete input of the card component: the card renders
/// `title` and `genre` unconditionally and derives the artwork region
/// from the two optional URLs. Strings are displayed as-is, without
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub genre: String,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
}

impl Movie {
    /// Resolve the artwork region for this movie.
    ///
    /// A video URL without an image URL has no visible effect: there is
    /// nothing to show and nothing to link, so the artwork stays hidden.
    pub fn artwork(&self) -> Artwork<'_> {
        match (self.image_url.as_deref(), self.video_url.as_deref()) {
            (None, _) => Artwork::Hidden,
            (Some(image_url), None) => Artwork::Still { image_url },
            (Some(image_url), Some(video_url)) => Artwork::Linked {
                image_url,
                video_url,
            },
        }
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.genre)
    }
}

/// Artwork region of a card, resolved from the two optional URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artwork<'a> {
    /// No image URL: no artwork region is rendered at all.
    Hidden,
    /// Image without a video: a static, de-emphasized region.
    Still { image_url: &'a str },
    /// Image with a video: an interactive region linking to the video.
    Linked {
        image_url: &'a str,
        video_url: &'a str,
    },
}

impl Artwork<'_> {
    /// Whether any artwork region is rendered.
    pub fn is_visible(&self) -> bool {
        !matches!(self, Artwork::Hidden)
    }

    /// Link target, present only when the artwork is interactive.
    pub fn link_target(&self) -> Option<&str> {
        match self {
            Artwork::Linked { video_url, .. } => Some(video_url),
            _ => None,
        }
    }
}

// =============================================================================
// Catalog Models
// =============================================================================

fn na() -> String {
    "N/A".to_string()
}

fn unknown_title() -> String {
    "Unknown".to_string()
}

/// Full catalog entry for a movie.
///
/// Mirrors the dataset columns; display fields missing from the source
/// default to "N/A" and stay that way (absence is shown, not hidden).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(default = "unknown_title")]
    pub title: String,
    #[serde(default = "na")]
    pub genre: String,
    #[serde(default = "na")]
    pub cast: String,
    #[serde(default = "na")]
    pub director: String,
    #[serde(default = "na")]
    pub production_house: String,
    #[serde(default = "na")]
    pub release_date: String,
    #[serde(default = "na")]
    pub plot: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

impl MovieRecord {
    /// Project the card fields out of the full record.
    pub fn card(&self) -> Movie {
        Movie {
            title: self.title.clone(),
            genre: self.genre.clone(),
            image_url: self.image_url.clone(),
            video_url: self.video_url.clone(),
        }
    }
}

impl fmt::Display for MovieRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] - {}", self.title, self.genre, self.director)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(image: Option<&str>, video: Option<&str>) -> Movie {
        Movie {
            title: "Alien".to_string(),
            genre: "Horror".to_string(),
            image_url: image.map(String::from),
            video_url: video.map(String::from),
        }
    }

    // -------------------------------------------------------------------------
    // Artwork Resolution Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_artwork_hidden_without_image() {
        assert_eq!(movie(None, None).artwork(), Artwork::Hidden);
    }

    #[test]
    fn test_artwork_hidden_with_video_but_no_image() {
        // A dangling video URL alone changes nothing
        let m = movie(None, Some("v.mp4"));
        assert_eq!(m.artwork(), Artwork::Hidden);
        assert!(!m.artwork().is_visible());
        assert_eq!(m.artwork().link_target(), None);
    }

    #[test]
    fn test_artwork_still_with_image_only() {
        let m = movie(Some("a.jpg"), None);
        assert_eq!(m.artwork(), Artwork::Still { image_url: "a.jpg" });
        assert!(m.artwork().is_visible());
        assert_eq!(m.artwork().link_target(), None);
    }

    #[test]
    fn test_artwork_linked_with_both() {
        let m = movie(Some("a.jpg"), Some("v.mp4"));
        assert_eq!(
            m.artwork(),
            Artwork::Linked {
                image_url: "a.jpg",
                video_url: "v.mp4"
            }
        );
        assert_eq!(m.artwork().link_target(), Some("v.mp4"));
    }

    #[test]
    fn test_artwork_empty_strings_render_as_is() {
        // No validation: an empty string is present, not absent
        let m = movie(Some(""), None);
        assert_eq!(m.artwork(), Artwork::Still { image_url: "" });
    }

    // -------------------------------------------------------------------------
    // Display Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_movie_display() {
        assert_eq!(movie(None, None).to_string(), "Alien [Horror]");
    }

    #[test]
    fn test_record_display() {
        let record = MovieRecord {
            title: "Alien".to_string(),
            genre: "Horror".to_string(),
            cast: "Sigourney Weaver".to_string(),
            director: "Ridley Scott".to_string(),
            production_house: "20th Century Fox".to_string(),
            release_date: "1979-05-25".to_string(),
            plot: "The crew of a commercial spacecraft encounter a deadly lifeform.".to_string(),
            image_url: None,
            video_url: None,
        };
        assert_eq!(record.to_string(), "Alien [Horror] - Ridley Scott");
    }

    // -------------------------------------------------------------------------
    // Serde Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_record_missing_fields_default() {
        let record: MovieRecord = serde_json::from_str(r#"{"title": "Clerks"}"#).unwrap();
        assert_eq!(record.title, "Clerks");
        assert_eq!(record.genre, "N/A");
        assert_eq!(record.director, "N/A");
        assert!(record.image_url.is_none());
        assert!(record.video_url.is_none());
    }

    #[test]
    fn test_record_missing_title_defaults_to_unknown() {
        let record: MovieRecord = serde_json::from_str(r#"{"genre": "Drama"}"#).unwrap();
        assert_eq!(record.title, "Unknown");
    }

    #[test]
    fn test_record_card_projection() {
        let record: MovieRecord = serde_json::from_str(
            r#"{"title": "Alien", "genre": "Horror", "image_url": "a.jpg", "video_url": "v.mp4"}"#,
        )
        .unwrap();
        let card = record.card();
        assert_eq!(card.title, "Alien");
        assert_eq!(card.genre, "Horror");
        assert_eq!(card.image_url.as_deref(), Some("a.jpg"));
        assert_eq!(card.video_url.as_deref(), Some("v.mp4"));
    }

    #[test]
    fn test_movie_serde_round_trip() {
        let m = movie(Some("a.jpg"), None);
        let json = serde_json::to_string(&m).unwrap();
        let parsed: Movie = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, m);
    }
}
