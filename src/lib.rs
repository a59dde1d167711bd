//! MovieFlix - terminal movie browser with recommendations
//!
//! Browse a movie catalog, preview each movie as a card, and get
//! content-based recommendations.
//!
//! # Modules
//!
//! - `models` - Movie records and the card's artwork resolution
//! - `catalog` - JSON catalog loading and lookup
//! - `engine` - Content-based recommendation engine
//! - `ui` - TUI components (theme, card, browser, detail)
//! - `app` - Application state and navigation
//! - `cli` / `commands` - Scriptable command-line interface
//! - `config` - Config file and catalog path resolution

pub mod models;
pub mod catalog;
pub mod engine;
pub mod ui;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;

// Re-export commonly used types
pub use app::{App, AppState, InputMode};
pub use catalog::{Catalog, CatalogError};
pub use engine::{Engine, EngineError, Recommendation, Scored};
pub use models::{Artwork, Movie, MovieRecord};
