//! CLI Command Handlers
//!
//! Implements all CLI commands over the catalog and the engine.
//! Each handler takes CLI args and Output, returns ExitCode.

use std::path::Path;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::cli::{ExitCode, Output, RecommendCmd, ShowCmd, TitlesCmd};
use crate::config::Config;
use crate::engine::{Engine, EngineError};

/// Load the catalog for a command, mapping failures to an exit code.
fn load_catalog(flag: Option<&Path>, output: &Output) -> Result<Catalog, ExitCode> {
    let config = Config::load();
    let path = config.resolve_catalog(flag);

    match Catalog::load(&path) {
        Ok(catalog) => Ok(catalog),
        Err(e) => Err(output.error(
            format!("Cannot load catalog {}: {}", path.display(), e),
            ExitCode::CatalogUnavailable,
        )),
    }
}

fn engine_exit_code(err: &EngineError) -> ExitCode {
    match err {
        EngineError::MovieNotFound(_) => ExitCode::MovieNotFound,
        EngineError::CatalogUnavailable => ExitCode::CatalogUnavailable,
    }
}

// =============================================================================
// Titles Command
// =============================================================================

#[derive(Debug, Serialize)]
struct TitlesResponse {
    titles: Vec<String>,
    count: usize,
}

pub fn titles_cmd(_cmd: TitlesCmd, catalog_flag: Option<&Path>, output: &Output) -> ExitCode {
    let catalog = match load_catalog(catalog_flag, output) {
        Ok(catalog) => catalog,
        Err(code) => return code,
    };

    let titles = catalog.titles();
    if output.json {
        let response = TitlesResponse {
            count: titles.len(),
            titles,
        };
        if let Err(e) = output.print(&response) {
            return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
        }
    } else {
        for title in &titles {
            output.line(title);
        }
        output.info(format!("{} titles", titles.len()));
    }
    ExitCode::Success
}

// =============================================================================
// Recommend Command
// =============================================================================

pub fn recommend_cmd(cmd: RecommendCmd, catalog_flag: Option<&Path>, output: &Output) -> ExitCode {
    let config = Config::load();
    let limit = cmd.limit.unwrap_or_else(|| config.limit());

    let catalog = match load_catalog(catalog_flag, output) {
        Ok(catalog) => catalog,
        Err(code) => return code,
    };

    output.info(format!("Finding movies similar to: {}", cmd.title));

    let engine = Engine::build(catalog);
    match engine.recommend(&cmd.title, limit) {
        Ok(recommendation) => {
            if output.json {
                if let Err(e) = output.print(&recommendation) {
                    return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
                }
            } else {
                output.line(format!("{}", recommendation.current_movie));
                for (i, scored) in recommendation.recommendations.iter().enumerate() {
                    output.line(format!(
                        "{:>2}. {} [{}]  {:.2}",
                        i + 1,
                        scored.movie.title,
                        scored.movie.genre,
                        scored.score
                    ));
                }
            }
            ExitCode::Success
        }
        Err(e) => output.error(e.to_string(), engine_exit_code(&e)),
    }
}

// =============================================================================
// Show Command
// =============================================================================

pub fn show_cmd(cmd: ShowCmd, catalog_flag: Option<&Path>, output: &Output) -> ExitCode {
    let catalog = match load_catalog(catalog_flag, output) {
        Ok(catalog) => catalog,
        Err(code) => return code,
    };

    match catalog.get(&cmd.title) {
        Some(record) => {
            if output.json {
                if let Err(e) = output.print(record) {
                    return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
                }
            } else {
                output.line(&record.title);
                output.line(format!("  Genre:      {}", record.genre));
                output.line(format!("  Director:   {}", record.director));
                output.line(format!("  Cast:       {}", record.cast));
                output.line(format!("  Production: {}", record.production_house));
                output.line(format!("  Released:   {}", record.release_date));
                output.line(format!("  Plot:       {}", record.plot));
                if let Some(ref url) = record.image_url {
                    output.line(format!("  Image:      {}", url));
                }
                if let Some(ref url) = record.video_url {
                    output.line(format!("  Video:      {}", url));
                }
            }
            ExitCode::Success
        }
        None => output.error(
            format!("movie '{}' not found in catalog", cmd.title.trim()),
            ExitCode::MovieNotFound,
        ),
    }
}
