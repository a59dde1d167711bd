//! CLI - Command Line Interface for MovieFlix
//!
//! Every TUI action is scriptable. All output is JSON-parseable.
//!
//! # Examples
//!
//! ```bash
//! # List catalog titles
//! movieflix titles --json
//!
//! # Get recommendations
//! movieflix recommend "Alien" --limit 5
//!
//! # Show one movie's full record
//! movieflix show "Dune"
//! ```

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Catalog missing, unreadable, or empty
    CatalogUnavailable = 3,
    /// Requested movie not in the catalog
    MovieNotFound = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// MovieFlix - terminal movie browser with recommendations
///
/// Run without arguments to launch the interactive TUI.
/// Use subcommands for scriptable automation.
#[derive(Parser, Debug)]
#[command(
    name = "movieflix",
    version,
    about = "Terminal movie browser with content-based recommendations",
    long_about = "Browse a movie catalog and get content-based recommendations.\n\n\
                  Run without arguments to launch the interactive TUI.\n\
                  Use subcommands for automation and scripting.",
    after_help = "EXAMPLES:\n\
                  movieflix                         Launch interactive TUI\n\
                  movieflix titles                  List catalog titles\n\
                  movieflix recommend \"Alien\"       Recommend similar movies\n\
                  movieflix show \"Dune\" --json      Print one movie as JSON"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Path to the catalog JSON file
    #[arg(long, short = 'c', global = true)]
    pub catalog: Option<PathBuf>,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all catalog titles
    #[command(visible_alias = "t")]
    Titles(TitlesCmd),

    /// Recommend movies similar to a title
    #[command(visible_alias = "r")]
    Recommend(RecommendCmd),

    /// Show the full record for one movie
    #[command(visible_alias = "s")]
    Show(ShowCmd),
}

/// List all available movie titles
#[derive(Args, Debug)]
pub struct TitlesCmd {}

/// Get recommendations for a movie
#[derive(Args, Debug)]
pub struct RecommendCmd {
    /// Movie title to get recommendations for
    #[arg(required = true)]
    pub title: String,

    /// Number of recommendations (1-20)
    #[arg(long, short = 'l')]
    pub limit: Option<usize>,
}

/// Show one movie's full catalog record
#[derive(Args, Debug)]
pub struct ShowCmd {
    /// Movie title to show
    #[arg(required = true)]
    pub title: String,
}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data
    pub fn print<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Ok(())
    }

    /// Print a plain text line (non-JSON mode only)
    pub fn line(&self, text: impl std::fmt::Display) {
        if !self.json {
            println!("{}", text);
        }
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_is_tui_mode() {
        let cli = Cli::parse_from::<_, &str>([]);
        assert!(!cli.is_cli_mode());
    }

    #[test]
    fn test_titles_command() {
        let cli = Cli::parse_from(["movieflix", "titles"]);
        assert!(cli.is_cli_mode());
        assert!(matches!(cli.command, Some(Command::Titles(_))));
    }

    #[test]
    fn test_recommend_command() {
        let cli = Cli::parse_from(["movieflix", "recommend", "Alien", "--limit", "5"]);
        match cli.command {
            Some(Command::Recommend(cmd)) => {
                assert_eq!(cmd.title, "Alien");
                assert_eq!(cmd.limit, Some(5));
            }
            _ => panic!("Expected Recommend command"),
        }
    }

    #[test]
    fn test_recommend_default_limit_unset() {
        let cli = Cli::parse_from(["movieflix", "recommend", "Alien"]);
        match cli.command {
            Some(Command::Recommend(cmd)) => assert_eq!(cmd.limit, None),
            _ => panic!("Expected Recommend command"),
        }
    }

    #[test]
    fn test_show_command_alias() {
        let cli = Cli::parse_from(["movieflix", "s", "Dune"]);
        match cli.command {
            Some(Command::Show(cmd)) => assert_eq!(cmd.title, "Dune"),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "movieflix",
            "--json",
            "--quiet",
            "--catalog",
            "/tmp/movies.json",
            "titles",
        ]);
        assert!(cli.json);
        assert!(cli.quiet);
        assert_eq!(
            cli.catalog.as_deref(),
            Some(std::path::Path::new("/tmp/movies.json"))
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::Error), 1);
        assert_eq!(i32::from(ExitCode::InvalidArgs), 2);
        assert_eq!(i32::from(ExitCode::CatalogUnavailable), 3);
        assert_eq!(i32::from(ExitCode::MovieNotFound), 4);
    }

    #[test]
    fn test_json_output_skips_empty_fields() {
        let output = JsonOutput::success(vec!["Alien"]);
        let json = serde_json::to_string(&output).unwrap();
        assert!(!json.contains("error"));
        assert!(!json.contains("exit_code"));

        let err = JsonOutput::<()>::error_msg("nope", ExitCode::MovieNotFound);
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"exit_code\":4"));
        assert!(!json.contains("data"));
    }
}
