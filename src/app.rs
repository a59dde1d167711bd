//! App state and core application logic
//!
//! Manages the application state machine, navigation stack, and the
//! wiring between key events, the recommendation engine, and the views.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::engine::Engine;
use crate::ui::browser::BrowserView;
use crate::ui::detail::DetailView;

// =============================================================================
// App State Enum
// =============================================================================

/// Application state enum representing the current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Catalog browser with filterable title list
    #[default]
    Browse,
    /// Detail view for one movie plus its recommendations
    Detail,
}

// =============================================================================
// Input Mode
// =============================================================================

/// Current input mode for keyboard handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Filter text input mode
    Filtering,
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Current state/screen
    pub state: AppState,
    /// Navigation history stack
    pub nav_stack: Vec<AppState>,
    /// Whether the app is running
    pub running: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Global error message
    pub error: Option<String>,

    /// Browser view state
    pub browser: BrowserView,
    /// Detail view state, populated when a movie is opened
    pub detail: Option<DetailView>,

    /// Recommendation engine over the loaded catalog
    engine: Engine,
    /// How many recommendations to request per movie
    pub limit: usize,
}

impl App {
    /// Create the app over a built engine.
    pub fn new(engine: Engine, limit: usize) -> Self {
        let browser = BrowserView::new(engine.catalog().titles());
        Self {
            state: AppState::Browse,
            nav_stack: Vec::new(),
            running: true,
            input_mode: InputMode::Normal,
            error: None,
            browser,
            detail: None,
            engine,
            limit,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Navigate to a new state, pushing current to stack
    pub fn navigate(&mut self, state: AppState) {
        if self.state != state {
            self.nav_stack.push(self.state);
            self.state = state;
        }
        self.input_mode = InputMode::Normal;
    }

    /// Go back to previous state
    pub fn back(&mut self) -> bool {
        if self.input_mode == InputMode::Filtering {
            self.input_mode = InputMode::Normal;
            return true;
        }

        if let Some(prev) = self.nav_stack.pop() {
            self.state = prev;
            true
        } else {
            false
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
    }

    // -------------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------------

    /// Open the detail view for a title; errors surface as the overlay.
    pub fn open_detail(&mut self, title: &str) {
        match self.engine.recommend(title, self.limit) {
            Ok(recommendation) => {
                self.detail = Some(DetailView::new(recommendation));
                self.navigate(AppState::Detail);
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Open the browser's current selection.
    pub fn open_selected(&mut self) {
        if let Some(title) = self.browser.selected_title().map(String::from) {
            self.open_detail(&title);
        }
    }

    /// Re-anchor the detail view on the selected recommendation.
    pub fn open_selected_recommendation(&mut self) {
        let title = self
            .detail
            .as_ref()
            .and_then(|d| d.selected_recommendation())
            .map(|s| s.movie.title.clone());
        if let Some(title) = title {
            self.open_detail(&title);
        }
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle keyboard event, returns true if event was consumed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Any keypress dismisses a visible error
        self.error = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return true;
        }

        if self.input_mode == InputMode::Filtering {
            self.handle_filter_key(key)
        } else {
            self.handle_normal_key(key)
        }
    }

    /// Handle keys in filter (text input) mode
    fn handle_filter_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => {
                self.browser.clear_filter();
                self.input_mode = InputMode::Normal;
                true
            }
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                true
            }
            KeyCode::Char(c) => {
                self.browser.insert(c);
                true
            }
            KeyCode::Backspace => {
                self.browser.backspace();
                true
            }
            KeyCode::Up => {
                self.browser.up();
                true
            }
            KeyCode::Down => {
                self.browser.down();
                true
            }
            _ => false,
        }
    }

    /// Handle keys in normal navigation mode
    fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                return true;
            }
            KeyCode::Char('/') => {
                if self.state == AppState::Browse {
                    self.input_mode = InputMode::Filtering;
                }
                return true;
            }
            KeyCode::Esc => {
                return self.back();
            }
            _ => {}
        }

        match self.state {
            AppState::Browse => self.handle_browse_key(key),
            AppState::Detail => self.handle_detail_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.browser.up();
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.browser.down();
                true
            }
            KeyCode::Home => {
                self.browser.first();
                true
            }
            KeyCode::End => {
                self.browser.last();
                true
            }
            KeyCode::Enter => {
                self.open_selected();
                true
            }
            _ => false,
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) -> bool {
        let Some(detail) = self.detail.as_mut() else {
            return false;
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                detail.up();
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                detail.down();
                true
            }
            KeyCode::Enter => {
                self.open_selected_recommendation();
                true
            }
            _ => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        let catalog = Catalog::from_json(
            r#"[
                {"title": "Alien", "genre": "Horror", "director": "Ridley Scott",
                 "plot": "a monster hunts the crew in space"},
                {"title": "Aliens", "genre": "Horror", "director": "James Cameron",
                 "plot": "soldiers fight the monster in space"},
                {"title": "Clerks", "genre": "Comedy", "director": "Kevin Smith",
                 "plot": "two clerks chat through one long day"}
            ]"#,
        )
        .unwrap();
        App::new(Engine::build(catalog), 10)
    }

    #[test]
    fn test_starts_in_browse() {
        let app = app();
        assert_eq!(app.state, AppState::Browse);
        assert!(app.running);
        assert!(app.detail.is_none());
    }

    #[test]
    fn test_enter_opens_detail_for_selection() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state, AppState::Detail);
        let detail = app.detail.as_ref().unwrap();
        assert_eq!(detail.current.title, "Alien");
        assert!(!detail.recommendations.is_empty());
    }

    #[test]
    fn test_escape_returns_to_browse() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state, AppState::Detail);

        assert!(app.back());
        assert_eq!(app.state, AppState::Browse);

        // At the root there is nowhere further back
        assert!(!app.back());
    }

    #[test]
    fn test_filter_mode_round_trip() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('/')));
        assert_eq!(app.input_mode, InputMode::Filtering);

        app.handle_key(key(KeyCode::Char('c')));
        assert_eq!(app.browser.filter, "c");
        assert_eq!(app.browser.selected_title(), Some("Clerks"));

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.browser.filter, "c");
    }

    #[test]
    fn test_filter_escape_clears() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('/')));
        app.handle_key(key(KeyCode::Char('z')));
        assert!(app.browser.filtered().is_empty());

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.browser.filter.is_empty());
    }

    #[test]
    fn test_detail_rail_navigation_and_reanchor() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        let first = app.detail.as_ref().unwrap().selected_recommendation().unwrap().movie.title.clone();

        // Re-anchor on the top recommendation
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state, AppState::Detail);
        assert_eq!(app.detail.as_ref().unwrap().current.title, first);
        // Re-anchoring keeps the nav stack shallow: Esc goes straight home
        assert!(app.back());
        assert_eq!(app.state, AppState::Browse);
    }

    #[test]
    fn test_open_detail_unknown_title_sets_error() {
        let mut app = app();
        app.open_detail("Gigli");
        assert_eq!(app.state, AppState::Browse);
        assert!(app.error.as_deref().unwrap_or("").contains("Gigli"));
    }

    #[test]
    fn test_keypress_dismisses_error() {
        let mut app = app();
        app.set_error("boom");
        app.handle_key(key(KeyCode::Down));
        assert!(app.error.is_none());
    }

    #[test]
    fn test_quit_keys() {
        let mut app_q = app();
        app_q.handle_key(key(KeyCode::Char('q')));
        assert!(!app_q.running);

        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn test_slash_only_filters_in_browse() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state, AppState::Detail);

        app.handle_key(key(KeyCode::Char('/')));
        assert_eq!(app.input_mode, InputMode::Normal);
    }
}
