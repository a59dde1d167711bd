//! Warm marquee theme for MovieFlix
//!
//! Color palette and style helpers for the TUI. Cream text on dark
//! cinema brown, amber highlights.

use ratatui::style::{Color, Modifier, Style};

/// Marquee color palette
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #1a0f0a (dark cinema brown)
    pub const BACKGROUND: Color = Color::Rgb(0x1a, 0x0f, 0x0a);

    /// Primary: #ffb347 (marquee amber)
    pub const PRIMARY: Color = Color::Rgb(0xff, 0xb3, 0x47);

    /// Secondary: #ff8c42 (poster orange)
    pub const SECONDARY: Color = Color::Rgb(0xff, 0x8c, 0x42);

    /// Accent: #ffd700 (gold)
    pub const ACCENT: Color = Color::Rgb(0xff, 0xd7, 0x00);

    /// Highlight: #e8604c (ticket red)
    pub const HIGHLIGHT: Color = Color::Rgb(0xe8, 0x60, 0x4c);

    /// Text: #f2ece3 (screen cream)
    pub const TEXT: Color = Color::Rgb(0xf2, 0xec, 0xe3);

    /// Dim: #5a4a42 (house lights down)
    pub const DIM: Color = Color::Rgb(0x5a, 0x4a, 0x42);

    /// Success: #7bc96f (green)
    pub const SUCCESS: Color = Color::Rgb(0x7b, 0xc9, 0x6f);

    /// Warning: #ffaa00 (orange)
    pub const WARNING: Color = Color::Rgb(0xff, 0xaa, 0x00);

    /// Error: #ff4040 (red)
    pub const ERROR: Color = Color::Rgb(0xff, 0x40, 0x40);

    // ═══════════════════════════════════════════════════════════════════════
    // DERIVED COLORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Slightly lighter background for panels/cards
    pub const BACKGROUND_LIGHT: Color = Color::Rgb(0x24, 0x18, 0x12);

    /// Border color (frame brown)
    pub const BORDER: Color = Color::Rgb(0x6d, 0x27, 0x1b);

    /// Border color when focused (full amber)
    pub const BORDER_FOCUSED: Color = Self::PRIMARY;

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND)
    }

    /// Highlighted text (inverted with primary color)
    pub fn highlighted() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected item style (ticket red, bold)
    pub fn selected() -> Style {
        Style::default()
            .fg(Self::HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Dimmed/muted text
    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Error style
    pub fn error() -> Style {
        Style::default()
            .fg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    /// Success style
    pub fn success() -> Style {
        Style::default()
            .fg(Self::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    /// Warning style
    pub fn warning() -> Style {
        Style::default()
            .fg(Self::WARNING)
            .add_modifier(Modifier::BOLD)
    }

    /// Title/header style
    pub fn title() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Secondary text style (poster orange)
    pub fn secondary() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    /// Accent text style (gold)
    pub fn accent() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Normal/unfocused border
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    /// Focused border
    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::BORDER_FOCUSED)
            .add_modifier(Modifier::BOLD)
    }

    /// Interactive link (underlined amber)
    pub fn link() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Artwork shown without a link: reduced emphasis
    pub fn artwork_still() -> Style {
        Style::default().fg(Self::TEXT).add_modifier(Modifier::DIM)
    }

    /// Genre tags
    pub fn genre() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    /// Metadata field labels (Director:, Cast:, ...)
    pub fn label() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Style for list items (normal state)
    pub fn list_item() -> Style {
        Style::default().fg(Self::TEXT)
    }

    /// Style for list items (selected/highlighted)
    pub fn list_item_selected() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for input fields
    pub fn input() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    /// Keybinding hint style
    pub fn keybind() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    /// Status bar style
    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Calculate relative luminance for a color (used in contrast ratio)
/// Formula: https://www.w3.org/TR/WCAG20/#relativeluminancedef
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel_luminance(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel_luminance(r) + 0.7152 * channel_luminance(g) + 0.0722 * channel_luminance(b)
}

/// Calculate contrast ratio between two colors
/// Returns a value between 1 (same color) and 21 (black/white)
/// WCAG AA requires >= 4.5:1 for normal text, >= 3:1 for large text
pub fn contrast_ratio(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> f64 {
    let l1 = relative_luminance(fg.0, fg.1, fg.2);
    let l2 = relative_luminance(bg.0, bg.1, bg.2);

    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };

    (lighter + 0.05) / (darker + 0.05)
}

/// Check if a foreground/background pair meets WCAG AA for normal text
pub fn meets_wcag_aa(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 4.5
}

/// Check if a foreground/background pair meets WCAG AA for large text
pub fn meets_wcag_aa_large(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 3.0
}

/// Extract RGB tuple from ratatui Color (only works for Rgb variant)
pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(color: Color) -> (u8, u8, u8) {
        color_to_rgb(color).expect("Theme colors should all be RGB")
    }

    #[test]
    fn test_all_theme_colors_are_rgb() {
        assert!(color_to_rgb(Theme::BACKGROUND).is_some());
        assert!(color_to_rgb(Theme::PRIMARY).is_some());
        assert!(color_to_rgb(Theme::SECONDARY).is_some());
        assert!(color_to_rgb(Theme::ACCENT).is_some());
        assert!(color_to_rgb(Theme::HIGHLIGHT).is_some());
        assert!(color_to_rgb(Theme::TEXT).is_some());
        assert!(color_to_rgb(Theme::DIM).is_some());
        assert!(color_to_rgb(Theme::SUCCESS).is_some());
        assert!(color_to_rgb(Theme::WARNING).is_some());
        assert!(color_to_rgb(Theme::ERROR).is_some());
    }

    #[test]
    fn test_text_contrast_against_background() {
        let bg = rgb(Theme::BACKGROUND);
        let text = rgb(Theme::TEXT);

        assert!(
            meets_wcag_aa(text, bg),
            "Text on background should meet WCAG AA (got {:.2}:1)",
            contrast_ratio(text, bg)
        );
    }

    #[test]
    fn test_accent_colors_contrast_against_background() {
        let bg = rgb(Theme::BACKGROUND);

        for (name, color) in [
            ("PRIMARY", Theme::PRIMARY),
            ("SECONDARY", Theme::SECONDARY),
            ("ACCENT", Theme::ACCENT),
            ("HIGHLIGHT", Theme::HIGHLIGHT),
            ("SUCCESS", Theme::SUCCESS),
            ("WARNING", Theme::WARNING),
            ("ERROR", Theme::ERROR),
        ] {
            let fg = rgb(color);
            assert!(
                meets_wcag_aa_large(fg, bg),
                "{} on BACKGROUND should meet WCAG AA for large text (got {:.2}:1)",
                name,
                contrast_ratio(fg, bg)
            );
        }
    }

    #[test]
    fn test_inverted_highlighted_contrast() {
        // Inverted selection (background text on primary) stays readable
        let fg = rgb(Theme::BACKGROUND);
        let bg = rgb(Theme::PRIMARY);

        assert!(
            meets_wcag_aa_large(fg, bg),
            "Inverted highlight should be readable (got {:.2}:1)",
            contrast_ratio(fg, bg)
        );
    }

    #[test]
    fn test_link_style_is_underlined() {
        assert!(Theme::link().add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_artwork_still_style_is_dim() {
        assert!(Theme::artwork_still().add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_relative_luminance_black() {
        let lum = relative_luminance(0, 0, 0);
        assert!((lum - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_relative_luminance_white() {
        let lum = relative_luminance(255, 255, 255);
        assert!((lum - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_contrast_ratio_black_white() {
        let ratio = contrast_ratio((0, 0, 0), (255, 255, 255));
        assert!((ratio - 21.0).abs() < 0.1);
    }

    #[test]
    fn test_contrast_ratio_same_color() {
        let ratio = contrast_ratio((100, 100, 100), (100, 100, 100));
        assert!((ratio - 1.0).abs() < 0.001);
    }
}
