//! Movie card component
//!
//! Renders one movie's title, genre, and artwork region. The card is
//! stateless: rendering is a pure function of the `Movie` value and the
//! target area, so the same input always produces the same buffer.
//!
//! Artwork policy:
//! - no image URL: no artwork region at all (a video URL alone changes
//!   nothing)
//! - image and video: the artwork is an interactive link carrying the
//!   video URL as its target
//! - image only: the artwork is shown de-emphasized (DIM), with no link

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::models::{Artwork, Movie};
use crate::ui::Theme;

/// A bordered card for one movie.
#[derive(Debug, Clone, Copy)]
pub struct MovieCard<'a> {
    movie: &'a Movie,
}

impl<'a> MovieCard<'a> {
    pub fn new(movie: &'a Movie) -> Self {
        Self { movie }
    }

    /// Rows needed to show the card without clipping.
    pub fn height(&self) -> u16 {
        // title + genre, plus a separator and the artwork lines when visible
        let artwork_rows = match self.movie.artwork() {
            Artwork::Hidden => 0,
            Artwork::Still { .. } => 2,
            Artwork::Linked { .. } => 3,
        };
        // 2 border rows
        2 + 2 + artwork_rows
    }

    /// Content lines for the card body.
    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![
            Line::from(Span::styled(self.movie.title.as_str(), Theme::title())),
            Line::from(vec![
                Span::styled("Genre: ", Theme::label()),
                Span::styled(self.movie.genre.as_str(), Theme::genre()),
            ]),
        ];

        match self.movie.artwork() {
            Artwork::Hidden => {}
            Artwork::Still { image_url } => {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("🎞 {}", image_url),
                    Theme::artwork_still(),
                )));
            }
            Artwork::Linked {
                image_url,
                video_url,
            } => {
                lines.push(Line::from(""));
                // The image is the link body, the video URL its target;
                // terminals have no href, so the target is spelled out
                lines.push(Line::from(Span::styled(
                    format!("🎞 {}", image_url),
                    Theme::link(),
                )));
                lines.push(Line::from(Span::styled(
                    format!("▶ {}", video_url),
                    Theme::link(),
                )));
            }
        }

        lines
    }

    /// Render the card into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border());

        let paragraph = Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .block(block);

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn movie(image: Option<&str>, video: Option<&str>) -> Movie {
        Movie {
            title: "Alien".to_string(),
            genre: "Horror".to_string(),
            image_url: image.map(String::from),
            video_url: video.map(String::from),
        }
    }

    /// Render a card into a fresh test terminal and return the buffer.
    fn render_to_buffer(m: &Movie) -> ratatui::buffer::Buffer {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                MovieCard::new(m).render(frame, area);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_title_and_genre_always_shown() {
        for m in [
            movie(None, None),
            movie(None, Some("v.mp4")),
            movie(Some("a.jpg"), None),
            movie(Some("a.jpg"), Some("v.mp4")),
        ] {
            let text = buffer_text(&render_to_buffer(&m));
            assert!(text.contains("Alien"));
            assert!(text.contains("Horror"));
        }
    }

    #[test]
    fn test_no_image_means_no_artwork_region() {
        let text = buffer_text(&render_to_buffer(&movie(None, None)));
        assert!(!text.contains('🎞'));
    }

    #[test]
    fn test_video_without_image_has_no_visible_effect() {
        let plain = render_to_buffer(&movie(None, None));
        let dangling = render_to_buffer(&movie(None, Some("v.mp4")));
        assert_eq!(plain, dangling);
        assert!(!buffer_text(&dangling).contains("v.mp4"));
    }

    #[test]
    fn test_linked_artwork_carries_video_target() {
        let text = buffer_text(&render_to_buffer(&movie(Some("a.jpg"), Some("v.mp4"))));
        assert!(text.contains("a.jpg"));
        assert!(text.contains("v.mp4"));
    }

    #[test]
    fn test_still_artwork_has_no_link_target() {
        let text = buffer_text(&render_to_buffer(&movie(Some("d.jpg"), None)));
        assert!(text.contains("d.jpg"));
        assert!(!text.contains("▶"));
    }

    #[test]
    fn test_still_artwork_is_dimmed() {
        let buffer = render_to_buffer(&movie(Some("d.jpg"), None));
        let dimmed = buffer
            .content
            .iter()
            .any(|c| c.modifier.contains(Modifier::DIM));
        assert!(dimmed, "still artwork should use the DIM modifier");
    }

    #[test]
    fn test_linked_artwork_is_underlined_not_dimmed() {
        let buffer = render_to_buffer(&movie(Some("a.jpg"), Some("v.mp4")));
        let underlined = buffer
            .content
            .iter()
            .any(|c| c.modifier.contains(Modifier::UNDERLINED));
        let dimmed = buffer
            .content
            .iter()
            .any(|c| c.modifier.contains(Modifier::DIM));
        assert!(underlined, "linked artwork should be underlined");
        assert!(!dimmed, "linked artwork should not be dimmed");
    }

    #[test]
    fn test_rendering_is_pure() {
        let m = movie(Some("a.jpg"), Some("v.mp4"));
        assert_eq!(render_to_buffer(&m), render_to_buffer(&m));
    }

    #[test]
    fn test_height_per_artwork_variant() {
        assert_eq!(MovieCard::new(&movie(None, None)).height(), 4);
        assert_eq!(MovieCard::new(&movie(None, Some("v.mp4"))).height(), 4);
        assert_eq!(MovieCard::new(&movie(Some("a.jpg"), None)).height(), 6);
        assert_eq!(
            MovieCard::new(&movie(Some("a.jpg"), Some("v.mp4"))).height(),
            7
        );
    }

    #[test]
    fn test_empty_strings_render_as_is() {
        // No validation: empty title and genre are legal inputs
        let m = Movie {
            title: String::new(),
            genre: String::new(),
            image_url: None,
            video_url: None,
        };
        let text = buffer_text(&render_to_buffer(&m));
        assert!(text.contains("Genre:"));
    }
}
