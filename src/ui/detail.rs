//! Detail view for a selected movie
//!
//! Shows the selected movie's card and full metadata on the left, and a
//! rail of recommended movies on the right. The rail's selection gets
//! its own card so every recommendation is previewed with the same
//! component as the main selection.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::engine::{Recommendation, Scored};
use crate::models::MovieRecord;
use crate::ui::card::MovieCard;
use crate::ui::Theme;

/// Detail view state
#[derive(Debug)]
pub struct DetailView {
    /// The movie being displayed
    pub current: MovieRecord,
    /// Recommendations for the current movie, best first
    pub recommendations: Vec<Scored>,
    /// Selected index in the recommendation rail
    pub selected: usize,
}

impl DetailView {
    pub fn new(recommendation: Recommendation) -> Self {
        Self {
            current: recommendation.current_movie,
            recommendations: recommendation.recommendations,
            selected: 0,
        }
    }

    /// Selected recommendation, if there are any.
    pub fn selected_recommendation(&self) -> Option<&Scored> {
        self.recommendations.get(self.selected)
    }

    pub fn up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn down(&mut self) {
        if self.selected + 1 < self.recommendations.len() {
            self.selected += 1;
        }
    }

    /// Render the detail layout: info panel left, rail right.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        self.render_info_panel(frame, chunks[0]);
        self.render_rail(frame, chunks[1]);
    }

    /// Left panel: the selection's card on top, metadata below.
    fn render_info_panel(&self, frame: &mut Frame, area: Rect) {
        let movie = self.current.card();
        let card = MovieCard::new(&movie);
        let card_height = card.height().min(area.height);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(card_height), Constraint::Min(0)])
            .split(area);

        card.render(frame, chunks[0]);
        self.render_metadata(frame, chunks[1]);
    }

    fn render_metadata(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border())
            .title(Span::styled(" INFO ", Theme::title()));

        let label = |name: &'static str, value: &str| {
            Line::from(vec![
                Span::styled(name, Theme::label()),
                Span::styled(value.to_string(), Theme::text()),
            ])
        };

        let mut lines = vec![
            label("Director: ", &self.current.director),
            label("Cast: ", &self.current.cast),
            label("Production: ", &self.current.production_house),
            label("Released: ", &self.current.release_date),
            Line::from(""),
            Line::from(Span::styled("PLOT", Theme::accent())),
        ];
        for plot_line in self.current.plot.lines() {
            lines.push(Line::from(Span::styled(
                plot_line.to_string(),
                Theme::text(),
            )));
        }

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, area);
    }

    /// Right panel: ranked recommendations plus the selected one's card.
    fn render_rail(&self, frame: &mut Frame, area: Rect) {
        let title = format!(" RECOMMENDATIONS ({}) ", self.recommendations.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border())
            .title(Span::styled(title, Theme::title()));

        if self.recommendations.is_empty() {
            let empty = Paragraph::new("No recommendations")
                .style(Theme::dimmed())
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        // Preview card for the rail selection sits under the list
        let preview = self
            .selected_recommendation()
            .map(|s| s.movie.card());
        let preview_height = preview
            .as_ref()
            .map(|m| MovieCard::new(m).height())
            .unwrap_or(0)
            .min(area.height.saturating_sub(3));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(preview_height)])
            .split(area);

        let inner = block.inner(chunks[0]);
        let visible_height = inner.height as usize;

        let offset = if self.selected >= visible_height {
            self.selected - visible_height + 1
        } else {
            0
        };

        let items: Vec<ListItem> = self
            .recommendations
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible_height)
            .map(|(i, scored)| self.render_rail_item(i, scored))
            .collect();

        let list = List::new(items).block(block);
        frame.render_widget(list, chunks[0]);

        if let Some(movie) = &preview {
            MovieCard::new(movie).render(frame, chunks[1]);
        }
    }

    /// One rail entry: `▸ 1. Title [Genre]  0.87`
    fn render_rail_item(&self, index: usize, scored: &Scored) -> ListItem<'static> {
        let is_selected = index == self.selected;
        let marker = if is_selected { "▸ " } else { "  " };

        let line = Line::from(vec![
            Span::styled(
                marker,
                if is_selected {
                    Theme::accent()
                } else {
                    Theme::dimmed()
                },
            ),
            Span::styled(format!("{}. ", index + 1), Theme::keybind()),
            Span::styled(
                scored.movie.title.clone(),
                if is_selected {
                    Theme::list_item_selected()
                } else {
                    Theme::list_item()
                },
            ),
            Span::styled(format!(" [{}]", scored.movie.genre), Theme::genre()),
            Span::styled(format!("  {:.2}", scored.score), Theme::dimmed()),
        ]);

        ListItem::new(line)
    }
}
