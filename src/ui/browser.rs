//! Catalog browser view
//!
//! A filterable, scrollable list of catalog titles. Typing in filter
//! mode narrows the list as you go; Enter opens the detail view for
//! the selection.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::ui::Theme;

/// Browser view state
#[derive(Debug, Default)]
pub struct BrowserView {
    /// All catalog titles, sorted
    titles: Vec<String>,
    /// Current filter text
    pub filter: String,
    /// Selected index within the filtered list
    pub selected: usize,
}

impl BrowserView {
    pub fn new(titles: Vec<String>) -> Self {
        Self {
            titles,
            filter: String::new(),
            selected: 0,
        }
    }

    /// Titles matching the current filter (case-insensitive substring).
    pub fn filtered(&self) -> Vec<&str> {
        if self.filter.is_empty() {
            return self.titles.iter().map(String::as_str).collect();
        }
        let needle = self.filter.to_lowercase();
        self.titles
            .iter()
            .filter(|t| t.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    /// Currently selected title, if any match the filter.
    pub fn selected_title(&self) -> Option<&str> {
        self.filtered().get(self.selected).copied()
    }

    pub fn up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn down(&mut self) {
        if self.selected + 1 < self.filtered().len() {
            self.selected += 1;
        }
    }

    pub fn first(&mut self) {
        self.selected = 0;
    }

    pub fn last(&mut self) {
        self.selected = self.filtered().len().saturating_sub(1);
    }

    /// Append to the filter and clamp the selection.
    pub fn insert(&mut self, c: char) {
        self.filter.push(c);
        self.clamp_selection();
    }

    /// Remove the last filter character and clamp the selection.
    pub fn backspace(&mut self) {
        self.filter.pop();
        self.clamp_selection();
    }

    /// Drop the filter entirely.
    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.selected = 0;
    }

    fn clamp_selection(&mut self) {
        let len = self.filtered().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// Render the title list.
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let border_style = if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        };

        let filtered = self.filtered();
        let title = format!(" TITLES ({}) ", filtered.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Span::styled(title, Theme::title()));

        if filtered.is_empty() {
            let message = if self.filter.is_empty() {
                "Catalog is empty"
            } else {
                "No titles match the filter"
            };
            let empty = Paragraph::new(message)
                .style(Theme::dimmed())
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner = block.inner(area);
        let visible_height = inner.height as usize;

        // Scroll so the selection stays in view
        let offset = if self.selected >= visible_height {
            self.selected - visible_height + 1
        } else {
            0
        };

        let items: Vec<ListItem> = filtered
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible_height)
            .map(|(i, title)| {
                let is_selected = i == self.selected;
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
                    Span::styled(
                        (*title).to_string(),
                        if is_selected {
                            Theme::list_item_selected()
                        } else {
                            Theme::list_item()
                        },
                    ),
                ]);

                ListItem::new(line)
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_widget(list, area);
    }
}
