//! # Country List Component
//!
//! Selectable list of country summaries for the region/subregion screens.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CountryListState` lives in `TuiState`
//! - `CountryList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::api::types::CountrySummary;
use crate::tui::event::TuiEvent;

/// Persistent state for the country list screen.
pub struct CountryListState {
    pub selected: usize,
    pub list_state: ListState,
}

impl CountryListState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            list_state,
        }
    }

    /// Handle a key event against a list of `len` entries.
    pub fn handle_event(&mut self, event: &TuiEvent, len: usize) -> Option<CountryListEvent> {
        match event {
            TuiEvent::Escape => Some(CountryListEvent::Back),
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                if len > 0 {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                if len > 0 {
                    self.selected = (self.selected + 1).min(len - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::ScrollPageUp => {
                if len > 0 {
                    self.selected = self.selected.saturating_sub(10);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::ScrollPageDown => {
                if len > 0 {
                    self.selected = (self.selected + 10).min(len - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit => (self.selected < len).then_some(CountryListEvent::Open(self.selected)),
            _ => None,
        }
    }
}

impl Default for CountryListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by the country list.
#[derive(Debug, PartialEq)]
pub enum CountryListEvent {
    /// Open the country at this index
    Open(usize),
    /// Leave the list screen
    Back,
}

/// Transient render wrapper for the country list screen.
pub struct CountryList<'a> {
    state: &'a mut CountryListState,
    countries: &'a [CountrySummary],
    title: &'a str,
}

impl<'a> CountryList<'a> {
    pub fn new(
        state: &'a mut CountryListState,
        countries: &'a [CountrySummary],
        title: &'a str,
    ) -> Self {
        Self {
            state,
            countries,
            title,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let help_text = " Enter Open  Esc Back ";

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1));

        if self.countries.is_empty() {
            let empty = Paragraph::new("No countries in this group.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .countries
            .iter()
            .enumerate()
            .map(|(i, country)| {
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };

                let code_tag = format!("[{}]", country.cca3);
                let spans = vec![
                    Span::styled(
                        code_tag,
                        if i == self.state.selected {
                            style
                        } else {
                            Style::default().fg(Color::Yellow)
                        },
                    ),
                    Span::styled("  ", style),
                    Span::styled(country.name.common.as_str(), style),
                ];

                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
