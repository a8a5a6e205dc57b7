//! # Search Box Component
//!
//! Single-line text input plus the suggestion dropdown on the Home screen.
//!
//! The buffer and cursor are internal state. The suggestion list itself
//! lives in core state; the component only needs its length for selection
//! handling, synced as a prop each frame.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// The query text changed (every edit)
    QueryChanged(String),
    /// User picked the highlighted suggestion (index into the list)
    OpenSuggestion(usize),
    /// User submitted free text with no suggestion highlighted
    OpenQuery(String),
}

pub struct SearchBox {
    /// Text buffer (internal state)
    pub buffer: String,
    /// Byte offset of the cursor within `buffer`
    cursor: usize,
    /// Highlighted suggestion, if any
    pub selected: Option<usize>,
    /// Length of the current suggestion list (prop, synced each frame)
    pub suggestion_count: usize,
    list_state: ListState,
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            selected: None,
            suggestion_count: 0,
            list_state: ListState::default(),
        }
    }

    fn edited(&mut self) -> Option<SearchEvent> {
        // Any edit invalidates the highlight; the list may be replaced.
        self.selected = None;
        Some(SearchEvent::QueryChanged(self.buffer.clone()))
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, suggestions: &[String]) {
        let [input_area, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let input = Paragraph::new(self.buffer.as_str())
            .block(
                Block::bordered()
                    .border_type(ratatui::widgets::BorderType::Rounded)
                    .title("Type a country name...")
                    .padding(Padding::horizontal(1)),
            )
            .style(Style::default().fg(Color::White));
        frame.render_widget(input, input_area);

        let cursor_x = input_area.x + 2 + self.buffer[..self.cursor].width() as u16;
        frame.set_cursor_position((cursor_x.min(input_area.right().saturating_sub(2)), input_area.y + 1));

        if suggestions.is_empty() {
            let hint = Paragraph::new("Start typing (2+ characters) to see matching countries")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(hint, list_area);
            return;
        }

        let items: Vec<ListItem> = suggestions
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let style = if self.selected == Some(i) {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::styled(format!("  {name}"), style))
            })
            .collect();

        self.list_state.select(self.selected);
        let list = List::new(items).block(
            Block::bordered()
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Suggestions ")
                .title_bottom(Line::from(" ↑↓ Highlight  Enter Open ").centered()),
        );
        frame.render_stateful_widget(list, list_area, &mut self.list_state);
    }
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.edited()
            }
            TuiEvent::Paste(text) => {
                // Single-line input: pasted newlines collapse to spaces.
                let text = text.replace('\n', " ");
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                self.edited()
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    self.edited()
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::CursorUp => {
                if self.suggestion_count > 0 {
                    self.selected = Some(match self.selected {
                        Some(i) => i.saturating_sub(1),
                        None => self.suggestion_count - 1,
                    });
                }
                None
            }
            TuiEvent::CursorDown => {
                if self.suggestion_count > 0 {
                    self.selected = Some(match self.selected {
                        Some(i) => (i + 1).min(self.suggestion_count - 1),
                        None => 0,
                    });
                }
                None
            }
            TuiEvent::Submit => {
                if let Some(index) = self.selected {
                    Some(SearchEvent::OpenSuggestion(index))
                } else if !self.buffer.trim().is_empty() {
                    Some(SearchEvent::OpenQuery(self.buffer.trim().to_string()))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    let mut prev = pos - 1;
    while !s.is_char_boundary(prev) {
        prev -= 1;
    }
    prev
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    let mut next = pos + 1;
    while next < s.len() && !s.is_char_boundary(next) {
        next += 1;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_emits_query_changed() {
        let mut search = SearchBox::new();
        let event = search.handle_event(&TuiEvent::InputChar('f'));
        assert_eq!(event, Some(SearchEvent::QueryChanged("f".to_string())));
        let event = search.handle_event(&TuiEvent::InputChar('r'));
        assert_eq!(event, Some(SearchEvent::QueryChanged("fr".to_string())));
        assert_eq!(search.buffer, "fr");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut search = SearchBox::new();
        assert_eq!(search.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut search = SearchBox::new();
        search.handle_event(&TuiEvent::InputChar('é'));
        search.handle_event(&TuiEvent::InputChar('s'));
        assert_eq!(search.buffer, "és");
        search.handle_event(&TuiEvent::CursorLeft);
        search.handle_event(&TuiEvent::CursorLeft);
        search.handle_event(&TuiEvent::InputChar('r'));
        assert_eq!(search.buffer, "rés");
    }

    #[test]
    fn test_selection_navigation_clamps() {
        let mut search = SearchBox::new();
        search.suggestion_count = 2;
        search.handle_event(&TuiEvent::CursorDown);
        assert_eq!(search.selected, Some(0));
        search.handle_event(&TuiEvent::CursorDown);
        search.handle_event(&TuiEvent::CursorDown);
        assert_eq!(search.selected, Some(1));
        search.handle_event(&TuiEvent::CursorUp);
        assert_eq!(search.selected, Some(0));
    }

    #[test]
    fn test_submit_prefers_highlighted_suggestion() {
        let mut search = SearchBox::new();
        search.suggestion_count = 3;
        search.buffer = "fr".to_string();
        search.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            search.handle_event(&TuiEvent::Submit),
            Some(SearchEvent::OpenSuggestion(0))
        );
    }

    #[test]
    fn test_submit_free_text_without_selection() {
        let mut search = SearchBox::new();
        search.buffer = " France ".to_string();
        search.cursor = search.buffer.len();
        assert_eq!(
            search.handle_event(&TuiEvent::Submit),
            Some(SearchEvent::OpenQuery("France".to_string()))
        );
    }

    #[test]
    fn test_edit_clears_highlight() {
        let mut search = SearchBox::new();
        search.suggestion_count = 1;
        search.handle_event(&TuiEvent::CursorDown);
        assert_eq!(search.selected, Some(0));
        search.handle_event(&TuiEvent::InputChar('x'));
        assert_eq!(search.selected, None);
    }

    #[test]
    fn test_empty_submit_is_noop() {
        let mut search = SearchBox::new();
        assert_eq!(search.handle_event(&TuiEvent::Submit), None);
    }
}
