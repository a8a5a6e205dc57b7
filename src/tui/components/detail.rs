//! # Detail Card Component
//!
//! The fact panel of the country detail screen: names on top, then the
//! labeled rows the record carries (capital, region, currencies, languages,
//! area, population, timezones, borders, driving side, start of week,
//! landlocked). Scrollable, since small terminals can't fit every row.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::types::CountryRecord;

const NOT_AVAILABLE: &str = "N/A";

/// Labeled rows in display order, formatted for the terminal.
pub fn fact_rows(record: &CountryRecord) -> Vec<(&'static str, String)> {
    let currencies = if record.currencies.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        record
            .currencies
            .iter()
            .map(|(code, currency)| match currency.symbol.as_deref() {
                Some(symbol) => format!("{code}: {} ({symbol})", currency.name),
                None => format!("{code}: {}", currency.name),
            })
            .collect::<Vec<_>>()
            .join(", ")
    };

    let languages = if record.languages.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        record.languages.values().cloned().collect::<Vec<_>>().join(", ")
    };

    let region = if record.subregion.is_empty() {
        record.region.clone()
    } else {
        format!("{} - {}", record.region, record.subregion)
    };

    let borders = if record.borders.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        record.borders.join(", ")
    };

    vec![
        ("Short form", or_na(&record.cioc)),
        (
            "Capital",
            record
                .capital_name()
                .map(str::to_string)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        ),
        ("Region", region),
        ("Currency", currencies),
        ("Languages", languages),
        ("Area", format!("{} km²", format_area(record.area))),
        ("Population", format_int(record.population)),
        ("Timezones", record.timezones.join(", ")),
        ("Borders", borders),
        ("Driving side", or_na(&record.car.side)),
        ("Start of week", or_na(&record.start_of_week)),
        (
            "Landlocked",
            if record.landlocked { "Yes" } else { "No" }.to_string(),
        ),
    ]
}

fn or_na(value: &str) -> String {
    if value.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

/// Thousands-separated integer, e.g. `67391582` → `"67,391,582"`.
pub fn format_int(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Area formatting: whole numbers are grouped, fractional ones keep two
/// decimals (tiny territories have sub-km² areas upstream).
pub fn format_area(value: f64) -> String {
    if value.fract() == 0.0 && value >= 0.0 {
        format_int(value as u64)
    } else {
        format!("{value:.2}")
    }
}

/// Transient render wrapper for the fact panel.
pub struct DetailCard<'a> {
    record: &'a CountryRecord,
}

impl<'a> DetailCard<'a> {
    pub fn new(record: &'a CountryRecord) -> Self {
        Self { record }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, scroll: &mut ScrollViewState) {
        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.record.name.common));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(Span::styled(
                self.record.name.common.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.record.name.official.clone(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )),
            Line::default(),
        ];
        for (label, value) in fact_rows(self.record) {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<14}", label.to_uppercase()),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
            ]));
        }
        if let Some(alt) = self.record.flags.alt.as_deref() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                alt.to_string(),
                Style::default().fg(Color::DarkGray),
            )));
        }

        let content_width = inner.width.saturating_sub(1);
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        let content_height = paragraph.line_count(content_width) as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            paragraph,
            Rect::new(0, 0, content_width, content_height),
        );
        frame.render_stateful_widget(scroll_view, inner, scroll);
    }
}
