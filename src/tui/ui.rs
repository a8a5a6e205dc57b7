use crate::core::fetch::FetchState;
use crate::core::state::{App, Route};
use crate::tui::TuiState;
use crate::tui::components::{BoundaryMap, CountryList, DetailCard};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    // Title bar
    let title_text = if app.status_message.is_empty() {
        "Atlas".to_string()
    } else {
        format!("Atlas | {}", app.status_message)
    };
    frame.render_widget(Span::raw(title_text), title_area);

    match &app.route {
        Route::Home => draw_home(frame, main_area, app, tui),
        Route::Country(_) => draw_detail(frame, main_area, app, tui, spinner_frame),
        Route::Region(_) | Route::Subregion(_) => {
            draw_list(frame, main_area, app, tui, spinner_frame)
        }
    }

    let help = Paragraph::new(help_text(&app.route))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, help_area);
}

fn help_text(route: &Route) -> &'static str {
    match route {
        Route::Home => " ↑↓ Highlight  Enter Open  Ctrl+C Quit ",
        Route::Country(_) => " r Region  s Subregion  ↑↓ Scroll  Esc Home  Ctrl+C Quit ",
        Route::Region(_) | Route::Subregion(_) => " ↑↓ Select  Enter Open  Esc Home  Ctrl+C Quit ",
    }
}

fn draw_home(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    // Centered column so the search input doesn't stretch on wide terminals.
    let [column] = Layout::horizontal([Constraint::Max(60)])
        .flex(Flex::Center)
        .areas(area);
    let [header_area, search_area] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(column);

    let header = Paragraph::new(
        "Countries Library\n\
         Retrieve detailed information about any country - borders, flags,\n\
         populations, currencies, languages, and more.",
    )
    .style(Style::default().fg(Color::White))
    .alignment(Alignment::Center);
    frame.render_widget(header, header_area);

    tui.search.render(frame, search_area, &app.search.suggestions);
}

fn draw_detail(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    match &app.detail.state {
        FetchState::Loading => draw_loading(frame, area, spinner_frame),
        FetchState::Error(message) => draw_error_view(frame, area, message),
        FetchState::Ready(record) => {
            let [facts_area, map_area] =
                Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .areas(area);
            DetailCard::new(record).render(frame, facts_area, &mut tui.detail_scroll);
            BoundaryMap::new(record, app.detail.boundary.as_ref(), &tui.map_marker)
                .render(frame, map_area);
        }
        FetchState::Idle => {}
    }
}

fn draw_list(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let title = app
        .list
        .scope
        .as_ref()
        .map(|scope| scope.title())
        .unwrap_or_default();
    match &app.list.state {
        FetchState::Loading => draw_loading(frame, area, spinner_frame),
        FetchState::Error(message) => draw_error_view(frame, area, message),
        FetchState::Ready(countries) => {
            CountryList::new(&mut tui.list, countries, title).render(frame, area);
        }
        FetchState::Idle => {}
    }
}

fn draw_loading(frame: &mut Frame, area: Rect, spinner_frame: usize) {
    let glyph = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let [center] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    let spinner = Paragraph::new(format!("{glyph} Loading..."))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    frame.render_widget(spinner, center);
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let error_paragraph = Paragraph::new(error_msg)
        .style(Style::default().fg(Color::Red))
        .block(Block::bordered().title("ERROR"))
        .alignment(Alignment::Center);

    frame.render_widget(error_paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::state::ListScope;
    use crate::test_support::{france, summary};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_home() {
        let app = App::new();
        let mut tui = TuiState::new("◉".to_string());
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Countries Library"));
        assert!(text.contains("Type a country name"));
    }

    #[test]
    fn test_draw_detail_loading_then_ready() {
        let mut app = App::new();
        let mut tui = TuiState::new("◉".to_string());
        update(&mut app, Action::OpenCountry("France".to_string()));
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Loading"));

        app.detail.state = FetchState::Ready(france());
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("POPULATION"));
        assert!(text.contains("67,391,582"));
        assert!(text.contains("Location Map"));
    }

    #[test]
    fn test_draw_detail_error() {
        let mut app = App::new();
        let mut tui = TuiState::new("◉".to_string());
        app.route = Route::Country("Nonexistent".to_string());
        app.detail.state = FetchState::Error("Country not found or lookup failed".to_string());
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("ERROR"));
        assert!(text.contains("Country not found"));
    }

    #[test]
    fn test_draw_region_list() {
        let mut app = App::new();
        let mut tui = TuiState::new("◉".to_string());
        app.route = Route::Region("Africa".to_string());
        app.list.scope = Some(ListScope::Region("Africa".to_string()));
        app.list.state = FetchState::Ready(vec![summary("Nigeria", "NGA")]);
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Africa"));
        assert!(text.contains("Nigeria"));
    }
}
