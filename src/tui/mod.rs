//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Fetch model
//!
//! Every effect returned by `update()` is spawned onto the tokio runtime;
//! the task performs one HTTP request and reports back over an mpsc channel
//! as another action. In-flight requests are never cancelled - the reducer's
//! generation guard discards completions that arrive for a stale key.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading** (spinner visible): draws every ~80ms for smooth animation.
//! - **Idle**: sleeps up to 500ms, only redraws on events or channel actions.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use tui_scrollview::ScrollViewState;

use crate::api::CountriesClient;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, ListScope, Route};
use crate::tui::component::EventHandler;
use crate::tui::components::{CountryListEvent, CountryListState, SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search: SearchBox,
    pub list: CountryListState,
    pub detail_scroll: ScrollViewState,
    /// Marker glyph for the capital on the map (from config)
    pub map_marker: String,
}

impl TuiState {
    pub fn new(map_marker: String) -> Self {
        Self {
            search: SearchBox::new(),
            list: CountryListState::new(),
            detail_scroll: ScrollViewState::default(),
            map_marker,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for the search input
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

pub fn run(config: ResolvedConfig, initial: Route) -> std::io::Result<()> {
    let client = CountriesClient::new(&config.api_base_url, &config.geo_base_url);
    let mut app = App::new();
    let mut tui = TuiState::new(config.map_marker);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from spawned fetch tasks
    let (tx, rx) = mpsc::channel();

    let mut should_quit = false;

    // Apply the route requested on the command line before the first frame.
    let initial_effect = match initial {
        Route::Home => Effect::None,
        Route::Country(name) => update(&mut app, Action::OpenCountry(name)),
        Route::Region(name) => update(&mut app, Action::OpenRegion(name)),
        Route::Subregion(name) => update(&mut app, Action::OpenSubregion(name)),
    };
    should_quit |= perform_effect(initial_effect, &client, &tx);

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    while !should_quit {
        // Sync component props with core state
        tui.search.suggestion_count = app.search.suggestions.len();

        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of screen
            if matches!(event, TuiEvent::ForceQuit) {
                should_quit |= perform_effect(update(&mut app, Action::Quit), &client, &tx);
                continue;
            }

            if let Some(action) = route_event(&app, &mut tui, &event) {
                reset_presentation(&mut tui, &action);
                let effect = update(&mut app, action);
                should_quit |= perform_effect(effect, &client, &tx);
            }
        }

        // Handle fetch completions from spawned tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            should_quit |= perform_effect(effect, &client, &tx);
        }
    }

    ratatui::restore();
    Ok(())
}

/// Translate a terminal event into a core action, according to the screen
/// that currently has focus.
fn route_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match &app.route {
        Route::Home => {
            if matches!(event, TuiEvent::Escape) {
                return Some(Action::Quit);
            }
            match tui.search.handle_event(event)? {
                SearchEvent::QueryChanged(query) => Some(Action::SearchInput(query)),
                SearchEvent::OpenSuggestion(index) => app
                    .search
                    .suggestions
                    .get(index)
                    .map(|name| Action::OpenCountry(name.clone())),
                SearchEvent::OpenQuery(query) => Some(Action::OpenCountry(query)),
            }
        }
        Route::Country(_) => {
            let record = app.detail.state.as_ready();
            match event {
                TuiEvent::Escape => Some(Action::GoHome),
                // Region and subregion names on the card are navigable,
                // like the underlined spans in a browser.
                TuiEvent::InputChar('r') => record
                    .filter(|r| !r.region.is_empty())
                    .map(|r| Action::OpenRegion(r.region.clone())),
                TuiEvent::InputChar('s') => record
                    .filter(|r| !r.subregion.is_empty())
                    .map(|r| Action::OpenSubregion(r.subregion.clone())),
                TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                    tui.detail_scroll.scroll_up();
                    None
                }
                TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                    tui.detail_scroll.scroll_down();
                    None
                }
                TuiEvent::ScrollPageUp => {
                    tui.detail_scroll.scroll_page_up();
                    None
                }
                TuiEvent::ScrollPageDown => {
                    tui.detail_scroll.scroll_page_down();
                    None
                }
                _ => None,
            }
        }
        Route::Region(_) | Route::Subregion(_) => {
            let len = app
                .list
                .state
                .as_ready()
                .map(|countries| countries.len())
                .unwrap_or(0);
            match tui.list.handle_event(event, len)? {
                CountryListEvent::Open(index) => app
                    .list
                    .state
                    .as_ready()
                    .and_then(|countries| countries.get(index))
                    .map(|country| Action::OpenCountry(country.name.common.clone())),
                CountryListEvent::Back => Some(Action::GoHome),
            }
        }
    }
}

/// Reset per-screen presentation state when navigating to a fresh screen.
fn reset_presentation(tui: &mut TuiState, action: &Action) {
    match action {
        Action::OpenCountry(_) => tui.detail_scroll = ScrollViewState::default(),
        Action::OpenRegion(_) | Action::OpenSubregion(_) => tui.list = CountryListState::new(),
        _ => {}
    }
}

/// Perform an effect from the reducer. Returns true when the app should quit.
fn perform_effect(effect: Effect, client: &CountriesClient, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::FetchDetail { name, generation } => {
            spawn_detail_fetch(client.clone(), name, generation, tx.clone());
            false
        }
        Effect::FetchBoundary { code, generation } => {
            spawn_boundary_fetch(client.clone(), code, generation, tx.clone());
            false
        }
        Effect::FetchList { scope, generation } => {
            spawn_list_fetch(client.clone(), scope, generation, tx.clone());
            false
        }
        Effect::FetchSuggestions { query, generation } => {
            spawn_suggestion_fetch(client.clone(), query, generation, tx.clone());
            false
        }
    }
}

fn spawn_detail_fetch(
    client: CountriesClient,
    name: String,
    generation: u64,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning country lookup: {name:?} (generation {generation})");
    tokio::spawn(async move {
        let action = match client.country_by_name(&name).await {
            Ok(record) => Action::DetailLoaded {
                generation,
                record: Box::new(record),
            },
            Err(e) => {
                warn!("Country lookup {name:?} failed: {e}");
                Action::DetailFailed { generation }
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send detail result: receiver dropped");
        }
    });
}

fn spawn_boundary_fetch(
    client: CountriesClient,
    code: String,
    generation: u64,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning boundary fetch: {code} (generation {generation})");
    tokio::spawn(async move {
        let action = match client.boundary(&code).await {
            Ok(geometry) => Action::BoundaryLoaded {
                generation,
                geometry,
            },
            Err(e) => {
                // Best-effort: the reducer keeps the detail screen ready.
                warn!("Boundary fetch for {code} failed: {e}");
                Action::BoundaryFailed { generation }
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send boundary result: receiver dropped");
        }
    });
}

fn spawn_list_fetch(
    client: CountriesClient,
    scope: ListScope,
    generation: u64,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning list fetch: {scope:?} (generation {generation})");
    tokio::spawn(async move {
        let result = match &scope {
            ListScope::Region(name) => client.countries_in_region(name).await,
            ListScope::Subregion(name) => client.countries_in_subregion(name).await,
        };
        let action = match result {
            Ok(countries) => Action::ListLoaded {
                generation,
                countries,
            },
            Err(e) => {
                warn!("List fetch for {scope:?} failed: {e}");
                Action::ListFailed { generation }
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send list result: receiver dropped");
        }
    });
}

fn spawn_suggestion_fetch(
    client: CountriesClient,
    query: String,
    generation: u64,
    tx: mpsc::Sender<Action>,
) {
    debug!("Spawning suggestion fetch: {query:?} (generation {generation})");
    tokio::spawn(async move {
        let action = match client.search_names(&query).await {
            Ok(names) => Action::SuggestionsLoaded { generation, names },
            Err(e) => {
                // Soft degrade to an empty suggestion list.
                debug!("Suggestion fetch {query:?} failed: {e}");
                Action::SuggestionsFailed { generation }
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send suggestions: receiver dropped");
        }
    });
}
