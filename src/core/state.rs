//! # Application State
//!
//! Core business state for Atlas. This module contains domain logic only -
//! no TUI-specific types. Presentation state (cursor positions, scroll
//! offsets, list selections) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── route: Route                   // which screen is showing
//! ├── status_message: String         // status bar text
//! ├── detail: DetailScreen           // one country + optional boundary
//! ├── list: ListScreen               // countries of a region/subregion
//! └── search: SearchScreen           // query input + suggestions
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::api::geometry::BoundaryGeometry;
use crate::api::types::{CountryRecord, CountrySummary};
use crate::core::fetch::{FetchState, Generation};

/// The navigable screens. Mirrors the route table of the UI:
/// a search landing page, detail-by-name, list-by-region, list-by-subregion.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    Country(String),
    Region(String),
    Subregion(String),
}

/// Grouping key for the list screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ListScope {
    Region(String),
    Subregion(String),
}

impl ListScope {
    /// Heading shown above the list.
    pub fn title(&self) -> &str {
        match self {
            ListScope::Region(name) | ListScope::Subregion(name) => name,
        }
    }
}

/// One country's full record plus its best-effort boundary overlay.
///
/// The screen is valid once `state` is `Ready`; `boundary` is purely
/// additive and never moves the screen back out of `Ready`.
#[derive(Debug)]
pub struct DetailScreen {
    pub state: FetchState<CountryRecord>,
    pub boundary: Option<BoundaryGeometry>,
    pub generation: Generation,
}

impl Default for DetailScreen {
    fn default() -> Self {
        Self {
            state: FetchState::Idle,
            boundary: None,
            generation: Generation::default(),
        }
    }
}

#[derive(Debug)]
pub struct ListScreen {
    pub scope: Option<ListScope>,
    pub state: FetchState<Vec<CountrySummary>>,
    pub generation: Generation,
}

impl Default for ListScreen {
    fn default() -> Self {
        Self {
            scope: None,
            state: FetchState::Idle,
            generation: Generation::default(),
        }
    }
}

/// Search input plus the suggestion list it has produced so far.
///
/// Sub-threshold input (under two characters) never clears `suggestions`;
/// the previous list stays until a qualifying query replaces it or a
/// suggestion fetch fails.
#[derive(Debug, Default)]
pub struct SearchScreen {
    pub input: String,
    pub suggestions: Vec<String>,
    pub generation: Generation,
}

pub struct App {
    pub route: Route,
    pub status_message: String,
    pub detail: DetailScreen,
    pub list: ListScreen,
    pub search: SearchScreen,
}

impl App {
    pub fn new() -> Self {
        Self {
            route: Route::Home,
            status_message: String::from("Welcome to Atlas!"),
            detail: DetailScreen::default(),
            list: ListScreen::default(),
            search: SearchScreen::default(),
        }
    }

    /// True while any screen is waiting on the network.
    pub fn is_loading(&self) -> bool {
        self.detail.state.is_loading() || self.list.state.is_loading()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
