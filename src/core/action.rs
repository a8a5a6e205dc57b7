//! # Actions
//!
//! Everything that can happen in Atlas becomes an `Action`.
//! User opens a country? That's `Action::OpenCountry(name)`.
//! A lookup finishes? That's `Action::DetailLoaded { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns the `Effect` the caller must perform. No I/O
//! here - fetches are spawned by the TUI layer and report back as actions.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Every completion action carries the generation it was issued under.
//! `update()` drops completions whose generation is no longer current, so a
//! slow response for an old key can never overwrite a newer key's state.

use log::{debug, warn};

use crate::api::geometry::BoundaryGeometry;
use crate::api::types::{CountryRecord, CountrySummary};
use crate::core::fetch::FetchState;
use crate::core::state::{App, ListScope, Route};

/// Minimum search input length before a suggestion request is issued.
pub const MIN_QUERY_LEN: usize = 2;

/// User-visible message for a failed country lookup. Not-found and transport
/// failures collapse into this one message; the concrete cause goes to the log.
pub const COUNTRY_LOOKUP_FAILED: &str = "Country not found or lookup failed";

/// User-visible message for a failed region/subregion listing.
pub const LIST_LOOKUP_FAILED: &str = "Could not load countries";

#[derive(Debug)]
pub enum Action {
    // Navigation
    OpenCountry(String),
    OpenRegion(String),
    OpenSubregion(String),
    GoHome,
    Quit,

    // Search input changed (every keystroke)
    SearchInput(String),

    // Fetch completions, stamped with the generation of their request
    DetailLoaded { generation: u64, record: Box<CountryRecord> },
    DetailFailed { generation: u64 },
    BoundaryLoaded { generation: u64, geometry: BoundaryGeometry },
    BoundaryFailed { generation: u64 },
    ListLoaded { generation: u64, countries: Vec<CountrySummary> },
    ListFailed { generation: u64 },
    SuggestionsLoaded { generation: u64, names: Vec<String> },
    SuggestionsFailed { generation: u64 },
}

/// What the caller must do after an update.
#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    Quit,
    FetchDetail { name: String, generation: u64 },
    FetchBoundary { code: String, generation: u64 },
    FetchList { scope: ListScope, generation: u64 },
    FetchSuggestions { query: String, generation: u64 },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::OpenCountry(name) => {
            app.route = Route::Country(name.clone());
            // Leaving the list screen discards its data. Generations survive
            // the reset so stale completions keep failing the guard.
            app.list.scope = None;
            app.list.state = FetchState::Idle;
            app.detail.state = FetchState::Loading;
            app.detail.boundary = None;
            app.status_message = format!("Loading {name}...");
            let generation = app.detail.generation.bump();
            Effect::FetchDetail { name, generation }
        }
        Action::OpenRegion(name) => open_list(app, ListScope::Region(name)),
        Action::OpenSubregion(name) => open_list(app, ListScope::Subregion(name)),
        Action::GoHome => {
            app.route = Route::Home;
            app.detail.state = FetchState::Idle;
            app.detail.boundary = None;
            app.list.scope = None;
            app.list.state = FetchState::Idle;
            app.status_message.clear();
            Effect::None
        }
        Action::Quit => Effect::Quit,

        Action::SearchInput(input) => {
            app.search.input = input;
            if app.search.input.chars().count() < MIN_QUERY_LEN {
                // Below threshold: no request, and the previous suggestion
                // list stays untouched.
                return Effect::None;
            }
            let generation = app.search.generation.bump();
            Effect::FetchSuggestions {
                query: app.search.input.clone(),
                generation,
            }
        }

        Action::DetailLoaded { generation, record } => {
            if !app.detail.generation.is_current(generation) {
                debug!("Dropping stale detail response (generation {generation})");
                return Effect::None;
            }
            let code = record.cca3.clone();
            app.status_message = record.name.common.clone();
            app.detail.state = FetchState::Ready(*record);
            if code.is_empty() {
                // No cca3 to key the geometry lookup; the map renders
                // without an overlay.
                return Effect::None;
            }
            Effect::FetchBoundary { code, generation }
        }
        Action::DetailFailed { generation } => {
            if !app.detail.generation.is_current(generation) {
                debug!("Dropping stale detail failure (generation {generation})");
                return Effect::None;
            }
            app.detail.state = FetchState::Error(COUNTRY_LOOKUP_FAILED.to_string());
            app.status_message.clear();
            Effect::None
        }

        Action::BoundaryLoaded { generation, geometry } => {
            if !app.detail.generation.is_current(generation) {
                debug!("Dropping stale boundary response (generation {generation})");
                return Effect::None;
            }
            if app.detail.state.as_ready().is_some() {
                app.detail.boundary = Some(geometry);
            }
            Effect::None
        }
        Action::BoundaryFailed { generation } => {
            // Best-effort fetch: the detail screen stays ready, the map just
            // has no overlay.
            if app.detail.generation.is_current(generation) {
                warn!("Boundary fetch failed; rendering map without overlay");
            }
            Effect::None
        }

        Action::ListLoaded { generation, countries } => {
            if !app.list.generation.is_current(generation) {
                debug!("Dropping stale list response (generation {generation})");
                return Effect::None;
            }
            // Server order is kept verbatim; an empty list is a valid result.
            app.list.state = FetchState::Ready(countries);
            Effect::None
        }
        Action::ListFailed { generation } => {
            if !app.list.generation.is_current(generation) {
                debug!("Dropping stale list failure (generation {generation})");
                return Effect::None;
            }
            app.list.state = FetchState::Error(LIST_LOOKUP_FAILED.to_string());
            Effect::None
        }

        Action::SuggestionsLoaded { generation, mut names } => {
            if !app.search.generation.is_current(generation) {
                debug!("Dropping stale suggestions (generation {generation})");
                return Effect::None;
            }
            names.sort();
            app.search.suggestions = names;
            Effect::None
        }
        Action::SuggestionsFailed { generation } => {
            if !app.search.generation.is_current(generation) {
                return Effect::None;
            }
            // Soft degrade: an empty list, not an error state.
            app.search.suggestions.clear();
            Effect::None
        }
    }
}

fn open_list(app: &mut App, scope: ListScope) -> Effect {
    app.route = match &scope {
        ListScope::Region(name) => Route::Region(name.clone()),
        ListScope::Subregion(name) => Route::Subregion(name.clone()),
    };
    app.detail.state = FetchState::Idle;
    app.detail.boundary = None;
    app.status_message = scope.title().to_string();
    app.list.scope = Some(scope.clone());
    app.list.state = FetchState::Loading;
    let generation = app.list.generation.bump();
    Effect::FetchList { scope, generation }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{france, summary};

    fn detail_generation(effect: &Effect) -> u64 {
        match effect {
            Effect::FetchDetail { generation, .. } => *generation,
            other => panic!("expected FetchDetail, got {other:?}"),
        }
    }

    #[test]
    fn test_open_country_starts_loading() {
        let mut app = App::new();
        let effect = update(&mut app, Action::OpenCountry("France".to_string()));

        assert_eq!(app.route, Route::Country("France".to_string()));
        assert!(app.detail.state.is_loading());
        assert!(app.detail.boundary.is_none());
        match effect {
            Effect::FetchDetail { name, generation } => {
                assert_eq!(name, "France");
                assert_eq!(generation, 1);
            }
            other => panic!("expected FetchDetail, got {other:?}"),
        }
    }

    #[test]
    fn test_detail_ready_with_matching_identifier() {
        let mut app = App::new();
        let effect = update(&mut app, Action::OpenCountry("France".to_string()));
        let generation = detail_generation(&effect);

        let effect = update(
            &mut app,
            Action::DetailLoaded {
                generation,
                record: Box::new(france()),
            },
        );

        let record = app.detail.state.as_ready().expect("detail should be ready");
        assert_eq!(record.name.common, "France");
        assert_eq!(record.capital, vec!["Paris".to_string()]);
        assert_eq!(record.region, "Europe");
        // The dependent boundary fetch reuses the detail generation.
        assert_eq!(
            effect,
            Effect::FetchBoundary {
                code: "FRA".to_string(),
                generation,
            }
        );
    }

    #[test]
    fn test_detail_failure_is_terminal_error() {
        let mut app = App::new();
        let effect = update(&mut app, Action::OpenCountry("Nonexistent".to_string()));
        let generation = detail_generation(&effect);

        let effect = update(&mut app, Action::DetailFailed { generation });

        assert_eq!(effect, Effect::None);
        assert_eq!(
            app.detail.state.error_message(),
            Some(COUNTRY_LOOKUP_FAILED)
        );
        assert!(app.detail.state.as_ready().is_none());
    }

    #[test]
    fn test_boundary_failure_keeps_detail_ready() {
        let mut app = App::new();
        let effect = update(&mut app, Action::OpenCountry("France".to_string()));
        let generation = detail_generation(&effect);
        update(
            &mut app,
            Action::DetailLoaded {
                generation,
                record: Box::new(france()),
            },
        );

        let effect = update(&mut app, Action::BoundaryFailed { generation });

        assert_eq!(effect, Effect::None);
        assert!(app.detail.state.as_ready().is_some());
        assert!(app.detail.boundary.is_none());
    }

    #[test]
    fn test_boundary_loaded_attaches_overlay() {
        let mut app = App::new();
        let effect = update(&mut app, Action::OpenCountry("France".to_string()));
        let generation = detail_generation(&effect);
        update(
            &mut app,
            Action::DetailLoaded {
                generation,
                record: Box::new(france()),
            },
        );

        let geometry = BoundaryGeometry {
            rings: vec![vec![(2.0, 48.0), (3.0, 48.0), (3.0, 49.0)]],
        };
        update(
            &mut app,
            Action::BoundaryLoaded {
                generation,
                geometry: geometry.clone(),
            },
        );

        assert_eq!(app.detail.boundary, Some(geometry));
    }

    #[test]
    fn test_stale_detail_response_is_dropped() {
        let mut app = App::new();
        let effect = update(&mut app, Action::OpenCountry("Spain".to_string()));
        let stale = detail_generation(&effect);
        update(&mut app, Action::OpenCountry("France".to_string()));

        // The slow response for "Spain" arrives after "France" was requested.
        let mut spain = france();
        spain.name.common = "Spain".to_string();
        let effect = update(
            &mut app,
            Action::DetailLoaded {
                generation: stale,
                record: Box::new(spain),
            },
        );

        assert_eq!(effect, Effect::None);
        assert!(app.detail.state.is_loading(), "stale response must not land");
    }

    #[test]
    fn test_stale_boundary_is_dropped_after_renavigation() {
        let mut app = App::new();
        let effect = update(&mut app, Action::OpenCountry("France".to_string()));
        let stale = detail_generation(&effect);
        update(
            &mut app,
            Action::DetailLoaded {
                generation: stale,
                record: Box::new(france()),
            },
        );

        // Navigate to a new country before the first boundary arrives.
        let effect = update(&mut app, Action::OpenCountry("Spain".to_string()));
        let current = detail_generation(&effect);
        let mut spain = france();
        spain.name.common = "Spain".to_string();
        spain.cca3 = "ESP".to_string();
        update(
            &mut app,
            Action::DetailLoaded {
                generation: current,
                record: Box::new(spain),
            },
        );

        update(
            &mut app,
            Action::BoundaryLoaded {
                generation: stale,
                geometry: BoundaryGeometry {
                    rings: vec![vec![(0.0, 0.0)]],
                },
            },
        );

        assert!(app.detail.boundary.is_none(), "stale boundary must not attach");
    }

    #[test]
    fn test_list_preserves_server_order() {
        let mut app = App::new();
        let effect = update(&mut app, Action::OpenRegion("Africa".to_string()));
        let generation = match effect {
            Effect::FetchList { generation, ref scope } => {
                assert_eq!(scope, &ListScope::Region("Africa".to_string()));
                generation
            }
            other => panic!("expected FetchList, got {other:?}"),
        };

        let countries = vec![
            summary("Nigeria", "NGA"),
            summary("Algeria", "DZA"),
            summary("Kenya", "KEN"),
        ];
        update(
            &mut app,
            Action::ListLoaded {
                generation,
                countries: countries.clone(),
            },
        );

        assert_eq!(app.list.state.as_ready(), Some(&countries));
        assert_eq!(app.route, Route::Region("Africa".to_string()));
    }

    #[test]
    fn test_empty_list_is_ready_not_error() {
        let mut app = App::new();
        let effect = update(&mut app, Action::OpenSubregion("Melanesia".to_string()));
        let generation = match effect {
            Effect::FetchList { generation, .. } => generation,
            other => panic!("expected FetchList, got {other:?}"),
        };

        update(
            &mut app,
            Action::ListLoaded {
                generation,
                countries: Vec::new(),
            },
        );

        assert_eq!(app.list.state.as_ready(), Some(&Vec::new()));
        assert!(app.list.state.error_message().is_none());
    }

    #[test]
    fn test_list_failure_is_error() {
        let mut app = App::new();
        let effect = update(&mut app, Action::OpenRegion("Africa".to_string()));
        let generation = match effect {
            Effect::FetchList { generation, .. } => generation,
            other => panic!("expected FetchList, got {other:?}"),
        };

        update(&mut app, Action::ListFailed { generation });
        assert_eq!(app.list.state.error_message(), Some(LIST_LOOKUP_FAILED));
    }

    #[test]
    fn test_short_input_issues_no_request_and_keeps_suggestions() {
        let mut app = App::new();
        app.search.suggestions = vec!["France".to_string(), "Finland".to_string()];

        for input in ["", "f"] {
            let effect = update(&mut app, Action::SearchInput(input.to_string()));
            assert_eq!(effect, Effect::None, "input {input:?} must not fetch");
        }
        assert_eq!(
            app.search.suggestions,
            vec!["France".to_string(), "Finland".to_string()]
        );
    }

    #[test]
    fn test_qualifying_input_issues_one_request() {
        let mut app = App::new();
        let effect = update(&mut app, Action::SearchInput("fr".to_string()));
        assert_eq!(
            effect,
            Effect::FetchSuggestions {
                query: "fr".to_string(),
                generation: 1,
            }
        );
    }

    #[test]
    fn test_suggestions_sorted_ascending() {
        let mut app = App::new();
        let effect = update(&mut app, Action::SearchInput("fr".to_string()));
        let generation = match effect {
            Effect::FetchSuggestions { generation, .. } => generation,
            other => panic!("expected FetchSuggestions, got {other:?}"),
        };

        update(
            &mut app,
            Action::SuggestionsLoaded {
                generation,
                names: vec![
                    "French Polynesia".to_string(),
                    "France".to_string(),
                    "French Guiana".to_string(),
                ],
            },
        );

        assert_eq!(
            app.search.suggestions,
            vec![
                "France".to_string(),
                "French Guiana".to_string(),
                "French Polynesia".to_string(),
            ]
        );
    }

    #[test]
    fn test_suggestion_failure_clears_list() {
        let mut app = App::new();
        app.search.suggestions = vec!["France".to_string()];
        let effect = update(&mut app, Action::SearchInput("zz".to_string()));
        let generation = match effect {
            Effect::FetchSuggestions { generation, .. } => generation,
            other => panic!("expected FetchSuggestions, got {other:?}"),
        };

        update(&mut app, Action::SuggestionsFailed { generation });
        assert!(app.search.suggestions.is_empty());
    }

    #[test]
    fn test_stale_suggestions_are_dropped() {
        let mut app = App::new();
        let effect = update(&mut app, Action::SearchInput("fr".to_string()));
        let stale = match effect {
            Effect::FetchSuggestions { generation, .. } => generation,
            other => panic!("expected FetchSuggestions, got {other:?}"),
        };
        let effect = update(&mut app, Action::SearchInput("fra".to_string()));
        let current = match effect {
            Effect::FetchSuggestions { generation, .. } => generation,
            other => panic!("expected FetchSuggestions, got {other:?}"),
        };

        update(
            &mut app,
            Action::SuggestionsLoaded {
                generation: current,
                names: vec!["France".to_string()],
            },
        );
        update(
            &mut app,
            Action::SuggestionsLoaded {
                generation: stale,
                names: vec!["Frankenland".to_string()],
            },
        );

        assert_eq!(app.search.suggestions, vec!["France".to_string()]);
    }

    #[test]
    fn test_go_home_discards_screen_data() {
        let mut app = App::new();
        let effect = update(&mut app, Action::OpenCountry("France".to_string()));
        let generation = detail_generation(&effect);
        update(
            &mut app,
            Action::DetailLoaded {
                generation,
                record: Box::new(france()),
            },
        );

        update(&mut app, Action::GoHome);
        assert_eq!(app.route, Route::Home);
        assert!(app.detail.state.as_ready().is_none());
        assert!(app.detail.boundary.is_none());
    }

    #[test]
    fn test_quit_effect() {
        let mut app = App::new();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
