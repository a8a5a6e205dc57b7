//! # TUI Components
//!
//! One file per screen concern, each self-contained: state types, event
//! types, rendering, and tests live together.
//!
//! Two patterns, matching what each component needs:
//!
//! - **Stateful, event-driven**: `SearchBox` (buffer + cursor + highlight)
//!   and `CountryListState` (selection). They consume `TuiEvent`s and emit
//!   high-level events the main loop turns into core actions.
//! - **Transient render wrappers**: `CountryList`, `DetailCard`,
//!   `BoundaryMap` are built each frame borrowing core state, so all data
//!   flow stays explicit.

pub mod country_list;
pub mod detail;
pub mod map;
pub mod search_box;

pub use country_list::{CountryList, CountryListEvent, CountryListState};
pub use detail::DetailCard;
pub use map::BoundaryMap;
pub use search_box::{SearchBox, SearchEvent};
