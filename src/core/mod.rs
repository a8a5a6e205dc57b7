//! # Core Application Logic
//!
//! This module contains Atlas's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Fetch lifecycle      │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    API     │      │   Config   │
//!     │  Adapter   │      │  Client    │      │   Layer    │
//!     │ (ratatui)  │      │ (reqwest)  │      │   (toml)   │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`fetch`]: The `Idle → Loading → {Ready, Error}` lifecycle + generation guard
//! - [`config`]: TOML config loading and resolution

pub mod action;
pub mod config;
pub mod fetch;
pub mod state;
