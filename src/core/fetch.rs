//! # Fetch Lifecycle
//!
//! Every screen that pulls data from the network goes through the same
//! lifecycle: `Idle → Loading → {Ready, Error}`. The state is terminal once
//! it reaches `Ready` or `Error` and only restarts when the lookup key
//! changes (a new country name, region, or search query).
//!
//! Because requests are never cancelled, a slow response for an old key can
//! arrive after a newer key has already been submitted. Each controller owns
//! a [`Generation`] counter: every request is stamped with the generation it
//! was issued under, and completions carrying anything but the latest
//! generation are dropped.

/// Lifecycle of a single fetch-backed screen.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn as_ready(&self) -> Option<&T> {
        match self {
            FetchState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Monotonically increasing request counter for one controller.
///
/// `bump()` stamps a new request; `is_current()` decides whether a completion
/// belongs to the latest request or to a stale one.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Generation {
    latest: u64,
}

impl Generation {
    pub fn bump(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.latest == generation
    }
}
