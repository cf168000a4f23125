//! Sequence-numbered fetch bookkeeping.

use log::debug;

use crate::error::Error;
use crate::model::UsersPage;

/// Result of one spawned fetch, tagged with the sequence number it was issued under.
#[derive(Debug)]
pub struct FetchOutcome {
    pub seq: u64,
    pub result: Result<UsersPage, Error>,
}

/// What the view currently has to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    /// Nothing has come back yet.
    #[default]
    Idle,
    Loaded(UsersPage),
    /// The latest applied fetch failed with this message.
    Failed(String),
}

/// How a [`FetchOutcome`] was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Applied,
    /// Older than something already applied.
    Stale,
}

/// Tracks issued and applied sequence numbers.
///
/// Responses are applied only if they are newer than the last applied one,
/// so a slow early request can never overwrite a later result.
#[derive(Debug, Default)]
pub struct FetchTracker {
    issued: u64,
    applied: u64,
    state: FetchState,
}

impl FetchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves the next sequence number.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// `true` until the most recently issued fetch has settled.
    pub fn is_loading(&self) -> bool {
        self.applied < self.issued
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Loaded data, if the last applied fetch succeeded.
    pub fn data(&self) -> Option<&UsersPage> {
        match &self.state {
            FetchState::Loaded(page) => Some(page),
            _ => None,
        }
    }

    /// Error message, if the last applied fetch failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn settle(&mut self, outcome: FetchOutcome) -> Settled {
        if outcome.seq <= self.applied {
            debug!(
                "Discarding stale response #{} (applied #{})",
                outcome.seq, self.applied
            );
            return Settled::Stale;
        }

        self.applied = outcome.seq;
        self.state = match outcome.result {
            Ok(page) => FetchState::Loaded(page),
            Err(e) => FetchState::Failed(e.to_string()),
        };
        Settled::Applied
    }
}
