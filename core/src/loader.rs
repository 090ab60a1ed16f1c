//! Per-screen fetch lifecycle.
//!
//! # Design
//! Every data-loading operation on a screen moves through the same states:
//! `Idle → Loading → Ready | Error`, re-entering `Loading` on each new
//! trigger (mount, retry, refresh signal) and discarding the previous value.
//!
//! Overlapping invocations are possible — nothing cancels an in-flight
//! request when a new one starts. Each attempt therefore gets a
//! monotonically increasing ticket, and only the most recently issued ticket
//! may resolve the loader. A response for a superseded ticket is discarded,
//! which also makes responses arriving after a screen unmounts safely
//! ignorable: the loader is gone or the ticket is stale.

use crate::error::ApiError;

/// The three-way status of a single data-loading operation, plus the
/// pre-first-fetch `Idle`. Exactly one state holds at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
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
}

/// Identifies one fetch attempt. Issued by [`Loader::begin`]; only the most
/// recently issued ticket may resolve its loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
}

/// Holds one screen's [`FetchState`] and enforces last-issued-wins.
#[derive(Debug)]
pub struct Loader<T> {
    state: FetchState<T>,
    latest: u64,
}

impl<T> Loader<T> {
    pub fn new() -> Self {
        Self {
            state: FetchState::Idle,
            latest: 0,
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Start a fetch attempt: enter `Loading`, discarding any previous
    /// ready/error value, and issue the attempt's ticket.
    pub fn begin(&mut self) -> FetchTicket {
        self.latest += 1;
        self.state = FetchState::Loading;
        FetchTicket { seq: self.latest }
    }

    /// Apply the outcome of a fetch attempt.
    ///
    /// A superseded ticket leaves the state untouched and reports `false`.
    pub fn resolve(&mut self, ticket: FetchTicket, result: Result<T, ApiError>) -> bool {
        if ticket.seq != self.latest {
            tracing::debug!(
                ticket = ticket.seq,
                latest = self.latest,
                "discarding superseded fetch result"
            );
            return false;
        }
        self.state = match result {
            Ok(value) => FetchState::Ready(value),
            Err(err) => FetchState::Error(err.to_string()),
        };
        true
    }
}

impl<T> Default for Loader<T> {
    fn default() -> Self {
        Self::new()
    }
}
