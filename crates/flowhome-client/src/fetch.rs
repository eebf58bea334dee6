//! Explicit fetch lifecycle shared by every page controller.
//!
//! Replaces implicit effect re-runs with a finite-state object: a
//! [`FetchSlot`] holds the page-visible state and the cancellation token of
//! the in-flight sequence, if any. Starting a new sequence cancels and
//! supersedes the previous one; a superseded sequence's eventual result is
//! discarded without touching state. This is a last-writer-wins policy among
//! non-cancelled sequences, not a version check.

use tokio_util::sync::CancellationToken;

use flowhome_core::{ApiError, Result};

/// Observable state of one page's data.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// No fetch has been started yet.
    Idle,
    /// A fetch sequence is in flight.
    Loading,
    /// The latest sequence settled with data.
    Success(T),
    /// The latest sequence settled with a user-visible error message.
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The data, if the last sequence succeeded.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    /// The error message, if the last sequence failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Handle for one fetch sequence. The token is passed down to every
/// resource-client call the sequence makes.
#[derive(Debug, Clone)]
pub struct FetchHandle {
    token: CancellationToken,
    seq: u64,
}

impl FetchHandle {
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// State machine owning a page's fetch lifecycle.
#[derive(Debug)]
pub struct FetchSlot<T> {
    state: FetchState<T>,
    current: Option<CancellationToken>,
    seq: u64,
}

impl<T> FetchSlot<T> {
    pub fn new() -> Self {
        Self {
            state: FetchState::Idle,
            current: None,
            seq: 0,
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Mutable access to settled data, for id-based cache edits after a
    /// confirmed mutation.
    pub fn data_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }

    /// Begin a new fetch sequence: cancel any in-flight one, enter Loading,
    /// and hand out the new sequence's handle.
    pub fn begin(&mut self) -> FetchHandle {
        if let Some(token) = self.current.take() {
            token.cancel();
        }
        self.seq += 1;
        let token = CancellationToken::new();
        self.current = Some(token.clone());
        self.state = FetchState::Loading;
        FetchHandle {
            token,
            seq: self.seq,
        }
    }

    /// Cancel the in-flight sequence without starting a new one. Used when
    /// the page goes away. State is left as-is; the cancelled sequence can
    /// no longer settle.
    pub fn cancel(&mut self) {
        if let Some(token) = self.current.take() {
            token.cancel();
        }
    }

    /// Apply a sequence's result. Returns true if state changed. Stale
    /// handles (superseded or cancelled) and cancellation errors are
    /// silently discarded.
    pub fn settle(&mut self, handle: &FetchHandle, result: Result<T>) -> bool {
        if handle.seq != self.seq || handle.token.is_cancelled() {
            return false;
        }
        match result {
            Err(ApiError::Cancelled) => false,
            Ok(data) => {
                self.current = None;
                self.state = FetchState::Success(data);
                true
            }
            Err(e) => {
                self.current = None;
                self.state = FetchState::Failed(e.message().to_string());
                true
            }
        }
    }

    /// Fail without issuing any fetch, cancelling anything in flight. Used
    /// for pre-checked conditions like missing permissions.
    pub fn set_failed(&mut self, message: impl Into<String>) {
        self.cancel();
        self.seq += 1;
        self.state = FetchState::Failed(message.into());
    }

    /// Succeed without issuing any fetch, cancelling anything in flight.
    pub fn set_success(&mut self, data: T) {
        self.cancel();
        self.seq += 1;
        self.state = FetchState::Success(data);
    }
}

impl<T> Default for FetchSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
