//! Per-view request state
//!
//! Every async-backed view moves through `Idle -> Loading -> {Success, Error}`.
//! A new request restarts at `Loading`. When requests overlap, only the
//! most recently started one may change the state: a response whose ticket
//! is older than the latest [`ViewSlot::begin`] is discarded.
//!
//! While a request is pending the slot keeps the data of the last applied
//! success, so a loader can carry view state (filters, queries) over into
//! the data that replaces it.

use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Load state of one view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "lowercase")]
pub enum LoadState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            LoadState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

/// Receipt for a dispatched request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<P> {
    generation: u64,
    pub param: P,
}

impl<P> Ticket<P> {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened to a resolved request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The response became the view state
    Applied,
    /// A newer request was started; the response was dropped
    Superseded,
}

/// State of one view plus the parameter of its latest request
#[derive(Debug, Clone)]
pub struct ViewSlot<P, T> {
    param: Option<P>,
    generation: u64,
    state: LoadState<T>,
    previous: Option<T>,
}

impl<P: Clone, T> ViewSlot<P, T> {
    pub fn new() -> Self {
        ViewSlot {
            param: None,
            generation: 0,
            state: LoadState::Idle,
            previous: None,
        }
    }

    /// Dispatch a request for `param`; supersedes any request in flight
    pub fn begin(&mut self, param: P) -> Ticket<P> {
        self.generation += 1;
        self.param = Some(param.clone());
        if let LoadState::Success(data) = std::mem::replace(&mut self.state, LoadState::Loading) {
            self.previous = Some(data);
        }
        Ticket {
            generation: self.generation,
            param,
        }
    }

    /// Apply a response, unless a newer request has been started since
    pub fn resolve<E: fmt::Display>(&mut self, ticket: Ticket<P>, result: Result<T, E>) -> Resolution {
        self.resolve_with(ticket, result, |_, _| {})
    }

    /// Like [`ViewSlot::resolve`], but a successful response is first passed
    /// to `carry` together with the last applied success, if any
    pub fn resolve_with<E, F>(&mut self, ticket: Ticket<P>, result: Result<T, E>, carry: F) -> Resolution
    where
        E: fmt::Display,
        F: FnOnce(&T, &mut T),
    {
        if !self.is_current(&ticket) {
            debug!(
                "Discarding superseded response (request {}, latest {})",
                ticket.generation, self.generation
            );
            return Resolution::Superseded;
        }
        self.state = match result {
            Ok(mut data) => {
                if let Some(previous) = self.previous.take() {
                    carry(&previous, &mut data);
                }
                LoadState::Success(data)
            }
            Err(e) => LoadState::Error(e.to_string()),
        };
        Resolution::Applied
    }

    pub fn is_current(&self, ticket: &Ticket<P>) -> bool {
        ticket.generation == self.generation
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut LoadState<T> {
        &mut self.state
    }

    /// Parameter of the latest request
    pub fn param(&self) -> Option<&P> {
        self.param.as_ref()
    }

    /// Last applied success, while a newer request is pending or failed
    pub fn previous(&self) -> Option<&T> {
        self.previous.as_ref()
    }
}

impl<P: Clone, T> Default for ViewSlot<P, T> {
    fn default() -> Self {
        Self::new()
    }
}
