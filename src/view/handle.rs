//! Shared handle around a [`ViewSlot`]

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard};

use super::state::{LoadState, Resolution, ViewSlot};

/// Cloneable handle to one view's state.
///
/// Requests may overlap; the lock is never held across a fetch.
pub struct ViewHandle<P, T> {
    slot: Arc<RwLock<ViewSlot<P, T>>>,
}

impl<P, T> Clone for ViewHandle<P, T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<P: Clone, T> ViewHandle<P, T> {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(RwLock::new(ViewSlot::new())),
        }
    }

    /// Dispatch `fetch(param)` and apply its result if still current
    pub async fn load<F, Fut, E>(&self, param: P, fetch: F) -> Resolution
    where
        F: FnOnce(P) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        self.load_carrying(param, fetch, |_, _| {}).await
    }

    /// Like [`ViewHandle::load`]; on success `carry` copies view state from
    /// the last applied data into the fresh data before it is applied
    pub async fn load_carrying<F, Fut, E, C>(&self, param: P, fetch: F, carry: C) -> Resolution
    where
        F: FnOnce(P) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: fmt::Display,
        C: FnOnce(&T, &mut T),
    {
        let ticket = self.slot.write().await.begin(param);
        let result = fetch(ticket.param.clone()).await;
        self.slot.write().await.resolve_with(ticket, result, carry)
    }

    /// Read access to the slot
    pub async fn read(&self) -> RwLockReadGuard<'_, ViewSlot<P, T>> {
        self.slot.read().await
    }

    /// Run `f` on the loaded data; `None` unless the view is in `Success`
    pub async fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.slot.write().await.state_mut().data_mut().map(f)
    }

    pub async fn param(&self) -> Option<P> {
        self.slot.read().await.param().cloned()
    }
}

impl<P: Clone, T: Clone> ViewHandle<P, T> {
    /// Snapshot of the current state
    pub async fn state(&self) -> LoadState<T> {
        self.slot.read().await.state().clone()
    }
}

impl<P: Clone, T> Default for ViewHandle<P, T> {
    fn default() -> Self {
        Self::new()
    }
}
