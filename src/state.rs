//! Shared application state injected into handlers.

use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::StatusInfo;

/// State shared by all handlers.
///
/// [`StatusInfo`] carries no synchronization of its own, so it lives behind
/// an `RwLock` and every transition swaps in a whole new value.
#[derive(Clone, Default)]
pub struct AppState {
    status: Arc<RwLock<StatusInfo>>,
}

impl AppState {
    pub fn new(status: StatusInfo) -> Self {
        Self {
            status: Arc::new(RwLock::new(status)),
        }
    }

    /// Returns a copy of the current status.
    pub fn status(&self) -> StatusInfo {
        self.status
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Flips readiness, keeping the version.
    pub fn set_ready(&self, ready: bool) {
        let mut guard = self.status.write().unwrap_or_else(PoisonError::into_inner);
        let current = std::mem::take(&mut *guard);
        *guard = current.with_ready(ready);
        tracing::info!(status = %guard, "Readiness changed");
    }
}
