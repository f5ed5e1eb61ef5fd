//! Latest-wins bookkeeping for widget fetches.
//!
//! SYSTEM CONTEXT
//! ==============
//! Widgets spawn fetches whenever their filters change and may be unmounted
//! while a fetch is in flight. Each fetch takes a [`Ticket`]; its response is
//! applied only if the ticket is still current. Issuing a newer ticket or
//! calling [`LatestRequest::invalidate`] (from `on_cleanup`) makes every older
//! ticket stale.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Shared counter of the most recently issued ticket.
#[derive(Clone, Debug, Default)]
pub struct LatestRequest {
    seq: Arc<AtomicU64>,
}

impl LatestRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, superseding any outstanding one.
    pub fn issue(&self) -> Ticket {
        Ticket(self.seq.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Whether `ticket` belongs to the latest live request.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.seq.load(Ordering::Relaxed) == ticket.0
    }

    /// Mark all outstanding requests stale, e.g. on unmount.
    pub fn invalidate(&self) {
        self.seq.fetch_add(1, Ordering::Relaxed);
    }
}

impl LatestRequest {
    /// Counter whose tickets all go stale when the current reactive owner is
    /// cleaned up.
    pub fn scoped() -> Self {
        let latest = Self::new();
        let handle = latest.clone();
        leptos::prelude::on_cleanup(move || handle.invalidate());
        latest
    }
}

/// Spawn `fut` and hand its output to `apply` only if no newer request was
/// issued and the owner is still mounted.
#[cfg(feature = "csr")]
pub fn spawn_latest<T: 'static>(
    latest: &LatestRequest,
    fut: impl std::future::Future<Output = T> + 'static,
    apply: impl FnOnce(T) + 'static,
) {
    let ticket = latest.issue();
    let latest = latest.clone();
    leptos::task::spawn_local(async move {
        let value = fut.await;
        if latest.is_current(ticket) {
            apply(value);
        } else {
            log::debug!("discarding stale response for {ticket:?}");
        }
    });
}
