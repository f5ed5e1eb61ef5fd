//! Client-side authentication core.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` talks to the backend, `session` owns the persisted credential,
//! and `guard` decides which screen a path may show. The helpers in this
//! module bind a session-store write to the matching guard transition so
//! callers cannot do one without the other.

pub mod gateway;
pub mod guard;
pub mod session;
pub mod storage;

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use self::gateway::LoginGrant;
use self::guard::{AppRoute, Navigation, RouteGuard, SessionEvent};
use self::session::SessionStore;
use self::storage::{StorageBackend, StorageError};

/// Storage backing the running app's session.
#[cfg(feature = "csr")]
pub type AppStorage = storage::LocalStorage;
/// Storage backing the running app's session.
#[cfg(not(feature = "csr"))]
pub type AppStorage = storage::MemoryStorage;

/// Session store for the running app.
///
/// Handles are cheap; every call sees the same persisted area.
pub fn app_session_store() -> SessionStore<AppStorage> {
    #[cfg(feature = "csr")]
    {
        SessionStore::new(storage::LocalStorage::new())
    }
    #[cfg(not(feature = "csr"))]
    {
        thread_local! {
            static AREA: storage::MemoryStorage = storage::MemoryStorage::new();
        }
        AREA.with(|area| SessionStore::new(area.clone()))
    }
}

/// Persist a login grant, then admit the dashboard.
///
/// # Errors
///
/// Returns the [`StorageError`] if the session could not be saved; the guard
/// is left untouched in that case.
pub fn complete_login<B: StorageBackend>(
    store: &SessionStore<B>,
    guard: &mut RouteGuard,
    grant: LoginGrant,
) -> Result<Navigation, StorageError> {
    store.save(&grant.into_session())?;
    guard.handle(SessionEvent::LoginSucceeded);
    Ok(guard.route_to(AppRoute::Login))
}

/// Clear the session and return to the login screen.
#[must_use = "the returned navigation must be followed"]
pub fn logout<B: StorageBackend>(store: &SessionStore<B>, guard: &mut RouteGuard) -> Navigation {
    store.clear();
    guard.handle(SessionEvent::LoggedOut);
    log::info!("logged out");
    guard.route_to(AppRoute::Dashboard)
}

/// Re-read the store after a cross-context change signal.
///
/// Returns `true` when the guard changed state.
pub fn resync<B: StorageBackend>(store: &SessionStore<B>, guard: &mut RouteGuard) -> bool {
    guard.handle(SessionEvent::StorageChanged { session_present: store.load().is_some() })
}
