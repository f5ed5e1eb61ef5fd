//! Route guard deciding which top-level screen a path may show.
//!
//! DESIGN
//! ======
//! The guard is a two-state machine. Routing is a pure function of the current
//! state and the requested path and returns a [`Navigation`] command; the
//! router layer performs the actual redirect.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::session::Session;

pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/app";

/// Whether a session is currently held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    #[default]
    Unauthenticated,
    Authenticated,
}

/// Known top-level paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Dashboard,
    Unknown,
}

impl AppRoute {
    /// Classify a request path. A single trailing slash is ignored.
    pub fn parse(path: &str) -> Self {
        let trimmed = if path.len() > 1 { path.strip_suffix('/').unwrap_or(path) } else { path };
        match trimmed {
            LOGIN_ROUTE => Self::Login,
            DASHBOARD_ROUTE => Self::Dashboard,
            _ => Self::Unknown,
        }
    }
}

/// Screens the app can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
}

/// What the router should do for a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Render(Screen),
    Redirect(&'static str),
}

/// Inputs that move the guard between states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A login succeeded and its session has been saved.
    LoginSucceeded,
    /// This context logged out and cleared the session.
    LoggedOut,
    /// Another context changed persisted storage; carries the re-read result.
    StorageChanged { session_present: bool },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteGuard {
    status: AuthStatus,
}

impl RouteGuard {
    pub fn new(status: AuthStatus) -> Self {
        Self { status }
    }

    /// Initial guard for whatever the session store yielded at startup.
    pub fn from_session(session: Option<&Session>) -> Self {
        Self::new(if session.is_some() { AuthStatus::Authenticated } else { AuthStatus::Unauthenticated })
    }

    pub fn status(&self) -> AuthStatus {
        self.status
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::Authenticated
    }

    /// Apply `event`; returns `true` when the state changed.
    pub fn handle(&mut self, event: SessionEvent) -> bool {
        let next = match event {
            SessionEvent::LoginSucceeded => AuthStatus::Authenticated,
            SessionEvent::LoggedOut => AuthStatus::Unauthenticated,
            SessionEvent::StorageChanged { session_present: true } => AuthStatus::Authenticated,
            SessionEvent::StorageChanged { session_present: false } => AuthStatus::Unauthenticated,
        };
        let changed = next != self.status;
        if changed {
            log::info!("route guard: {:?} -> {next:?} on {event:?}", self.status);
        }
        self.status = next;
        changed
    }

    /// Navigation for a request to `path`.
    pub fn route(&self, path: &str) -> Navigation {
        self.route_to(AppRoute::parse(path))
    }

    pub fn route_to(&self, route: AppRoute) -> Navigation {
        match (route, self.status) {
            (AppRoute::Login, AuthStatus::Unauthenticated) => Navigation::Render(Screen::Login),
            (AppRoute::Login, AuthStatus::Authenticated) => Navigation::Redirect(DASHBOARD_ROUTE),
            (AppRoute::Dashboard, AuthStatus::Authenticated) => Navigation::Render(Screen::Dashboard),
            (AppRoute::Dashboard, AuthStatus::Unauthenticated) | (AppRoute::Unknown, _) => {
                Navigation::Redirect(LOGIN_ROUTE)
            }
        }
    }
}
