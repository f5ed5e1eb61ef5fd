use super::*;

const ALL_PATHS: [&str; 8] = ["/login", "/login/", "/app", "/app/", "/", "", "/reports", "/app/extra"];

// =============================================================
// initial state
// =============================================================

#[test]
fn initial_state_follows_session_presence() {
    let session = Session::new("abc", None);
    assert_eq!(RouteGuard::from_session(Some(&session)).status(), AuthStatus::Authenticated);
    assert_eq!(RouteGuard::from_session(None).status(), AuthStatus::Unauthenticated);
    assert_eq!(RouteGuard::default().status(), AuthStatus::Unauthenticated);
}

// =============================================================
// routing policy
// =============================================================

#[test]
fn unauthenticated_redirects_dashboard_to_login() {
    let guard = RouteGuard::new(AuthStatus::Unauthenticated);
    assert_eq!(guard.route("/app"), Navigation::Redirect(LOGIN_ROUTE));
    assert_eq!(guard.route("/app/"), Navigation::Redirect(LOGIN_ROUTE));
}

#[test]
fn unauthenticated_renders_login() {
    let guard = RouteGuard::new(AuthStatus::Unauthenticated);
    assert_eq!(guard.route("/login"), Navigation::Render(Screen::Login));
}

#[test]
fn authenticated_redirects_login_to_dashboard() {
    let guard = RouteGuard::new(AuthStatus::Authenticated);
    assert_eq!(guard.route("/login"), Navigation::Redirect(DASHBOARD_ROUTE));
    assert_eq!(guard.route("/login/"), Navigation::Redirect(DASHBOARD_ROUTE));
}

#[test]
fn authenticated_renders_dashboard() {
    let guard = RouteGuard::new(AuthStatus::Authenticated);
    assert_eq!(guard.route("/app"), Navigation::Render(Screen::Dashboard));
}

#[test]
fn unknown_paths_redirect_to_login_in_both_states() {
    for status in [AuthStatus::Unauthenticated, AuthStatus::Authenticated] {
        let guard = RouteGuard::new(status);
        for path in ["/", "", "/reports", "/app/extra", "/LOGIN", "//"] {
            assert_eq!(guard.route(path), Navigation::Redirect(LOGIN_ROUTE), "{status:?} {path:?}");
        }
    }
}

#[test]
fn unauthenticated_never_renders_dashboard() {
    let guard = RouteGuard::new(AuthStatus::Unauthenticated);
    for path in ALL_PATHS {
        assert_ne!(guard.route(path), Navigation::Render(Screen::Dashboard), "{path:?}");
    }
}

#[test]
fn authenticated_never_renders_login() {
    let guard = RouteGuard::new(AuthStatus::Authenticated);
    for path in ALL_PATHS {
        assert_ne!(guard.route(path), Navigation::Render(Screen::Login), "{path:?}");
    }
}

#[test]
fn parse_recognizes_known_routes() {
    assert_eq!(AppRoute::parse("/login"), AppRoute::Login);
    assert_eq!(AppRoute::parse("/app/"), AppRoute::Dashboard);
    assert_eq!(AppRoute::parse("/"), AppRoute::Unknown);
    assert_eq!(AppRoute::parse("/app//"), AppRoute::Unknown);
}

// =============================================================
// transitions
// =============================================================

#[test]
fn login_success_authenticates() {
    let mut guard = RouteGuard::new(AuthStatus::Unauthenticated);
    assert!(guard.handle(SessionEvent::LoginSucceeded));
    assert!(guard.is_authenticated());
    assert!(!guard.handle(SessionEvent::LoginSucceeded));
}

#[test]
fn logout_deauthenticates() {
    let mut guard = RouteGuard::new(AuthStatus::Authenticated);
    assert!(guard.handle(SessionEvent::LoggedOut));
    assert_eq!(guard.status(), AuthStatus::Unauthenticated);
}

#[test]
fn storage_change_follows_reread_result() {
    let mut guard = RouteGuard::new(AuthStatus::Authenticated);
    assert!(!guard.handle(SessionEvent::StorageChanged { session_present: true }));
    assert!(guard.handle(SessionEvent::StorageChanged { session_present: false }));
    assert_eq!(guard.status(), AuthStatus::Unauthenticated);
    assert!(guard.handle(SessionEvent::StorageChanged { session_present: true }));
    assert!(guard.is_authenticated());
}
