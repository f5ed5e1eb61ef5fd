use super::*;
use crate::auth::guard::{AuthStatus, DASHBOARD_ROUTE, LOGIN_ROUTE, Screen};
use crate::auth::session::{Session, UserProfile};
use crate::auth::storage::MemoryStorage;
use std::cell::RefCell;
use std::rc::Rc;

fn grant(token: &str) -> LoginGrant {
    LoginGrant { token: token.to_owned(), user: Some(UserProfile::default()), message: None }
}

#[test]
fn no_stored_token_shows_login_for_dashboard_request() {
    let store = SessionStore::new(MemoryStorage::new());
    let guard = RouteGuard::from_session(store.load().as_ref());
    assert_eq!(guard.route("/app"), Navigation::Redirect(LOGIN_ROUTE));
    assert_eq!(guard.route(LOGIN_ROUTE), Navigation::Render(Screen::Login));
}

#[test]
fn completed_login_persists_token_and_admits_dashboard() {
    let store = SessionStore::new(MemoryStorage::new());
    let mut guard = RouteGuard::from_session(store.load().as_ref());

    let nav = complete_login(&store, &mut guard, grant("abc")).unwrap();
    assert_eq!(nav, Navigation::Redirect(DASHBOARD_ROUTE));
    assert_eq!(store.load().map(|s| s.token).as_deref(), Some("abc"));
    assert_eq!(guard.route("/app"), Navigation::Render(Screen::Dashboard));
}

#[test]
fn restart_with_saved_session_starts_authenticated() {
    let area = MemoryStorage::new();
    let store = SessionStore::new(area.clone());
    store.save(&Session::new("abc", None)).unwrap();

    let reopened = SessionStore::new(area.open_context());
    let guard = RouteGuard::from_session(reopened.load().as_ref());
    assert_eq!(guard.status(), AuthStatus::Authenticated);
}

#[test]
fn logout_clears_session_and_redirects() {
    let store = SessionStore::new(MemoryStorage::new());
    let mut guard = RouteGuard::default();
    complete_login(&store, &mut guard, grant("abc")).unwrap();

    assert_eq!(logout(&store, &mut guard), Navigation::Redirect(LOGIN_ROUTE));
    assert_eq!(store.load(), None);
    assert_eq!(guard.route("/app"), Navigation::Redirect(LOGIN_ROUTE));
}

#[test]
fn logout_in_one_tab_deauthenticates_the_other() {
    let tab_a = SessionStore::new(MemoryStorage::new());
    let tab_b = SessionStore::new(tab_a.backend().open_context());
    let mut guard_a = RouteGuard::default();
    complete_login(&tab_a, &mut guard_a, grant("abc")).unwrap();

    let guard_b = Rc::new(RefCell::new(RouteGuard::from_session(tab_b.load().as_ref())));
    assert!(guard_b.borrow().is_authenticated());
    let guard_cb = Rc::clone(&guard_b);
    let store_cb = tab_b.clone();
    let _sub = tab_b.subscribe(move || {
        resync(&store_cb, &mut guard_cb.borrow_mut());
    });

    assert_eq!(logout(&tab_a, &mut guard_a), Navigation::Redirect(LOGIN_ROUTE));
    assert_eq!(guard_b.borrow().status(), AuthStatus::Unauthenticated);
    assert_eq!(guard_b.borrow().route("/app"), Navigation::Redirect(LOGIN_ROUTE));
}

#[test]
fn login_in_one_tab_authenticates_the_other() {
    let tab_a = SessionStore::new(MemoryStorage::new());
    let tab_b = SessionStore::new(tab_a.backend().open_context());
    let guard_b = Rc::new(RefCell::new(RouteGuard::default()));
    let guard_cb = Rc::clone(&guard_b);
    let store_cb = tab_b.clone();
    let _sub = tab_b.subscribe(move || {
        resync(&store_cb, &mut guard_cb.borrow_mut());
    });

    let mut guard_a = RouteGuard::default();
    complete_login(&tab_a, &mut guard_a, grant("abc")).unwrap();
    assert!(guard_b.borrow().is_authenticated());
}

#[test]
fn resync_reports_unchanged_state() {
    let store = SessionStore::new(MemoryStorage::new());
    let mut guard = RouteGuard::default();
    assert!(!resync(&store, &mut guard));
}
