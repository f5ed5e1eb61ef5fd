use std::cell::RefCell;

use super::*;
use crate::auth::guard::{DASHBOARD_ROUTE, LOGIN_ROUTE, SessionEvent};

fn recorded(navigation: Navigation) -> Vec<(String, bool)> {
    let calls = RefCell::new(Vec::new());
    follow(navigation, |path: &str, options: NavigateOptions| {
        calls.borrow_mut().push((path.to_owned(), options.replace));
    });
    calls.into_inner()
}

#[test]
fn follow_redirect_replaces_history_entry() {
    assert_eq!(recorded(Navigation::Redirect(LOGIN_ROUTE)), vec![(LOGIN_ROUTE.to_owned(), true)]);
}

#[test]
fn follow_login_redirect_goes_to_dashboard() {
    let mut guard = RouteGuard::from_session(None);
    guard.handle(SessionEvent::LoginSucceeded);
    let navigation = guard.route_to(AppRoute::Login);
    assert_eq!(recorded(navigation), vec![(DASHBOARD_ROUTE.to_owned(), true)]);
}

#[test]
fn follow_render_does_not_navigate() {
    assert!(recorded(Navigation::Render(Screen::Dashboard)).is_empty());
    assert!(recorded(Navigation::Render(Screen::Login)).is_empty());
}
