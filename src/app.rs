//! Root application component with routing and the route guard.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::auth::guard::{AppRoute, Navigation, RouteGuard, Screen};
use crate::pages::{dashboard::DashboardPage, login::LoginPage};

/// Root application component.
///
/// Seeds the route guard from the persisted session, keeps it in sync with
/// other tabs, and routes every path through [`Guarded`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = crate::auth::app_session_store();
    let guard = RwSignal::new(RouteGuard::from_session(store.load().as_ref()));
    provide_context(guard);

    // Another tab logged in or out: re-read the store and let the guard decide.
    let subscription = store.subscribe(move || {
        let store = crate::auth::app_session_store();
        guard.update(|g| {
            crate::auth::resync(&store, g);
        });
    });
    let _subscription = StoredValue::new_local(subscription);

    view! {
        <Stylesheet id="leptos" href="/pkg/inventory-dashboard.css"/>
        <Title text="Inventory Dashboard"/>

        <Router>
            <Routes fallback=|| view! { <Guarded route=AppRoute::Unknown/> }>
                <Route path=StaticSegment("login") view=|| view! { <Guarded route=AppRoute::Login/> }/>
                <Route path=StaticSegment("app") view=|| view! { <Guarded route=AppRoute::Dashboard/> }/>
                <Route path=StaticSegment("") view=|| view! { <Guarded route=AppRoute::Unknown/> }/>
            </Routes>
        </Router>
    }
}

/// Carry out a guard command issued from an event handler.
///
/// `navigate` is normally the function returned by `use_navigate`.
pub fn follow(navigation: Navigation, navigate: impl Fn(&str, NavigateOptions)) {
    if let Navigation::Redirect(path) = navigation {
        navigate(path, replace_options());
    }
}

fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Render the screen the guard admits for `route`, or redirect.
#[component]
fn Guarded(route: AppRoute) -> impl IntoView {
    let guard = expect_context::<RwSignal<RouteGuard>>();
    let navigation = Memo::new(move |_| guard.get().route_to(route));

    move || match navigation.get() {
        Navigation::Render(Screen::Login) => view! { <LoginPage/> }.into_any(),
        Navigation::Render(Screen::Dashboard) => view! { <DashboardPage/> }.into_any(),
        Navigation::Redirect(path) => view! { <Redirect path=path options=replace_options()/> }.into_any(),
    }
}
