//! Dashboard sidebar with the profile panel and logout.

use chrono::Datelike;
use leptos::prelude::*;

use crate::auth::guard::RouteGuard;
use crate::auth::session::UserProfile;
use crate::state::dashboard::SidebarSection;

#[component]
pub fn Sidebar() -> impl IntoView {
    let guard = expect_context::<RwSignal<RouteGuard>>();
    let section = RwSignal::new(SidebarSection::default());
    let profile = crate::auth::app_session_store()
        .load()
        .map(|session| session.profile_or_default())
        .unwrap_or_default();
    let year = crate::util::sales::today().year();

    let navigate = leptos_router::hooks::use_navigate();
    let on_logout = move |_| {
        let store = crate::auth::app_session_store();
        let mut next = guard.get_untracked();
        let navigation = crate::auth::logout(&store, &mut next);
        guard.set(next);
        crate::app::follow(navigation, &navigate);
    };

    view! {
        <aside class="sidebar">
            <h1 class="sidebar__title">"Dashboard"</h1>
            <ul class="sidebar__nav">
                <li
                    class=move || {
                        if section.get() == SidebarSection::Profile { "sidebar__item sidebar__item--active" } else { "sidebar__item" }
                    }
                    on:click=move |_| section.update(|s| s.toggle(SidebarSection::Profile))
                >
                    "Profile"
                </li>
            </ul>
            <Show when=move || section.get() == SidebarSection::Profile>
                <ProfilePanel profile=profile.clone()/>
            </Show>
            <button class="sidebar__logout" type="button" on:click=on_logout>
                "Logout"
            </button>
            <div class="sidebar__footer">{format!("\u{a9} {year} Dashboard")}</div>
        </aside>
    }
}

#[component]
fn ProfilePanel(profile: UserProfile) -> impl IntoView {
    view! {
        <div class="profile-panel">
            <img class="profile-panel__photo" src=profile.avatar_url().to_owned() alt="Profile"/>
            <h2 class="profile-panel__name">{profile.name}</h2>
            <p class="profile-panel__role">{profile.role}</p>
            <p class="profile-panel__contact">{profile.email}</p>
            <p class="profile-panel__contact">{profile.phone}</p>
        </div>
    }
}
