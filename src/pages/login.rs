//! Login page with register and forgot-password sub-views.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page calls the auth gateway and, on a successful login, persists the
//! grant through [`crate::auth::complete_login`], then follows the returned
//! navigation to the dashboard route.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::auth::guard::RouteGuard;

const MISSING_CREDENTIALS: &str = "Enter both email and password.";
const MISSING_EMAIL: &str = "Enter your email address.";

/// Which card the login page shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthView {
    Login,
    Register,
    Forgot,
}

/// Trim the email and require both fields.
fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

fn validate_email(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err(MISSING_EMAIL);
    }
    Ok(email.to_owned())
}

#[cfg(feature = "csr")]
fn browser_gateway() -> crate::auth::gateway::AuthGateway<crate::net::transport::BrowserTransport> {
    crate::auth::gateway::AuthGateway::new(
        crate::net::transport::BrowserTransport,
        crate::config::ApiConfig::from_build_env(),
    )
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let view_mode = RwSignal::new(AuthView::Login);

    move || match view_mode.get() {
        AuthView::Login => view! { <LoginCard view_mode=view_mode/> }.into_any(),
        AuthView::Register => view! { <RegisterCard view_mode=view_mode/> }.into_any(),
        AuthView::Forgot => view! { <ForgotPasswordCard view_mode=view_mode/> }.into_any(),
    }
}

#[component]
fn LoginCard(view_mode: RwSignal<AuthView>) -> impl IntoView {
    let guard = expect_context::<RwSignal<RouteGuard>>();
    let navigate = leptos_router::hooks::use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_credentials(&email.get(), &password.get()) {
            Ok(pair) => pair,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);

        let navigate = navigate.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use crate::auth::gateway::{AuthOutcome, GENERIC_FAILURE};

            let outcome = browser_gateway().login(&email_value, &password_value).await;
            busy.set(false);
            match outcome {
                AuthOutcome::Success(grant) => {
                    let store = crate::auth::app_session_store();
                    let mut next = guard.get_untracked();
                    match crate::auth::complete_login(&store, &mut next, grant) {
                        Ok(navigation) => {
                            guard.set(next);
                            crate::app::follow(navigation, navigate);
                        }
                        Err(e) => {
                            log::warn!("login succeeded but session could not be saved: {e}");
                            error.set(GENERIC_FAILURE.to_owned());
                        }
                    }
                }
                AuthOutcome::Failure { message } => error.set(message),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (email_value, password_value, guard, navigate);
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <h1>"Login"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <input
                    class="login-input"
                    type="email"
                    placeholder="Email"
                    autocomplete="username"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="login-input"
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="login-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Login" }}
                </button>
                <div class="login-card__links">
                    <button class="login-link" type="button" on:click=move |_| view_mode.set(AuthView::Register)>
                        "Create Account"
                    </button>
                    <button class="login-link" type="button" on:click=move |_| view_mode.set(AuthView::Forgot)>
                        "Forgot Password?"
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn RegisterCard(view_mode: RwSignal<AuthView>) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        success.set(String::new());
        let (email_value, password_value) = match validate_credentials(&email.get(), &password.get()) {
            Ok(pair) => pair,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use crate::auth::gateway::AuthOutcome;

            match browser_gateway().register(&email_value, &password_value).await {
                AuthOutcome::Success(ack) => success.set(ack.message),
                AuthOutcome::Failure { message } => error.set(message),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        let _ = (email_value, password_value);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create Account"</h1>
                <StatusLines error=error success=success/>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <button class="login-link" type="button" on:click=move |_| view_mode.set(AuthView::Login)>
                    "Back to Login"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ForgotPasswordCard(view_mode: RwSignal<AuthView>) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        success.set(String::new());
        let email_value = match validate_email(&email.get()) {
            Ok(email_value) => email_value,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use crate::auth::gateway::AuthOutcome;

            match browser_gateway().forgot_password(&email_value).await {
                AuthOutcome::Success(ack) => success.set(ack.message),
                AuthOutcome::Failure { message } => error.set(message),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        let _ = email_value;
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Forgot Password"</h1>
                <StatusLines error=error success=success/>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Enter your registered email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Sending..." } else { "Send Reset Link" }}
                    </button>
                </form>
                <button class="login-link" type="button" on:click=move |_| view_mode.set(AuthView::Login)>
                    "Back to Login"
                </button>
            </div>
        </div>
    }
}

#[component]
fn StatusLines(error: RwSignal<String>, success: RwSignal<String>) -> impl IntoView {
    view! {
        <Show when=move || !error.get().is_empty()>
            <p class="login-message login-message--error">{move || error.get()}</p>
        </Show>
        <Show when=move || !success.get().is_empty()>
            <p class="login-message login-message--success">{move || success.get()}</p>
        </Show>
    }
}
