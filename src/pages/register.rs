//! Registration page: account + company form with inline error banner.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::net::api::HttpApi;
use crate::net::types::RegisterPayload;
use crate::routes::paths;
use crate::state::session::{self, SessionState};

/// Registration form. A successful registration signs the user in and
/// lands on the dashboard.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let company_name = RwSignal::new(String::new());

    let pending = move || session.get().pending;
    let error = Signal::derive(move || session.get().last_error);
    let on_dismiss = Callback::new(move |()| session.update(SessionState::clear_error));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = RegisterPayload {
            email: email.get_untracked(),
            password: password.get_untracked(),
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            company_name: company_name.get_untracked(),
        };
        session.update(SessionState::begin);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let mut state = session.get_untracked();
            let ok = session::register(&HttpApi, &mut state, &payload)
                .await
                .is_ok();
            session.set(state);
            if ok {
                navigate(paths::DASHBOARD, NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Create Account"</h1>
            <ErrorBanner message=error on_dismiss=on_dismiss/>
            <form on:submit=on_submit>
                <label>
                    "First name"
                    <input
                        type="text"
                        autocomplete="given-name"
                        required
                        prop:value=first_name
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Last name"
                    <input
                        type="text"
                        autocomplete="family-name"
                        required
                        prop:value=last_name
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Company"
                    <input
                        type="text"
                        autocomplete="organization"
                        required
                        prop:value=company_name
                        on:input=move |ev| company_name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        autocomplete="email"
                        required
                        prop:value=email
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        autocomplete="new-password"
                        required
                        prop:value=password
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=pending>
                    {move || if pending() { "Creating account\u{2026}" } else { "Create account" }}
                </button>
            </form>
            <p>
                "Already have an account? " <a href=paths::LOGIN>"Sign in"</a>
            </p>
        </div>
    }
}
