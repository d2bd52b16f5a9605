//! Login page: email/password form with inline error banner.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::net::api::HttpApi;
use crate::net::types::LoginPayload;
use crate::routes::paths;
use crate::state::session::{self, SessionState};

/// Login form. On success navigates to the dashboard; on failure the error
/// lands in the session and the banner keeps the user on the form.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let pending = move || session.get().pending;
    let error = Signal::derive(move || session.get().last_error);
    let on_dismiss = Callback::new(move |()| session.update(SessionState::clear_error));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = LoginPayload {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        // Flip `pending` on the shared signal before the await so the form
        // disables its submit button for the duration.
        session.update(SessionState::begin);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let mut state = session.get_untracked();
            let ok = session::login(&HttpApi, &mut state, &payload).await.is_ok();
            session.set(state);
            if ok {
                navigate(paths::DASHBOARD, NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Login"</h1>
            <ErrorBanner message=error on_dismiss=on_dismiss/>
            <form on:submit=on_submit>
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
                        autocomplete="current-password"
                        required
                        prop:value=password
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=pending>
                    {move || if pending() { "Signing in\u{2026}" } else { "Sign in" }}
                </button>
            </form>
            <p>
                "Don't have an account? " <a href=paths::REGISTER>"Register"</a>
            </p>
        </div>
    }
}
