//! Route guard components.
//!
//! Each guard evaluates the pure decision functions in [`crate::routes`]
//! against the shared session on every render. Redirects are replace-style
//! so the denied route never lands in history.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::{self, GuardDecision, paths};
use crate::state::session::SessionState;

fn replace_nav() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

/// Renders `children` only when a user is authenticated; otherwise
/// replace-redirects to the login page. While the startup probe is still
/// pending it renders nothing.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if routes::require_auth(&session.get()) == GuardDecision::RedirectToLogin {
            navigate(paths::LOGIN, replace_nav());
        }
    });

    move || match routes::require_auth(&session.get()) {
        GuardDecision::Render => Some(children()),
        _ => None,
    }
}

/// Renders `children` only for guests; authenticated users are
/// replace-redirected to the dashboard.
#[component]
pub fn GuestOnly(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if routes::guest_only(&session.get()) == GuardDecision::RedirectToDashboard {
            navigate(paths::DASHBOARD, replace_nav());
        }
    });

    move || match routes::guest_only(&session.get()) {
        GuardDecision::Render => Some(children()),
        _ => None,
    }
}

/// Catch-all route target: sends the visitor wherever their session allows
/// (dashboard when authenticated, login otherwise).
#[component]
pub fn FallbackRedirect() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || match routes::fallback(&session.get()) {
        GuardDecision::RedirectToDashboard => navigate(paths::DASHBOARD, replace_nav()),
        GuardDecision::RedirectToLogin => navigate(paths::LOGIN, replace_nav()),
        GuardDecision::Render | GuardDecision::Wait => {}
    });
}
