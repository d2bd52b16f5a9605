//! Dashboard landing page for authenticated users.

use leptos::prelude::*;

use crate::components::nav::NavBar;
use crate::state::perms::Permissions;
use crate::state::session::SessionState;

/// Dashboard page — greets the user; the nav bar carries the role-gated
/// affordances.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let greeting = move || {
        session
            .get()
            .user
            .map_or_else(String::new, |u| format!("Welcome back, {}", u.first_name))
    };
    let approvals_hint = move || {
        Permissions::resolve(session.get().user.as_ref()).can_approve_expenses
    };

    view! {
        <div class="dashboard-page">
            <NavBar/>
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <p>{greeting}</p>
            </header>
            <Show when=approvals_hint>
                <p class="dashboard-page__hint">"You have expense approvals to review."</p>
            </Show>
        </div>
    }
}
