//! Top navigation bar with permission-gated links and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpApi;
use crate::routes::paths;
use crate::state::perms::Permissions;
use crate::state::session::{self, SessionState};

/// Navigation bar shown on authenticated pages.
///
/// Link visibility follows the permission set resolved from the current
/// session; flags are recomputed on every render, so a login or logout is
/// reflected immediately.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let perms = Signal::derive(move || Permissions::resolve(session.get().user.as_ref()));
    let user_name = move || {
        session
            .get()
            .user
            .map_or_else(String::new, |u| u.full_name())
    };

    let on_logout = move |_| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let mut state = session.get_untracked();
            session::logout(&HttpApi, &mut state).await;
            session.set(state);
            navigate(paths::LOGIN, NavigateOptions::default());
        });
    };

    view! {
        <nav class="nav-bar">
            <a href=paths::DASHBOARD class="nav-bar__brand">"FleeMa"</a>

            <Show when=move || perms.get().can_view_vehicles>
                <a href="/vehicles" class="nav-bar__link">"Vehicles"</a>
            </Show>
            <Show when=move || perms.get().can_view_trips>
                <a href="/trips" class="nav-bar__link">"Trips"</a>
            </Show>
            <Show when=move || perms.get().can_submit_expenses>
                <a href="/expenses" class="nav-bar__link">"Expenses"</a>
            </Show>
            <Show when=move || perms.get().can_manage_team>
                <a href="/team" class="nav-bar__link">"Team"</a>
            </Show>
            <Show when=move || perms.get().can_manage_users>
                <a href="/users" class="nav-bar__link">"Users"</a>
            </Show>
            <Show when=move || perms.get().can_access_admin_panel>
                <a href="/admin" class="nav-bar__link">"Admin"</a>
            </Show>
            <Show when=move || perms.get().can_view_own_profile>
                <a href=paths::PROFILE class="nav-bar__link">"Profile"</a>
            </Show>

            <span class="nav-bar__spacer"></span>
            <span class="nav-bar__user">{user_name}</span>
            <button class="btn nav-bar__logout" on:click=on_logout>
                "Logout"
            </button>
        </nav>
    }
}
