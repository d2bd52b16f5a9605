//! Root application component: session context, startup probe, and the
//! guarded route tree.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::components::guards::{FallbackRedirect, GuestOnly, RequireAuth};
use crate::net::api::HttpApi;
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, profile::ProfilePage, register::RegisterPage,
};
use crate::state::session::{self, SessionState};

/// Root component.
///
/// Provides the one `RwSignal<SessionState>` the whole tree shares, kicks
/// off the startup "who am I" probe, and declares the route surface:
/// guest-only login/register, auth-required dashboard/profile, and a
/// catch-all that sends visitors wherever their session allows.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Resolve the session once at startup. Until this settles, the
    // auth-required guard renders nothing instead of redirecting, so a
    // signed-in reload does not flash through /login.
    session.update(SessionState::begin_fetch);
    leptos::task::spawn_local(async move {
        let mut state = session.get_untracked();
        session::fetch_me(&HttpApi, &mut state).await;
        session.set(state);
    });

    view! {
        <Title text="FleeMa"/>

        <Router>
            <Routes fallback=FallbackRedirect>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <GuestOnly><LoginPage/></GuestOnly> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <GuestOnly><RegisterPage/></GuestOnly> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! { <RequireAuth><ProfilePage/></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}
