//! Profile page showing the authenticated user's identity.

use leptos::prelude::*;

use crate::components::nav::NavBar;
use crate::state::session::SessionState;

/// Profile page — name, email, role, and organization when present.
///
/// The auth-required guard keeps unauthenticated visitors out, so the
/// `None` branch only shows transiently during logout.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    move || {
        session.get().user.map(|user| {
            let name = user.full_name();
            let email = user.email.clone();
            let role = user.role.to_string();
            let organization = user.tenant.as_ref().map(|t| t.name.clone());
            view! {
                <div class="profile-page">
                    <NavBar/>
                    <h1>"Profile"</h1>
                    <dl class="profile-page__details">
                        <dt>"Name"</dt>
                        <dd>{name}</dd>
                        <dt>"Email"</dt>
                        <dd>{email}</dd>
                        <dt>"Role"</dt>
                        <dd>{role}</dd>
                        {organization
                            .map(|org| {
                                view! {
                                    <dt>"Organization"</dt>
                                    <dd>{org}</dd>
                                }
                            })}
                    </dl>
                </div>
            }
        })
    }
}
