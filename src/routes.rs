//! Route paths and the pure authorization decisions behind the guards.
//!
//! The guard components in `components::guards` evaluate these functions
//! against the shared session on every render; nothing here fetches or
//! mutates state.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::session::SessionState;

/// Route paths shared by the router, guards, and pages.
pub mod paths {
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const DASHBOARD: &str = "/dashboard";
    pub const PROFILE: &str = "/profile";
}

/// Outcome of evaluating a guard against the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested content.
    Render,
    /// Render nothing yet: the startup probe is still in flight and the
    /// session outcome is unknown.
    Wait,
    /// Replace-navigate to the login page.
    RedirectToLogin,
    /// Replace-navigate to the dashboard.
    RedirectToDashboard,
}

/// Guard for auth-required routes (dashboard, profile).
///
/// While the startup `fetch_me` is still pending and no user is known, the
/// guard holds off instead of bouncing a logged-in user to the login page
/// mid-probe.
pub fn require_auth(session: &SessionState) -> GuardDecision {
    if session.user.is_some() {
        GuardDecision::Render
    } else if session.pending {
        GuardDecision::Wait
    } else {
        GuardDecision::RedirectToLogin
    }
}

/// Guard for guest-only routes (login, register).
pub fn guest_only(session: &SessionState) -> GuardDecision {
    if session.user.is_some() {
        GuardDecision::RedirectToDashboard
    } else {
        GuardDecision::Render
    }
}

/// Catch-all for `/` and unknown paths: authenticated visitors land on the
/// dashboard, everyone else on the login page.
pub fn fallback(session: &SessionState) -> GuardDecision {
    if session.user.is_some() {
        GuardDecision::RedirectToDashboard
    } else if session.pending {
        GuardDecision::Wait
    } else {
        GuardDecision::RedirectToLogin
    }
}
