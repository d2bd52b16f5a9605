#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::{ApiError, AuthApi};
use crate::net::types::{LoginPayload, RegisterPayload, User};

/// Error shown when a login rejection carries no server detail.
pub const LOGIN_FALLBACK: &str = "Login failed";
/// Error shown when a registration rejection carries no server detail.
pub const REGISTER_FALLBACK: &str = "Registration failed";

/// Client-side session: the authenticated user plus operation bookkeeping.
///
/// `pending` is true only while one of the async operations below is in
/// flight. Operations are not deduplicated here; callers disable their
/// submit affordances while `pending`, and if two operations race anyway
/// the last writer wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub pending: bool,
    pub last_error: Option<String>,
}

impl SessionState {
    /// Mark a login/register call as in flight and drop any stale error.
    pub fn begin(&mut self) {
        self.pending = true;
        self.last_error = None;
    }

    /// Mark the startup "who am I" probe as in flight. Unlike [`begin`],
    /// an existing error banner is left alone.
    ///
    /// [`begin`]: Self::begin
    pub fn begin_fetch(&mut self) {
        self.pending = true;
    }

    /// Apply the outcome of a login or register call.
    ///
    /// On rejection the server detail (or `fallback`) lands in `last_error`,
    /// the identity is left untouched, and the error is re-signaled so the
    /// submitting form can stay put.
    pub fn complete_auth(
        &mut self,
        outcome: Result<User, ApiError>,
        fallback: &str,
    ) -> Result<(), ApiError> {
        self.pending = false;
        match outcome {
            Ok(user) => {
                self.user = Some(user);
                Ok(())
            }
            Err(err) => {
                self.last_error = Some(err.detail().unwrap_or(fallback).to_owned());
                Err(err)
            }
        }
    }

    /// Clear the session locally. Runs no matter how the network logout call
    /// ended: the client must never display "logged in" after a logout.
    pub fn complete_logout(&mut self) {
        self.user = None;
        self.last_error = None;
        self.pending = false;
    }

    /// Apply the outcome of the startup probe. Any failure means
    /// "not authenticated"; no error is surfaced.
    pub fn complete_fetch(&mut self, outcome: Result<User, ApiError>) {
        self.user = outcome.ok();
        self.pending = false;
    }

    /// Dismiss the current error banner, if any. Idempotent.
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }
}

/// Authenticate with email/password.
///
/// # Errors
///
/// Re-signals the boundary failure after recording it in `last_error`, so
/// the login form can keep the user in place.
pub async fn login<A: AuthApi>(
    api: &A,
    state: &mut SessionState,
    payload: &LoginPayload,
) -> Result<(), ApiError> {
    state.begin();
    let outcome = api.login(payload).await;
    if let Err(err) = &outcome {
        log::warn!("login rejected for {}: {err}", payload.email);
    }
    state.complete_auth(outcome, LOGIN_FALLBACK)
}

/// Create an account (and its tenant) and sign in.
///
/// # Errors
///
/// Same contract as [`login`], with the registration fallback message.
pub async fn register<A: AuthApi>(
    api: &A,
    state: &mut SessionState,
    payload: &RegisterPayload,
) -> Result<(), ApiError> {
    state.begin();
    let outcome = api.register(payload).await;
    if let Err(err) = &outcome {
        log::warn!("registration rejected for {}: {err}", payload.email);
    }
    state.complete_auth(outcome, REGISTER_FALLBACK)
}

/// Log out. The network call's outcome is ignored; local state always
/// clears so the client cannot stay "logged in" after the user asked out.
pub async fn logout<A: AuthApi>(api: &A, state: &mut SessionState) {
    if let Err(err) = api.logout().await {
        log::debug!("logout call failed, clearing local session anyway: {err}");
    }
    state.complete_logout();
}

/// Probe the backend for the current identity at startup. Failure is
/// treated as "not authenticated", never as an error.
pub async fn fetch_me<A: AuthApi>(api: &A, state: &mut SessionState) {
    state.begin_fetch();
    let outcome = api.me().await;
    state.complete_fetch(outcome);
}
