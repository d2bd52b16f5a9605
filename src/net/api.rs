//! HTTP auth boundary.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net` against the FleeMa
//! backend. Native builds: stubs returning [`ApiError::Transport`] so the
//! session state machine can be tested without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is normalized to [`ApiError`]. The server's `{ "detail" }`
//! message survives as `Rejected`; anything else (network failure, bad body)
//! collapses to `Transport`. The session layer owns the user-facing fallback
//! wording, not this module.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{LoginPayload, RegisterPayload, User};

/// Failure of an auth boundary call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server rejected the request with a human-readable detail message.
    #[error("{0}")]
    Rejected(String),
    /// Transport failed or the response body was unusable.
    #[error("request failed")]
    Transport,
}

impl ApiError {
    /// Server-supplied detail message, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected(msg) => Some(msg),
            Self::Transport => None,
        }
    }
}

/// The four logical calls the session layer makes against the backend.
///
/// [`HttpApi`] is the production implementation; tests inject scripted
/// substitutes.
#[allow(async_fn_in_trait)] // single-threaded WASM target, no Send bound wanted
pub trait AuthApi {
    /// `POST /auth/login` — authenticate with email/password.
    async fn login(&self, payload: &LoginPayload) -> Result<User, ApiError>;

    /// `POST /auth/register` — create an account and tenant.
    async fn register(&self, payload: &RegisterPayload) -> Result<User, ApiError>;

    /// `POST /auth/logout` — end the server session.
    async fn logout(&self) -> Result<(), ApiError>;

    /// `GET /auth/me` — resolve the current identity from the cookie.
    async fn me(&self) -> Result<User, ApiError>;
}

/// Auth boundary backed by the FleeMa HTTP API.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

impl AuthApi for HttpApi {
    async fn login(&self, payload: &LoginPayload) -> Result<User, ApiError> {
        #[cfg(feature = "csr")]
        {
            post_for_user("/auth/login", payload).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = payload;
            Err(ApiError::Transport)
        }
    }

    async fn register(&self, payload: &RegisterPayload) -> Result<User, ApiError> {
        #[cfg(feature = "csr")]
        {
            post_for_user("/auth/register", payload).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = payload;
            Err(ApiError::Transport)
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post("/auth/logout")
                .send()
                .await
                .map_err(|_| ApiError::Transport)?;
            if resp.ok() {
                Ok(())
            } else {
                Err(ApiError::Transport)
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Transport)
        }
    }

    async fn me(&self) -> Result<User, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get("/auth/me")
                .send()
                .await
                .map_err(|_| ApiError::Transport)?;
            if resp.ok() {
                resp.json::<User>().await.map_err(|_| ApiError::Transport)
            } else {
                Err(rejection(&resp).await)
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Transport)
        }
    }
}

/// 2xx envelope for login/register responses.
#[cfg(feature = "csr")]
#[derive(serde::Deserialize)]
struct UserEnvelope {
    user: User,
}

/// Error payload shape: `{ "detail": "..." }`.
#[cfg(feature = "csr")]
#[derive(serde::Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// POST a JSON body and unwrap the `{ "user": ... }` envelope.
#[cfg(feature = "csr")]
async fn post_for_user<B: serde::Serialize>(url: &str, body: &B) -> Result<User, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|_| ApiError::Transport)?
        .send()
        .await
        .map_err(|_| ApiError::Transport)?;
    if resp.ok() {
        let envelope: UserEnvelope = resp.json().await.map_err(|_| ApiError::Transport)?;
        Ok(envelope.user)
    } else {
        Err(rejection(&resp).await)
    }
}

/// Turn a non-2xx response into an [`ApiError`], keeping the server detail
/// when the error body parses.
#[cfg(feature = "csr")]
async fn rejection(resp: &gloo_net::http::Response) -> ApiError {
    match resp.json::<ErrorBody>().await {
        Ok(ErrorBody { detail: Some(detail) }) => ApiError::Rejected(detail),
        _ => ApiError::Transport,
    }
}
