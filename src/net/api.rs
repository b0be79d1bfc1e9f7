//! REST API helpers for the authentication backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth
//! failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

use super::types::{AuthError, Session};
use crate::state::login::Credentials;

/// Exchange credentials for a session via `POST /api/auth/login`.
///
/// # Errors
///
/// `AuthError::InvalidCredentials` when the backend rejects the pair,
/// `AuthError::Unknown` for anything else.
pub async fn login(credentials: &Credentials) -> Result<Session, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::{ApiErrorBody, LoginResponse};

        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(credentials)
            .map_err(|_| AuthError::Unknown)?
            .send()
            .await
            .map_err(|_| AuthError::Unknown)?;
        if resp.ok() {
            let body: LoginResponse = resp.json().await.map_err(|_| AuthError::Unknown)?;
            return Ok(body.data);
        }
        let body = resp.json::<ApiErrorBody>().await.ok();
        let err = AuthError::from_error_body(body.as_ref());
        log::debug!("login failed: status={} classified={err:?}", resp.status());
        Err(err)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(AuthError::Unknown)
    }
}

/// Fetch the current session from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_session() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Session>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Kick off the identity provider's redirect flow with a fixed
/// post-login return path. Fire-and-forget; the provider's redirect
/// target handles the result.
pub fn sign_in_with_provider(provider: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let url = format!("/auth/{provider}?return_to=%2F");
            let _ = window.location().set_href(&url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = provider;
    }
}
