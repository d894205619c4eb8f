//! Auth route group (`/auth`).
//!
//! Credential handling and token validation are owned by the auth service;
//! only the session-cookie glue lives here.

use crate::error::HttpError;
use crate::state::AppState;
use axum::{http::StatusCode, routing::post, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use std::sync::Arc;
use storefront_core::AppError;

/// Name of the session cookie issued by the auth service.
pub const SESSION_COOKIE: &str = "session";

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
}

/// Drop the session cookie. Idempotent: logging out without a session is
/// still a success.
async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    let jar = jar.remove(Cookie::from(SESSION_COOKIE));
    (jar, StatusCode::NO_CONTENT)
}

async fn register() -> HttpError {
    AppError::NotImplemented("account registration").into()
}

async fn login() -> HttpError {
    AppError::NotImplemented("login").into()
}
