//! Session cookie middleware.
//!
//! Every list route runs inside a session. The middleware resolves the
//! caller's session from its cookie (creating one when needed), exposes the
//! [`SessionId`] to handlers through request extensions, and sets the cookie
//! on the response when the session is new.

use axum::{
    body::Body,
    extract::State,
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue, Request, StatusCode,
    },
    middleware::Next,
    response::Response,
};

use super::AppState;
use crate::models::SessionId;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "listkeeper.session";

/// Resolve or create the caller's session.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let requested = session_from_headers(request.headers());

    let (id, created) = state.sessions.resolve(requested).map_err(|e| {
        tracing::error!("Failed to resolve session: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    if requested.is_some() && created {
        tracing::debug!(session = %id, "replaced unknown or expired session");
    }

    request.extensions_mut().insert(id);
    let mut response = next.run(request).await;

    if created {
        let cookie = session_cookie(id);
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => tracing::error!("Invalid session cookie header: {}", e),
        }
    }

    Ok(response)
}

/// `Set-Cookie` value for a session.
pub fn session_cookie(id: SessionId) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id)
}

/// Extract the session id from any `Cookie` header. Malformed ids are ignored.
pub fn session_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .filter(|(name, _)| *name == SESSION_COOKIE)
        .find_map(|(_, value)| value.trim().parse().ok())
}
