//! Session cookie middleware and extractor.
//!
//! The middleware verifies the signed session cookie, or mints a new session
//! id when it is missing or forged, and stores the id in the request
//! extensions. New ids are sent back in a `Set-Cookie` header. Minting an id
//! stores nothing; the session is created by its first change.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;

use listkeeper_types::session::SessionId;

use crate::http::error::AppError;
use crate::state::AppState;

/// The current visitor's session id. Extracting it requires the
/// [`resolve_session`] middleware.
#[derive(Debug, Clone, Copy)]
pub struct VisitorSession(pub SessionId);

impl<S: Send + Sync> FromRequestParts<S> for VisitorSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<VisitorSession>()
            .copied()
            .ok_or_else(|| AppError::Internal("session middleware not installed".to_string()))
    }
}

/// Middleware: attach a [`VisitorSession`] to the request.
pub async fn resolve_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let cookie_name = state.config.session.cookie_name.as_str();

    let existing = cookie_value(request.headers(), cookie_name).and_then(|value| {
        match state.signer.verify(value) {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::debug!(error = %e, "discarding session cookie");
                None
            }
        }
    });

    let (id, is_new) = match existing {
        Some(id) => (id, false),
        None => (SessionId::new(), true),
    };
    request.extensions_mut().insert(VisitorSession(id));

    let mut response = next.run(request).await;

    if is_new {
        let cookie = format!(
            "{cookie_name}={}; Path=/; HttpOnly; SameSite=Lax",
            state.signer.sign(&id)
        );
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => tracing::error!(error = %e, "session cookie is not a valid header value"),
        }
    }

    response
}

/// Find the value of cookie `name` across all `Cookie` headers.
fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value_finds_named_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; listkeeper.session=abc.def; other=1"),
        );
        assert_eq!(cookie_value(&headers, "listkeeper.session"), Some("abc.def"));
        assert_eq!(cookie_value(&headers, "theme"), Some("dark"));
        assert_eq!(cookie_value(&headers, "missing"), None);
    }

    #[test]
    fn test_cookie_value_across_multiple_headers() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("a=1"));
        headers.append(COOKIE, HeaderValue::from_static("b=2"));
        assert_eq!(cookie_value(&headers, "b"), Some("2"));
    }
}
