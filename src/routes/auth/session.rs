use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use thiserror::Error;

use super::cookie::TOKEN_COOKIE;
use crate::models::identity::Identity;
use crate::responses::JsonResponse;
use crate::utils::jwt::{decode_token, JwtKeys};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("unauthorized access - no token")]
    MissingCredential,
    #[error("unauthorized access")]
    InvalidCredential,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        JsonResponse::unauthorized(&self.to_string()).into_response()
    }
}

/// Checks the `token` cookie and returns the identity signed into it.
pub fn verify(jar: &CookieJar, keys: &JwtKeys) -> Result<Identity, AuthError> {
    let token = jar.get(TOKEN_COOKIE).ok_or(AuthError::MissingCredential)?;
    if token.value().is_empty() {
        return Err(AuthError::MissingCredential);
    }

    let claims = decode_token(token.value(), keys).map_err(|err| {
        tracing::debug!(error = %err, "rejected session token");
        AuthError::InvalidCredential
    })?;

    Ok(claims.identity)
}

/// The identity attached by the authorization gate.
///
/// Handlers that take this can only run behind `require_auth`; anywhere else the
/// extractor rejects the request.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession(pub Identity);

impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(AuthSession)
            .ok_or(AuthError::MissingCredential)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{header, HeaderMap, HeaderValue, Method, Request};
    use axum_extra::extract::cookie::Cookie;
    use chrono::Utc;

    use super::*;
    use crate::utils::jwt::{issue_token, issue_token_at};

    fn keys() -> JwtKeys {
        JwtKeys::from_secret("0123456789abcdef0123456789abcdef").unwrap()
    }

    fn jar_with(cookie: Option<Cookie<'static>>) -> CookieJar {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = cookie {
            headers.insert(
                header::COOKIE,
                HeaderValue::from_str(&cookie.to_string()).unwrap(),
            );
        }
        CookieJar::from_headers(&headers)
    }

    #[test]
    fn valid_token_yields_identity() {
        let keys = keys();
        let token = issue_token(Identity::with_email("a@x.com"), &keys).unwrap();

        let identity = verify(&jar_with(Some(Cookie::new(TOKEN_COOKIE, token))), &keys).unwrap();
        assert_eq!(identity, Identity::with_email("a@x.com"));
    }

    #[test]
    fn missing_cookie_is_rejected() {
        assert_eq!(
            verify(&jar_with(None), &keys()),
            Err(AuthError::MissingCredential)
        );
    }

    #[test]
    fn cleared_cookie_counts_as_missing() {
        let jar = jar_with(Some(Cookie::new(TOKEN_COOKIE, "")));
        assert_eq!(verify(&jar, &keys()), Err(AuthError::MissingCredential));
    }

    #[test]
    fn other_cookies_do_not_count() {
        let keys = keys();
        let token = issue_token(Identity::with_email("a@x.com"), &keys).unwrap();
        let jar = jar_with(Some(Cookie::new("auth_token", token)));

        assert_eq!(verify(&jar, &keys), Err(AuthError::MissingCredential));
    }

    #[test]
    fn invalid_token_is_rejected() {
        let jar = jar_with(Some(Cookie::new(TOKEN_COOKIE, "invalid.token.here")));
        assert_eq!(verify(&jar, &keys()), Err(AuthError::InvalidCredential));
    }

    #[test]
    fn expired_token_is_rejected() {
        let keys = keys();
        let token = issue_token_at(
            Identity::with_email("a@x.com"),
            &keys,
            Utc::now().timestamp() - 7200,
        )
        .unwrap();

        let jar = jar_with(Some(Cookie::new(TOKEN_COOKIE, token)));
        assert_eq!(verify(&jar, &keys), Err(AuthError::InvalidCredential));
    }

    #[tokio::test]
    async fn auth_session_requires_gate_identity() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/")
            .body(())
            .unwrap();

        let mut parts = request.into_parts().0;
        let result = AuthSession::from_request_parts(&mut parts, &()).await;
        assert_eq!(result, Err(AuthError::MissingCredential));

        parts.extensions.insert(Identity::with_email("a@x.com"));
        let session = AuthSession::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(session.0.email.as_deref(), Some("a@x.com"));
    }
}
