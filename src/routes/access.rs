use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use super::auth::session::verify;
use crate::state::AppState;

/// Every route that requires a valid session token, as (method, matched path).
///
/// This table is the only place a route becomes protected. Anything missing from it is
/// public.
pub const PROTECTED_ROUTES: &[(&str, &str)] = &[("GET", "/bookings")];

pub fn is_protected(method: &str, matched_path: &str) -> bool {
    PROTECTED_ROUTES
        .iter()
        .any(|(m, p)| *m == method && *p == matched_path)
}

/// Authorization gate, installed as a route layer so the matched path is known.
///
/// Protected routes run only with a verified identity in the request extensions.
pub async fn require_auth(
    State(app_state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let protected = req
        .extensions()
        .get::<MatchedPath>()
        .is_some_and(|path| is_protected(req.method().as_str(), path.as_str()));

    if !protected {
        return next.run(req).await;
    }

    match verify(&jar, &app_state.jwt_keys) {
        Ok(identity) => {
            tracing::debug!(email = ?identity.email, path = %req.uri().path(), "session accepted");
            req.extensions_mut().insert(identity);
            next.run(req).await
        }
        Err(err) => {
            tracing::info!(reason = %err, path = %req.uri().path(), "session rejected");
            err.into_response()
        }
    }
}
