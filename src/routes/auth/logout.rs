use axum::{
    body::Bytes,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde_json::Value;

use super::cookie::cleared_session_cookie;
use crate::responses::JsonResponse;

/// Accepts any body (or none) and tells the client to forget its session cookie.
pub async fn handle_logout(jar: CookieJar, body: Bytes) -> Response {
    let payload = serde_json::from_slice::<Value>(&body).unwrap_or(Value::Null);
    tracing::debug!(%payload, "logging out");

    (jar.add(cleared_session_cookie()), JsonResponse::success()).into_response()
}
