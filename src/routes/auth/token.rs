use axum::{
    extract::{Json, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use super::cookie::session_cookie;
use crate::{
    models::identity::Identity, responses::JsonResponse, state::AppState,
    utils::jwt::issue_token,
};

pub async fn issue_session(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Json(identity): Json<Identity>,
) -> Response {
    tracing::debug!(email = ?identity.email, "issuing session token");

    match issue_token(identity, &app_state.jwt_keys) {
        Ok(token) => (jar.add(session_cookie(token)), JsonResponse::success()).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to sign session token");
            JsonResponse::server_error("Token generation failed").into_response()
        }
    }
}
