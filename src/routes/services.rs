use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};

use super::parse_id;
use crate::{responses::JsonResponse, state::AppState};

pub async fn list_services(State(app_state): State<AppState>) -> Response {
    match app_state.services.list_services().await {
        Ok(services) => Json(services).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to list services");
            JsonResponse::server_error("Failed to load services").into_response()
        }
    }
}

/// Responds with the projected service, or `null` when nothing has that id.
pub async fn get_service(State(app_state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match app_state.services.find_service(id).await {
        Ok(service) => Json(service).into_response(),
        Err(err) => {
            tracing::error!(error = %err, %id, "failed to load service");
            JsonResponse::server_error("Failed to load service").into_response()
        }
    }
}
