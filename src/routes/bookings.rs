use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};

use super::{auth::session::AuthSession, parse_id};
use crate::{
    config::BookingAccess,
    models::booking::{BookingQuery, BookingStatusUpdate, NewBooking},
    responses::JsonResponse,
    state::AppState,
};

pub async fn create_booking(
    State(app_state): State<AppState>,
    Json(booking): Json<NewBooking>,
) -> Response {
    match app_state.bookings.insert_booking(booking).await {
        Ok(result) => Json(result).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to insert booking");
            JsonResponse::server_error("Failed to create booking").into_response()
        }
    }
}

pub async fn list_bookings(
    State(app_state): State<AppState>,
    AuthSession(identity): AuthSession,
    Query(query): Query<BookingQuery>,
) -> Response {
    tracing::debug!(query_email = ?query.email, user_email = ?identity.email, "listing bookings");

    if app_state.config.booking_access == BookingAccess::OwnerOnly {
        let owner = identity.email.as_deref().filter(|email| !email.is_empty());
        if owner.is_none() || owner != query.email.as_deref() {
            return JsonResponse::forbidden("forbidden access!").into_response();
        }
    }

    let email = query.email.as_deref().filter(|email| !email.is_empty());
    match app_state.bookings.list_bookings(email).await {
        Ok(bookings) => Json(bookings).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to list bookings");
            JsonResponse::server_error("Failed to load bookings").into_response()
        }
    }
}

pub async fn update_booking_status(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<BookingStatusUpdate>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match app_state
        .bookings
        .update_booking_status(id, update.status.as_deref())
        .await
    {
        Ok(result) => Json(result).into_response(),
        Err(err) => {
            tracing::error!(error = %err, %id, "failed to update booking");
            JsonResponse::server_error("Failed to update booking").into_response()
        }
    }
}

pub async fn delete_booking(State(app_state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match app_state.bookings.delete_booking(id).await {
        Ok(result) => Json(result).into_response(),
        Err(err) => {
            tracing::error!(error = %err, %id, "failed to delete booking");
            JsonResponse::server_error("Failed to delete booking").into_response()
        }
    }
}
