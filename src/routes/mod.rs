pub mod access;
pub mod auth;
pub mod bookings;
pub mod services;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::{config::ConfigError, responses::JsonResponse, state::AppState};

/// Builds the full HTTP surface: routes, the authorization gate, request tracing and CORS
/// for the configured frontend origin.
pub fn build_router(state: AppState) -> Result<Router, ConfigError> {
    let origin = state
        .config
        .frontend_origin
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::Invalid {
            name: "FRONTEND_ORIGIN",
            value: state.config.frontend_origin.clone(),
        })?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    let router = Router::new()
        .route("/", get(root))
        .route("/jwt", post(auth::issue_session))
        .route("/logout", post(auth::handle_logout))
        .route("/services", get(services::list_services))
        .route("/services/{id}", get(services::get_service))
        .route(
            "/bookings",
            post(bookings::create_booking).get(bookings::list_bookings),
        )
        .route(
            "/bookings/{id}",
            patch(bookings::update_booking_status).delete(bookings::delete_booking),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            access::require_auth,
        ))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        );

    Ok(router)
}

/// Liveness check.
async fn root() -> &'static str {
    "doctor is coming"
}

/// Store keys are UUIDs; anything else is a client error.
pub(crate) fn parse_id(raw: &str) -> Result<Uuid, Response> {
    Uuid::parse_str(raw).map_err(|_| JsonResponse::bad_request("invalid id").into_response())
}
