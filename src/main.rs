use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use car_doctor_backend::{
    config::Config,
    db::{
        booking_repository::BookingRepository,
        postgres_booking_repository::PostgresBookingRepository,
        postgres_service_repository::PostgresServiceRepository,
        service_repository::ServiceRepository,
    },
    logging::init_tracing,
    routes::build_router,
    utils::jwt::JwtKeys,
    AppState,
};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    init_tracing();

    let jwt_keys = JwtKeys::from_secret(&config.access_token_secret)
        .context("ACCESS_TOKEN_SECRET cannot be used for signing")?;

    let pg_pool = establish_connection(&config.database_url).await?;
    let services = Arc::new(PostgresServiceRepository {
        pool: pg_pool.clone(),
    }) as Arc<dyn ServiceRepository>;
    let bookings = Arc::new(PostgresBookingRepository {
        pool: pg_pool.clone(),
    }) as Arc<dyn BookingRepository>;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState {
        services,
        bookings,
        jwt_keys: Arc::new(jwt_keys),
        config: Arc::new(config),
    };

    let app = build_router(state).context("failed to build router")?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "car doctor server is running");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

/// Connects to the document store, verifies the connection and applies migrations.
async fn establish_connection(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPool::connect(database_url)
        .await
        .context("failed to connect to the database")?;

    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .context("failed to verify database connection")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("failed to run migrations")?;

    info!("Successfully connected to the database");
    Ok(pool)
}
