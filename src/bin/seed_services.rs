use std::{env, fs};

use anyhow::{bail, Context, Result};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use car_doctor_backend::models::service::Service;

/// Loads a JSON array of service documents into the catalog.
///
/// Documents whose `_id` is already a UUID keep it, so re-running the import updates them
/// in place. Any other `_id` (a Mongo export's `{"$oid": ...}` for instance) is replaced
/// with a fresh key. Every entry must fit the service record shape before it is stored.
#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let path = env::args()
        .nth(1)
        .context("usage: seed_services <services.json>")?;
    let database_url =
        env::var("DATABASE_URL").context("DATABASE_URL is required to seed services")?;

    let raw = fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?;
    let documents: Vec<Value> =
        serde_json::from_str(&raw).with_context(|| format!("{path} is not a JSON array"))?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .context("failed to connect to DATABASE_URL")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("failed to run migrations")?;

    let mut imported = 0usize;
    for (index, document) in documents.into_iter().enumerate() {
        let Value::Object(mut doc) = document else {
            bail!("entry {index} in {path} is not an object");
        };

        let id = doc
            .remove("_id")
            .and_then(|id| id.as_str().and_then(|s| Uuid::parse_str(s).ok()))
            .unwrap_or_else(Uuid::new_v4);

        let mut checked = doc.clone();
        checked.insert("_id".into(), Value::String(id.to_string()));
        serde_json::from_value::<Service>(Value::Object(checked))
            .with_context(|| format!("entry {index} in {path} is not a valid service"))?;

        sqlx::query(
            "INSERT INTO services (id, doc) VALUES ($1, $2)
             ON CONFLICT (id) DO UPDATE SET doc = EXCLUDED.doc",
        )
        .bind(id)
        .bind(Value::Object(doc))
        .execute(&pool)
        .await
        .with_context(|| format!("failed to import entry {index}"))?;

        imported += 1;
    }

    println!("Imported {imported} services from {path}");
    Ok(())
}
