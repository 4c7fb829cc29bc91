use dreamwell_backend::db;
use migration::{Migrator, MigratorTrait};
use std::env;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> Result<(), sea_orm::DbErr> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting dreamwell persistence layer...");

    // Environment variable loading
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = db::DbConfig::from_env();
    let conn = db::connect(&config).await?;

    info!("Applying pending migrations...");
    Migrator::up(&conn, None).await?;
    info!("Database schema is up to date");

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error preparing database: {e}");
    }
}
