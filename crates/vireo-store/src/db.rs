// Pool construction and schema migrations

use log::info;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use vireo_commons::settings::DatabaseSettings;

/// Open a connection pool against the configured MySQL database.
pub async fn connect(settings: &DatabaseSettings) -> sqlx::Result<MySqlPool> {
    let pool = MySqlPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.url())
        .await?;

    info!(
        "connected to mysql database '{}' at {}:{} (pool of {})",
        settings.name, settings.host, settings.port, settings.max_connections
    );

    Ok(pool)
}

/// Apply the embedded migrations so a fresh database is usable at first boot.
pub async fn run_migrations(pool: &MySqlPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("schema migrations applied");
    Ok(())
}
