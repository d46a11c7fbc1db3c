// Vireo Server
//
// Main server binary for Vireo, a small social-network REST API over MySQL

mod logging;

use actix_web::{middleware, web, App, HttpServer};
use anyhow::Result;
use log::info;
use vireo_api::routes;
use vireo_commons::Settings;
use vireo_store::{db, PublicationRepo, UserRepo};

#[actix_web::main]
async fn main() -> Result<()> {
    // Load configuration from the environment
    let settings = Settings::from_env()?;

    // Initialize logging
    logging::init_logging(&settings.server.log_level)?;

    info!("Starting Vireo Server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded: host={}, port={}",
        settings.server.host, settings.server.port
    );

    // Connect to MySQL and bring the schema up to date
    let pool = db::connect(&settings.database).await?;
    db::run_migrations(&pool).await?;

    let users = UserRepo::new(pool.clone());
    let publications = PublicationRepo::new(pool);

    let workers = if settings.server.workers == 0 {
        num_cpus::get()
    } else {
        settings.server.workers
    };

    let bind_addr = format!("{}:{}", settings.server.host, settings.server.port);
    info!("Starting HTTP server on {} with {} workers", bind_addr, workers);

    let app_settings = settings;
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(app_settings.clone()))
            .app_data(web::Data::new(users.clone()))
            .app_data(web::Data::new(publications.clone()))
            .configure(|cfg| routes::configure_routes(cfg, &app_settings.auth))
    })
    .bind(&bind_addr)?
    .workers(workers)
    .run()
    .await?;

    info!("Server shutdown complete");
    Ok(())
}
