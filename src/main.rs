mod model;
mod server;

use dioxus_logger::tracing;

use crate::server::{
    config::Config, error::AppError, scheduler::log_retention, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let registry = startup::build_collection_registry();

    startup::bootstrap_admin(&db, &config).await?;

    log_retention::start_scheduler(db.clone(), config.log_retention_days).await?;

    let router = server::router::router(&config.app_url)?
        .with_state(AppState::new(db, http_client, registry))
        .layer(session);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, router).await?;

    Ok(())
}
