use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::{log::LOGS, paging::CollectionRegistry, post::POSTS, series::SERIES, topic::TOPICS},
    error::AppError,
    service::user::UserService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// The session table is created on first start. Sessions expire after seven days without
/// activity.
///
/// # Arguments
/// - `db` - Connected database whose pool also holds the session table
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let session_store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    session_store.migrate().await?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(7)));

    Ok(session)
}

/// Builds the HTTP client used for messenger platform requests.
///
/// Redirects are disabled so that a configured webhook cannot forward requests to another
/// host.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend could not be initialized
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the registry of collections available to the admin browse endpoint.
pub fn build_collection_registry() -> CollectionRegistry {
    CollectionRegistry::new()
        .register(&*POSTS)
        .register(&*TOPICS)
        .register(&*SERIES)
        .register(&*LOGS)
}

/// Ensures an administrator exists when bootstrap credentials are configured.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Application configuration holding the optional bootstrap credentials
///
/// # Returns
/// - `Ok(())` - An administrator exists, was created, or no credentials are configured
/// - `Err(AppError)` - Database error
pub async fn bootstrap_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let Some(admin) = &config.bootstrap_admin else {
        tracing::debug!("No bootstrap admin configured");
        return Ok(());
    };

    match UserService::new(db)
        .bootstrap_admin(&admin.username, &admin.password)
        .await?
    {
        Some(user) => tracing::info!("Bootstrap admin {} is ready", user.username),
        None => tracing::debug!("Admin user already exists, skipping bootstrap"),
    }

    Ok(())
}
