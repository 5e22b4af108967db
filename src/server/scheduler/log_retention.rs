use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::log::LogService};

/// Starts the log retention scheduler
///
/// Runs at the start of every hour and deletes log entries older than the retention window.
///
/// # Arguments
/// - `db`: Database connection
/// - `retention_days`: Entries older than this many days are deleted
pub async fn start_scheduler(db: DatabaseConnection, retention_days: i64) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = purge_expired_logs(&db, retention_days).await {
                tracing::error!("Error purging expired log entries: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Log retention scheduler started, keeping {} days of entries",
        retention_days
    );

    Ok(())
}

/// Deletes log entries past the retention window.
pub async fn purge_expired_logs(
    db: &DatabaseConnection,
    retention_days: i64,
) -> Result<u64, AppError> {
    LogService::new(db).purge_expired(retention_days).await
}
