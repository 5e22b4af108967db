//! Persisted application log.
//!
//! Entries written here are stored for the admin log view and mirrored to `tracing`, so they
//! also show up in the process output.

use chrono::{Duration, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::log::LogRepository,
    error::AppError,
    model::{
        log::{LogEntry, LogLevel},
        paging::{Page, PageRequest},
    },
};

pub struct LogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a log entry and emits it through `tracing` at the same level.
    ///
    /// # Arguments
    /// - `level` - Severity of the entry
    /// - `context` - Subsystem writing the entry, e.g. `post`
    /// - `message` - Human readable message
    ///
    /// # Returns
    /// - `Ok(LogEntry)` - The stored entry
    /// - `Err(AppError)` - Failed to store the entry
    pub async fn write(
        &self,
        level: LogLevel,
        context: &str,
        message: &str,
    ) -> Result<LogEntry, AppError> {
        match level {
            LogLevel::Debug => tracing::debug!(context, "{}", message),
            LogLevel::Info => tracing::info!(context, "{}", message),
            LogLevel::Warn => tracing::warn!(context, "{}", message),
            LogLevel::Error => tracing::error!(context, "{}", message),
        }

        let entity = LogRepository::new(self.db)
            .create(level, context, message)
            .await?;

        LogEntry::from_entity(entity)
    }

    /// Gets one page of log entries.
    ///
    /// # Returns
    /// - `Ok(Page<LogEntry>)` - Entries of the requested page
    /// - `Err(AppError)` - Rejected filter, database error, or unknown stored level
    pub async fn get_paged(&self, request: &PageRequest) -> Result<Page<LogEntry>, AppError> {
        let page = LogRepository::new(self.db).get_paged(request).await?;

        let data = page
            .data
            .into_iter()
            .map(LogEntry::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page {
            data,
            info: page.info,
        })
    }

    /// Deletes entries older than the retention window.
    ///
    /// # Arguments
    /// - `retention_days` - Entries older than this many days are removed
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted entries
    /// - `Err(AppError)` - Database error during delete
    pub async fn purge_expired(&self, retention_days: i64) -> Result<u64, AppError> {
        let cutoff = Utc::now() - Duration::days(retention_days);

        let deleted = LogRepository::new(self.db)
            .delete_older_than(cutoff)
            .await?;

        if deleted > 0 {
            tracing::info!("Purged {} log entries older than {}", deleted, cutoff);
        }

        Ok(deleted)
    }
}
