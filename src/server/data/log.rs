//! Persisted log repository.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::{
    data::paging::{get_paged_results, Collection, EntitySource, FieldKind, Models},
    error::paging::PagingError,
    model::{
        log::LogLevel,
        paging::{Page, PageRequest},
    },
};

/// Filter and sort schema of the log listing.
pub static LOGS: LazyLock<Collection<entity::log::Entity>> = LazyLock::new(|| {
    use entity::log::Column;

    Collection::new("logs", "id", Column::Id)
        .field("level", Column::Level, FieldKind::Text)
        .field("context", Column::Context, FieldKind::Text)
        .field("message", Column::Message, FieldKind::Text)
        .field("createdAt", Column::CreatedAt, FieldKind::Timestamp)
});

pub struct LogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a log entry stamped with the current time.
    ///
    /// # Returns
    /// - `Ok(entity::log::Model)` - The stored entry
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        level: LogLevel,
        context: &str,
        message: &str,
    ) -> Result<entity::log::Model, DbErr> {
        entity::log::ActiveModel {
            level: ActiveValue::Set(level.as_str().to_string()),
            context: ActiveValue::Set(context.to_string()),
            message: ActiveValue::Set(message.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Deletes every entry created strictly before `cutoff`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted entries
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Log::delete_many()
            .filter(entity::log::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn get_paged(
        &self,
        request: &PageRequest,
    ) -> Result<Page<entity::log::Model>, PagingError> {
        let source = EntitySource::new(self.db, &*LOGS, Models);

        get_paged_results(&source, request, None).await
    }
}
