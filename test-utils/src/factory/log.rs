//! Log entry factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test log entries with customizable fields.
pub struct LogFactory<'a> {
    db: &'a DatabaseConnection,
    level: String,
    context: String,
    message: String,
    created_at: DateTime<Utc>,
}

impl<'a> LogFactory<'a> {
    /// Creates a new LogFactory with default values.
    ///
    /// Defaults:
    /// - level: `"info"`
    /// - context: `"test"`
    /// - message: `"Log entry {id}"` where id is auto-incremented
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            level: "info".to_string(),
            context: "test".to_string(),
            message: format!("Log entry {}", next_id()),
            created_at: Utc::now(),
        }
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Backdates the entry, used by retention tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the log entry into the database.
    ///
    /// # Returns
    /// - `Ok(entity::log::Model)` - Created log entry
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::log::Model, DbErr> {
        entity::log::ActiveModel {
            level: ActiveValue::Set(self.level),
            context: ActiveValue::Set(self.context),
            message: ActiveValue::Set(self.message),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an info level log entry with default values.
pub async fn create_log(db: &DatabaseConnection) -> Result<entity::log::Model, DbErr> {
    LogFactory::new(db).build().await
}
