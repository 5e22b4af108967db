//! Series factory for creating test series entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test series with customizable fields.
pub struct SeriesFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
}

impl<'a> SeriesFactory<'a> {
    /// Creates a new SeriesFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Series {id}"` where id is auto-incremented
    /// - description: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Series {}", next_id()),
            description: String::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds and inserts the series entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::series::Model)` - Created series entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::series::Model, DbErr> {
        entity::series::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a series with default values.
pub async fn create_series(db: &DatabaseConnection) -> Result<entity::series::Model, DbErr> {
    SeriesFactory::new(db).build().await
}
