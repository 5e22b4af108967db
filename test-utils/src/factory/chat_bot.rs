//! Chat bot factory for creating test chat bot entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test chat bots with customizable fields.
pub struct ChatBotFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    platform: String,
    token: String,
}

impl<'a> ChatBotFactory<'a> {
    /// Creates a new ChatBotFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Bot {id}"` where id is auto-incremented
    /// - platform: `"telegram"`
    /// - token: `"token_{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Bot {}", id),
            platform: "telegram".to_string(),
            token: format!("token_{}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the stored platform string (`"telegram"` or `"discord"`).
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Builds and inserts the chat bot entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::chat_bot::Model)` - Created chat bot entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::chat_bot::Model, DbErr> {
        entity::chat_bot::ActiveModel {
            name: ActiveValue::Set(self.name),
            platform: ActiveValue::Set(self.platform),
            token: ActiveValue::Set(self.token),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a Telegram chat bot with default values.
pub async fn create_chat_bot(db: &DatabaseConnection) -> Result<entity::chat_bot::Model, DbErr> {
    ChatBotFactory::new(db).build().await
}
