//! Chat factory for creating test chat entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test chats with customizable fields.
pub struct ChatFactory<'a> {
    db: &'a DatabaseConnection,
    chat_bot_id: i32,
    name: String,
    external_id: String,
}

impl<'a> ChatFactory<'a> {
    /// Creates a new ChatFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Chat {id}"` where id is auto-incremented
    /// - external_id: `"{id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `chat_bot_id` - ID of an existing chat bot
    pub fn new(db: &'a DatabaseConnection, chat_bot_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            chat_bot_id,
            name: format!("Chat {}", id),
            external_id: id.to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the platform identifier (Telegram chat ID or Discord webhook URL).
    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = external_id.into();
        self
    }

    /// Builds and inserts the chat entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::chat::Model)` - Created chat entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::chat::Model, DbErr> {
        entity::chat::ActiveModel {
            chat_bot_id: ActiveValue::Set(self.chat_bot_id),
            name: ActiveValue::Set(self.name),
            external_id: ActiveValue::Set(self.external_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a chat with default values for the given bot.
pub async fn create_chat(
    db: &DatabaseConnection,
    chat_bot_id: i32,
) -> Result<entity::chat::Model, DbErr> {
    ChatFactory::new(db, chat_bot_id).build().await
}
