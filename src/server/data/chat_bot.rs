//! Chat bot data repository.
//!
//! Returns entity models; the service converts them because an unknown stored platform is
//! an application error rather than a database one.

use std::sync::LazyLock;

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::{
    data::paging::{get_paged_results, Collection, EntitySource, FieldKind, Models},
    error::paging::PagingError,
    model::{
        chat_bot::CreateChatBotParams,
        paging::{Page, PageRequest},
    },
};

/// Filter and sort schema of the chat bot listing.
pub static CHAT_BOTS: LazyLock<Collection<entity::chat_bot::Entity>> = LazyLock::new(|| {
    use entity::chat_bot::Column;

    Collection::new("chatbots", "id", Column::Id)
        .field("name", Column::Name, FieldKind::Text)
        .field("platform", Column::Platform, FieldKind::Text)
});

pub struct ChatBotRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChatBotRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new chat bot.
    ///
    /// # Returns
    /// - `Ok(entity::chat_bot::Model)` - The created bot
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: CreateChatBotParams,
    ) -> Result<entity::chat_bot::Model, DbErr> {
        entity::chat_bot::ActiveModel {
            name: ActiveValue::Set(params.name),
            platform: ActiveValue::Set(params.platform.as_str().to_string()),
            token: ActiveValue::Set(params.token),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::chat_bot::Model>, DbErr> {
        entity::prelude::ChatBot::find_by_id(id).one(self.db).await
    }

    /// Deletes a chat bot and, through the foreign key, all of its chats.
    ///
    /// # Returns
    /// - `Ok(true)` - Bot deleted
    /// - `Ok(false)` - No bot with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ChatBot::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn get_paged(
        &self,
        request: &PageRequest,
    ) -> Result<Page<entity::chat_bot::Model>, PagingError> {
        let source = EntitySource::new(self.db, &*CHAT_BOTS, Models);

        get_paged_results(&source, request, None).await
    }
}
