//! Chat data repository.

use std::sync::LazyLock;

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::{
    data::paging::{get_paged_results, Collection, EntitySource, FieldKind, Models},
    error::paging::PagingError,
    model::{
        chat_bot::{Chat, CreateChatParams},
        paging::{NormalizedFilter, Page, PageRequest},
    },
};

/// Filter and sort schema of the chat listing.
pub static CHATS: LazyLock<Collection<entity::chat::Entity>> = LazyLock::new(|| {
    use entity::chat::Column;

    Collection::new("chats", "id", Column::Id)
        .field("chatBotId", Column::ChatBotId, FieldKind::Integer)
        .field("name", Column::Name, FieldKind::Text)
});

pub struct ChatRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChatRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new chat for an existing bot.
    ///
    /// # Returns
    /// - `Ok(Chat)` - The created chat
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateChatParams) -> Result<Chat, DbErr> {
        let entity = entity::chat::ActiveModel {
            chat_bot_id: ActiveValue::Set(params.chat_bot_id),
            name: ActiveValue::Set(params.name),
            external_id: ActiveValue::Set(params.external_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Chat::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Chat>, DbErr> {
        let entity = entity::prelude::Chat::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Chat::from_entity))
    }

    /// Deletes a chat.
    ///
    /// # Returns
    /// - `Ok(true)` - Chat deleted
    /// - `Ok(false)` - No chat with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Chat::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets one page of chats.
    ///
    /// # Arguments
    /// - `request` - Page, size and descriptor
    /// - `explicit_filters` - Filters replacing the descriptor's filter keys, used to pin
    ///   the listing to one bot
    pub async fn get_paged(
        &self,
        request: &PageRequest,
        explicit_filters: Option<&NormalizedFilter>,
    ) -> Result<Page<Chat>, PagingError> {
        let source = EntitySource::new(self.db, &*CHATS, Models);
        let page = get_paged_results(&source, request, explicit_filters).await?;

        Ok(page.map(Chat::from_entity))
    }
}
