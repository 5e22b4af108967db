//! Chat bot and chat management.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{chat::ChatRepository, chat_bot::ChatBotRepository},
    error::AppError,
    model::{
        chat_bot::{Chat, ChatBot, CreateChatBotParams, CreateChatParams, Platform},
        log::LogLevel,
        paging::{NormalizedFilter, Page, PageRequest},
    },
    service::{log::LogService, messenger::validate_webhook_url},
};

pub struct ChatBotService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChatBotService<'a> {
    /// Creates a new ChatBotService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ChatBotService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a chat bot.
    ///
    /// Discord bots store their webhook URL as token, which must point at Discord's webhook
    /// API.
    ///
    /// # Returns
    /// - `Ok(ChatBot)` - The registered bot
    /// - `Err(AppError::BadRequest)` - Empty name or token
    /// - `Err(AppError::MessengerErr(InvalidWebhookUrl))` - Discord token is not a webhook URL
    pub async fn create(&self, mut params: CreateChatBotParams) -> Result<ChatBot, AppError> {
        params.name = params.name.trim().to_string();
        params.token = params.token.trim().to_string();

        if params.name.is_empty() {
            return Err(AppError::BadRequest(
                "Chat bot name must not be empty".to_string(),
            ));
        }
        if params.token.is_empty() {
            return Err(AppError::BadRequest(
                "Chat bot token must not be empty".to_string(),
            ));
        }
        if params.platform == Platform::Discord {
            validate_webhook_url(&params.token)?;
        }

        let entity = ChatBotRepository::new(self.db).create(params).await?;
        let bot = ChatBot::from_entity(entity)?;

        tracing::info!("Registered {} chat bot {} ({})", bot.platform.as_str(), bot.name, bot.id);

        Ok(bot)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ChatBot>, AppError> {
        ChatBotRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(ChatBot::from_entity)
            .transpose()
    }

    /// Deletes a chat bot together with its chats.
    ///
    /// # Returns
    /// - `Ok(true)` - Bot deleted
    /// - `Ok(false)` - No bot with that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = ChatBotRepository::new(self.db).delete(id).await?;

        if deleted {
            LogService::new(self.db)
                .write(LogLevel::Info, "chatbot", &format!("Deleted chat bot {}", id))
                .await?;
        }

        Ok(deleted)
    }

    pub async fn get_paged(&self, request: &PageRequest) -> Result<Page<ChatBot>, AppError> {
        let page = ChatBotRepository::new(self.db).get_paged(request).await?;

        let data = page
            .data
            .into_iter()
            .map(ChatBot::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page {
            data,
            info: page.info,
        })
    }

    /// Adds a chat to an existing bot.
    ///
    /// # Returns
    /// - `Ok(Chat)` - The created chat
    /// - `Err(AppError::NotFound)` - No bot with that id
    /// - `Err(AppError::BadRequest)` - Empty name, or a Telegram chat without external id
    pub async fn create_chat(&self, mut params: CreateChatParams) -> Result<Chat, AppError> {
        let Some(bot) = self.get_by_id(params.chat_bot_id).await? else {
            return Err(AppError::NotFound("Chat bot not found".to_string()));
        };

        params.name = params.name.trim().to_string();
        params.external_id = params.external_id.trim().to_string();

        if params.name.is_empty() {
            return Err(AppError::BadRequest(
                "Chat name must not be empty".to_string(),
            ));
        }
        if bot.platform == Platform::Telegram && params.external_id.is_empty() {
            return Err(AppError::BadRequest(
                "Telegram chats need the chat id as external id".to_string(),
            ));
        }

        Ok(ChatRepository::new(self.db).create(params).await?)
    }

    pub async fn get_chat(&self, id: i32) -> Result<Option<Chat>, AppError> {
        Ok(ChatRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn delete_chat(&self, id: i32) -> Result<bool, AppError> {
        Ok(ChatRepository::new(self.db).delete(id).await?)
    }

    /// Gets one page of the chats of a bot.
    ///
    /// # Returns
    /// - `Ok(Page<Chat>)` - Chats of the bot only, whatever filter keys the request carries
    /// - `Err(AppError::NotFound)` - No bot with that id
    pub async fn get_chats_paged(
        &self,
        chat_bot_id: i32,
        request: &PageRequest,
    ) -> Result<Page<Chat>, AppError> {
        if ChatBotRepository::new(self.db)
            .find_by_id(chat_bot_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Chat bot not found".to_string()));
        }

        let filter = NormalizedFilter::new().exact("chatBotId", chat_bot_id);

        Ok(ChatRepository::new(self.db)
            .get_paged(request, Some(&filter))
            .await?)
    }
}
