//! Outbound messaging through chat bots.
//!
//! Building the platform request is pure (`build_request`) so the payload shape of each
//! platform can be checked without a network; `MessengerService` performs the dispatch with
//! the shared HTTP client and records the outcome in the application log.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serde_json::json;
use url::Url;

use crate::server::{
    data::{chat::ChatRepository, chat_bot::ChatBotRepository},
    error::{messenger::MessengerError, AppError},
    model::{
        chat_bot::{Chat, ChatBot, Platform},
        log::LogLevel,
    },
    service::log::LogService,
};

const TELEGRAM_API_URL: &str = "https://api.telegram.org";
const DISCORD_WEBHOOK_HOST: &str = "discord.com";
const DISCORD_WEBHOOK_PATH: &str = "/api/webhooks/";

/// Platform request ready to be posted as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingMessage {
    pub url: String,
    pub body: serde_json::Value,
}

/// Checks that a Discord bot token is a Discord webhook URL.
///
/// # Returns
/// - `Ok(Url)` - Parsed webhook URL
/// - `Err(MessengerError::InvalidWebhookUrl)` - Not `https://discord.com/api/webhooks/...`
pub fn validate_webhook_url(raw: &str) -> Result<Url, MessengerError> {
    let invalid = || MessengerError::InvalidWebhookUrl(raw.to_string());

    let url = Url::parse(raw).map_err(|_| invalid())?;

    if url.scheme() != "https"
        || url.host_str() != Some(DISCORD_WEBHOOK_HOST)
        || !url.path().starts_with(DISCORD_WEBHOOK_PATH)
        || url.path().len() <= DISCORD_WEBHOOK_PATH.len()
    {
        return Err(invalid());
    }

    Ok(url)
}

/// Builds the platform request delivering `text` to `chat` through `bot`.
///
/// # Returns
/// - `Ok(OutgoingMessage)` - Telegram `sendMessage` call or Discord webhook execution
/// - `Err(MessengerError::InvalidWebhookUrl)` - Discord bot with a malformed webhook URL
pub fn build_request(
    bot: &ChatBot,
    chat: &Chat,
    text: &str,
) -> Result<OutgoingMessage, MessengerError> {
    match bot.platform {
        Platform::Telegram => Ok(OutgoingMessage {
            url: format!("{}/bot{}/sendMessage", TELEGRAM_API_URL, bot.token),
            body: json!({
                "chat_id": chat.external_id,
                "text": text,
            }),
        }),
        Platform::Discord => {
            let url = validate_webhook_url(&bot.token)?;

            Ok(OutgoingMessage {
                url: url.to_string(),
                body: json!({ "content": text }),
            })
        }
    }
}

pub struct MessengerService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
}

impl<'a> MessengerService<'a> {
    /// Creates a new MessengerService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `http_client` - Shared HTTP client (configured without redirects)
    ///
    /// # Returns
    /// - `MessengerService` - New service instance
    pub fn new(db: &'a DatabaseConnection, http_client: &'a reqwest::Client) -> Self {
        Self { db, http_client }
    }

    /// Sends a text message to a chat through the chat's bot.
    ///
    /// Successful and rejected dispatches are both written to the application log.
    ///
    /// # Arguments
    /// - `chat_id` - Destination chat
    /// - `text` - Message text
    ///
    /// # Returns
    /// - `Ok(())` - The platform accepted the message
    /// - `Err(AppError::BadRequest)` - Empty text
    /// - `Err(AppError::NotFound)` - No chat with that id
    /// - `Err(AppError::MessengerErr(Rejected))` - Platform answered with a non-2xx status
    /// - `Err(AppError::ReqwestErr)` - Platform could not be reached
    pub async fn send_message(&self, chat_id: i32, text: &str) -> Result<(), AppError> {
        if text.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Message text must not be empty".to_string(),
            ));
        }

        let Some(chat) = ChatRepository::new(self.db).find_by_id(chat_id).await? else {
            return Err(AppError::NotFound("Chat not found".to_string()));
        };
        let Some(bot) = ChatBotRepository::new(self.db)
            .find_by_id(chat.chat_bot_id)
            .await?
        else {
            return Err(AppError::NotFound("Chat bot not found".to_string()));
        };
        let bot = ChatBot::from_entity(bot)?;

        let message = build_request(&bot, &chat, text)?;

        tracing::debug!(
            "Dispatching message to chat {} via {} bot {}",
            chat.id,
            bot.platform.as_str(),
            bot.id
        );

        let response = self
            .http_client
            .post(&message.url)
            .json(&message.body)
            .send()
            .await?;

        let status = response.status();
        let log = LogService::new(self.db);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            log.write(
                LogLevel::Warn,
                "messenger",
                &format!(
                    "{} rejected message to chat {} with status {}",
                    bot.platform.as_str(),
                    chat.id,
                    status.as_u16()
                ),
            )
            .await?;

            return Err(MessengerError::Rejected {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        log.write(
            LogLevel::Info,
            "messenger",
            &format!("Sent message to chat {} ({})", chat.id, chat.name),
        )
        .await?;

        Ok(())
    }
}
