//! Chat bot and chat domain models.
//!
//! A chat bot is one outbound messaging identity on a platform; a chat is a destination
//! the bot can post to.

use chrono::{DateTime, Utc};

use crate::{
    model::chat_bot::{ChatBotDto, ChatDto, CreateChatBotDto, CreateChatDto},
    server::error::{internal::InternalError, messenger::MessengerError, AppError},
};

/// Messaging platform a bot dispatches through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Telegram Bot API; the bot token authenticates requests.
    Telegram,
    /// Discord incoming webhook; the webhook URL is the credential.
    Discord,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Telegram => "telegram",
            Self::Discord => "discord",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "telegram" => Some(Self::Telegram),
            "discord" => Some(Self::Discord),
            _ => None,
        }
    }
}

/// Chat bot including its credential.
///
/// The token never leaves the server; `into_dto` drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatBot {
    pub id: i32,
    pub name: String,
    pub platform: Platform,
    /// Telegram bot token, or the webhook URL for Discord.
    pub token: String,
    pub created_at: DateTime<Utc>,
}

impl ChatBot {
    pub fn into_dto(self) -> ChatBotDto {
        ChatBotDto {
            id: self.id,
            name: self.name,
            platform: self.platform.as_str().to_string(),
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a chat bot domain model.
    ///
    /// # Returns
    /// - `Ok(ChatBot)` - Converted bot
    /// - `Err(AppError::InternalErr(UnknownStoredValue))` - Stored platform is unknown
    pub fn from_entity(entity: entity::chat_bot::Model) -> Result<Self, AppError> {
        let platform =
            Platform::parse(&entity.platform).ok_or(InternalError::UnknownStoredValue {
                field: "platform",
                value: entity.platform,
            })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            platform,
            token: entity.token,
            created_at: entity.created_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chat {
    pub id: i32,
    pub chat_bot_id: i32,
    pub name: String,
    /// Telegram chat ID; empty for Discord webhooks.
    pub external_id: String,
    pub created_at: DateTime<Utc>,
}

impl Chat {
    pub fn into_dto(self) -> ChatDto {
        ChatDto {
            id: self.id,
            chat_bot_id: self.chat_bot_id,
            name: self.name,
            external_id: self.external_id,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::chat::Model) -> Self {
        Self {
            id: entity.id,
            chat_bot_id: entity.chat_bot_id,
            name: entity.name,
            external_id: entity.external_id,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateChatBotParams {
    pub name: String,
    pub platform: Platform,
    pub token: String,
}

impl CreateChatBotParams {
    /// Converts a creation DTO, validating the platform name.
    ///
    /// # Returns
    /// - `Ok(CreateChatBotParams)` - Converted parameters
    /// - `Err(AppError::MessengerErr(UnsupportedPlatform))` - Unknown platform
    pub fn from_dto(dto: CreateChatBotDto) -> Result<Self, AppError> {
        let platform = Platform::parse(&dto.platform)
            .ok_or_else(|| MessengerError::UnsupportedPlatform(dto.platform.clone()))?;

        Ok(Self {
            name: dto.name,
            platform,
            token: dto.token,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateChatParams {
    pub chat_bot_id: i32,
    pub name: String,
    pub external_id: String,
}

impl CreateChatParams {
    pub fn from_dto(chat_bot_id: i32, dto: CreateChatDto) -> Self {
        Self {
            chat_bot_id,
            name: dto.name,
            external_id: dto.external_id,
        }
    }
}
