use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatBotDto {
    pub id: i32,
    pub name: String,
    pub platform: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateChatBotDto {
    pub name: String,
    /// `telegram` or `discord`
    pub platform: String,
    /// Telegram bot token, or the webhook URL for Discord bots.
    pub token: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatDto {
    pub id: i32,
    pub chat_bot_id: i32,
    pub name: String,
    pub external_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateChatDto {
    pub name: String,
    /// Telegram chat ID; left empty for Discord webhooks.
    #[serde(default)]
    pub external_id: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SendMessageDto {
    pub text: String,
}
