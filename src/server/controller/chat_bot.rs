use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        chat_bot::{ChatBotDto, ChatDto, CreateChatBotDto, CreateChatDto, SendMessageDto},
        paging::PageDto,
    },
    server::{
        controller::PagingParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            chat_bot::{CreateChatBotParams, CreateChatParams},
            paging::{PageRequest, QueryDescriptor},
        },
        service::{chat_bot::ChatBotService, messenger::MessengerService},
        state::AppState,
    },
};

/// Tag for grouping chat bot endpoints in OpenAPI documentation
pub static CHAT_BOT_TAG: &str = "chatbot";

/// Register a chat bot.
///
/// For Telegram the token is the bot token, for Discord it is the webhook URL. The token is
/// never returned by any endpoint.
///
/// # Access Control
/// - `ChatbotWrite` - Required to manage chat bots
///
/// # Returns
/// - `201 Created` - The registered bot
/// - `400 Bad Request` - Unknown platform, empty fields, or invalid Discord webhook URL
/// - `401 Unauthorized` - User not logged in
/// - `403 Forbidden` - User lacks `chatbot:write`
#[utoipa::path(
    post,
    path = "/api/chatbots",
    tag = CHAT_BOT_TAG,
    request_body = CreateChatBotDto,
    responses(
        (status = 201, description = "Successfully registered chat bot", body = ChatBotDto),
        (status = 400, description = "Invalid chat bot data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Missing chatbot:write permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_chat_bot(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateChatBotDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChatbotWrite])
        .await?;

    let params = CreateChatBotParams::from_dto(payload)?;
    let bot = ChatBotService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(bot.into_dto())))
}

/// Get one page of chat bots. Filterable fields: `id`, `name`, `platform`.
#[utoipa::path(
    get,
    path = "/api/chatbots",
    tag = CHAT_BOT_TAG,
    params(PagingParams),
    responses(
        (status = 200, description = "Page of chat bots", body = PageDto<ChatBotDto>),
        (status = 400, description = "Invalid paging parameters or filter", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Missing chatbot:write permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_chat_bots(
    State(state): State<AppState>,
    session: Session,
    Query(descriptor): Query<QueryDescriptor>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChatbotWrite])
        .await?;

    let request = PageRequest::from_descriptor(descriptor)?;
    let page = ChatBotService::new(&state.db).get_paged(&request).await?;

    Ok((StatusCode::OK, Json(page.into_dto(|bot| bot.into_dto()))))
}

/// Delete a chat bot and all of its chats.
#[utoipa::path(
    delete,
    path = "/api/chatbots/{chat_bot_id}",
    tag = CHAT_BOT_TAG,
    params(
        ("chat_bot_id" = i32, Path, description = "Chat bot ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted chat bot"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Missing chatbot:write permission", body = ErrorDto),
        (status = 404, description = "Chat bot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_chat_bot(
    State(state): State<AppState>,
    session: Session,
    Path(chat_bot_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChatbotWrite])
        .await?;

    if !ChatBotService::new(&state.db).delete(chat_bot_id).await? {
        return Err(AppError::NotFound("Chat bot not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Add a chat to a bot.
///
/// # Access Control
/// - `ChatbotWrite` - Required to manage chats
///
/// # Returns
/// - `201 Created` - The created chat
/// - `400 Bad Request` - Empty name, or Telegram chat without external id
/// - `404 Not Found` - No bot with that id
#[utoipa::path(
    post,
    path = "/api/chatbots/{chat_bot_id}/chats",
    tag = CHAT_BOT_TAG,
    params(
        ("chat_bot_id" = i32, Path, description = "Chat bot ID")
    ),
    request_body = CreateChatDto,
    responses(
        (status = 201, description = "Successfully created chat", body = ChatDto),
        (status = 400, description = "Invalid chat data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Missing chatbot:write permission", body = ErrorDto),
        (status = 404, description = "Chat bot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_chat(
    State(state): State<AppState>,
    session: Session,
    Path(chat_bot_id): Path<i32>,
    Json(payload): Json<CreateChatDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChatbotWrite])
        .await?;

    let chat = ChatBotService::new(&state.db)
        .create_chat(CreateChatParams::from_dto(chat_bot_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(chat.into_dto())))
}

/// Get one page of the chats of a bot.
///
/// Filter keys of the query string are ignored; the listing is always limited to the bot.
///
/// # Returns
/// - `200 OK` - Page of chats
/// - `404 Not Found` - No bot with that id
#[utoipa::path(
    get,
    path = "/api/chatbots/{chat_bot_id}/chats",
    tag = CHAT_BOT_TAG,
    params(
        ("chat_bot_id" = i32, Path, description = "Chat bot ID"),
        PagingParams
    ),
    responses(
        (status = 200, description = "Page of chats", body = PageDto<ChatDto>),
        (status = 400, description = "Invalid paging parameters", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Missing chatbot:write permission", body = ErrorDto),
        (status = 404, description = "Chat bot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_chats(
    State(state): State<AppState>,
    session: Session,
    Path(chat_bot_id): Path<i32>,
    Query(descriptor): Query<QueryDescriptor>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChatbotWrite])
        .await?;

    let request = PageRequest::from_descriptor(descriptor)?;
    let page = ChatBotService::new(&state.db)
        .get_chats_paged(chat_bot_id, &request)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(|chat| chat.into_dto()))))
}

#[utoipa::path(
    delete,
    path = "/api/chats/{chat_id}",
    tag = CHAT_BOT_TAG,
    params(
        ("chat_id" = i32, Path, description = "Chat ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted chat"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Missing chatbot:write permission", body = ErrorDto),
        (status = 404, description = "Chat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_chat(
    State(state): State<AppState>,
    session: Session,
    Path(chat_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChatbotWrite])
        .await?;

    if !ChatBotService::new(&state.db).delete_chat(chat_id).await? {
        return Err(AppError::NotFound("Chat not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Send a text message to a chat.
///
/// # Access Control
/// - `ChatbotSend` - Required to dispatch messages
///
/// # Arguments
/// - `state` - Application state containing the database connection and HTTP client
/// - `session` - User's session for authentication
/// - `chat_id` - Destination chat
/// - `payload` - Message text
///
/// # Returns
/// - `204 No Content` - The platform accepted the message
/// - `400 Bad Request` - Empty text
/// - `404 Not Found` - No chat with that id
/// - `502 Bad Gateway` - The platform rejected the message
#[utoipa::path(
    post,
    path = "/api/chats/{chat_id}/messages",
    tag = CHAT_BOT_TAG,
    params(
        ("chat_id" = i32, Path, description = "Chat ID")
    ),
    request_body = SendMessageDto,
    responses(
        (status = 204, description = "Message sent"),
        (status = 400, description = "Empty message text", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Missing chatbot:send permission", body = ErrorDto),
        (status = 404, description = "Chat not found", body = ErrorDto),
        (status = 502, description = "Messenger platform rejected the message", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    session: Session,
    Path(chat_id): Path<i32>,
    Json(payload): Json<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChatbotSend])
        .await?;

    MessengerService::new(&state.db, &state.http_client)
        .send_message(chat_id, &payload.text)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
