use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        chat_bot::{ChatBotDto, ChatDto, CreateChatBotDto, CreateChatDto, SendMessageDto},
        log::LogDto,
        paging::PageInfoDto,
        post::{CreatePostDto, PostDto, PostRefDto, UpdatePostDto},
        series::{CreateSeriesDto, SeriesDto, UpdateSeriesDto},
        topic::{CreateTopicDto, TopicDto, UpdateTopicDto},
        user::{CreateUserDto, LoginDto, PermissionsDto, UserDto},
    },
    server::{
        controller::{admin, auth, chat_bot, log, post, series, topic, user},
        error::{config::ConfigError, AppError},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "inkpress API"),
    paths(
        auth::login,
        auth::logout,
        auth::get_user,
        topic::create_topic,
        topic::get_topics,
        topic::get_topic_by_id,
        topic::update_topic,
        topic::delete_topic,
        topic::get_topic_posts,
        series::create_series,
        series::get_series,
        series::get_series_by_id,
        series::update_series,
        series::delete_series,
        series::get_series_posts,
        post::create_post,
        post::get_posts,
        post::get_post_by_id,
        post::update_post,
        post::delete_post,
        user::create_user,
        user::get_users,
        user::get_user_by_id,
        user::delete_user,
        user::get_user_permissions,
        user::set_user_permissions,
        chat_bot::create_chat_bot,
        chat_bot::get_chat_bots,
        chat_bot::delete_chat_bot,
        chat_bot::create_chat,
        chat_bot::get_chats,
        chat_bot::delete_chat,
        chat_bot::send_message,
        log::get_logs,
        admin::get_collections,
        admin::browse_collection,
    ),
    components(schemas(
        ErrorDto,
        PageInfoDto,
        LoginDto,
        UserDto,
        CreateUserDto,
        PermissionsDto,
        TopicDto,
        CreateTopicDto,
        UpdateTopicDto,
        SeriesDto,
        CreateSeriesDto,
        UpdateSeriesDto,
        PostDto,
        PostRefDto,
        CreatePostDto,
        UpdatePostDto,
        ChatBotDto,
        CreateChatBotDto,
        ChatDto,
        CreateChatDto,
        SendMessageDto,
        LogDto,
    ))
)]
pub struct ApiDoc;

/// Builds the API router with CORS and the OpenAPI documentation.
///
/// # Arguments
/// - `app_url` - Frontend origin allowed to make credentialed cross-origin requests
///
/// # Returns
/// - `Ok(Router)` - Router awaiting its `AppState`
/// - `Err(ConfigError::InvalidEnvVar)` - `app_url` is not a valid header value
pub fn router(app_url: &str) -> Result<Router<AppState>, AppError> {
    let origin = HeaderValue::from_str(app_url.trim_end_matches('/')).map_err(|e| {
        ConfigError::InvalidEnvVar {
            name: "APP_URL".to_string(),
            reason: e.to_string(),
        }
    })?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let router = Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route(
            "/api/topics",
            get(topic::get_topics).post(topic::create_topic),
        )
        .route(
            "/api/topics/{topic_id}",
            get(topic::get_topic_by_id)
                .put(topic::update_topic)
                .delete(topic::delete_topic),
        )
        .route("/api/topics/{topic_id}/posts", get(topic::get_topic_posts))
        .route(
            "/api/series",
            get(series::get_series).post(series::create_series),
        )
        .route(
            "/api/series/{series_id}",
            get(series::get_series_by_id)
                .put(series::update_series)
                .delete(series::delete_series),
        )
        .route(
            "/api/series/{series_id}/posts",
            get(series::get_series_posts),
        )
        .route("/api/posts", get(post::get_posts).post(post::create_post))
        .route(
            "/api/posts/{post_id}",
            get(post::get_post_by_id)
                .put(post::update_post)
                .delete(post::delete_post),
        )
        .route("/api/users", get(user::get_users).post(user::create_user))
        .route(
            "/api/users/{user_id}",
            get(user::get_user_by_id).delete(user::delete_user),
        )
        .route(
            "/api/users/{user_id}/permissions",
            get(user::get_user_permissions).put(user::set_user_permissions),
        )
        .route(
            "/api/chatbots",
            get(chat_bot::get_chat_bots).post(chat_bot::create_chat_bot),
        )
        .route(
            "/api/chatbots/{chat_bot_id}",
            delete(chat_bot::delete_chat_bot),
        )
        .route(
            "/api/chatbots/{chat_bot_id}/chats",
            get(chat_bot::get_chats).post(chat_bot::create_chat),
        )
        .route("/api/chats/{chat_id}", delete(chat_bot::delete_chat))
        .route(
            "/api/chats/{chat_id}/messages",
            post(chat_bot::send_message),
        )
        .route("/api/logs", get(log::get_logs))
        .route("/api/admin/collections", get(admin::get_collections))
        .route(
            "/api/admin/collections/{name}",
            get(admin::browse_collection),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(cors);

    Ok(router)
}
