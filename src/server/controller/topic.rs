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
        paging::PageDto,
        post::PostDto,
        topic::{CreateTopicDto, TopicDto, UpdateTopicDto},
    },
    server::{
        controller::PagingParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            paging::{PageRequest, QueryDescriptor},
            topic::{CreateTopicParams, UpdateTopicParams},
        },
        service::{post::PostService, topic::TopicService},
        state::AppState,
    },
};

/// Tag for grouping topic endpoints in OpenAPI documentation
pub static TOPIC_TAG: &str = "topic";

/// Create a new topic.
///
/// # Access Control
/// - `TopicWrite` - Required to create topics
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Topic name and description
///
/// # Returns
/// - `201 Created` - The created topic
/// - `400 Bad Request` - Empty or duplicate name
/// - `401 Unauthorized` - User not logged in
/// - `403 Forbidden` - User lacks `topic:write`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/topics",
    tag = TOPIC_TAG,
    request_body = CreateTopicDto,
    responses(
        (status = 201, description = "Successfully created topic", body = TopicDto),
        (status = 400, description = "Invalid topic data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Missing topic:write permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_topic(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTopicDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TopicWrite])
        .await?;

    let topic = TopicService::new(&state.db)
        .create(CreateTopicParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(topic.into_dto())))
}

/// Get one page of topics.
///
/// Filterable and sortable fields: `id`, `name`.
///
/// # Returns
/// - `200 OK` - Page of topics
/// - `400 Bad Request` - Invalid paging parameters or filter
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/topics",
    tag = TOPIC_TAG,
    params(PagingParams),
    responses(
        (status = 200, description = "Page of topics", body = PageDto<TopicDto>),
        (status = 400, description = "Invalid paging parameters or filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_topics(
    State(state): State<AppState>,
    Query(descriptor): Query<QueryDescriptor>,
) -> Result<impl IntoResponse, AppError> {
    let request = PageRequest::from_descriptor(descriptor)?;

    let page = TopicService::new(&state.db).get_paged(&request).await?;

    Ok((StatusCode::OK, Json(page.into_dto(|topic| topic.into_dto()))))
}

/// Get a topic by id.
///
/// # Returns
/// - `200 OK` - The topic
/// - `404 Not Found` - No topic with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/topics/{topic_id}",
    tag = TOPIC_TAG,
    params(
        ("topic_id" = i32, Path, description = "Topic ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved topic", body = TopicDto),
        (status = 404, description = "Topic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_topic_by_id(
    State(state): State<AppState>,
    Path(topic_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let topic = TopicService::new(&state.db)
        .get_by_id(topic_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Topic not found".to_string()))?;

    Ok((StatusCode::OK, Json(topic.into_dto())))
}

/// Update a topic.
///
/// # Access Control
/// - `TopicWrite` - Required to update topics
///
/// # Returns
/// - `200 OK` - The updated topic
/// - `400 Bad Request` - Empty name or name used by another topic
/// - `404 Not Found` - No topic with that id
#[utoipa::path(
    put,
    path = "/api/topics/{topic_id}",
    tag = TOPIC_TAG,
    params(
        ("topic_id" = i32, Path, description = "Topic ID")
    ),
    request_body = UpdateTopicDto,
    responses(
        (status = 200, description = "Successfully updated topic", body = TopicDto),
        (status = 400, description = "Invalid topic data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Missing topic:write permission", body = ErrorDto),
        (status = 404, description = "Topic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_topic(
    State(state): State<AppState>,
    session: Session,
    Path(topic_id): Path<i32>,
    Json(payload): Json<UpdateTopicDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TopicWrite])
        .await?;

    let topic = TopicService::new(&state.db)
        .update(UpdateTopicParams::from_dto(topic_id, payload))
        .await?
        .ok_or_else(|| AppError::NotFound("Topic not found".to_string()))?;

    Ok((StatusCode::OK, Json(topic.into_dto())))
}

/// Delete a topic.
///
/// Posts filed under the topic are kept and lose their topic.
///
/// # Access Control
/// - `TopicWrite` - Required to delete topics
///
/// # Returns
/// - `204 No Content` - Topic deleted
/// - `404 Not Found` - No topic with that id
#[utoipa::path(
    delete,
    path = "/api/topics/{topic_id}",
    tag = TOPIC_TAG,
    params(
        ("topic_id" = i32, Path, description = "Topic ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted topic"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Missing topic:write permission", body = ErrorDto),
        (status = 404, description = "Topic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_topic(
    State(state): State<AppState>,
    session: Session,
    Path(topic_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TopicWrite])
        .await?;

    if !TopicService::new(&state.db).delete(topic_id).await? {
        return Err(AppError::NotFound("Topic not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Get one page of the posts filed under a topic.
///
/// Filter keys of the query string are ignored; sorting and paging apply as usual.
///
/// # Returns
/// - `200 OK` - Page of posts
/// - `404 Not Found` - No topic with that id
#[utoipa::path(
    get,
    path = "/api/topics/{topic_id}/posts",
    tag = TOPIC_TAG,
    params(
        ("topic_id" = i32, Path, description = "Topic ID"),
        PagingParams
    ),
    responses(
        (status = 200, description = "Page of posts", body = PageDto<PostDto>),
        (status = 400, description = "Invalid paging parameters", body = ErrorDto),
        (status = 404, description = "Topic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_topic_posts(
    State(state): State<AppState>,
    Path(topic_id): Path<i32>,
    Query(descriptor): Query<QueryDescriptor>,
) -> Result<impl IntoResponse, AppError> {
    let request = PageRequest::from_descriptor(descriptor)?;

    let page = PostService::new(&state.db)
        .get_paged_by_topic(topic_id, &request)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(|post| post.into_dto()))))
}
