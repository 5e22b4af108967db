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
        post::{CreatePostDto, PostDto, UpdatePostDto},
    },
    server::{
        controller::PagingParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            paging::{PageRequest, QueryDescriptor},
            post::{CreatePostParams, UpdatePostParams},
        },
        service::post::PostService,
        state::AppState,
    },
};

/// Tag for grouping post endpoints in OpenAPI documentation
pub static POST_TAG: &str = "post";

/// Create a new post.
///
/// The logged-in user becomes the author.
///
/// # Access Control
/// - `PostWrite` - Required to create posts
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Title, slug, body, publication flag and optional topic/series
///
/// # Returns
/// - `201 Created` - The created post with topic and series names
/// - `400 Bad Request` - Empty title or slug, slug taken, or unknown topic/series
/// - `401 Unauthorized` - User not logged in
/// - `403 Forbidden` - User lacks `post:write`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = POST_TAG,
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Successfully created post", body = PostDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Missing post:write permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let author = AuthGuard::new(&state.db, &session)
        .require(&[Permission::PostWrite])
        .await?;

    let post = PostService::new(&state.db)
        .create(CreatePostParams::from_dto(author.user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(post.into_dto())))
}

/// Get one page of posts.
///
/// Filterable and sortable fields: `id`, `title`, `slug`, `published`, `topicId`,
/// `seriesId`, `authorId`, `createdAt`. Each post carries its topic and series name.
///
/// # Returns
/// - `200 OK` - Page of posts
/// - `400 Bad Request` - Invalid paging parameters or filter
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = POST_TAG,
    params(PagingParams),
    responses(
        (status = 200, description = "Page of posts", body = PageDto<PostDto>),
        (status = 400, description = "Invalid paging parameters or filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_posts(
    State(state): State<AppState>,
    Query(descriptor): Query<QueryDescriptor>,
) -> Result<impl IntoResponse, AppError> {
    let request = PageRequest::from_descriptor(descriptor)?;

    let page = PostService::new(&state.db).get_paged(&request).await?;

    Ok((StatusCode::OK, Json(page.into_dto(|post| post.into_dto()))))
}

/// Get a post by id.
///
/// # Returns
/// - `200 OK` - The post
/// - `404 Not Found` - No post with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}",
    tag = POST_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved post", body = PostDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post_by_id(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let post = PostService::new(&state.db)
        .get_by_id(post_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// Replace the content of a post.
///
/// # Access Control
/// - `PostWrite` - Required to update posts
///
/// # Returns
/// - `200 OK` - The updated post
/// - `400 Bad Request` - Invalid post data
/// - `404 Not Found` - No post with that id
#[utoipa::path(
    put,
    path = "/api/posts/{post_id}",
    tag = POST_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Successfully updated post", body = PostDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Missing post:write permission", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_post(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
    Json(payload): Json<UpdatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::PostWrite])
        .await?;

    let post = PostService::new(&state.db)
        .update(UpdatePostParams::from_dto(post_id, payload))
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// Delete a post.
///
/// # Access Control
/// - `PostWrite` - Required to delete posts
///
/// # Returns
/// - `204 No Content` - Post deleted
/// - `404 Not Found` - No post with that id
#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}",
    tag = POST_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted post"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Missing post:write permission", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::PostWrite])
        .await?;

    if !PostService::new(&state.db).delete(post_id).await? {
        return Err(AppError::NotFound("Post not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
