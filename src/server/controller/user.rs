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
        user::{CreateUserDto, PermissionsDto, UserDto},
    },
    server::{
        controller::PagingParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            paging::{PageRequest, QueryDescriptor},
            user::CreateUserParams,
        },
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Create a user account.
///
/// # Access Control
/// - `UserWrite` - Required to create users
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Username, display name, password and initial permissions
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Empty or taken username, empty password, or unknown permission
/// - `401 Unauthorized` - User not logged in
/// - `403 Forbidden` - User lacks `user:write`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Missing user:write permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::UserWrite])
        .await?;

    let params = CreateUserParams::from_dto(payload)?;
    let profile = UserService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(profile.into_dto())))
}

/// Get one page of users with their permissions.
///
/// Filterable and sortable fields: `id`, `username`, `displayName`.
///
/// # Access Control
/// - `UserRead` - Required to list users
///
/// # Returns
/// - `200 OK` - Page of users
/// - `400 Bad Request` - Invalid paging parameters or filter
/// - `401 Unauthorized` - User not logged in
/// - `403 Forbidden` - User lacks `user:read`
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(PagingParams),
    responses(
        (status = 200, description = "Page of users", body = PageDto<UserDto>),
        (status = 400, description = "Invalid paging parameters or filter", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Missing user:read permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(descriptor): Query<QueryDescriptor>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::UserRead])
        .await?;

    let request = PageRequest::from_descriptor(descriptor)?;
    let page = UserService::new(&state.db).get_paged(&request).await?;

    Ok((StatusCode::OK, Json(page.into_dto(|profile| profile.into_dto()))))
}

/// Get a user by id. Requires `user:read`.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Missing user:read permission", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::UserRead])
        .await?;

    let profile = UserService::new(&state.db)
        .get_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Delete a user together with their permissions and posts. Requires `user:write`.
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted user"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Missing user:write permission", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::UserWrite])
        .await?;

    if !UserService::new(&state.db).delete(user_id).await? {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Get the permissions of a user. Requires `user:read`.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/permissions",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Permissions of the user", body = PermissionsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Missing user:read permission", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_permissions(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::UserRead])
        .await?;

    let profile = UserService::new(&state.db)
        .get_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(PermissionsDto {
            permissions: profile.permissions.to_strings(),
        }),
    ))
}

/// Replace the permissions of a user.
///
/// The request body is the complete new set; duplicates are collapsed.
///
/// # Access Control
/// - `UserWrite` - Required to change permissions
///
/// # Returns
/// - `200 OK` - The new permission set
/// - `400 Bad Request` - Unknown permission string
/// - `404 Not Found` - No user with that id
#[utoipa::path(
    put,
    path = "/api/users/{user_id}/permissions",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = PermissionsDto,
    responses(
        (status = 200, description = "Permissions replaced", body = PermissionsDto),
        (status = 400, description = "Unknown permission", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Missing user:write permission", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_user_permissions(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(payload): Json<PermissionsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::UserWrite])
        .await?;

    let permissions = Permission::parse_all(&payload.permissions)?;

    let set = UserService::new(&state.db)
        .set_permissions(user_id, permissions)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(PermissionsDto {
            permissions: set.to_strings(),
        }),
    ))
}
