use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, paging::PageDto},
    server::{
        controller::PagingParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::paging::{PageRequest, QueryDescriptor},
        service::admin::AdminService,
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// List the names of the collections that can be browsed.
///
/// # Access Control
/// - `Admin` - Only admins can browse collections
#[utoipa::path(
    get,
    path = "/api/admin/collections",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Registered collection names", body = Vec<String>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_collections(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let names = AdminService::new(&state.db, &state.registry).collections();

    Ok((StatusCode::OK, Json(names)))
}

/// Browse any registered collection by name.
///
/// Rows are returned as JSON objects keyed by database column name. Filter and sort keys
/// use the collection's API field names, the same as on the collection's own list route.
///
/// # Access Control
/// - `Admin` - Only admins can browse collections
///
/// # Arguments
/// - `state` - Application state containing the database connection and collection registry
/// - `session` - User's session for authentication
/// - `name` - Registered collection name (`posts`, `topics`, `series`, `logs`)
/// - `descriptor` - Paging, sort and filter keys from the query string
///
/// # Returns
/// - `200 OK` - Page of rows
/// - `400 Bad Request` - Invalid paging parameters or filter
/// - `401 Unauthorized` - User not logged in
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - No collection registered under that name
#[utoipa::path(
    get,
    path = "/api/admin/collections/{name}",
    tag = ADMIN_TAG,
    params(
        ("name" = String, Path, description = "Collection name"),
        PagingParams
    ),
    responses(
        (status = 200, description = "Page of rows", body = PageDto<serde_json::Value>),
        (status = 400, description = "Invalid paging parameters or filter", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Unknown collection", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn browse_collection(
    State(state): State<AppState>,
    session: Session,
    Path(name): Path<String>,
    Query(descriptor): Query<QueryDescriptor>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let request = PageRequest::from_descriptor(descriptor)?;
    let page = AdminService::new(&state.db, &state.registry)
        .browse(&name, &request)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(|row| row))))
}
