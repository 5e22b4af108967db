use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, log::LogDto, paging::PageDto},
    server::{
        controller::PagingParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::paging::{PageRequest, QueryDescriptor},
        service::log::LogService,
        state::AppState,
    },
};

/// Tag for grouping log endpoints in OpenAPI documentation
pub static LOG_TAG: &str = "log";

/// Get one page of application log entries.
///
/// Filterable and sortable fields: `id`, `level`, `context`, `message`, `createdAt`.
///
/// # Access Control
/// - `LogRead` - Required to read the log
///
/// # Returns
/// - `200 OK` - Page of log entries
/// - `400 Bad Request` - Invalid paging parameters or filter
/// - `401 Unauthorized` - User not logged in
/// - `403 Forbidden` - User lacks `log:read`
#[utoipa::path(
    get,
    path = "/api/logs",
    tag = LOG_TAG,
    params(PagingParams),
    responses(
        (status = 200, description = "Page of log entries", body = PageDto<LogDto>),
        (status = 400, description = "Invalid paging parameters or filter", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Missing log:read permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_logs(
    State(state): State<AppState>,
    session: Session,
    Query(descriptor): Query<QueryDescriptor>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::LogRead])
        .await?;

    let request = PageRequest::from_descriptor(descriptor)?;
    let page = LogService::new(&state.db).get_paged(&request).await?;

    Ok((StatusCode::OK, Json(page.into_dto(|entry| entry.into_dto()))))
}
