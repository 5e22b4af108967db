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
        series::{CreateSeriesDto, SeriesDto, UpdateSeriesDto},
    },
    server::{
        controller::PagingParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            paging::{PageRequest, QueryDescriptor},
            series::{CreateSeriesParams, UpdateSeriesParams},
        },
        service::{post::PostService, series::SeriesService},
        state::AppState,
    },
};

/// Tag for grouping series endpoints in OpenAPI documentation
pub static SERIES_TAG: &str = "series";

/// Create a new series. Requires `series:write`.
#[utoipa::path(
    post,
    path = "/api/series",
    tag = SERIES_TAG,
    request_body = CreateSeriesDto,
    responses(
        (status = 201, description = "Successfully created series", body = SeriesDto),
        (status = 400, description = "Invalid series data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Missing series:write permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_series(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateSeriesDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SeriesWrite])
        .await?;

    let series = SeriesService::new(&state.db)
        .create(CreateSeriesParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(series.into_dto())))
}

/// Get one page of series. Filterable and sortable fields: `id`, `name`.
#[utoipa::path(
    get,
    path = "/api/series",
    tag = SERIES_TAG,
    params(PagingParams),
    responses(
        (status = 200, description = "Page of series", body = PageDto<SeriesDto>),
        (status = 400, description = "Invalid paging parameters or filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_series(
    State(state): State<AppState>,
    Query(descriptor): Query<QueryDescriptor>,
) -> Result<impl IntoResponse, AppError> {
    let request = PageRequest::from_descriptor(descriptor)?;

    let page = SeriesService::new(&state.db).get_paged(&request).await?;

    Ok((StatusCode::OK, Json(page.into_dto(|series| series.into_dto()))))
}

#[utoipa::path(
    get,
    path = "/api/series/{series_id}",
    tag = SERIES_TAG,
    params(
        ("series_id" = i32, Path, description = "Series ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved series", body = SeriesDto),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_series_by_id(
    State(state): State<AppState>,
    Path(series_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let series = SeriesService::new(&state.db)
        .get_by_id(series_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Series not found".to_string()))?;

    Ok((StatusCode::OK, Json(series.into_dto())))
}

/// Update a series. Requires `series:write`.
#[utoipa::path(
    put,
    path = "/api/series/{series_id}",
    tag = SERIES_TAG,
    params(
        ("series_id" = i32, Path, description = "Series ID")
    ),
    request_body = UpdateSeriesDto,
    responses(
        (status = 200, description = "Successfully updated series", body = SeriesDto),
        (status = 400, description = "Invalid series data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Missing series:write permission", body = ErrorDto),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_series(
    State(state): State<AppState>,
    session: Session,
    Path(series_id): Path<i32>,
    Json(payload): Json<UpdateSeriesDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SeriesWrite])
        .await?;

    let series = SeriesService::new(&state.db)
        .update(UpdateSeriesParams::from_dto(series_id, payload))
        .await?
        .ok_or_else(|| AppError::NotFound("Series not found".to_string()))?;

    Ok((StatusCode::OK, Json(series.into_dto())))
}

/// Delete a series. Requires `series:write`; posts of the series lose their series.
#[utoipa::path(
    delete,
    path = "/api/series/{series_id}",
    tag = SERIES_TAG,
    params(
        ("series_id" = i32, Path, description = "Series ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted series"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Missing series:write permission", body = ErrorDto),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_series(
    State(state): State<AppState>,
    session: Session,
    Path(series_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SeriesWrite])
        .await?;

    if !SeriesService::new(&state.db).delete(series_id).await? {
        return Err(AppError::NotFound("Series not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Get one page of the posts of a series, ignoring filter keys of the query string.
#[utoipa::path(
    get,
    path = "/api/series/{series_id}/posts",
    tag = SERIES_TAG,
    params(
        ("series_id" = i32, Path, description = "Series ID"),
        PagingParams
    ),
    responses(
        (status = 200, description = "Page of posts", body = PageDto<PostDto>),
        (status = 400, description = "Invalid paging parameters", body = ErrorDto),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_series_posts(
    State(state): State<AppState>,
    Path(series_id): Path<i32>,
    Query(descriptor): Query<QueryDescriptor>,
) -> Result<impl IntoResponse, AppError> {
    let request = PageRequest::from_descriptor(descriptor)?;

    let page = PostService::new(&state.db)
        .get_paged_by_series(series_id, &request)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(|post| post.into_dto()))))
}
