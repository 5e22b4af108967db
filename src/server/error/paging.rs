use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

/// Failures of a paged query.
///
/// Caller faults (bad page bounds, fields outside a collection's schema, values that do not
/// fit the field type) map to 400, an unknown collection name maps to 404. Storage errors
/// are carried unchanged in `DbErr`.
#[derive(Error, Debug)]
pub enum PagingError {
    /// No collection is registered under the requested name.
    #[error("Unknown collection '{0}'")]
    UnknownCollection(String),

    /// `page` or `take` is missing a valid positive value or exceeds the allowed maximum.
    #[error("Invalid paging request: {0}")]
    InvalidRequest(String),

    /// A filter names a field the collection does not expose.
    #[error("Field '{field}' cannot be filtered in collection '{collection}'")]
    UnknownFilterField { collection: String, field: String },

    /// A `like__` filter targets a field that is not text.
    #[error("Field '{field}' does not support substring matching")]
    ContainsOnNonText { field: String },

    /// A filter value cannot be converted to the field's type.
    #[error("Invalid value '{value}' for field '{field}'")]
    InvalidFilterValue { field: String, value: String },

    /// `orderby` names a field the collection does not expose.
    #[error("Field '{field}' cannot be used to sort collection '{collection}'")]
    UnknownSortField { collection: String, field: String },

    /// Storage failure, propagated as-is.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts paging errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For `UnknownCollection`
/// - 500 Internal Server Error - For `DbErr`, logged server-side with a generic body
/// - 400 Bad Request - For every other variant, with the error message as body
impl IntoResponse for PagingError {
    fn into_response(self) -> Response {
        match self {
            Self::UnknownCollection(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::DbErr(err) => InternalServerError(err).into_response(),
            err => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
