//! HTTP request handlers.
//!
//! Handlers check access through `AuthGuard`, convert DTOs into params, call one service and
//! convert the result back into DTOs. List handlers take the raw query string as a
//! `QueryDescriptor` and answer with the uniform `PageDto` envelope.

pub mod admin;
pub mod auth;
pub mod chat_bot;
pub mod log;
pub mod post;
pub mod series;
pub mod topic;
pub mod user;

use utoipa::IntoParams;

/// Reserved query keys shared by every list endpoint, for OpenAPI documentation.
///
/// Besides these, list endpoints accept `where__<field>` (exact match) and `like__<field>`
/// (substring match) keys for the fields each collection exposes.
#[derive(IntoParams)]
#[into_params(parameter_in = Query)]
#[allow(dead_code)]
pub struct PagingParams {
    /// Page number, starting at 1 (default: 1)
    page: Option<u64>,
    /// Items per page, 1 to 100 (default: 10)
    take: Option<u64>,
    /// Field to sort by (default: id)
    orderby: Option<String>,
    /// `asc` or `desc` (default: desc)
    direction: Option<String>,
}
