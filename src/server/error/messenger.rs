use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum MessengerError {
    /// The bot's platform string is not one the gateway can dispatch to.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Unsupported messenger platform '{0}'")]
    UnsupportedPlatform(String),

    /// A Discord bot token is not a Discord webhook URL.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid Discord webhook URL: {0}")]
    InvalidWebhookUrl(String),

    /// The messenger API answered with a non-success status.
    ///
    /// Results in a 502 Bad Gateway response; the upstream body is only logged.
    #[error("Messenger API rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Converts messenger errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `UnsupportedPlatform` and `InvalidWebhookUrl`
/// - 502 Bad Gateway - For `Rejected`
impl IntoResponse for MessengerError {
    fn into_response(self) -> Response {
        match self {
            Self::Rejected { status, ref body } => {
                tracing::warn!("Messenger API returned {}: {}", status, body);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "The messenger platform rejected the message".to_string(),
                    }),
                )
                    .into_response()
            }
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
