use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing configuration: {0}")]
    MissingConfig(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("rate limit: {0}")]
    RateLimit(String),
    #[error("upstream returned status {status}: {message}")]
    UpstreamStatus { status: u16, message: String },
    #[error("upstream schema changed: {0}")]
    UpstreamSchema(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingConfig(_) => "MISSING_CONFIG",
            Self::Network(_) => "NETWORK",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::RateLimit(_) => "RATE_LIMIT",
            Self::UpstreamStatus { .. } => "UPSTREAM_STATUS",
            Self::UpstreamSchema(_) => "UPSTREAM_SCHEMA",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(value: reqwest::Error) -> Self {
        // Request URLs carry the API key as a query parameter.
        let value = value.without_url();
        match value.status() {
            Some(reqwest::StatusCode::UNAUTHORIZED) | Some(reqwest::StatusCode::FORBIDDEN) => {
                Self::Unauthorized(value.to_string())
            }
            Some(reqwest::StatusCode::TOO_MANY_REQUESTS) => Self::RateLimit(value.to_string()),
            Some(status) => Self::UpstreamStatus {
                status: status.as_u16(),
                message: value.to_string(),
            },
            None if value.is_decode() => Self::UpstreamSchema(value.to_string()),
            None => Self::Network(value.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::UpstreamSchema(value.to_string())
    }
}

/// What a handler tells the client when the pipeline fails.
///
/// The cause is logged where the [`AppError`] is collapsed into one of
/// these. The client only ever sees the fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Could not find games")]
    GamesNotFound,
    #[error("Could not find top games")]
    TopGamesNotFound,
    #[error("Could not find game genres")]
    GenresNotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}
