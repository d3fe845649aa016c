//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// JSON error body returned when a proxied request cannot be completed.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Failures of the backend proxy.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The configured backend URL cannot be used.
    #[error("invalid backend URL `{0}`")]
    InvalidUrl(String),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The backend could not be reached or the response broke off.
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The proxied response could not be assembled.
    #[error("failed to build proxied response")]
    Response(#[from] axum::http::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "proxy error");
        let status = match &self {
            Self::Upstream(err) if err.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::BAD_GATEWAY,
        };
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
