//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.

/// Top-level error for everything the dashboard client can run into.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// The request never produced a response (DNS, connection refused, CORS, …).
    #[error("network request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    /// The backend answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// The response body was not the JSON shape we expected.
    #[error("malformed response from {url}: {reason}")]
    Decode { url: String, reason: String },

    /// A required element is absent from the host page.
    #[error("render target `#{0}` is missing from the page")]
    MissingTarget(&'static str),

    #[error("validation error")]
    Validation(#[from] ValidationError),
}

/// Invariant violations detected before any IO happens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("camera name must not be empty")]
    EmptyCameraName,

    #[error("invalid API base URL `{0}`: expected an absolute http(s) URL")]
    InvalidBaseUrl(String),

    #[error("refresh interval must be greater than zero")]
    ZeroRefreshInterval,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_dashboard_error() {
        let err: DashboardError = ValidationError::EmptyCameraName.into();
        assert!(matches!(
            err,
            DashboardError::Validation(ValidationError::EmptyCameraName)
        ));
    }

    #[test]
    fn should_mention_status_and_url_in_message() {
        let err = DashboardError::Status {
            status: 503,
            url: "/cameras".to_string(),
        };
        assert_eq!(err.to_string(), "unexpected HTTP status 503 from /cameras");
    }

    #[test]
    fn should_name_missing_target() {
        let err = DashboardError::MissingTarget("disk");
        assert_eq!(err.to_string(), "render target `#disk` is missing from the page");
    }
}
