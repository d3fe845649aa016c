//! URL layout of the recorder backend API.

use std::fmt;

use crate::error::ValidationError;

/// A command the dashboard can send to a camera process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraCommand {
    Start,
    Stop,
}

impl CameraCommand {
    /// Path segment used by the backend for this command.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
        }
    }
}

impl fmt::Display for CameraCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds backend URLs relative to an optional absolute origin.
///
/// An empty base means same-origin: every URL is an absolute path such as
/// `/health`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiEndpoints {
    base: String,
}

impl ApiEndpoints {
    /// Endpoints on the page's own origin.
    #[must_use]
    pub fn same_origin() -> Self {
        Self::default()
    }

    /// Endpoints rooted at `base`.
    ///
    /// A blank `base` yields [`same_origin`](Self::same_origin). Trailing
    /// slashes are dropped so `http://pi:8080/` and `http://pi:8080` are equal.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidBaseUrl`] unless `base` is blank or an
    /// absolute `http://` / `https://` URL with a host.
    pub fn new(base: &str) -> Result<Self, ValidationError> {
        let trimmed = base.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(Self::same_origin());
        }
        let rest = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"));
        match rest {
            Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(Self {
                base: trimmed.to_string(),
            }),
            _ => Err(ValidationError::InvalidBaseUrl(base.to_string())),
        }
    }

    /// The configured origin, empty for same-origin.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn is_same_origin(&self) -> bool {
        self.base.is_empty()
    }

    /// `GET /health`
    #[must_use]
    pub fn health(&self) -> String {
        format!("{}/health", self.base)
    }

    /// `GET /cameras`
    #[must_use]
    pub fn cameras(&self) -> String {
        format!("{}/cameras", self.base)
    }

    /// `GET /live/{camera}`: snapshot or MJPEG stream for an `<img>`.
    #[must_use]
    pub fn live(&self, camera: &str) -> String {
        format!("{}/live/{}", self.base, encode_path_segment(camera))
    }

    /// `GET /camera/{camera}/{start|stop}`
    #[must_use]
    pub fn command(&self, camera: &str, command: CameraCommand) -> String {
        format!(
            "{}/camera/{}/{}",
            self.base,
            encode_path_segment(camera),
            command.as_str()
        )
    }
}

/// Percent-encode everything outside the RFC 3986 unreserved set so a camera
/// name always stays a single path segment.
fn encode_path_segment(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_relative_urls_for_same_origin() {
        let api = ApiEndpoints::same_origin();
        assert_eq!(api.health(), "/health");
        assert_eq!(api.cameras(), "/cameras");
        assert_eq!(api.live("camera1"), "/live/camera1");
        assert_eq!(
            api.command("camera1", CameraCommand::Start),
            "/camera/camera1/start"
        );
        assert_eq!(
            api.command("camera1", CameraCommand::Stop),
            "/camera/camera1/stop"
        );
    }

    #[test]
    fn should_prefix_absolute_origin_and_trim_trailing_slash() {
        let api = ApiEndpoints::new("http://192.168.1.10:8080/").unwrap();
        assert_eq!(api.base(), "http://192.168.1.10:8080");
        assert_eq!(api.health(), "http://192.168.1.10:8080/health");
        assert!(!api.is_same_origin());
    }

    #[test]
    fn should_treat_blank_base_as_same_origin() {
        let api = ApiEndpoints::new("  ").unwrap();
        assert!(api.is_same_origin());
    }

    #[test]
    fn should_reject_relative_or_schemeless_base() {
        assert!(matches!(
            ApiEndpoints::new("pi.local:8080"),
            Err(ValidationError::InvalidBaseUrl(_))
        ));
        assert!(ApiEndpoints::new("ftp://pi.local").is_err());
        assert!(ApiEndpoints::new("http://").is_err());
    }

    #[test]
    fn should_encode_camera_name_as_single_segment() {
        let api = ApiEndpoints::same_origin();
        assert_eq!(api.live("front door/2"), "/live/front%20door%2F2");
        assert_eq!(api.live("café"), "/live/caf%C3%A9");
    }
}
