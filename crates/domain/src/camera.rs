//! Camera status as reported by the recorder backend.
//!
//! The backend exposes a JSON object keyed by camera name. Each value is
//! normally a structured status (`{"state": "RECORDING", "lastChange": …}`),
//! but older deployments report a bare state string instead. Both decode into
//! [`CameraStatus`]; the bare form simply carries no timestamps.

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::time::{self, Timestamp};

/// Recording state of a single camera process.
///
/// Values outside the known set are preserved verbatim in [`Other`](Self::Other)
/// so the dashboard can still show what the backend said.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CameraState {
    Recording,
    Restarting,
    Stopped,
    #[default]
    Unknown,
    Other(String),
}

impl CameraState {
    /// Parse the backend's upper-case state name. Matching is exact.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "RECORDING" => Self::Recording,
            "RESTARTING" => Self::Restarting,
            "STOPPED" => Self::Stopped,
            "" | "UNKNOWN" => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }

    /// Label shown on the camera card.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Recording => "RECORDING",
            Self::Restarting => "RESTARTING",
            Self::Stopped => "STOPPED",
            Self::Unknown => "UNKNOWN",
            Self::Other(value) => value,
        }
    }
}

impl fmt::Display for CameraState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for CameraState {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<CameraState> for String {
    fn from(state: CameraState) -> Self {
        match state {
            CameraState::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

/// Status of one camera.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "WireStatus", rename_all = "camelCase")]
pub struct CameraStatus {
    pub state: CameraState,
    /// When `state` last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_change: Option<Timestamp>,
    /// When the recorder last closed a video segment (recording heartbeat).
    #[serde(rename = "lastSegmentTime", skip_serializing_if = "Option::is_none")]
    pub last_segment: Option<Timestamp>,
}

impl CameraStatus {
    /// Status with the given state and no timestamps.
    #[must_use]
    pub fn new(state: CameraState) -> Self {
        Self {
            state,
            last_change: None,
            last_segment: None,
        }
    }

    #[must_use]
    pub fn with_last_change(mut self, ts: Timestamp) -> Self {
        self.last_change = Some(ts);
        self
    }

    #[must_use]
    pub fn with_last_segment(mut self, ts: Timestamp) -> Self {
        self.last_segment = Some(ts);
        self
    }
}

/// Accepted encodings of a single status value.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireStatus {
    Bare(String),
    Detailed(WireDetails),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireDetails {
    #[serde(default)]
    state: Option<CameraState>,
    #[serde(default)]
    last_change: Option<WireTimestamp>,
    #[serde(default)]
    last_segment_time: Option<WireTimestamp>,
}

/// Epoch milliseconds or RFC 3339 text. Anything else is treated as absent.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireTimestamp {
    Millis(f64),
    Text(String),
    Unusable(IgnoredAny),
}

impl WireTimestamp {
    #[allow(clippy::cast_possible_truncation)]
    fn into_timestamp(self) -> Option<Timestamp> {
        match self {
            Self::Millis(millis) if millis.is_finite() => time::from_epoch_millis(millis as i64),
            Self::Text(text) => time::parse_rfc3339(&text),
            Self::Millis(_) | Self::Unusable(_) => None,
        }
    }
}

impl From<WireStatus> for CameraStatus {
    fn from(wire: WireStatus) -> Self {
        match wire {
            WireStatus::Bare(state) => Self::new(CameraState::parse(&state)),
            WireStatus::Detailed(details) => Self {
                state: details.state.unwrap_or_default(),
                last_change: details
                    .last_change
                    .and_then(WireTimestamp::into_timestamp),
                last_segment: details
                    .last_segment_time
                    .and_then(WireTimestamp::into_timestamp),
            },
        }
    }
}

/// A named camera and its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Camera {
    pub name: String,
    pub status: CameraStatus,
}

/// Camera name → status mapping, kept in the order the backend listed them.
///
/// Inserting an existing name replaces its status but keeps its position,
/// matching how a JSON object with a duplicated key is read in the browser.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CameraStatuses {
    cameras: Vec<Camera>,
}

impl CameraStatuses {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the status for `name`.
    pub fn insert(&mut self, name: impl Into<String>, status: CameraStatus) {
        let name = name.into();
        if let Some(existing) = self.cameras.iter_mut().find(|cam| cam.name == name) {
            existing.status = status;
        } else {
            self.cameras.push(Camera { name, status });
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CameraStatus> {
        self.cameras
            .iter()
            .find(|cam| cam.name == name)
            .map(|cam| &cam.status)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Camera> {
        self.cameras.iter()
    }

    /// Camera names in mapping order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cameras.iter().map(|cam| cam.name.as_str())
    }
}

impl<'a> IntoIterator for &'a CameraStatuses {
    type Item = &'a Camera;
    type IntoIter = std::slice::Iter<'a, Camera>;

    fn into_iter(self) -> Self::IntoIter {
        self.cameras.iter()
    }
}

impl<N: Into<String>> FromIterator<(N, CameraStatus)> for CameraStatuses {
    fn from_iter<I: IntoIterator<Item = (N, CameraStatus)>>(iter: I) -> Self {
        let mut statuses = Self::new();
        for (name, status) in iter {
            statuses.insert(name, status);
        }
        statuses
    }
}

impl Serialize for CameraStatuses {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cameras.len()))?;
        for cam in &self.cameras {
            map.serialize_entry(&cam.name, &cam.status)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CameraStatuses {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StatusesVisitor;

        impl<'de> Visitor<'de> for StatusesVisitor {
            type Value = CameraStatuses;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping camera names to statuses")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut statuses = CameraStatuses::new();
                while let Some((name, status)) = access.next_entry::<String, CameraStatus>()? {
                    statuses.insert(name, status);
                }
                Ok(statuses)
            }
        }

        deserializer.deserialize_map(StatusesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_known_states() {
        assert_eq!(CameraState::parse("RECORDING"), CameraState::Recording);
        assert_eq!(CameraState::parse("RESTARTING"), CameraState::Restarting);
        assert_eq!(CameraState::parse("STOPPED"), CameraState::Stopped);
        assert_eq!(CameraState::parse("UNKNOWN"), CameraState::Unknown);
    }

    #[test]
    fn should_keep_unrecognised_state_verbatim() {
        let state = CameraState::parse("recording");
        assert_eq!(state, CameraState::Other("recording".to_string()));
        assert_eq!(state.to_string(), "recording");
    }

    #[test]
    fn should_decode_structured_status_with_iso_timestamp() {
        let status: CameraStatus = serde_json::from_str(
            r#"{"state":"RECORDING","lastChange":"2024-05-01T12:30:00Z","lastSegmentTime":null}"#,
        )
        .unwrap();
        assert_eq!(status.state, CameraState::Recording);
        assert_eq!(
            status.last_change,
            time::parse_rfc3339("2024-05-01T12:30:00Z")
        );
        assert!(status.last_segment.is_none());
    }

    #[test]
    fn should_decode_epoch_millis_timestamp() {
        let status: CameraStatus =
            serde_json::from_str(r#"{"state":"STOPPED","lastChange":1714566600000}"#).unwrap();
        assert_eq!(
            status.last_change.map(|ts| ts.timestamp_millis()),
            Some(1_714_566_600_000)
        );
    }

    #[test]
    fn should_decode_bare_string_status() {
        let status: CameraStatus = serde_json::from_str(r#""RESTARTING""#).unwrap();
        assert_eq!(status, CameraStatus::new(CameraState::Restarting));
    }

    #[test]
    fn should_treat_missing_or_null_state_as_unknown() {
        let status: CameraStatus = serde_json::from_str(r#"{"state":null}"#).unwrap();
        assert_eq!(status.state, CameraState::Unknown);
        let status: CameraStatus = serde_json::from_str("{}").unwrap();
        assert_eq!(status.state, CameraState::Unknown);
    }

    #[test]
    fn should_drop_unusable_timestamps() {
        let status: CameraStatus =
            serde_json::from_str(r#"{"state":"STOPPED","lastChange":"not a date","lastSegmentTime":true}"#)
                .unwrap();
        assert!(status.last_change.is_none());
        assert!(status.last_segment.is_none());
    }

    #[test]
    fn should_preserve_document_order_of_cameras() {
        let statuses: CameraStatuses = serde_json::from_str(
            r#"{"garage":"STOPPED","porch":"RECORDING","attic":"RESTARTING"}"#,
        )
        .unwrap();
        let names: Vec<&str> = statuses.names().collect();
        assert_eq!(names, ["garage", "porch", "attic"]);
    }

    #[test]
    fn should_keep_first_position_and_last_value_for_duplicate_names() {
        let statuses: CameraStatuses =
            serde_json::from_str(r#"{"a":"STOPPED","b":"STOPPED","a":"RECORDING"}"#).unwrap();
        assert_eq!(statuses.len(), 2);
        assert_eq!(statuses.names().next(), Some("a"));
        assert_eq!(statuses.get("a").unwrap().state, CameraState::Recording);
    }

    #[test]
    fn should_decode_empty_mapping() {
        let statuses: CameraStatuses = serde_json::from_str("{}").unwrap();
        assert!(statuses.is_empty());
    }

    #[test]
    fn should_reject_non_object_mapping() {
        let result: Result<CameraStatuses, _> = serde_json::from_str(r#"["camera1"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn should_serialize_as_object_in_order() {
        let statuses: CameraStatuses = [
            ("b", CameraStatus::new(CameraState::Stopped)),
            ("a", CameraStatus::new(CameraState::Recording)),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&statuses).unwrap();
        assert_eq!(json, r#"{"b":{"state":"STOPPED"},"a":{"state":"RECORDING"}}"#);
    }
}
