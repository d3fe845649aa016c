//! Health report returned by `GET /health`.

use serde::{Deserialize, Serialize};

use crate::camera::CameraStatuses;

/// System health snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    /// Free space on the recordings volume, 0–100.
    pub disk_free_percent: f64,
    /// Camera statuses, when the backend embeds them in the health report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cameras: Option<CameraStatuses>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraState;

    #[test]
    fn should_decode_report_without_cameras() {
        let report: HealthReport = serde_json::from_str(r#"{"diskFreePercent":42}"#).unwrap();
        assert!((report.disk_free_percent - 42.0).abs() < f64::EPSILON);
        assert!(report.cameras.is_none());
    }

    #[test]
    fn should_decode_embedded_cameras() {
        let report: HealthReport = serde_json::from_str(
            r#"{"diskFreePercent":87.5,"cameras":{"camera1":{"state":"RECORDING","lastChange":"2024-05-01T12:00:00Z"}}}"#,
        )
        .unwrap();
        let cameras = report.cameras.unwrap();
        assert_eq!(cameras.get("camera1").unwrap().state, CameraState::Recording);
    }

    #[test]
    fn should_reject_report_without_disk_percent() {
        let result: Result<HealthReport, _> = serde_json::from_str(r#"{"cameras":{}}"#);
        assert!(result.is_err());
    }
}
