//! View models: what the dashboard shows, independent of how it is drawn.
//!
//! Building these is pure: the same input always yields an equal model, so a
//! view can skip redrawing when nothing changed.

use chrono::{Local, TimeZone};

use crate::camera::{Camera, CameraState, CameraStatuses};
use crate::endpoint::ApiEndpoints;
use crate::health::HealthReport;
use crate::time::{self, Timestamp};

/// Id of the host-page element that receives the disk gauge.
pub const DISK_TARGET_ID: &str = "disk";

/// Id of the host-page element that receives the camera grid.
pub const CAMERAS_TARGET_ID: &str = "cameras";

/// Text shown instead of cards when no camera is registered.
pub const NO_CAMERAS_PLACEHOLDER: &str = "No cameras registered";

/// Shown where a timestamp is missing or unparseable.
pub const MISSING_TIME: &str = "\u{2014}";

/// Disk usage gauge.
#[derive(Debug, Clone, PartialEq)]
pub struct DiskGauge {
    pub percent: f64,
}

impl DiskGauge {
    #[must_use]
    pub fn new(percent: f64) -> Self {
        Self { percent }
    }

    /// Gauge caption, e.g. `💾 Disk free: 42%`.
    #[must_use]
    pub fn text(&self) -> String {
        format!("\u{1F4BE} Disk free: {}%", self.percent)
    }
}

impl From<&HealthReport> for DiskGauge {
    fn from(report: &HealthReport) -> Self {
        Self::new(report.disk_free_percent)
    }
}

/// Color coding of a camera state label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateColor {
    Green,
    Yellow,
    Red,
    Gray,
}

impl StateColor {
    #[must_use]
    pub fn for_state(state: &CameraState) -> Self {
        match state {
            CameraState::Recording => Self::Green,
            CameraState::Restarting => Self::Yellow,
            CameraState::Stopped => Self::Red,
            CameraState::Unknown | CameraState::Other(_) => Self::Gray,
        }
    }

    /// CSS color value.
    #[must_use]
    pub fn hex(self) -> &'static str {
        match self {
            Self::Green => "#2ecc71",
            Self::Yellow => "#f1c40f",
            Self::Red => "#e74c3c",
            Self::Gray => "#888",
        }
    }
}

/// Everything one camera card displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraCard {
    pub name: String,
    pub state_label: String,
    pub color: StateColor,
    /// Local wall-clock time of the last state change.
    pub last_change: String,
    /// Local wall-clock time of the last recorded segment, if reported.
    pub last_segment: Option<String>,
    pub live_url: String,
}

impl CameraCard {
    /// Build a card, formatting times in the viewer's local zone.
    #[must_use]
    pub fn new(camera: &Camera, endpoints: &ApiEndpoints) -> Self {
        Self::new_in(camera, endpoints, &Local)
    }

    /// Build a card, formatting times in `tz`.
    #[must_use]
    pub fn new_in<Tz>(camera: &Camera, endpoints: &ApiEndpoints, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let status = &camera.status;
        let format = |ts: &Timestamp| time::format_time_in(ts, tz);
        Self {
            name: camera.name.clone(),
            state_label: status.state.to_string(),
            color: StateColor::for_state(&status.state),
            last_change: status
                .last_change
                .as_ref()
                .map_or_else(|| MISSING_TIME.to_string(), format),
            last_segment: status.last_segment.as_ref().map(format),
            live_url: endpoints.live(&camera.name),
        }
    }
}

/// Snapshot URL for the `generation`-th time the grid is shown.
///
/// Each applied refresh gets a distinct URL, so the browser fetches a new
/// frame (and retries a feed that failed) even when the card is unchanged.
#[must_use]
pub fn live_url_for_generation(live_url: &str, generation: u64) -> String {
    let separator = if live_url.contains('?') { '&' } else { '?' };
    format!("{live_url}{separator}refresh={generation}")
}

/// The camera region: a placeholder or one card per camera.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraGrid {
    Empty,
    Cards(Vec<CameraCard>),
}

impl CameraGrid {
    /// Build the grid in mapping order, times in the viewer's local zone.
    #[must_use]
    pub fn from_statuses(statuses: &CameraStatuses, endpoints: &ApiEndpoints) -> Self {
        Self::from_statuses_in(statuses, endpoints, &Local)
    }

    /// Build the grid in mapping order, times in `tz`.
    #[must_use]
    pub fn from_statuses_in<Tz>(statuses: &CameraStatuses, endpoints: &ApiEndpoints, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        if statuses.is_empty() {
            return Self::Empty;
        }
        Self::Cards(
            statuses
                .iter()
                .map(|camera| CameraCard::new_in(camera, endpoints, tz))
                .collect(),
        )
    }

    #[must_use]
    pub fn cards(&self) -> &[CameraCard] {
        match self {
            Self::Empty => &[],
            Self::Cards(cards) => cards,
        }
    }

    /// The placeholder text, when there is nothing else to show.
    #[must_use]
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Empty => Some(NO_CAMERAS_PLACEHOLDER),
            Self::Cards(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraStatus;
    use chrono::Utc;

    fn statuses() -> CameraStatuses {
        let changed = time::parse_rfc3339("2024-05-01T08:15:30Z").unwrap();
        [
            (
                "porch",
                CameraStatus::new(CameraState::Recording).with_last_change(changed),
            ),
            (
                "garage",
                CameraStatus::new(CameraState::Restarting).with_last_change(changed),
            ),
            ("attic", CameraStatus::new(CameraState::Stopped)),
            ("shed", CameraStatus::new(CameraState::parse("PAUSED"))),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn should_format_disk_gauge_text() {
        assert_eq!(DiskGauge::new(42.0).text(), "\u{1F4BE} Disk free: 42%");
        assert_eq!(DiskGauge::new(87.5).text(), "\u{1F4BE} Disk free: 87.5%");
    }

    #[test]
    fn should_render_placeholder_for_empty_mapping() {
        let grid = CameraGrid::from_statuses(&CameraStatuses::new(), &ApiEndpoints::same_origin());
        assert_eq!(grid, CameraGrid::Empty);
        assert_eq!(grid.placeholder(), Some("No cameras registered"));
        assert!(grid.cards().is_empty());
    }

    #[test]
    fn should_render_one_card_per_camera_in_order() {
        let grid =
            CameraGrid::from_statuses_in(&statuses(), &ApiEndpoints::same_origin(), &Utc);
        let names: Vec<&str> = grid.cards().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["porch", "garage", "attic", "shed"]);
        assert!(grid.placeholder().is_none());
    }

    #[test]
    fn should_color_code_states() {
        let grid =
            CameraGrid::from_statuses_in(&statuses(), &ApiEndpoints::same_origin(), &Utc);
        let colors: Vec<&str> = grid.cards().iter().map(|c| c.color.hex()).collect();
        assert_eq!(colors, ["#2ecc71", "#f1c40f", "#e74c3c", "#888"]);
        assert_eq!(grid.cards()[3].state_label, "PAUSED");
    }

    #[test]
    fn should_format_last_change_or_dash() {
        let grid =
            CameraGrid::from_statuses_in(&statuses(), &ApiEndpoints::same_origin(), &Utc);
        assert_eq!(grid.cards()[0].last_change, "08:15:30");
        assert_eq!(grid.cards()[2].last_change, MISSING_TIME);
        assert!(grid.cards()[0].last_segment.is_none());
    }

    #[test]
    fn should_wire_live_url() {
        let api = ApiEndpoints::new("http://pi:8080").unwrap();
        let grid = CameraGrid::from_statuses_in(&statuses(), &api, &Utc);
        assert_eq!(grid.cards()[0].live_url, "http://pi:8080/live/porch");
    }

    #[test]
    fn should_tag_live_url_with_generation() {
        assert_eq!(live_url_for_generation("/live/porch", 3), "/live/porch?refresh=3");
        assert_eq!(
            live_url_for_generation("http://pi:8080/live/front%20door?fps=2", 7),
            "http://pi:8080/live/front%20door?fps=2&refresh=7"
        );
    }

    #[test]
    fn should_change_live_url_between_generations() {
        let grid = CameraGrid::from_statuses_in(&statuses(), &ApiEndpoints::same_origin(), &Utc);
        let live_url = &grid.cards()[0].live_url;
        assert_ne!(
            live_url_for_generation(live_url, 1),
            live_url_for_generation(live_url, 2)
        );
    }

    #[test]
    fn should_produce_equal_grids_for_unchanged_mapping() {
        let api = ApiEndpoints::same_origin();
        let first = CameraGrid::from_statuses(&statuses(), &api);
        let second = CameraGrid::from_statuses(&statuses(), &api);
        assert_eq!(first, second);
    }

    #[test]
    fn should_show_last_segment_when_reported() {
        let seg = time::parse_rfc3339("2024-05-01T09:00:00Z").unwrap();
        let statuses: CameraStatuses =
            [("porch", CameraStatus::new(CameraState::Recording).with_last_segment(seg))]
                .into_iter()
                .collect();
        let grid = CameraGrid::from_statuses_in(&statuses, &ApiEndpoints::same_origin(), &Utc);
        assert_eq!(grid.cards()[0].last_segment.as_deref(), Some("09:00:00"));
    }
}
