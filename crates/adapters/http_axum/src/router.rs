//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Always serves `/healthz` and `/dashboard-config.json`. Backend routes are
/// mounted only when the state carries an upstream, and every other path falls
/// back to the static dashboard bundle in `assets_dir` (if given).
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build(state: AppState, assets_dir: Option<&Path>) -> Router {
    let mut router = Router::new()
        .route("/healthz", get(health_check))
        .merge(crate::api::settings_routes());

    if state.upstream.is_some() {
        router = router.merge(crate::api::proxy_routes());
    }

    if let Some(dir) = assets_dir {
        router = router.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use camdash_domain::settings::{CameraSource, DashboardSettings};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::upstream::Upstream;

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(AppState::new(DashboardSettings::default(), None), None);

        let response = app.oneshot(get("/healthz")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "OK");
    }

    #[tokio::test]
    async fn should_publish_client_settings() {
        let settings = DashboardSettings {
            api_base_url: "http://pi:8080".to_string(),
            refresh_interval_ms: 2500,
            settle_delay_ms: 500,
            camera_source: CameraSource::HealthReport,
        };
        let app = build(AppState::new(settings.clone(), None), None);

        let response = app.oneshot(get("/dashboard-config.json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let parsed: DashboardSettings = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(parsed, settings);
    }

    #[tokio::test]
    async fn should_not_mount_backend_routes_without_upstream() {
        let app = build(AppState::new(DashboardSettings::default(), None), None);

        let response = app.oneshot(get("/cameras")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_answer_bad_gateway_when_backend_is_unreachable() {
        // Bind then drop a listener so the port is known to refuse connections.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let upstream = Upstream::new(&format!("http://{addr}"), Duration::from_secs(2)).unwrap();
        let app = build(
            AppState::new(DashboardSettings::default(), Some(upstream)),
            None,
        );

        let response = app.oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(body["error"].as_str().unwrap().starts_with("backend request failed"));
    }

    #[tokio::test]
    async fn should_serve_dashboard_assets_from_directory() {
        let dir = std::env::temp_dir().join(format!("camdash-assets-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<div id=\"disk\"></div>").unwrap();
        let app = build(AppState::new(DashboardSettings::default(), None), Some(&dir));

        let response = app.oneshot(get("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("id=\"disk\""));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
