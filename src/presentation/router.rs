// Route table for the dashboard API
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    ascend, connect_wifi, descend, get_dashboard, health_check, move_drone, rotate, set_language,
    set_sensor, stream_dashboard, stream_notifications, surface, take_picture, toggle_recording,
};
use axum::routing::{get, post, put};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/stream", get(stream_dashboard))
        .route("/notifications/stream", get(stream_notifications))
        .route("/sensors/:id", put(set_sensor))
        .route("/commands/move/:direction", post(move_drone))
        .route("/commands/ascend", post(ascend))
        .route("/commands/descend", post(descend))
        .route("/commands/rotate/:direction", post(rotate))
        .route("/commands/record", post(toggle_recording))
        .route("/commands/picture", post(take_picture))
        .route("/commands/surface", post(surface))
        .route("/language/:code", put(set_language))
        .route("/wifi/:network", post(connect_wifi))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::controller::DashboardController;
    use crate::application::engine::tests::test_engine;
    use crate::application::scheduler::TickPeriods;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use std::time::Duration;
    use tower::ServiceExt;

    fn app() -> Router {
        let controller = DashboardController::new(
            test_engine(1),
            TickPeriods::default(),
            Duration::from_millis(2_000),
        );
        let (_, shutdown_rx) = tokio::sync::watch::channel(false);
        build_router(Arc::new(AppState::new(Arc::new(controller), shutdown_rx)))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = app();
        let response = app
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_dashboard_snapshot_shape() {
        let app = app();
        let (status, json) = send(&app, "GET", "/dashboard", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["telemetry"]["battery"], 88.0);
        assert_eq!(json["telemetry"]["leakDetected"], false);
        assert_eq!(json["sensors"]["ph"], true);
        assert_eq!(json["recording"]["isRecording"], false);
        assert_eq!(json["recordingTime"], "00:00");
        assert_eq!(json["language"], "en");
        assert_eq!(json["alerts"][0]["severity"], "info");
    }

    #[tokio::test]
    async fn test_move_command() {
        let app = app();
        let (status, json) = send(&app, "POST", "/commands/move/forward", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["telemetry"]["position"]["x"], 5.0);
        assert_eq!(json["telemetry"]["fishOrientation"]["yaw"], 0.0);
    }

    #[tokio::test]
    async fn test_bad_direction_is_rejected() {
        let app = app();
        let (status, json) = send(&app, "POST", "/commands/rotate/up", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "unknown direction: up");
    }

    #[tokio::test]
    async fn test_sensor_toggle() {
        let app = app();
        let (status, json) = send(
            &app,
            "PUT",
            "/sensors/temp",
            Some(serde_json::json!({ "enabled": false })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["sensors"]["temp"], false);
        // Zeroing waits for the next tick.
        assert_eq!(json["telemetry"]["temperature"], 15.3);

        let (status, _) = send(
            &app,
            "PUT",
            "/sensors/lidar",
            Some(serde_json::json!({ "enabled": true })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_language_switch() {
        let app = app();
        let (status, json) = send(&app, "PUT", "/language/ar", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["language"], "ar");
        assert_eq!(json["alerts"][0]["message"], "تم توصيل النظام");

        let (status, _) = send(&app, "PUT", "/language/xx", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_record_toggle() {
        let app = app();
        let (_, json) = send(&app, "POST", "/commands/record", None).await;
        assert_eq!(json["recording"]["isRecording"], true);
        let (_, json) = send(&app, "POST", "/commands/record", None).await;
        assert_eq!(json["recording"]["isRecording"], false);
        assert_eq!(json["recording"]["elapsedSeconds"], 0);
    }

    #[tokio::test]
    async fn test_picture_returns_notification() {
        let app = app();
        let (status, json) = send(&app, "POST", "/commands/picture", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["kind"], "snapshot");
        assert_eq!(json["variant"], "default");
    }

    #[tokio::test]
    async fn test_wifi_unknown_network() {
        let app = app();
        let (status, _) = send(&app, "POST", "/wifi/Cafe", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, json) = send(&app, "POST", "/wifi/NanoFish-AP", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["wifi"]["connecting"], true);
    }

    #[tokio::test]
    async fn test_dashboard_stream_yields_current_snapshot() {
        let app = app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/dashboard/stream")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers()["content-type"],
            "application/x-ndjson"
        );

        let mut body = response.into_body();
        let frame = body.frame().await.unwrap().unwrap();
        let bytes = frame.into_data().unwrap();
        let line = std::str::from_utf8(&bytes).unwrap();
        assert!(line.ends_with('\n'));
        let json: Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(json["telemetry"]["compass"], 45.0);
    }
}
