// HTTP request handlers
use crate::domain::command::{MoveDirection, RotateDirection};
use crate::domain::dashboard::DashboardSnapshot;
use crate::domain::error::DashboardError;
use crate::domain::notification::Notification;
use crate::domain::sensors::SensorId;
use crate::presentation::app_state::AppState;
use crate::presentation::ndjson::ndjson_stream;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use futures::StreamExt;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tokio_stream::wrappers::WatchStream;

#[derive(Deserialize)]
pub struct SensorToggle {
    pub enabled: bool,
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        tracing::warn!("rejected request: {}", self);
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardSnapshot> {
    Json(state.controller.snapshot().await)
}

/// Stream the current snapshot, then one per published change
pub async fn stream_dashboard(State(state): State<Arc<AppState>>) -> Response {
    let snapshots = WatchStream::new(state.controller.subscribe_snapshots());
    let closed = {
        let state = state.clone();
        async move { state.closed().await }
    };
    ndjson_stream(snapshots.take_until(closed))
}

/// Stream notifications published from now on
pub async fn stream_notifications(State(state): State<Arc<AppState>>) -> Response {
    let mut rx = state.controller.subscribe_notifications();
    let closed = {
        let state = state.clone();
        async move { state.closed().await }
    };
    let stream = async_stream::stream! {
        loop {
            match rx.recv().await {
                Ok(notification) => yield notification,
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("notification stream lagged, skipped {}", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
    };
    ndjson_stream::<_, Notification>(stream.take_until(closed))
}

pub async fn set_sensor(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(toggle): Json<SensorToggle>,
) -> Result<Json<DashboardSnapshot>, DashboardError> {
    let id: SensorId = id.parse()?;
    Ok(Json(state.controller.toggle_sensor(id, toggle.enabled).await))
}

pub async fn move_drone(
    Path(direction): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardSnapshot>, DashboardError> {
    let direction: MoveDirection = direction.parse()?;
    Ok(Json(state.controller.move_drone(direction).await))
}

pub async fn ascend(State(state): State<Arc<AppState>>) -> Json<DashboardSnapshot> {
    Json(state.controller.ascend().await)
}

pub async fn descend(State(state): State<Arc<AppState>>) -> Json<DashboardSnapshot> {
    Json(state.controller.descend().await)
}

pub async fn rotate(
    Path(direction): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardSnapshot>, DashboardError> {
    let direction: RotateDirection = direction.parse()?;
    Ok(Json(state.controller.rotate(direction).await))
}

pub async fn toggle_recording(State(state): State<Arc<AppState>>) -> Json<DashboardSnapshot> {
    Json(state.controller.toggle_recording().await)
}

pub async fn take_picture(State(state): State<Arc<AppState>>) -> Json<Notification> {
    Json(state.controller.take_picture().await)
}

pub async fn surface(State(state): State<Arc<AppState>>) -> Json<Notification> {
    Json(state.controller.surface().await)
}

pub async fn set_language(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardSnapshot>, DashboardError> {
    Ok(Json(state.controller.set_language(&code).await?))
}

pub async fn connect_wifi(
    Path(network): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardSnapshot>, DashboardError> {
    Ok(Json(state.controller.connect_wifi(&network).await?))
}
