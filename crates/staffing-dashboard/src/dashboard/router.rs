use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::controller::{DashboardCommand, DashboardController, DashboardError};
use super::export::ExportFile;
use super::views::CommandOutcome;

pub type SharedDashboard = Arc<Mutex<DashboardController>>;

/// Router builder exposing the dashboard snapshot, command and export endpoints.
pub fn dashboard_router(dashboard: SharedDashboard) -> Router {
    Router::new()
        .route("/api/v1/dashboard", get(snapshot_handler))
        .route("/api/v1/dashboard/commands", post(command_handler))
        .route("/api/v1/dashboard/export", get(export_handler))
        .with_state(dashboard)
}

pub(crate) async fn snapshot_handler(State(dashboard): State<SharedDashboard>) -> Response {
    match lock(&dashboard) {
        Ok(controller) => (StatusCode::OK, axum::Json(controller.snapshot())).into_response(),
        Err(response) => response,
    }
}

pub(crate) async fn command_handler(
    State(dashboard): State<SharedDashboard>,
    axum::Json(command): axum::Json<DashboardCommand>,
) -> Response {
    let mut controller = match lock(&dashboard) {
        Ok(controller) => controller,
        Err(response) => return response,
    };

    match controller.apply(command) {
        Ok(CommandOutcome::Download(file)) => download(file),
        Ok(outcome) => {
            let payload = json!({
                "outcome": outcome,
                "snapshot": controller.snapshot(),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => internal_error(&err),
    }
}

pub(crate) async fn export_handler(State(dashboard): State<SharedDashboard>) -> Response {
    let controller = match lock(&dashboard) {
        Ok(controller) => controller,
        Err(response) => return response,
    };

    match controller.export() {
        Ok(file) => download(file),
        Err(err) => internal_error(&DashboardError::from(err)),
    }
}

fn lock(dashboard: &SharedDashboard) -> Result<MutexGuard<'_, DashboardController>, Response> {
    dashboard.lock().map_err(|_| {
        let payload = json!({ "error": "dashboard state is unavailable" });
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
    })
}

fn download(file: ExportFile) -> Response {
    let disposition = file.content_disposition();
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, file.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.body,
    )
        .into_response()
}

fn internal_error(err: &DashboardError) -> Response {
    tracing::error!(error = %err, "dashboard command failed");
    let payload = json!({ "error": err.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
