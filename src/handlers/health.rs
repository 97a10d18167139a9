//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::registry::ModuleKind;
use crate::state::AppState;

/// Health check result for a single component.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Per-component checks of the installation layout.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub views: CheckStatus,
    pub controllers: CheckStatus,
    pub models: CheckStatus,
}

/// Full health response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Views**: the views directory exists
/// 2. **Controllers** / **Models**: the registered source directories exist
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let views_check = check_views(&state);
    let controllers_check = check_layer(&state, ModuleKind::Controllers);
    let models_check = check_layer(&state, ModuleKind::Models);

    let all_healthy = views_check.status == "ok"
        && controllers_check.status == "ok"
        && models_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            views: views_check,
            controllers: controllers_check,
            models: models_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks the views directory without forcing the view service to build.
fn check_views(state: &AppState) -> CheckStatus {
    let dir = state.paths.views_dir();
    if dir.is_dir() {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Views directory: {}", dir.display())),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Views directory missing: {}", dir.display())),
        }
    }
}

/// Checks that a registered module directory exists on disk.
fn check_layer(state: &AppState, kind: ModuleKind) -> CheckStatus {
    match state.registry.dir(kind) {
        Some(dir) if dir.is_dir() => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Source directory: {}", dir.display())),
        },
        Some(dir) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Source directory missing: {}", dir.display())),
        },
        None => CheckStatus {
            status: "error".to_string(),
            message: Some("No directory registered".to_string()),
        },
    }
}
