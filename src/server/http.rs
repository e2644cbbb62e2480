//! HTTP handlers for the objectives API

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::engine::validate_goal;
use crate::error::ObjectiveError;
use crate::server::ServerState;

/// Generate request
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub goal: Option<String>,
}

/// Generate response
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub result: Value,
}

/// Status response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
}

/// Error body shared by every failing endpoint
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Engine errors mapped onto HTTP status codes
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<ObjectiveError> for ApiError {
    fn from(err: ObjectiveError) -> Self {
        match err {
            ObjectiveError::InvalidInput(message) => Self {
                status: StatusCode::BAD_REQUEST,
                message,
            },
            ObjectiveError::Internal(_) => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: err.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            success: false,
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

/// Generate objectives for a goal
pub async fn generate_handler(
    State(state): State<ServerState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| {
        warn!("Rejected generate request: {}", e);
        ObjectiveError::invalid("Invalid JSON data")
    })?;

    let raw = req.goal.ok_or_else(|| ObjectiveError::invalid("No goal provided"))?;
    let goal = validate_goal(&raw)?;

    let set = state.engine.generate(goal);
    info!(
        "Generated {} objectives at level {}",
        set.supporting_objectives.len() + 1,
        set.target_level_name
    );

    let result = serde_json::to_value(&set).map_err(ObjectiveError::internal)?;
    Ok(Json(GenerateResponse {
        success: true,
        result,
    }))
}

/// Liveness probe
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

/// Server status
pub async fn status_handler() -> impl IntoResponse {
    let response = StatusResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Anything not routed
pub async fn not_found_handler() -> ApiError {
    ApiError::not_found("Endpoint not found")
}
