//! HTTP request handlers for the shift payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::process_shifts;
use crate::error::{EngineError, EngineResult};
use crate::models::{ReportRow, ShiftRecord};
use crate::source::load_shifts;

use super::response::{ApiError, ApiErrorResponse, ProcessShiftsResponse, json_response};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/process-shifts",
            get(process_dataset_handler).post(process_body_handler),
        )
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> Response {
    json_response(StatusCode::OK, &json!({ "status": "ok" }))
}

/// Handler for GET /api/process-shifts.
///
/// Loads the configured dataset file and returns its weekly summary.
async fn process_dataset_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        dataset = %state.dataset_path().display(),
        "Processing shift dataset"
    );

    let result = load_shifts(state.dataset_path())
        .map_err(EngineError::processing)
        .and_then(|shifts| run_summary(&state, &shifts, correlation_id));

    respond(result, correlation_id)
}

/// Handler for POST /api/process-shifts.
///
/// Accepts the shift list as a JSON array in the request body.
async fn process_body_handler(
    State(state): State<AppState>,
    payload: Result<Json<Vec<ShiftRecord>>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing posted shifts");

    let shifts = match payload {
        Ok(Json(shifts)) => shifts,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => ApiError::malformed_json(err.body_text()),
                JsonRejection::JsonSyntaxError(err) => {
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            warn!(
                correlation_id = %correlation_id,
                error = %error.error,
                "Rejected request body"
            );
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    respond(run_summary(&state, &shifts, correlation_id), correlation_id)
}

/// Runs the weekly summary and logs how long it took.
fn run_summary(
    state: &AppState,
    shifts: &[ShiftRecord],
    correlation_id: Uuid,
) -> EngineResult<Vec<ReportRow>> {
    let start_time = Instant::now();
    let report = process_shifts(shifts, state.config())?;

    info!(
        correlation_id = %correlation_id,
        shifts_count = shifts.len(),
        rows = report.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Weekly summary completed successfully"
    );
    Ok(report)
}

/// Maps a summary result onto the HTTP response.
fn respond(result: EngineResult<Vec<ReportRow>>, correlation_id: Uuid) -> Response {
    match result {
        Ok(result) => json_response(StatusCode::OK, &ProcessShiftsResponse { result }),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Weekly summary failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
