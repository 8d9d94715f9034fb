//! HTTP request handlers for the attendance API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::service::ReportQuery;

use super::request::{RegisterEventRequest, ReportQueryParams};
use super::response::{ApiError, ApiErrorResponse, EventResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/attendances", post(register_event_handler))
        .route("/attendances/:id", get(get_event_handler))
        .route("/reports/schedule", get(schedule_report_handler))
        .with_state(state)
}

/// Handler for POST /attendances.
///
/// Records a clock event for the employee, alternating entrance and exit
/// within the current day.
async fn register_event_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegisterEventRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance registration");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let service = state.service();
    match service.register_event(&request.employee_id) {
        Ok(event) => {
            info!(
                correlation_id = %correlation_id,
                event_id = %event.id,
                employee_id = %event.employee_id,
                "Attendance registered"
            );
            (
                StatusCode::CREATED,
                [(header::CONTENT_TYPE, "application/json")],
                Json(EventResponse::from_event(event, service.labels())),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Attendance registration failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /attendances/:id.
async fn get_event_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, event_id = %id, "Fetching attendance event");

    let service = state.service();
    match service.find_event(&id) {
        Ok(event) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(EventResponse::from_event(event, service.labels())),
        )
            .into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Attendance lookup failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /reports/schedule.
///
/// Builds the lateness and idle report for an employee over an inclusive
/// date range.
async fn schedule_report_handler(
    State(state): State<AppState>,
    params: Result<Query<ReportQueryParams>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing schedule report request");

    let query: ReportQuery = match params {
        Ok(Query(params)) => params.into(),
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Invalid report query"
            );
            return ApiErrorResponse::bad_request(ApiError::validation_error(body_text))
                .into_response();
        }
    };

    let start_time = Instant::now();
    match state.service().generate_report(&query) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %report.employee_id,
                days = report.days.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Schedule report completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(report),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Schedule report failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
