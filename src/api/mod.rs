//! HTTP API module for the attendance engine.
//!
//! This module provides the REST API endpoints for registering clock events,
//! looking them up, and producing lateness and idle reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{RegisterEventRequest, ReportQueryParams};
pub use response::{ApiError, ApiErrorResponse, EventResponse};
pub use state::AppState;
