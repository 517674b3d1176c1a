//! HTTP API module for the shift payroll engine.
//!
//! This module exposes the weekly summary over HTTP: `GET` runs it over the
//! configured dataset file, `POST` over a shift list sent in the body.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, ApiErrorResponse, ProcessShiftsResponse};
pub use state::AppState;
