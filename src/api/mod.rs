//! HTTP API module for the VRS compensation engine.
//!
//! This module provides the REST endpoints for calculating VRS compensation
//! and comparing it against retiring later.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, EmployeeRequest, ScenarioRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
