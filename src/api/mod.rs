//! API Module
//!
//! HTTP boundary over `EmployeeService`.
//!
//! ## Routes
//! - `POST /employees`        create, returns `{"id": n}`
//! - `GET  /employees/:id`    fetch one record
//! - `GET  /employees?name=&fromSalary=&toSalary=`  search
//!
//! ## Status mapping
//! - 400: field validation, malformed input, inverted salary range
//! - 404: unknown identifier
//! - 500: persistence failures

pub mod dto;
mod error;
mod handlers;
mod server;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ApiResult};
pub use server::Server;
pub use state::AppState;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/employees",
            post(handlers::create_employee).get(handlers::search_employees),
        )
        .route("/employees/:id", get(handlers::get_employee))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
