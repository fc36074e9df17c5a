//! Application state for the HTTP server

use std::sync::Arc;

use crate::service::EmployeeService;

/// State shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EmployeeService>,
}

impl AppState {
    pub fn new(service: Arc<EmployeeService>) -> Self {
        Self { service }
    }
}
