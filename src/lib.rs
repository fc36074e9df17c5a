//! # Employee Service
//!
//! A small employee records service with:
//! - Whole-file JSON persistence with atomic replace
//! - A side-channel counter file for identifier allocation
//! - Create / get / search use cases
//! - An HTTP boundary (axum)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HTTP Server                            │
//! │           (validation, status mapping, DTOs)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  EmployeeService                            │
//! │               (create / get / search)                       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ IdAllocator │          │ RecordStore │
//!   │   (Mutex)   │          │ (write lock)│
//!   └──────┬──────┘          └──────┬──────┘
//!          ▼                        ▼
//!   employee-id-sequence.txt   employees.json
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod storage;
pub mod service;
pub mod api;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{EmployeeError, FieldErrors, Result};
pub use config::Config;
pub use model::{Department, Employee, NewEmployee};
pub use service::{EmployeeService, SearchCriteria};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the employee service
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
