//! Model Module
//!
//! Employee records as persisted in the collection file.
//!
//! ## Lifecycle
//! - Created once from a validated `NewEmployee`
//! - Assigned an identifier by the `IdAllocator`
//! - Appended to the `RecordStore` and never mutated or deleted

mod employee;

pub use employee::{Department, Employee, NewEmployee};
