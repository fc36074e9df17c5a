//! Error types for the employee service
//!
//! Provides a unified error type for all core operations.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Result type alias using EmployeeError
pub type Result<T> = std::result::Result<T, EmployeeError>;

/// Unified error type for core operations
#[derive(Debug, Error)]
pub enum EmployeeError {
    // -------------------------------------------------------------------------
    // Persistence Errors
    // -------------------------------------------------------------------------
    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{context}: {source}")]
    Serialization {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Employee id sequence exhausted")]
    SequenceExhausted,

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Employee with ID {0} not found")]
    NotFound(u64),

    // -------------------------------------------------------------------------
    // Caller Errors
    // -------------------------------------------------------------------------
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("{0}")]
    Precondition(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl EmployeeError {
    /// Wrap an I/O error with the operation it interrupted
    pub fn io(context: &'static str) -> impl FnOnce(std::io::Error) -> Self {
        move |source| Self::Io { context, source }
    }

    /// Wrap a (de)serialization error with the operation it interrupted
    pub fn serialization(context: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| Self::Serialization { context, source }
    }

    /// True for storage read/write failures (server-side faults)
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            Self::Io { .. } | Self::Serialization { .. } | Self::SequenceExhausted
        )
    }
}

/// Field name → message map, ordered by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field; the first message per field wins
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}
