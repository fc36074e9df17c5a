//! Employee record
//!
//! Serialized with camelCase keys to keep the collection file readable by
//! other tools.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Department an employee belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Department {
    It,
    Business,
    Hr,
    Finance,
}

/// A persisted employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier, assigned at creation and never reused
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    /// Always >= 0; written as a decimal string, read from a string or an
    /// exact JSON number
    #[serde(deserialize_with = "rust_decimal::serde::arbitrary_precision::deserialize")]
    pub salary: Decimal,
    pub join_date: NaiveDate,
    pub department: Department,
}

/// Employee attributes before an identifier has been assigned
///
/// Callers validate these before handing them to the service; see
/// `api::dto::EmployeeRequest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub salary: Decimal,
    pub join_date: NaiveDate,
    pub department: Department,
}

impl NewEmployee {
    /// Attach an identifier, producing the record to persist
    pub fn with_id(self, id: u64) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_birth: self.date_of_birth,
            salary: self.salary,
            join_date: self.join_date,
            department: self.department,
        }
    }
}

impl Employee {
    /// True when either name contains `needle` (case-sensitive)
    pub fn name_contains(&self, needle: &str) -> bool {
        self.first_name.contains(needle) || self.last_name.contains(needle)
    }
}
