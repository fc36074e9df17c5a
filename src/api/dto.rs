//! Request and response shapes for the HTTP boundary
//!
//! Request fields are optional so that missing values surface as per-field
//! validation messages instead of a generic body rejection. Salaries cross
//! the boundary as exact JSON numbers, never through `f64`.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EmployeeError, FieldErrors, Result};
use crate::model::{Department, Employee, NewEmployee};

/// Body of `POST /employees`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    /// Exact JSON number or decimal string
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub salary: Option<Decimal>,
    pub join_date: Option<NaiveDate>,
    pub department: Option<Department>,
}

impl EmployeeRequest {
    /// Check every field and build a `NewEmployee`
    ///
    /// `today` is the reference for "date of birth must be in the past".
    /// All violations are reported at once, one message per field.
    pub fn validate(self, today: NaiveDate) -> Result<NewEmployee> {
        let mut errors = FieldErrors::new();

        let first_name = non_blank(self.first_name);
        if first_name.is_none() {
            errors.add("firstName", "First name cannot be empty");
        }

        let last_name = non_blank(self.last_name);
        if last_name.is_none() {
            errors.add("lastName", "Last name cannot be empty");
        }

        match self.date_of_birth {
            None => errors.add("dateOfBirth", "Date of birth cannot be null"),
            Some(date) if date >= today => {
                errors.add("dateOfBirth", "Date of birth must be a past date")
            }
            Some(_) => {}
        }

        match self.salary {
            None => errors.add("salary", "Salary cannot be null"),
            Some(salary) if salary < Decimal::ZERO => {
                errors.add("salary", "Salary must be positive")
            }
            Some(_) => {}
        }

        if self.join_date.is_none() {
            errors.add("joinDate", "Join date cannot be null");
        }

        if self.department.is_none() {
            errors.add("department", "Department cannot be null");
        }

        match (
            first_name,
            last_name,
            self.date_of_birth,
            self.salary,
            self.join_date,
            self.department,
        ) {
            (
                Some(first_name),
                Some(last_name),
                Some(date_of_birth),
                Some(salary),
                Some(join_date),
                Some(department),
            ) if errors.is_empty() => Ok(NewEmployee {
                first_name,
                last_name,
                date_of_birth,
                salary,
                join_date,
                department,
            }),
            _ => Err(EmployeeError::Validation(errors)),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Body of a successful `POST /employees`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployeeResponse {
    pub id: u64,
}

/// A record as returned to clients (salary as an exact JSON number)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub salary: Decimal,
    pub join_date: NaiveDate,
    pub department: Department,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            date_of_birth: employee.date_of_birth,
            salary: employee.salary,
            join_date: employee.join_date,
            department: employee.department,
        }
    }
}

/// Query string of `GET /employees`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub name: String,
    pub from_salary: Decimal,
    pub to_salary: Decimal,
}

impl SearchParams {
    /// Both salary bounds must be >= 0
    pub fn validate(&self) -> Result<()> {
        let mut errors = FieldErrors::new();
        if self.from_salary < Decimal::ZERO {
            errors.add("fromSalary", "must be greater than or equal to 0.0");
        }
        if self.to_salary < Decimal::ZERO {
            errors.add("toSalary", "must be greater than or equal to 0.0");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(EmployeeError::Validation(errors))
        }
    }
}

/// Error body: field (or "error") → message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub errors: BTreeMap<String, String>,
}

impl ErrorResponse {
    pub fn single(message: impl Into<String>) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert("error".to_string(), message.into());
        Self { errors }
    }
}
