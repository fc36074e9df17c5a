//! Service Module
//!
//! Create / get / search use cases over the allocator and the store.
//!
//! ## Responsibilities
//! - Assign identifiers to new records and persist them
//! - Look up a record by identifier
//! - Filter records by name substring and inclusive salary range

use std::fs;

use rust_decimal::Decimal;

use crate::config::Config;
use crate::error::{EmployeeError, Result};
use crate::model::{Employee, NewEmployee};
use crate::storage::{IdAllocator, RecordStore};

/// Search filter: name substring plus inclusive salary range
///
/// Construction enforces `min_salary <= max_salary`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    name: String,
    min_salary: Decimal,
    max_salary: Decimal,
}

impl SearchCriteria {
    pub fn new(name: impl Into<String>, min_salary: Decimal, max_salary: Decimal) -> Result<Self> {
        if min_salary > max_salary {
            return Err(EmployeeError::Precondition(
                "From salary cannot be greater than to salary".to_string(),
            ));
        }

        Ok(Self {
            name: name.into(),
            min_salary,
            max_salary,
        })
    }

    /// First or last name contains `name` (case-sensitive) and
    /// `min_salary <= salary <= max_salary`
    pub fn matches(&self, employee: &Employee) -> bool {
        employee.name_contains(&self.name)
            && employee.salary >= self.min_salary
            && employee.salary <= self.max_salary
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_salary(&self) -> Decimal {
        self.min_salary
    }

    pub fn max_salary(&self) -> Decimal {
        self.max_salary
    }
}

/// Employee use cases
///
/// Owns its `RecordStore` and `IdAllocator`; share the service behind an
/// `Arc` to serve concurrent requests.
pub struct EmployeeService {
    store: RecordStore,
    allocator: IdAllocator,
}

impl EmployeeService {
    /// Build a service from already opened components
    pub fn new(store: RecordStore, allocator: IdAllocator) -> Self {
        Self { store, allocator }
    }

    /// Open the store and allocator under `config.data_dir`
    pub fn open(config: &Config) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)
            .map_err(EmployeeError::io("Error creating employee data directory"))?;

        let store = RecordStore::open(&config.collection_path())?;
        let allocator = IdAllocator::open(&config.counter_path())?;

        Ok(Self::new(store, allocator))
    }

    /// Create a record and return its identifier
    ///
    /// Input must already be validated. If the append fails after an id was
    /// allocated, that id is skipped for good.
    pub fn create(&self, input: NewEmployee) -> Result<u64> {
        let id = self.allocator.next_id()?;
        self.store.append(input.with_id(id))?;

        tracing::info!(id, "employee created");
        Ok(id)
    }

    /// Fetch a record by identifier
    pub fn get_by_id(&self, id: u64) -> Result<Employee> {
        self.store
            .find_first(|e| e.id == id)?
            .ok_or(EmployeeError::NotFound(id))
    }

    /// All records matching `criteria`, in file order
    pub fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Employee>> {
        let found = self.store.find_all(|e| criteria.matches(e))?;

        tracing::debug!(
            name = criteria.name(),
            min_salary = %criteria.min_salary(),
            max_salary = %criteria.max_salary(),
            matches = found.len(),
            "employee search"
        );
        Ok(found)
    }

    // =========================================================================
    // Accessors (for testing and tooling)
    // =========================================================================

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn allocator(&self) -> &IdAllocator {
        &self.allocator
    }
}
