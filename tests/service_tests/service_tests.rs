//! Tests for EmployeeService
//!
//! These tests verify:
//! - create assigns sequential ids and persists the record
//! - get_by_id returns the stored fields or NotFound
//! - search applies the name and salary predicate
//! - Restart keeps both the records and the id sequence

use std::str::FromStr;
use std::sync::Arc;
use std::thread;

use chrono::NaiveDate;
use employee_service::storage::{IdAllocator, RecordStore};
use employee_service::{
    Config, Department, EmployeeError, EmployeeService, NewEmployee, SearchCriteria,
};
use rust_decimal::Decimal;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_service() -> (TempDir, EmployeeService) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder().data_dir(temp_dir.path()).build();
    let service = EmployeeService::open(&config).unwrap();
    (temp_dir, service)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn mohamed() -> NewEmployee {
    NewEmployee {
        first_name: "Mohamed".to_string(),
        last_name: "Ahmed".to_string(),
        date_of_birth: date(2000, 1, 1),
        salary: dec("1000"),
        join_date: date(2023, 5, 18),
        department: Department::It,
    }
}

fn salman() -> NewEmployee {
    NewEmployee {
        first_name: "Salman".to_string(),
        last_name: "Ebrahim".to_string(),
        date_of_birth: date(1995, 8, 20),
        salary: dec("2000"),
        join_date: date(2022, 1, 10),
        department: Department::Business,
    }
}

fn person(first: &str, last: &str, salary: &str) -> NewEmployee {
    NewEmployee {
        first_name: first.to_string(),
        last_name: last.to_string(),
        salary: dec(salary),
        ..mohamed()
    }
}

// =============================================================================
// Create / Get Tests
// =============================================================================

#[test]
fn test_create_on_empty_store_returns_one() {
    let (_temp, service) = setup_temp_service();

    let id = service.create(mohamed()).unwrap();

    assert_eq!(id, 1);
}

#[test]
fn test_get_after_create_returns_same_fields() {
    let (_temp, service) = setup_temp_service();
    let input = mohamed();

    let id = service.create(input.clone()).unwrap();
    let stored = service.get_by_id(id).unwrap();

    assert_eq!(stored, input.with_id(id));
}

#[test]
fn test_sequential_creates_are_strictly_increasing() {
    let (_temp, service) = setup_temp_service();

    let ids: Vec<u64> = (0..5).map(|_| service.create(mohamed()).unwrap()).collect();

    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_get_missing_id_is_not_found() {
    let (_temp, service) = setup_temp_service();
    service.create(mohamed()).unwrap();

    let err = service.get_by_id(999).unwrap_err();

    assert!(matches!(err, EmployeeError::NotFound(999)));
    assert_eq!(err.to_string(), "Employee with ID 999 not found");
}

#[test]
fn test_get_on_empty_store_is_not_found() {
    let (_temp, service) = setup_temp_service();

    assert!(matches!(
        service.get_by_id(1).unwrap_err(),
        EmployeeError::NotFound(1)
    ));
}

#[test]
fn test_restart_keeps_records_and_sequence() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder().data_dir(temp_dir.path()).build();

    {
        let service = EmployeeService::open(&config).unwrap();
        service.create(mohamed()).unwrap();
        service.create(salman()).unwrap();
    }

    let service = EmployeeService::open(&config).unwrap();
    assert_eq!(service.get_by_id(2).unwrap().first_name, "Salman");
    assert_eq!(service.create(mohamed()).unwrap(), 3);
}

#[test]
fn test_failed_append_skips_the_allocated_id() {
    let (temp, service) = setup_temp_service();
    service.create(mohamed()).unwrap();

    std::fs::write(temp.path().join("employees.json"), "corrupt").unwrap();
    assert!(service.create(salman()).unwrap_err().is_persistence());

    // The gap is permanent: the next successful create gets id 3
    std::fs::write(temp.path().join("employees.json"), "[]").unwrap();
    assert_eq!(service.create(salman()).unwrap(), 3);
}

#[test]
fn test_service_from_injected_components() {
    let temp_dir = TempDir::new().unwrap();
    let store = RecordStore::open(&temp_dir.path().join("people.json")).unwrap();
    let allocator = IdAllocator::open(&temp_dir.path().join("people.seq")).unwrap();
    let service = EmployeeService::new(store, allocator);

    service.create(mohamed()).unwrap();

    assert!(temp_dir.path().join("people.json").exists());
    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("people.seq")).unwrap(),
        "1"
    );
}

#[test]
fn test_concurrent_creates_are_unique_and_complete() {
    let (_temp, service) = setup_temp_service();
    let service = Arc::new(service);

    let mut handles = Vec::new();
    for _ in 0..4 {
        let service = Arc::clone(&service);
        handles.push(thread::spawn(move || {
            (0..10)
                .map(|_| service.create(mohamed()).unwrap())
                .collect::<Vec<u64>>()
        }));
    }

    let mut ids: Vec<u64> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    ids.sort_unstable();

    assert_eq!(ids, (1..=40).collect::<Vec<u64>>());
    assert_eq!(service.store().load_all().unwrap().len(), 40);
}

// =============================================================================
// Search Tests
// =============================================================================

#[test]
fn test_search_scenario_name_and_salary() {
    let (_temp, service) = setup_temp_service();
    let mohamed_id = service.create(mohamed()).unwrap();
    service.create(salman()).unwrap();

    let criteria = SearchCriteria::new("Moh", dec("500"), dec("1500")).unwrap();
    let found = service.search(&criteria).unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, mohamed_id);
}

#[test]
fn test_search_matches_last_name() {
    let (_temp, service) = setup_temp_service();
    service.create(mohamed()).unwrap();
    service.create(salman()).unwrap();

    let criteria = SearchCriteria::new("brah", dec("0"), dec("5000")).unwrap();
    let found = service.search(&criteria).unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].last_name, "Ebrahim");
}

#[test]
fn test_search_is_case_sensitive() {
    let (_temp, service) = setup_temp_service();
    service.create(mohamed()).unwrap();

    let criteria = SearchCriteria::new("moh", dec("0"), dec("5000")).unwrap();

    assert!(service.search(&criteria).unwrap().is_empty());
}

#[test]
fn test_search_salary_bounds_are_inclusive() {
    let (_temp, service) = setup_temp_service();
    service.create(person("Ann", "Lee", "100")).unwrap();
    service.create(person("Ann", "Kim", "200")).unwrap();
    service.create(person("Ann", "Roe", "200.01")).unwrap();
    service.create(person("Ann", "Fox", "99.99")).unwrap();

    let criteria = SearchCriteria::new("Ann", dec("100"), dec("200")).unwrap();
    let names: Vec<String> = service
        .search(&criteria)
        .unwrap()
        .into_iter()
        .map(|e| e.last_name)
        .collect();

    assert_eq!(names, vec!["Lee".to_string(), "Kim".to_string()]);
}

#[test]
fn test_search_empty_name_matches_everyone_in_range() {
    let (_temp, service) = setup_temp_service();
    service.create(mohamed()).unwrap();
    service.create(salman()).unwrap();

    let criteria = SearchCriteria::new("", dec("0"), dec("10000")).unwrap();

    assert_eq!(service.search(&criteria).unwrap().len(), 2);
}

#[test]
fn test_search_results_respect_predicate() {
    let (_temp, service) = setup_temp_service();
    let names = [("Ann", "Lee"), ("Bob", "Annis"), ("Cid", "Moe"), ("Annabel", "Ray")];
    for (i, (first, last)) in names.iter().enumerate() {
        let salary = (i as u64 + 1) * 100;
        service.create(person(first, last, &salary.to_string())).unwrap();
    }

    let criteria = SearchCriteria::new("Ann", dec("150"), dec("400")).unwrap();
    for employee in service.search(&criteria).unwrap() {
        assert!(employee.first_name.contains("Ann") || employee.last_name.contains("Ann"));
        assert!(employee.salary >= dec("150") && employee.salary <= dec("400"));
    }
}

#[test]
fn test_inverted_range_is_precondition_error() {
    let err = SearchCriteria::new("x", dec("100"), dec("50")).unwrap_err();

    assert!(matches!(err, EmployeeError::Precondition(_)));
    assert_eq!(err.to_string(), "From salary cannot be greater than to salary");
}

#[test]
fn test_equal_bounds_are_allowed() {
    let criteria = SearchCriteria::new("x", dec("50"), dec("50")).unwrap();

    assert_eq!(criteria.min_salary(), criteria.max_salary());
}
