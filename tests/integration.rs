//! End-to-end tests for the HRIS.
//!
//! This test suite covers:
//! - The full demo scenario: five employees, two departments, policy switches, removal
//! - Activity log growth on every mutating operation
//! - Department reports under different policies
//! - Notification fan-out to registered channels
//! - Registry construction from the bundled configuration file
//! - Error handling for unknown employee types

use std::str::FromStr;
use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use serde_json::Value;

use hris::activity_log::ActivityLog;
use hris::config::ConfigLoader;
use hris::error::HrisError;
use hris::factory::{EmployeeFactory, RoleParams};
use hris::models::EmployeeDetails;
use hris::notification::NotificationChannel;
use hris::registry::Registry;
use hris::salary::{BonusEnhancedSalary, TaxDeductedSalary};

// =============================================================================
// Test Helpers
// =============================================================================

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[derive(Debug)]
struct InboxChannel {
    label: String,
    inbox: Arc<Mutex<Vec<String>>>,
}

impl NotificationChannel for InboxChannel {
    fn target(&self) -> &str {
        &self.label
    }

    fn deliver(&self, message: &str) {
        self.inbox
            .lock()
            .unwrap()
            .push(format!("{} <- {}", self.label, message));
    }
}

fn details(id: &str, name: &str, department: &str, base: &str) -> EmployeeDetails {
    EmployeeDetails::new(
        id,
        name,
        format!("{}@mehrasoftware.com", id.to_lowercase()),
        department,
        dec(base),
    )
}

/// Registers the five demo employees, with two projects for the manager and
/// three and two bugs for the QA engineers.
fn seed(registry: &mut Registry, factory: &EmployeeFactory) {
    let roster = vec![
        (
            "developer",
            details("DEV001", "Alice Johnson", "Engineering", "75000"),
            RoleParams::Developer {
                language: "Java".to_string(),
                experience_years: 3,
            },
        ),
        (
            "developer",
            details("DEV002", "Bob Smith", "Engineering", "85000"),
            RoleParams::Developer {
                language: "Python".to_string(),
                experience_years: 5,
            },
        ),
        (
            "manager",
            details("MGR001", "Carol Davis", "Engineering", "120000"),
            RoleParams::Manager { team_size: 8 },
        ),
        (
            "qa",
            details("QA001", "David Wilson", "Quality", "60000"),
            RoleParams::QaEngineer {
                testing_tools: "Selenium".to_string(),
            },
        ),
        (
            "qaengineer",
            details("QA002", "Eva Brown", "Quality", "65000"),
            RoleParams::QaEngineer {
                testing_tools: "TestNG".to_string(),
            },
        ),
    ];

    for (tag, details, params) in roster {
        let employee = factory.create(tag, details, params).unwrap();
        registry.add(employee);
    }

    let manager = registry.get_mut("MGR001").unwrap().as_manager_mut().unwrap();
    manager.add_project("Project Alpha");
    manager.add_project("Project Beta");

    for (id, bugs) in [("QA001", 3), ("QA002", 2)] {
        let qa = registry.get_mut(id).unwrap().as_qa_engineer_mut().unwrap();
        for _ in 0..bugs {
            qa.report_bug();
        }
    }
}

fn started_registry() -> (Registry, EmployeeFactory, Arc<ActivityLog>) {
    let log = Arc::new(ActivityLog::new());
    let mut registry = Registry::new(Arc::clone(&log));
    registry.start();
    let factory = EmployeeFactory::new(Arc::clone(&log));
    (registry, factory, log)
}

// =============================================================================
// End-to-end scenario
// =============================================================================

#[test]
fn test_full_demo_scenario() {
    let (mut registry, factory, log) = started_registry();
    seed(&mut registry, &factory);
    assert_eq!(registry.len(), 5);

    registry.set_salary_policy(Box::new(TaxDeductedSalary::new(dec("0.20"))));
    assert_eq!(registry.calculate_salary("DEV001"), dec("69000"));

    registry.set_salary_policy(Box::new(BonusEnhancedSalary::new(dec("1.5"))));
    assert_eq!(registry.calculate_salary("DEV001"), dec("91875"));

    assert!(registry.remove("QA002"));
    assert_eq!(registry.list().len(), 4);

    registry.shutdown();
    assert!(!registry.is_connected());
    assert!(log.entries().last().unwrap().ends_with("HRIS Manager shutdown completed"));
}

#[test]
fn test_log_grows_with_every_mutating_operation() {
    let log = Arc::new(ActivityLog::new());
    let mut registry = Registry::new(Arc::clone(&log));
    let factory = EmployeeFactory::new(Arc::clone(&log));

    let mut last = log.len();
    let mut assert_grew = |label: &str, log: &ActivityLog| {
        let now = log.len();
        assert!(now > last, "log did not grow after {}", label);
        last = now;
    };

    registry.start();
    assert_grew("start", &log);

    let alice = factory
        .create(
            "developer",
            details("DEV001", "Alice Johnson", "Engineering", "75000"),
            RoleParams::Developer {
                language: "Java".to_string(),
                experience_years: 3,
            },
        )
        .unwrap();
    assert_grew("create", &log);

    registry.add(alice);
    assert_grew("add", &log);

    registry.set_salary_policy(Box::new(TaxDeductedSalary::new(dec("0.20"))));
    assert_grew("policy change", &log);

    registry.remove("DEV001");
    assert_grew("remove", &log);

    registry.shutdown();
    assert_grew("shutdown", &log);
}

// =============================================================================
// Department reports
// =============================================================================

#[test]
fn test_engineering_report_under_standard_policy() {
    let (mut registry, factory, _) = started_registry();
    seed(&mut registry, &factory);

    let report = registry.department_report("engineering");

    // 86250 + 106250 + 198800
    assert_eq!(report.employee_count(), 3);
    assert_eq!(report.total, dec("391300"));

    let text = report.to_string();
    assert!(text.starts_with("=== DEPARTMENT REPORT: ENGINEERING ===\nTotal Employees: 3\n"));
    assert!(text.contains("- Carol Davis (ID: MGR001): $198800.00"));
    assert!(text.contains("Total Department Salary Cost: $391300.00"));
    assert!(text.ends_with("Average Salary: $130433.33"));
}

#[test]
fn test_quality_report_under_tax_policy() {
    let (mut registry, factory, _) = started_registry();
    seed(&mut registry, &factory);
    registry.set_salary_policy(Box::new(TaxDeductedSalary::new(dec("0.10"))));

    let report = registry.department_report("Quality");

    // (60150 + 65100) * 0.9
    assert_eq!(report.total, dec("112725"));
    assert_eq!(report.average, dec("56362.5"));
    assert!(report.to_string().ends_with("Average Salary: $56362.50"));
}

#[test]
fn test_report_for_unknown_department_is_empty() {
    let (mut registry, factory, _) = started_registry();
    seed(&mut registry, &factory);

    let report = registry.department_report("Marketing");

    assert_eq!(report.employee_count(), 0);
    assert!(report.to_string().contains("Total Employees: 0"));
    assert!(report.to_string().ends_with("Average Salary: $0.00"));
}

#[test]
fn test_report_serializes_to_json() {
    let (mut registry, factory, _) = started_registry();
    seed(&mut registry, &factory);

    let json: Value = serde_json::to_value(registry.department_report("Quality")).unwrap();

    assert_eq!(json["department"], "Quality");
    assert_eq!(json["lines"].as_array().unwrap().len(), 2);
    assert_eq!(dec(json["total"].as_str().unwrap()), dec("125250"));
}

// =============================================================================
// Notifications
// =============================================================================

#[test]
fn test_channels_receive_add_and_remove_in_order() {
    let (mut registry, factory, _) = started_registry();
    let inbox = Arc::new(Mutex::new(Vec::new()));
    registry.add_channel(Arc::new(InboxChannel {
        label: "email".to_string(),
        inbox: Arc::clone(&inbox),
    }));
    registry.add_channel(Arc::new(InboxChannel {
        label: "sms".to_string(),
        inbox: Arc::clone(&inbox),
    }));

    let eva = factory
        .create(
            "qa",
            details("QA002", "Eva Brown", "Quality", "65000"),
            RoleParams::QaEngineer {
                testing_tools: "TestNG".to_string(),
            },
        )
        .unwrap();
    registry.add(eva);
    registry.remove("QA002");

    assert_eq!(
        *inbox.lock().unwrap(),
        vec![
            "email <- New employee added: Eva Brown".to_string(),
            "sms <- New employee added: Eva Brown".to_string(),
            "email <- Employee removed: Eva Brown".to_string(),
            "sms <- Employee removed: Eva Brown".to_string(),
        ]
    );
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_bundled_config_builds_demo_registry() {
    let loader = ConfigLoader::load("./config/hris.yaml").expect("Failed to load config");
    let log = Arc::new(ActivityLog::new());

    let registry = loader.config().build_registry(Arc::clone(&log)).unwrap();

    assert_eq!(registry.len(), 5);
    assert_eq!(registry.channel_count(), 2);
    assert_eq!(registry.salary_policy_name(), "Standard Salary Calculation");
    assert_eq!(registry.calculate_salary("MGR001"), dec("198800"));
    assert_eq!(registry.calculate_salary("QA001"), dec("60150"));
    assert_eq!(registry.calculate_salary("QA002"), dec("65100"));
}

// =============================================================================
// Error handling
// =============================================================================

#[test]
fn test_unknown_type_keeps_earlier_additions() {
    let (mut registry, factory, _) = started_registry();

    let created = factory.create(
        "developer",
        details("DEV001", "Alice Johnson", "Engineering", "75000"),
        RoleParams::Developer {
            language: "Java".to_string(),
            experience_years: 3,
        },
    );
    registry.add(created.unwrap());

    let failed = factory.create(
        "intern",
        details("INT001", "Ivan Intern", "Engineering", "30000"),
        RoleParams::Manager { team_size: 0 },
    );

    match failed {
        Err(HrisError::InvalidArgument { message }) => {
            assert_eq!(message, "Unknown employee type: intern");
        }
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_absent_employee_sentinels() {
    let (mut registry, _, _) = started_registry();

    assert!(registry.get("NOPE").is_none());
    assert_eq!(registry.calculate_salary("NOPE"), Decimal::ZERO);
    assert_eq!(registry.try_calculate_salary("NOPE"), None);
    assert!(!registry.remove("NOPE"));
}
