//! HRIS demonstration driver.
//!
//! Builds a registry either from a configuration file or from the built-in
//! roster, then walks through listing, salary policies, department reports,
//! updates and removal before printing the tail of the activity log.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use rust_decimal::Decimal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use hris::activity_log::ActivityLog;
use hris::config::ConfigLoader;
use hris::error::HrisResult;
use hris::factory::{EmployeeFactory, RoleParams};
use hris::models::{EmployeeDetails, format_money};
use hris::notification::{EmailChannel, SmsChannel};
use hris::registry::Registry;
use hris::salary::{BonusEnhancedSalary, StandardSalary, TaxDeductedSalary};

/// In-memory HR information system demo
#[derive(Parser, Debug)]
#[command(name = "hris")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to an organization YAML file; the built-in roster is used when omitted
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log filter (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    banner("WELCOME TO MEHRA SOFTWARE COMPANY HRIS");

    let log = Arc::new(ActivityLog::new());
    let mut registry = match &args.config {
        Some(path) => {
            match ConfigLoader::load(path).and_then(|l| l.config().build_registry(Arc::clone(&log)))
            {
                Ok(registry) => registry,
                Err(err) => {
                    error!(error = %err, "Failed to build registry from configuration");
                    return ExitCode::FAILURE;
                }
            }
        }
        None => {
            let mut registry = Registry::new(Arc::clone(&log));
            registry.start();
            registry.add_channel(Arc::new(EmailChannel::new("hr@mehrasoftware.com")));
            registry.add_channel(Arc::new(SmsChannel::new("+1-555-0123")));

            section("1. CREATING EMPLOYEES");
            let factory = EmployeeFactory::new(Arc::clone(&log));
            if let Err(err) = seed_demo_roster(&factory, &mut registry) {
                println!("Error creating employee: {}", err);
            }
            registry
        }
    };

    section("2. DISPLAYING ALL EMPLOYEES");
    for employee in registry.list() {
        println!("{}", employee);
        println!("   Bonus: ${}", format_money(employee.calculate_bonus()));
    }

    section("3. SALARY CALCULATION WITH DIFFERENT POLICIES");
    let test_id = "DEV001";
    if let Some(employee) = registry.get(test_id) {
        println!("Employee: {}", employee.name());

        registry.set_salary_policy(Box::new(StandardSalary));
        println!("Standard Salary: ${}", format_money(registry.calculate_salary(test_id)));

        registry.set_salary_policy(Box::new(TaxDeductedSalary::new(Decimal::new(20, 2))));
        println!("After Tax (20%): ${}", format_money(registry.calculate_salary(test_id)));

        registry.set_salary_policy(Box::new(BonusEnhancedSalary::new(Decimal::new(15, 1))));
        println!(
            "Bonus Enhanced (1.5x): ${}",
            format_money(registry.calculate_salary(test_id))
        );
    }

    section("4. DEPARTMENT-WISE REPORTS");
    registry.set_salary_policy(Box::new(StandardSalary));
    registry.print_department_report("Engineering");
    registry.print_department_report("Quality");

    section("5. EMPLOYEE SEARCH AND UPDATE");
    if let Some(employee) = registry.get_mut("DEV002") {
        println!("Found employee: {}", employee.name());
        println!("Current salary: ${}", format_money(employee.base_salary()));
        employee.set_base_salary(Decimal::from(90000));
        println!("Updated salary: ${}", format_money(employee.base_salary()));
    }

    section("6. REMOVING EMPLOYEE");
    let removed = registry.remove("QA002");
    println!(
        "Employee removal {}",
        if removed { "successful" } else { "failed" }
    );

    section("7. FINAL EMPLOYEE COUNT");
    println!("Total employees remaining: {}", registry.len());

    section("8. SYSTEM LOGS");
    println!("Total log entries: {}", log.len());
    println!("Last 5 log entries:");
    for entry in log.tail(5) {
        println!("  {}", entry);
    }

    registry.shutdown();
    info!(entries = log.len(), "Demonstration finished");

    banner("HRIS DEMONSTRATION COMPLETED SUCCESSFULLY");
    ExitCode::SUCCESS
}

/// Creates and registers the built-in roster, then records projects and bugs.
fn seed_demo_roster(factory: &EmployeeFactory, registry: &mut Registry) -> HrisResult<()> {
    let dev1 = factory.create(
        "developer",
        EmployeeDetails::new(
            "DEV001",
            "Alice Johnson",
            "alice@mehrasoftware.com",
            "Engineering",
            Decimal::from(75000),
        ),
        RoleParams::Developer {
            language: "Java".to_string(),
            experience_years: 3,
        },
    )?;
    let dev2 = factory.create(
        "developer",
        EmployeeDetails::new(
            "DEV002",
            "Bob Smith",
            "bob@mehrasoftware.com",
            "Engineering",
            Decimal::from(85000),
        ),
        RoleParams::Developer {
            language: "Python".to_string(),
            experience_years: 5,
        },
    )?;
    let mgr1 = factory.create(
        "manager",
        EmployeeDetails::new(
            "MGR001",
            "Carol Davis",
            "carol@mehrasoftware.com",
            "Engineering",
            Decimal::from(120000),
        ),
        RoleParams::Manager { team_size: 8 },
    )?;
    let qa1 = factory.create(
        "qa",
        EmployeeDetails::new(
            "QA001",
            "David Wilson",
            "david@mehrasoftware.com",
            "Quality",
            Decimal::from(60000),
        ),
        RoleParams::QaEngineer {
            testing_tools: "Selenium".to_string(),
        },
    )?;
    let qa2 = factory.create(
        "qaengineer",
        EmployeeDetails::new(
            "QA002",
            "Eva Brown",
            "eva@mehrasoftware.com",
            "Quality",
            Decimal::from(65000),
        ),
        RoleParams::QaEngineer {
            testing_tools: "TestNG".to_string(),
        },
    )?;

    for employee in [dev1, dev2, mgr1, qa1, qa2] {
        registry.add(employee);
    }

    if let Some(manager) = registry.get_mut("MGR001").and_then(|e| e.as_manager_mut()) {
        manager.add_project("Project Alpha");
        manager.add_project("Project Beta");
    }
    for (id, bugs) in [("QA001", 3), ("QA002", 2)] {
        if let Some(qa) = registry.get_mut(id).and_then(|e| e.as_qa_engineer_mut()) {
            for _ in 0..bugs {
                qa.report_bug();
            }
        }
    }

    Ok(())
}

fn banner(title: &str) {
    println!("{}", "=".repeat(80));
    println!("{}", title);
    println!("{}", "=".repeat(80));
}

fn section(title: &str) {
    println!("\n{}:", title);
    println!("{}", "-".repeat(50));
}
