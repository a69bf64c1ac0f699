//! The employee registry.
//!
//! [`Registry`] owns every employee record, the active salary policy, the
//! notification hub and the simulated store. It is the single entry point for
//! record operations and logs each one to the shared [`ActivityLog`].

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::activity_log::ActivityLog;
use crate::models::{DepartmentReport, Employee, ReportLine};
use crate::notification::{NotificationChannel, NotificationHub};
use crate::salary::{SalaryPolicy, StandardSalary};
use crate::store::SimulatedStore;

/// Central keyed store of employee records.
///
/// Construction has no side effects; call [`Registry::start`] to open the
/// simulated connection.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use hris::activity_log::ActivityLog;
/// use hris::models::{Developer, Employee, EmployeeDetails, Role};
/// use hris::registry::Registry;
/// use rust_decimal::Decimal;
///
/// let mut registry = Registry::new(Arc::new(ActivityLog::new()));
/// registry.start();
/// registry.add(Employee::new(
///     EmployeeDetails::new(
///         "DEV001",
///         "Alice Johnson",
///         "alice@example.com",
///         "Engineering",
///         Decimal::from(75000),
///     ),
///     Role::Developer(Developer::new("Java", 3)),
/// ));
///
/// assert_eq!(registry.calculate_salary("DEV001"), Decimal::from(86250));
/// assert_eq!(registry.calculate_salary("missing"), Decimal::ZERO);
/// ```
#[derive(Debug)]
pub struct Registry {
    employees: HashMap<String, Employee>,
    salary_policy: Box<dyn SalaryPolicy>,
    notifications: NotificationHub,
    store: SimulatedStore,
    log: Arc<ActivityLog>,
}

impl Registry {
    /// Creates an empty registry using the standard salary policy.
    pub fn new(log: Arc<ActivityLog>) -> Self {
        Self {
            employees: HashMap::new(),
            salary_policy: Box::new(StandardSalary),
            notifications: NotificationHub::new(Arc::clone(&log)),
            store: SimulatedStore::new(Arc::clone(&log)),
            log,
        }
    }

    /// Opens the simulated connection and announces initialization.
    pub fn start(&mut self) {
        self.store.connect();
        self.log.record("HRIS Manager initialized");
    }

    /// Closes the simulated connection.
    pub fn shutdown(&mut self) {
        self.store.disconnect();
        self.log.record("HRIS Manager shutdown completed");
    }

    /// Returns true while the simulated connection is open.
    pub fn is_connected(&self) -> bool {
        self.store.is_connected()
    }

    /// Returns the shared activity log.
    pub fn activity_log(&self) -> &Arc<ActivityLog> {
        &self.log
    }

    /// Inserts `employee`, replacing any record with the same identifier.
    ///
    /// The simulated save, the broadcast and the log entry happen regardless
    /// of whether the save succeeded. Returns the replaced record, if any.
    pub fn add(&mut self, employee: Employee) -> Option<Employee> {
        let id = employee.id().to_string();
        let name = employee.name().to_string();

        self.store.save(&employee);
        let replaced = self.employees.insert(id.clone(), employee);
        if replaced.is_some() {
            warn!(employee_id = %id, "Existing employee record overwritten");
        }

        self.notifications.broadcast(&format!("New employee added: {}", name));
        self.log.record(format!("Employee added: {}", id));
        info!(employee_id = %id, total = self.employees.len(), "Employee added");

        replaced
    }

    /// Looks up an employee by identifier.
    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.employees.get(id)
    }

    /// Looks up an employee for in-place updates.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Employee> {
        self.employees.get_mut(id)
    }

    /// Returns true if an employee with `id` is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.employees.contains_key(id)
    }

    /// Returns a snapshot of every record, in no particular order.
    pub fn list(&self) -> Vec<Employee> {
        self.employees.values().cloned().collect()
    }

    /// Returns the number of registered employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if no employees are registered.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Removes the employee with `id`. Returns false if there was none.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.employees.remove(id) {
            Some(removed) => {
                self.notifications.broadcast(&format!("Employee removed: {}", removed.name()));
                self.log.record(format!("Employee removed: {}", id));
                info!(employee_id = %id, total = self.employees.len(), "Employee removed");
                true
            }
            None => false,
        }
    }

    /// Replaces the active salary policy.
    pub fn set_salary_policy(&mut self, policy: Box<dyn SalaryPolicy>) {
        self.log.record(format!(
            "Salary calculation strategy changed to: {}",
            policy.name()
        ));
        self.salary_policy = policy;
    }

    /// Returns the active policy's descriptive name.
    pub fn salary_policy_name(&self) -> String {
        self.salary_policy.name()
    }

    /// Computes the total salary of `id` under the active policy, or zero if
    /// there is no such employee.
    pub fn calculate_salary(&self, id: &str) -> Decimal {
        self.try_calculate_salary(id).unwrap_or(Decimal::ZERO)
    }

    /// Computes the total salary of `id`, distinguishing a missing employee
    /// from a zero salary.
    pub fn try_calculate_salary(&self, id: &str) -> Option<Decimal> {
        self.employees
            .get(id)
            .map(|employee| self.salary_policy.calculate_total_salary(employee))
    }

    /// Returns every employee whose department equals `department`, ignoring case.
    pub fn list_by_department(&self, department: &str) -> Vec<Employee> {
        self.in_department(department).cloned().collect()
    }

    /// Builds a salary report for `department` under the active policy.
    pub fn department_report(&self, department: &str) -> DepartmentReport {
        let lines = self
            .in_department(department)
            .map(|employee| ReportLine {
                employee_id: employee.id().to_string(),
                name: employee.name().to_string(),
                total_salary: self.salary_policy.calculate_total_salary(employee),
            })
            .collect();

        DepartmentReport::new(department, lines)
    }

    /// Prints the department report to standard output.
    pub fn print_department_report(&self, department: &str) {
        println!("\n{}", self.department_report(department));
    }

    fn in_department<'a>(
        &'a self,
        department: &str,
    ) -> impl Iterator<Item = &'a Employee> + use<'a> {
        let wanted = department.to_lowercase();
        self.employees
            .values()
            .filter(move |employee| employee.department().to_lowercase() == wanted)
    }

    /// Registers a notification channel.
    pub fn add_channel(&mut self, channel: Arc<dyn NotificationChannel>) {
        self.notifications.add_channel(channel);
    }

    /// Unregisters a notification channel by identity.
    pub fn remove_channel(&mut self, channel: &Arc<dyn NotificationChannel>) {
        self.notifications.remove_channel(channel);
    }

    /// Returns the number of registered notification channels.
    pub fn channel_count(&self) -> usize {
        self.notifications.len()
    }
}
