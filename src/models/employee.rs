//! Employee model and role variants.
//!
//! An [`Employee`] carries the attributes shared by every worker and a
//! [`Role`] holding the role-specific attributes and bonus rule.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::HrisError;

use super::money::format_money;

/// The closed set of employee kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeKind {
    /// Software developer, bonus driven by experience.
    Developer,
    /// People manager, bonus driven by team size and projects.
    Manager,
    /// QA engineer, bonus driven by bugs found.
    QaEngineer,
}

impl EmployeeKind {
    /// Returns the human-readable type name.
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeKind::Developer => "Developer",
            EmployeeKind::Manager => "Manager",
            EmployeeKind::QaEngineer => "QA Engineer",
        }
    }
}

impl fmt::Display for EmployeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses a case-insensitive type tag.
///
/// Accepted tags are `developer`, `manager`, `qa` and `qaengineer`.
///
/// ```
/// use hris::models::EmployeeKind;
///
/// assert_eq!("QA".parse::<EmployeeKind>().unwrap(), EmployeeKind::QaEngineer);
/// assert!("intern".parse::<EmployeeKind>().is_err());
/// ```
impl FromStr for EmployeeKind {
    type Err = HrisError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.to_lowercase().as_str() {
            "developer" => Ok(EmployeeKind::Developer),
            "manager" => Ok(EmployeeKind::Manager),
            "qa" | "qaengineer" => Ok(EmployeeKind::QaEngineer),
            _ => Err(HrisError::InvalidArgument {
                message: format!("Unknown employee type: {}", tag),
            }),
        }
    }
}

/// Developer-specific attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Developer {
    language: String,
    experience_years: u32,
}

impl Developer {
    /// Bonus rate applied per year of experience.
    pub const BONUS_RATE_PER_YEAR: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

    /// Creates developer attributes.
    pub fn new(language: impl Into<String>, experience_years: u32) -> Self {
        Self {
            language: language.into(),
            experience_years,
        }
    }

    /// Returns the primary programming language.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the years of experience.
    pub fn experience_years(&self) -> u32 {
        self.experience_years
    }

    /// Replaces the primary programming language.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Replaces the years of experience.
    pub fn set_experience_years(&mut self, years: u32) {
        self.experience_years = years;
    }

    fn bonus(&self, base_salary: Decimal) -> Decimal {
        base_salary
            .saturating_mul(Self::BONUS_RATE_PER_YEAR)
            .saturating_mul(Decimal::from(self.experience_years))
    }
}

/// Manager-specific attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manager {
    team_size: u32,
    #[serde(default)]
    managed_projects: Vec<String>,
}

impl Manager {
    /// Bonus rate applied per direct report.
    pub const BONUS_RATE_PER_REPORT: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

    /// Flat bonus paid per managed project.
    pub const BONUS_PER_PROJECT: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

    /// Creates manager attributes with no projects.
    pub fn new(team_size: u32) -> Self {
        Self {
            team_size,
            managed_projects: Vec::new(),
        }
    }

    /// Returns the team size.
    pub fn team_size(&self) -> u32 {
        self.team_size
    }

    /// Returns the managed projects in the order they were added.
    pub fn managed_projects(&self) -> &[String] {
        &self.managed_projects
    }

    /// Replaces the team size.
    pub fn set_team_size(&mut self, size: u32) {
        self.team_size = size;
    }

    /// Appends a project. Duplicates are kept.
    pub fn add_project(&mut self, project: impl Into<String>) {
        self.managed_projects.push(project.into());
    }

    fn bonus(&self, base_salary: Decimal) -> Decimal {
        let per_report = base_salary
            .saturating_mul(Self::BONUS_RATE_PER_REPORT)
            .saturating_mul(Decimal::from(self.team_size));
        let per_project = Decimal::from(self.managed_projects.len()) * Self::BONUS_PER_PROJECT;
        per_report.saturating_add(per_project)
    }
}

/// QA-engineer-specific attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaEngineer {
    testing_tools: String,
    #[serde(default)]
    bugs_found: u32,
}

impl QaEngineer {
    /// Flat bonus paid per reported bug.
    pub const BONUS_PER_BUG: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

    /// Creates QA attributes with a zero bug count.
    pub fn new(testing_tools: impl Into<String>) -> Self {
        Self {
            testing_tools: testing_tools.into(),
            bugs_found: 0,
        }
    }

    /// Returns the testing tool tag.
    pub fn testing_tools(&self) -> &str {
        &self.testing_tools
    }

    /// Returns the number of bugs reported so far.
    pub fn bugs_found(&self) -> u32 {
        self.bugs_found
    }

    /// Replaces the testing tool tag.
    pub fn set_testing_tools(&mut self, tools: impl Into<String>) {
        self.testing_tools = tools.into();
    }

    /// Records one more found bug.
    pub fn report_bug(&mut self) {
        self.bugs_found += 1;
    }

    fn bonus(&self) -> Decimal {
        Decimal::from(self.bugs_found) * Self::BONUS_PER_BUG
    }
}

/// Role-specific attributes, one variant per [`EmployeeKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Role {
    /// Developer role.
    Developer(Developer),
    /// Manager role.
    Manager(Manager),
    /// QA engineer role.
    QaEngineer(QaEngineer),
}

impl Role {
    /// Returns the kind of this role.
    pub fn kind(&self) -> EmployeeKind {
        match self {
            Role::Developer(_) => EmployeeKind::Developer,
            Role::Manager(_) => EmployeeKind::Manager,
            Role::QaEngineer(_) => EmployeeKind::QaEngineer,
        }
    }

    /// Computes the bonus this role earns on top of `base_salary`.
    ///
    /// Amounts beyond the `Decimal` range saturate at its bounds.
    pub fn calculate_bonus(&self, base_salary: Decimal) -> Decimal {
        match self {
            Role::Developer(dev) => dev.bonus(base_salary),
            Role::Manager(mgr) => mgr.bonus(base_salary),
            Role::QaEngineer(qa) => qa.bonus(),
        }
    }
}

/// The attributes shared by every employee kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDetails {
    /// Unique identifier for the employee.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Contact e-mail address.
    pub email: String,
    /// Department name, matched case-insensitively in reports.
    pub department: String,
    /// Base salary before bonus.
    pub base_salary: Decimal,
}

impl EmployeeDetails {
    /// Creates a set of employee details.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
        base_salary: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            department: department.into(),
            base_salary,
        }
    }
}

/// An employee record.
///
/// The identifier and join date are fixed at creation; everything else can be
/// overwritten without validation.
///
/// # Examples
///
/// ```
/// use hris::models::{Developer, Employee, EmployeeDetails, Role};
/// use rust_decimal::Decimal;
///
/// let employee = Employee::new(
///     EmployeeDetails::new(
///         "DEV001",
///         "Alice Johnson",
///         "alice@example.com",
///         "Engineering",
///         Decimal::from(75000),
///     ),
///     Role::Developer(Developer::new("Java", 3)),
/// );
/// assert_eq!(employee.employee_type(), "Developer");
/// assert_eq!(employee.calculate_bonus(), Decimal::from(11250));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    id: String,
    name: String,
    email: String,
    department: String,
    base_salary: Decimal,
    join_date: NaiveDate,
    role: Role,
}

impl Employee {
    /// Creates an employee who joins today.
    pub fn new(details: EmployeeDetails, role: Role) -> Self {
        Self::with_join_date(details, role, Local::now().date_naive())
    }

    /// Creates an employee with an explicit join date.
    pub fn with_join_date(details: EmployeeDetails, role: Role, join_date: NaiveDate) -> Self {
        Self {
            id: details.id,
            name: details.name,
            email: details.email,
            department: details.department,
            base_salary: details.base_salary,
            join_date,
            role,
        }
    }

    /// Returns the immutable identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contact e-mail address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the department name.
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Returns the base salary before bonus.
    pub fn base_salary(&self) -> Decimal {
        self.base_salary
    }

    /// Returns the date the employee joined.
    pub fn join_date(&self) -> NaiveDate {
        self.join_date
    }

    /// Replaces the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replaces the e-mail address.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Moves the employee to another department.
    pub fn set_department(&mut self, department: impl Into<String>) {
        self.department = department.into();
    }

    /// Replaces the base salary.
    pub fn set_base_salary(&mut self, base_salary: Decimal) {
        self.base_salary = base_salary;
    }

    /// Returns the employee kind.
    pub fn kind(&self) -> EmployeeKind {
        self.role.kind()
    }

    /// Returns the type name: "Developer", "Manager" or "QA Engineer".
    pub fn employee_type(&self) -> &'static str {
        self.kind().label()
    }

    /// Computes the role-specific bonus for the current base salary.
    pub fn calculate_bonus(&self) -> Decimal {
        self.role.calculate_bonus(self.base_salary)
    }

    /// Returns the role-specific attributes.
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Returns the role-specific attributes for mutation.
    pub fn role_mut(&mut self) -> &mut Role {
        &mut self.role
    }

    /// Returns the developer attributes if this is a developer.
    pub fn as_developer_mut(&mut self) -> Option<&mut Developer> {
        match &mut self.role {
            Role::Developer(dev) => Some(dev),
            _ => None,
        }
    }

    /// Returns the manager attributes if this is a manager.
    pub fn as_manager_mut(&mut self) -> Option<&mut Manager> {
        match &mut self.role {
            Role::Manager(mgr) => Some(mgr),
            _ => None,
        }
    }

    /// Returns the QA attributes if this is a QA engineer.
    pub fn as_qa_engineer_mut(&mut self) -> Option<&mut QaEngineer> {
        match &mut self.role {
            Role::QaEngineer(qa) => Some(qa),
            _ => None,
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Type: {}, Department: {}, Salary: ${}",
            self.id,
            self.name,
            self.employee_type(),
            self.department,
            format_money(self.base_salary)
        )
    }
}
