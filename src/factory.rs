//! Employee construction from a type tag and typed role parameters.
//!
//! Callers name the kind of employee with a case-insensitive tag and supply
//! the matching [`RoleParams`]. A tag that names no kind, or parameters that
//! belong to a different kind, is rejected with a typed error.

use std::sync::Arc;

use tracing::debug;

use crate::activity_log::ActivityLog;
use crate::error::{HrisError, HrisResult};
use crate::models::{
    Developer, Employee, EmployeeDetails, EmployeeKind, Manager, QaEngineer, Role,
};

/// The parameters specific to each employee kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleParams {
    /// Parameters for a developer.
    Developer {
        /// Primary programming language.
        language: String,
        /// Years of experience.
        experience_years: u32,
    },
    /// Parameters for a manager.
    Manager {
        /// Number of direct reports.
        team_size: u32,
    },
    /// Parameters for a QA engineer.
    QaEngineer {
        /// Testing tool tag.
        testing_tools: String,
    },
}

impl RoleParams {
    /// Returns the kind these parameters describe.
    pub fn kind(&self) -> EmployeeKind {
        match self {
            RoleParams::Developer { .. } => EmployeeKind::Developer,
            RoleParams::Manager { .. } => EmployeeKind::Manager,
            RoleParams::QaEngineer { .. } => EmployeeKind::QaEngineer,
        }
    }

    fn into_role(self) -> Role {
        match self {
            RoleParams::Developer {
                language,
                experience_years,
            } => Role::Developer(Developer::new(language, experience_years)),
            RoleParams::Manager { team_size } => Role::Manager(Manager::new(team_size)),
            RoleParams::QaEngineer { testing_tools } => {
                Role::QaEngineer(QaEngineer::new(testing_tools))
            }
        }
    }
}

/// Builds employee records and logs each creation.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use hris::activity_log::ActivityLog;
/// use hris::factory::{EmployeeFactory, RoleParams};
/// use hris::models::EmployeeDetails;
/// use rust_decimal::Decimal;
///
/// let factory = EmployeeFactory::new(Arc::new(ActivityLog::new()));
/// let qa = factory
///     .create(
///         "qa",
///         EmployeeDetails::new(
///             "QA001",
///             "David Wilson",
///             "david@example.com",
///             "Quality",
///             Decimal::from(60000),
///         ),
///         RoleParams::QaEngineer { testing_tools: "Selenium".to_string() },
///     )
///     .unwrap();
/// assert_eq!(qa.employee_type(), "QA Engineer");
/// ```
#[derive(Debug, Clone)]
pub struct EmployeeFactory {
    log: Arc<ActivityLog>,
}

impl EmployeeFactory {
    /// Creates a factory logging into `log`.
    pub fn new(log: Arc<ActivityLog>) -> Self {
        Self { log }
    }

    /// Creates an employee of the kind named by `type_tag`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` when `type_tag` names no known kind.
    /// - `ParameterMismatch` when `params` belong to another kind.
    pub fn create(
        &self,
        type_tag: &str,
        details: EmployeeDetails,
        params: RoleParams,
    ) -> HrisResult<Employee> {
        self.create_with(type_tag, details, || Ok(params))
    }

    /// Like [`EmployeeFactory::create`], but collects the role parameters
    /// lazily, after the attempt is logged and the tag is validated.
    ///
    /// # Errors
    ///
    /// Any error from `params`, plus those of [`EmployeeFactory::create`].
    pub fn create_with<F>(
        &self,
        type_tag: &str,
        details: EmployeeDetails,
        params: F,
    ) -> HrisResult<Employee>
    where
        F: FnOnce() -> HrisResult<RoleParams>,
    {
        self.log.record(format!("Creating employee of type: {}", type_tag));

        let kind: EmployeeKind = type_tag.parse()?;
        let params = params()?;
        if params.kind() != kind {
            return Err(HrisError::ParameterMismatch {
                kind: kind.to_string(),
                params: params.kind().to_string(),
            });
        }

        debug!(employee_id = %details.id, kind = %kind, "Constructing employee");
        Ok(Employee::new(details, params.into_role()))
    }
}
