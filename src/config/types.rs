//! Configuration types for an HRIS deployment.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the organization YAML file.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use crate::activity_log::ActivityLog;
use crate::error::{HrisError, HrisResult};
use crate::factory::{EmployeeFactory, RoleParams};
use crate::models::{EmployeeDetails, EmployeeKind};
use crate::notification::{EmailChannel, NotificationChannel, SmsChannel};
use crate::registry::Registry;
use crate::salary::{BonusEnhancedSalary, SalaryPolicy, StandardSalary, TaxDeductedSalary};

/// The salary policy to activate at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolicyConfig {
    /// Base salary plus bonus.
    #[default]
    Standard,
    /// Gross salary less a tax fraction.
    TaxDeducted {
        /// Tax fraction, e.g. `0.20`.
        rate: Decimal,
    },
    /// Base salary plus a scaled bonus.
    BonusEnhanced {
        /// Bonus multiplier, e.g. `1.5`.
        multiplier: Decimal,
    },
}

impl PolicyConfig {
    /// Builds the configured policy.
    pub fn build(&self) -> Box<dyn SalaryPolicy> {
        match self {
            PolicyConfig::Standard => Box::new(StandardSalary),
            PolicyConfig::TaxDeducted { rate } => Box::new(TaxDeductedSalary::new(*rate)),
            PolicyConfig::BonusEnhanced { multiplier } => {
                Box::new(BonusEnhancedSalary::new(*multiplier))
            }
        }
    }
}

/// A notification channel to register at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChannelConfig {
    /// E-mail delivery.
    Email {
        /// Destination address.
        address: String,
    },
    /// SMS delivery.
    Sms {
        /// Destination phone number.
        phone_number: String,
    },
}

impl ChannelConfig {
    /// Builds the configured channel.
    pub fn build(&self) -> Arc<dyn NotificationChannel> {
        match self {
            ChannelConfig::Email { address } => Arc::new(EmailChannel::new(address.clone())),
            ChannelConfig::Sms { phone_number } => Arc::new(SmsChannel::new(phone_number.clone())),
        }
    }
}

/// One employee in the seed roster.
///
/// `kind` is the same case-insensitive type tag the factory accepts. The
/// role fields are optional here and checked against `kind` when the entry
/// is converted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RosterEntry {
    /// Employee type tag.
    pub kind: String,
    /// Unique identifier.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Contact e-mail address.
    pub email: String,
    /// Department name.
    pub department: String,
    /// Base salary.
    pub base_salary: Decimal,
    /// Developer: primary language.
    #[serde(default)]
    pub language: Option<String>,
    /// Developer: years of experience.
    #[serde(default)]
    pub experience_years: Option<u32>,
    /// Manager: team size.
    #[serde(default)]
    pub team_size: Option<u32>,
    /// Manager: projects already under management.
    ///
    /// Like every role field, setting it on another kind is rejected.
    #[serde(default)]
    pub projects: Vec<String>,
    /// QA engineer: testing tool tag.
    #[serde(default)]
    pub testing_tools: Option<String>,
    /// QA engineer: bugs already reported.
    #[serde(default)]
    pub bugs_found: u32,
}

impl RosterEntry {
    /// Returns the shared employee attributes.
    pub fn details(&self) -> EmployeeDetails {
        EmployeeDetails::new(
            self.id.clone(),
            self.name.clone(),
            self.email.clone(),
            self.department.clone(),
            self.base_salary,
        )
    }

    /// Collects the role parameters required by `kind`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` when `kind` names no known employee kind.
    /// - `ParameterMismatch` when a field of another kind is set.
    /// - `MissingParameter` when a field required by `kind` is absent.
    pub fn role_params(&self) -> HrisResult<RoleParams> {
        let kind: EmployeeKind = self.kind.parse()?;
        self.reject_foreign_fields(kind)?;
        Ok(match kind {
            EmployeeKind::Developer => RoleParams::Developer {
                language: self.require(&self.language, "language")?.clone(),
                experience_years: *self.require(&self.experience_years, "experience_years")?,
            },
            EmployeeKind::Manager => RoleParams::Manager {
                team_size: *self.require(&self.team_size, "team_size")?,
            },
            EmployeeKind::QaEngineer => RoleParams::QaEngineer {
                testing_tools: self.require(&self.testing_tools, "testing_tools")?.clone(),
            },
        })
    }

    fn reject_foreign_fields(&self, kind: EmployeeKind) -> HrisResult<()> {
        let owned_fields = [
            (EmployeeKind::Developer, self.language.is_some()),
            (EmployeeKind::Developer, self.experience_years.is_some()),
            (EmployeeKind::Manager, self.team_size.is_some()),
            (EmployeeKind::Manager, !self.projects.is_empty()),
            (EmployeeKind::QaEngineer, self.testing_tools.is_some()),
            (EmployeeKind::QaEngineer, self.bugs_found > 0),
        ];

        match owned_fields
            .iter()
            .find(|(owner, present)| *present && *owner != kind)
        {
            Some((owner, _)) => Err(HrisError::ParameterMismatch {
                kind: kind.to_string(),
                params: owner.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn require<'a, T>(&self, value: &'a Option<T>, field: &str) -> HrisResult<&'a T> {
        value.as_ref().ok_or_else(|| HrisError::MissingParameter {
            employee_id: self.id.clone(),
            field: field.to_string(),
        })
    }
}

/// The complete organization configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HrisConfig {
    /// Organization display name.
    #[serde(default)]
    pub organization: String,
    /// Salary policy active after startup.
    #[serde(default)]
    pub salary_policy: PolicyConfig,
    /// Notification channels, in delivery order.
    #[serde(default)]
    pub channels: Vec<ChannelConfig>,
    /// Employees to register at startup.
    #[serde(default)]
    pub employees: Vec<RosterEntry>,
}

impl HrisConfig {
    /// Builds and starts a registry populated from this configuration.
    ///
    /// Channels are registered before the roster so every seeded employee is
    /// announced. Roster projects and bug counts are applied before the record
    /// is added.
    ///
    /// # Errors
    ///
    /// Fails on the first roster entry the factory rejects; nothing after it
    /// is added.
    pub fn build_registry(&self, log: Arc<ActivityLog>) -> HrisResult<Registry> {
        let factory = EmployeeFactory::new(Arc::clone(&log));
        let mut registry = Registry::new(log);
        registry.start();

        if self.salary_policy != PolicyConfig::Standard {
            registry.set_salary_policy(self.salary_policy.build());
        }

        for channel in &self.channels {
            registry.add_channel(channel.build());
        }

        for entry in &self.employees {
            let mut employee =
                factory.create_with(&entry.kind, entry.details(), || entry.role_params())?;
            if let Some(manager) = employee.as_manager_mut() {
                for project in &entry.projects {
                    manager.add_project(project.clone());
                }
            }
            if let Some(qa) = employee.as_qa_engineer_mut() {
                for _ in 0..entry.bugs_found {
                    qa.report_bug();
                }
            }
            registry.add(employee);
        }

        info!(
            organization = %self.organization,
            employees = registry.len(),
            channels = registry.channel_count(),
            policy = %registry.salary_policy_name(),
            "Registry built from configuration"
        );
        Ok(registry)
    }
}
