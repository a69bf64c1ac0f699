//! Core data models for the HRIS.
//!
//! This module contains the employee record, its role variants and the
//! department report produced by the registry.

mod employee;
mod money;
mod report;

pub use employee::{
    Developer, Employee, EmployeeDetails, EmployeeKind, Manager, QaEngineer, Role,
};
pub use money::format_money;
pub use report::{DepartmentReport, ReportLine};
