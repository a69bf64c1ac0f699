//! Standard salary policy: base salary plus bonus.

use rust_decimal::Decimal;

use crate::models::Employee;

use super::SalaryPolicy;

/// Pays the base salary plus the role bonus, unadjusted.
///
/// ```
/// use hris::salary::{SalaryPolicy, StandardSalary};
///
/// assert_eq!(StandardSalary.name(), "Standard Salary Calculation");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardSalary;

impl SalaryPolicy for StandardSalary {
    fn calculate_total_salary(&self, employee: &Employee) -> Decimal {
        employee.base_salary().saturating_add(employee.calculate_bonus())
    }

    fn name(&self) -> String {
        "Standard Salary Calculation".to_string()
    }
}
