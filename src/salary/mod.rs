//! Salary calculation policies.
//!
//! The registry holds exactly one [`SalaryPolicy`] at a time and applies it
//! uniformly to every employee until it is replaced. Three policies are
//! provided: a plain sum of base salary and bonus, a tax-adjusted variant and
//! a bonus-multiplied variant.

mod bonus_enhanced;
mod standard;
mod tax_deducted;

use std::fmt::Debug;

use rust_decimal::Decimal;

use crate::models::Employee;

pub use bonus_enhanced::BonusEnhancedSalary;
pub use standard::StandardSalary;
pub use tax_deducted::TaxDeductedSalary;

/// A rule turning an employee record into a total salary figure.
///
/// Implementations must be pure: the same record always yields the same total.
pub trait SalaryPolicy: Debug + Send + Sync {
    /// Computes the total salary for `employee`.
    fn calculate_total_salary(&self, employee: &Employee) -> Decimal;

    /// Returns a human-readable name including any parameters.
    fn name(&self) -> String;
}

/// Renders a factor the way the policy names show it: at least one fractional digit.
fn describe_factor(value: Decimal) -> String {
    let normalized = value.normalize();
    if normalized.scale() == 0 {
        format!("{}.0", normalized)
    } else {
        normalized.to_string()
    }
}
