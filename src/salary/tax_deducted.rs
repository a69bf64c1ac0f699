//! Tax-deducted salary policy.

use rust_decimal::Decimal;

use crate::models::Employee;

use super::{SalaryPolicy, describe_factor};

/// Pays gross salary (base plus bonus) less a flat tax fraction.
///
/// The rate is a fraction such as `0.20` and is not range-checked.
///
/// ```
/// use hris::salary::{SalaryPolicy, TaxDeductedSalary};
/// use rust_decimal::Decimal;
///
/// let policy = TaxDeductedSalary::new(Decimal::new(20, 2));
/// assert_eq!(policy.name(), "Tax Deducted Salary Calculation (20.0% tax)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxDeductedSalary {
    rate: Decimal,
}

impl TaxDeductedSalary {
    /// Creates a policy deducting `rate` of the gross salary.
    pub fn new(rate: Decimal) -> Self {
        Self { rate }
    }

    /// Returns the tax fraction.
    pub fn rate(&self) -> Decimal {
        self.rate
    }
}

impl SalaryPolicy for TaxDeductedSalary {
    fn calculate_total_salary(&self, employee: &Employee) -> Decimal {
        let gross = employee.base_salary().saturating_add(employee.calculate_bonus());
        gross.saturating_sub(gross.saturating_mul(self.rate))
    }

    fn name(&self) -> String {
        format!(
            "Tax Deducted Salary Calculation ({}% tax)",
            describe_factor(self.rate.saturating_mul(Decimal::ONE_HUNDRED))
        )
    }
}
