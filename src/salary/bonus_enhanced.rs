//! Bonus-enhanced salary policy.

use rust_decimal::Decimal;

use crate::models::Employee;

use super::{SalaryPolicy, describe_factor};

/// Pays the base salary plus the bonus scaled by a multiplier.
///
/// Zero or negative multipliers are accepted and lower the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BonusEnhancedSalary {
    multiplier: Decimal,
}

impl BonusEnhancedSalary {
    /// Creates a policy scaling every bonus by `multiplier`.
    pub fn new(multiplier: Decimal) -> Self {
        Self { multiplier }
    }

    /// Returns the bonus multiplier.
    pub fn multiplier(&self) -> Decimal {
        self.multiplier
    }
}

impl SalaryPolicy for BonusEnhancedSalary {
    fn calculate_total_salary(&self, employee: &Employee) -> Decimal {
        employee
            .base_salary()
            .saturating_add(employee.calculate_bonus().saturating_mul(self.multiplier))
    }

    fn name(&self) -> String {
        format!(
            "Bonus Enhanced Salary Calculation ({}x bonus)",
            describe_factor(self.multiplier)
        )
    }
}
