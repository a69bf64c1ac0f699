//! Department salary report model.
//!
//! A [`DepartmentReport`] captures each matching employee's total salary under
//! the policy that was active when the report was built, plus the sum and
//! mean. Its `Display` implementation is the console rendering.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::format_money;

/// One employee's line in a department report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    /// The employee's identifier.
    pub employee_id: String,
    /// The employee's name at report time.
    pub name: String,
    /// Total salary under the active policy.
    pub total_salary: Decimal,
}

/// Salary cost summary for a single department.
///
/// # Example
///
/// ```
/// use hris::models::{DepartmentReport, ReportLine};
/// use rust_decimal::Decimal;
///
/// let report = DepartmentReport::new(
///     "Quality",
///     vec![ReportLine {
///         employee_id: "QA001".to_string(),
///         name: "David Wilson".to_string(),
///         total_salary: Decimal::from(60150),
///     }],
/// );
/// assert_eq!(report.total, Decimal::from(60150));
/// assert!(report.to_string().starts_with("=== DEPARTMENT REPORT: QUALITY ==="));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentReport {
    /// The department name as requested.
    pub department: String,
    /// One line per matching employee.
    pub lines: Vec<ReportLine>,
    /// Sum of all line totals.
    pub total: Decimal,
    /// Arithmetic mean of the line totals, zero for an empty department.
    pub average: Decimal,
}

impl DepartmentReport {
    /// Builds a report, computing the total and average from `lines`.
    pub fn new(department: impl Into<String>, lines: Vec<ReportLine>) -> Self {
        let total: Decimal = lines.iter().map(|line| line.total_salary).sum();
        let average = if lines.is_empty() {
            Decimal::ZERO
        } else {
            total / Decimal::from(lines.len())
        };

        Self {
            department: department.into(),
            lines,
            total,
            average,
        }
    }

    /// Returns the number of employees covered.
    pub fn employee_count(&self) -> usize {
        self.lines.len()
    }
}

impl fmt::Display for DepartmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=== DEPARTMENT REPORT: {} ===",
            self.department.to_uppercase()
        )?;
        writeln!(f, "Total Employees: {}", self.employee_count())?;
        for line in &self.lines {
            writeln!(
                f,
                "- {} (ID: {}): ${}",
                line.name,
                line.employee_id,
                format_money(line.total_salary)
            )?;
        }
        writeln!(f, "Total Department Salary Cost: ${}", format_money(self.total))?;
        write!(f, "Average Salary: ${}", format_money(self.average))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn line(id: &str, name: &str, total: &str) -> ReportLine {
        ReportLine {
            employee_id: id.to_string(),
            name: name.to_string(),
            total_salary: dec(total),
        }
    }

    #[test]
    fn test_empty_department_has_zero_average() {
        let report = DepartmentReport::new("Marketing", vec![]);

        assert_eq!(report.employee_count(), 0);
        assert_eq!(report.total, Decimal::ZERO);
        assert_eq!(report.average, Decimal::ZERO);
        assert!(report.to_string().ends_with("Average Salary: $0.00"));
    }

    #[test]
    fn test_total_and_average() {
        let report = DepartmentReport::new(
            "Quality",
            vec![line("QA001", "David Wilson", "60150"), line("QA002", "Eva Brown", "65100")],
        );

        assert_eq!(report.total, dec("125250"));
        assert_eq!(report.average, dec("62625"));
    }

    #[test]
    fn test_display_renders_every_section() {
        let report = DepartmentReport::new(
            "Engineering",
            vec![line("DEV001", "Alice Johnson", "86250")],
        );

        let expected = "=== DEPARTMENT REPORT: ENGINEERING ===\n\
                        Total Employees: 1\n\
                        - Alice Johnson (ID: DEV001): $86250.00\n\
                        Total Department Salary Cost: $86250.00\n\
                        Average Salary: $86250.00";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_average_is_rounded_only_when_rendered() {
        let report = DepartmentReport::new(
            "Ops",
            vec![line("A", "A", "1"), line("B", "B", "1"), line("C", "C", "0")],
        );

        assert!(report.average > dec("0.666"));
        assert!(report.to_string().ends_with("Average Salary: $0.67"));
    }
}
