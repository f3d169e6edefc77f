//! Projection output structures

use serde::{Deserialize, Serialize};

use super::bankability::BankabilitySnapshot;
use super::input::ProjectionInput;
use super::months::FiscalMonth;

/// A single month of projected cash flow, in whole rupees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub month: FiscalMonth,
    pub revenue: i64,
    pub expenses: i64,
    pub cumulative_cash: i64,
}

impl ProjectionPoint {
    /// Net cash generated in this month alone
    pub fn net_cash(&self) -> i64 {
        self.revenue - self.expenses
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// Inputs the series was computed from
    pub input: ProjectionInput,

    /// Twelve monthly points, April to March
    pub series: Vec<ProjectionPoint>,

    /// Debt service coverage ratio, rounded to 2 decimal places
    pub dscr: f64,
}

impl ProjectionResult {
    pub fn new(input: ProjectionInput) -> Self {
        Self {
            input,
            series: Vec::with_capacity(12),
            dscr: 0.0,
        }
    }

    pub fn add_point(&mut self, point: ProjectionPoint) {
        self.series.push(point);
    }

    /// Cash position at the end of the last projected month
    pub fn closing_cash(&self) -> i64 {
        self.series.last().map(|p| p.cumulative_cash).unwrap_or(0)
    }

    /// First month whose cumulative cash is non-negative
    pub fn break_even_month(&self) -> Option<FiscalMonth> {
        self.series
            .iter()
            .find(|p| p.cumulative_cash >= 0)
            .map(|p| p.month)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_revenue: i64 = self.series.iter().map(|p| p.revenue).sum();
        let total_expenses: i64 = self.series.iter().map(|p| p.expenses).sum();

        ProjectionSummary {
            total_months: self.series.len() as u32,
            total_revenue,
            total_expenses,
            net_cash: total_revenue - total_expenses,
            closing_cash: self.closing_cash(),
            break_even_month: self.break_even_month(),
            bankability: BankabilitySnapshot::from_dscr(self.dscr),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub total_months: u32,
    pub total_revenue: i64,
    pub total_expenses: i64,
    pub net_cash: i64,
    pub closing_cash: i64,
    pub break_even_month: Option<FiscalMonth>,
    pub bankability: BankabilitySnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(month: FiscalMonth, revenue: i64, expenses: i64, cumulative_cash: i64) -> ProjectionPoint {
        ProjectionPoint {
            month,
            revenue,
            expenses,
            cumulative_cash,
        }
    }

    #[test]
    fn test_summary_totals() {
        let mut result = ProjectionResult::new(ProjectionInput::default());
        result.add_point(point(FiscalMonth::Apr, 100, 150, -50));
        result.add_point(point(FiscalMonth::May, 120, 60, 10));
        result.dscr = 1.5;

        let summary = result.summary();
        assert_eq!(summary.total_months, 2);
        assert_eq!(summary.total_revenue, 220);
        assert_eq!(summary.total_expenses, 210);
        assert_eq!(summary.net_cash, 10);
        assert_eq!(summary.closing_cash, 10);
        assert_eq!(summary.break_even_month, Some(FiscalMonth::May));
        assert!(summary.bankability.meets_threshold);
    }

    #[test]
    fn test_empty_result() {
        let result = ProjectionResult::new(ProjectionInput::default());
        assert_eq!(result.closing_cash(), 0);
        assert_eq!(result.break_even_month(), None);
    }
}
