//! Projection inputs as supplied by the slider controls

use serde::{Deserialize, Serialize};

use crate::error::{DprError, Result};

/// Bounds of the revenue growth slider (percent per year)
pub const GROWTH_RATE_RANGE: (f64, f64) = (5.0, 24.0);

/// Bounds of the loan tenure slider (years)
pub const LOAN_TENURE_RANGE: (u32, u32) = (2, 10);

/// Bounds of the working capital coverage slider (months)
pub const WORKING_CAPITAL_RANGE: (u32, u32) = (1, 6);

/// The three scalar inputs to a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInput {
    /// Year-on-year revenue growth, in percent
    pub growth_rate_percent: f64,

    /// Term loan tenure in years
    pub loan_tenure_years: u32,

    /// Months of working capital held in reserve
    pub working_capital_months: u32,
}

impl ProjectionInput {
    pub fn new(growth_rate_percent: f64, loan_tenure_years: u32, working_capital_months: u32) -> Self {
        Self {
            growth_rate_percent,
            loan_tenure_years,
            working_capital_months,
        }
    }

    /// Reject any input outside its slider bounds
    pub fn validate(&self) -> Result<()> {
        let (g_min, g_max) = GROWTH_RATE_RANGE;
        // NaN fails both comparisons, so test the accepted range positively
        if !(self.growth_rate_percent >= g_min && self.growth_rate_percent <= g_max) {
            return Err(DprError::InvalidInput {
                field: "growthRatePercent",
                value: self.growth_rate_percent,
                min: g_min,
                max: g_max,
            });
        }

        check_range("loanTenureYears", self.loan_tenure_years, LOAN_TENURE_RANGE)?;
        check_range("workingCapitalMonths", self.working_capital_months, WORKING_CAPITAL_RANGE)?;

        Ok(())
    }
}

impl Default for ProjectionInput {
    /// Initial slider positions
    fn default() -> Self {
        Self::new(14.0, 5, 3)
    }
}

fn check_range(field: &'static str, value: u32, (min, max): (u32, u32)) -> Result<()> {
    if value < min || value > max {
        return Err(DprError::InvalidInput {
            field,
            value: value as f64,
            min: min as f64,
            max: max as f64,
        });
    }
    Ok(())
}
