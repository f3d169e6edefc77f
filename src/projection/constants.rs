//! Fixed model constants and their environment overrides
//!
//! The defaults are the illustrative figures used by the DPR demo. They are
//! placeholders rather than calibrated values; keep them exact so projections
//! stay reproducible across environments.

use std::env;

use crate::error::{DprError, Result};

/// Base monthly revenue (₹12 lakh)
pub const DEFAULT_BASE_MONTHLY_REVENUE: f64 = 1_200_000.0;

/// Share of revenue consumed by operating expenses
pub const DEFAULT_EXPENSE_RATIO: f64 = 0.66;

/// Monthly working capital surcharge when more than two months are held
pub const DEFAULT_WC_SURCHARGE_HIGH: f64 = 25_000.0;

/// Monthly working capital surcharge otherwise
pub const DEFAULT_WC_SURCHARGE_LOW: f64 = 15_000.0;

/// Working capital months above which the high surcharge applies
pub const WC_SURCHARGE_THRESHOLD_MONTHS: u32 = 2;

/// One-time setup cost booked in the first month
pub const DEFAULT_SETUP_COST: f64 = 40_000.0;

/// Total debt service spread over the loan tenure (₹9.6 lakh)
pub const DEFAULT_ANNUAL_DEBT_SERVICE: f64 = 960_000.0;

/// Seasonal uplift for months 0 and 6 (April, October)
pub const HALF_YEAR_SEASONAL_FACTOR: f64 = 1.12;

/// Seasonal uplift for months 3 and 9 (July, January)
pub const QUARTER_SEASONAL_FACTOR: f64 = 1.08;

/// Seasonal multiplier for a 0-based fiscal month index
pub fn seasonal_factor(month_index: usize) -> f64 {
    if month_index % 6 == 0 {
        HALF_YEAR_SEASONAL_FACTOR
    } else if month_index % 3 == 0 {
        QUARTER_SEASONAL_FACTOR
    } else {
        1.0
    }
}

/// Largest rupee amount accepted from an environment override
pub const MAX_AMOUNT_OVERRIDE: f64 = 1.0e12;

/// Largest expense ratio accepted from an environment override
pub const MAX_EXPENSE_RATIO_OVERRIDE: f64 = 10.0;

/// Model constants used by the projection engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConstants {
    pub base_monthly_revenue: f64,
    pub expense_ratio: f64,
    pub wc_surcharge_high: f64,
    pub wc_surcharge_low: f64,
    pub setup_cost: f64,
    pub annual_debt_service: f64,
}

impl Default for ProjectionConstants {
    fn default() -> Self {
        Self {
            base_monthly_revenue: DEFAULT_BASE_MONTHLY_REVENUE,
            expense_ratio: DEFAULT_EXPENSE_RATIO,
            wc_surcharge_high: DEFAULT_WC_SURCHARGE_HIGH,
            wc_surcharge_low: DEFAULT_WC_SURCHARGE_LOW,
            setup_cost: DEFAULT_SETUP_COST,
            annual_debt_service: DEFAULT_ANNUAL_DEBT_SERVICE,
        }
    }
}

impl ProjectionConstants {
    /// Working capital surcharge for the given coverage
    pub fn wc_surcharge(&self, working_capital_months: u32) -> f64 {
        if working_capital_months > WC_SURCHARGE_THRESHOLD_MONTHS {
            self.wc_surcharge_high
        } else {
            self.wc_surcharge_low
        }
    }

    /// Load constants, applying any overrides from the environment:
    ///   DPR_BASE_MONTHLY_REVENUE, DPR_EXPENSE_RATIO, DPR_WC_SURCHARGE_HIGH,
    ///   DPR_WC_SURCHARGE_LOW, DPR_SETUP_COST, DPR_ANNUAL_DEBT_SERVICE
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &str, default: f64, max: f64| -> Result<f64> {
            match lookup(key) {
                None => Ok(default),
                Some(raw) => parse_override(key, &raw, max),
            }
        };

        let constants = Self {
            base_monthly_revenue: read("DPR_BASE_MONTHLY_REVENUE", defaults.base_monthly_revenue, MAX_AMOUNT_OVERRIDE)?,
            expense_ratio: read("DPR_EXPENSE_RATIO", defaults.expense_ratio, MAX_EXPENSE_RATIO_OVERRIDE)?,
            wc_surcharge_high: read("DPR_WC_SURCHARGE_HIGH", defaults.wc_surcharge_high, MAX_AMOUNT_OVERRIDE)?,
            wc_surcharge_low: read("DPR_WC_SURCHARGE_LOW", defaults.wc_surcharge_low, MAX_AMOUNT_OVERRIDE)?,
            setup_cost: read("DPR_SETUP_COST", defaults.setup_cost, MAX_AMOUNT_OVERRIDE)?,
            annual_debt_service: read("DPR_ANNUAL_DEBT_SERVICE", defaults.annual_debt_service, MAX_AMOUNT_OVERRIDE)?,
        };

        if constants != defaults {
            log::info!("Using overridden projection constants: {:?}", constants);
        }

        Ok(constants)
    }
}

fn parse_override(key: &str, raw: &str, max: f64) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| DprError::InvalidConfig {
        key: key.to_string(),
        reason: format!("'{}' is not a number", raw),
    })?;

    if !value.is_finite() || value <= 0.0 {
        return Err(DprError::InvalidConfig {
            key: key.to_string(),
            reason: format!("must be a positive number, got {}", value),
        });
    }

    // Keeps every rounded monthly amount and the yearly totals within i64
    if value > max {
        return Err(DprError::InvalidConfig {
            key: key.to_string(),
            reason: format!("must not exceed {}, got {}", max, value),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_seasonal_pattern() {
        let factors: Vec<f64> = (0..12).map(seasonal_factor).collect();
        assert_eq!(
            factors,
            vec![1.12, 1.0, 1.0, 1.08, 1.0, 1.0, 1.12, 1.0, 1.0, 1.08, 1.0, 1.0]
        );
    }

    #[test]
    fn test_wc_surcharge_threshold() {
        let c = ProjectionConstants::default();
        assert_eq!(c.wc_surcharge(1), 15_000.0);
        assert_eq!(c.wc_surcharge(2), 15_000.0);
        assert_eq!(c.wc_surcharge(3), 25_000.0);
        assert_eq!(c.wc_surcharge(6), 25_000.0);
    }

    #[test]
    fn test_lookup_without_overrides_gives_defaults() {
        let constants = ProjectionConstants::from_lookup(|_| None).unwrap();
        assert_eq!(constants, ProjectionConstants::default());
    }

    #[test]
    fn test_lookup_applies_overrides() {
        let vars: HashMap<&str, &str> = [("DPR_EXPENSE_RATIO", "0.5"), ("DPR_SETUP_COST", " 1000 ")]
            .into_iter()
            .collect();
        let constants =
            ProjectionConstants::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();

        assert_eq!(constants.expense_ratio, 0.5);
        assert_eq!(constants.setup_cost, 1000.0);
        assert_eq!(constants.base_monthly_revenue, DEFAULT_BASE_MONTHLY_REVENUE);
    }

    #[test]
    fn test_lookup_rejects_bad_values() {
        let err = ProjectionConstants::from_lookup(|key| {
            (key == "DPR_ANNUAL_DEBT_SERVICE").then(|| "lots".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, DprError::InvalidConfig { ref key, .. } if key == "DPR_ANNUAL_DEBT_SERVICE"));

        let err = ProjectionConstants::from_lookup(|key| {
            (key == "DPR_BASE_MONTHLY_REVENUE").then(|| "-5".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, DprError::InvalidConfig { .. }));
    }

    #[test]
    fn test_lookup_rejects_oversized_values() {
        let err = ProjectionConstants::from_lookup(|key| {
            (key == "DPR_BASE_MONTHLY_REVENUE").then(|| "1e18".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, DprError::InvalidConfig { ref key, .. } if key == "DPR_BASE_MONTHLY_REVENUE"));

        let err = ProjectionConstants::from_lookup(|key| {
            (key == "DPR_EXPENSE_RATIO").then(|| "50".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, DprError::InvalidConfig { ref key, .. } if key == "DPR_EXPENSE_RATIO"));
    }

    #[test]
    fn test_largest_accepted_overrides_still_project() {
        let constants = ProjectionConstants::from_lookup(|key| match key {
            "DPR_EXPENSE_RATIO" => Some(MAX_EXPENSE_RATIO_OVERRIDE.to_string()),
            _ => Some(MAX_AMOUNT_OVERRIDE.to_string()),
        })
        .unwrap();

        let result = crate::projection::ProjectionEngine::new(constants)
            .project(&crate::projection::ProjectionInput::new(24.0, 2, 6))
            .unwrap();
        assert_eq!(result.series.len(), 12);
        assert!(result.closing_cash() < 0);
    }
}
