//! Core projection engine for the twelve-month cash-flow series

use super::cashflows::{ProjectionPoint, ProjectionResult};
use super::constants::{seasonal_factor, ProjectionConstants};
use super::input::ProjectionInput;
use super::state::ProjectionState;
use crate::error::Result;

/// Number of months in a projection
pub const PROJECTION_MONTHS: usize = 12;

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    constants: ProjectionConstants,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given constants
    pub fn new(constants: ProjectionConstants) -> Self {
        Self { constants }
    }

    /// Project revenue, expenses and cumulative cash for one fiscal year
    pub fn project(&self, input: &ProjectionInput) -> Result<ProjectionResult> {
        if let Err(e) = input.validate() {
            log::warn!("Rejected projection input {:?}: {}", input, e);
            return Err(e);
        }

        let mut result = ProjectionResult::new(*input);
        let mut state = ProjectionState::new();

        for _ in 0..PROJECTION_MONTHS {
            let point = self.calculate_month(input, &mut state);
            result.add_point(point);
        }

        result.dscr = self.dscr(state.net_cash(), input.loan_tenure_years);

        log::debug!(
            "Projected {:?}: closing cash {}, DSCR {:.2}",
            input,
            state.cumulative_cash,
            result.dscr
        );

        Ok(result)
    }

    /// Calculate a single month and book it into the running state
    fn calculate_month(&self, input: &ProjectionInput, state: &mut ProjectionState) -> ProjectionPoint {
        let month = state.month();
        let index = state.month_index();

        let growth = (1.0 + input.growth_rate_percent / 100.0).powf(index as f64 / 12.0);
        let revenue = self.constants.base_monthly_revenue * growth * seasonal_factor(index);

        let setup = if state.is_first_month() {
            self.constants.setup_cost
        } else {
            0.0
        };
        let expenses = revenue * self.constants.expense_ratio
            + self.constants.wc_surcharge(input.working_capital_months)
            + setup;

        let revenue = revenue.round() as i64;
        let expenses = expenses.round() as i64;

        // Accumulate the rounded amounts so the closing balance equals the
        // sum of the reported monthly net cash
        let cumulative_cash = state.book_month(revenue, expenses);

        ProjectionPoint {
            month,
            revenue,
            expenses,
            cumulative_cash,
        }
    }

    /// Net cash over the year divided by one year's debt service
    fn dscr(&self, net_cash: i64, loan_tenure_years: u32) -> f64 {
        let annual_debt_service = self.constants.annual_debt_service / loan_tenure_years as f64;
        round_to_cents(net_cash as f64 / annual_debt_service)
    }
}

/// Project with the default constants
pub fn project(input: &ProjectionInput) -> Result<ProjectionResult> {
    ProjectionEngine::default().project(input)
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
