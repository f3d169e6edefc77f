//! Twelve-month cash-flow projection with DSCR

mod bankability;
mod cashflows;
pub mod constants;
mod engine;
mod input;
mod months;
mod state;

pub use bankability::{BankabilitySnapshot, DSCR_THRESHOLD};
pub use cashflows::{ProjectionPoint, ProjectionResult, ProjectionSummary};
pub use constants::ProjectionConstants;
pub use engine::{project, ProjectionEngine, PROJECTION_MONTHS};
pub use input::{ProjectionInput, GROWTH_RATE_RANGE, LOAN_TENURE_RANGE, WORKING_CAPITAL_RANGE};
pub use months::{fiscal_year_label, fiscal_year_start, FiscalMonth};
pub use state::ProjectionState;
