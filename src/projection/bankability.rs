//! Bankability snapshot derived from the projected DSCR

use serde::{Deserialize, Serialize};

/// Minimum DSCR lenders expect for MSME term loans
pub const DSCR_THRESHOLD: f64 = 1.25;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankabilitySnapshot {
    pub dscr: f64,
    pub threshold: f64,
    pub meets_threshold: bool,
}

impl BankabilitySnapshot {
    pub fn from_dscr(dscr: f64) -> Self {
        Self {
            dscr,
            threshold: DSCR_THRESHOLD,
            meets_threshold: dscr >= DSCR_THRESHOLD,
        }
    }

    /// Headroom over the threshold, as a multiple (e.g. 0.4 = 40% above)
    pub fn headroom(&self) -> f64 {
        self.dscr / self.threshold - 1.0
    }
}
