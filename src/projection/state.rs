//! Running state carried from one month to the next during a projection

use super::months::FiscalMonth;

/// State of the projection at a point in time
#[derive(Debug, Clone, Default)]
pub struct ProjectionState {
    /// Months already projected
    pub months_elapsed: usize,

    /// Cash accumulated through the last projected month
    pub cumulative_cash: i64,

    /// Revenue booked so far
    pub total_revenue: i64,

    /// Expenses booked so far
    pub total_expenses: i64,
}

impl ProjectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 0-based index of the month about to be projected
    pub fn month_index(&self) -> usize {
        self.months_elapsed
    }

    /// Label of the month about to be projected
    pub fn month(&self) -> FiscalMonth {
        FiscalMonth::from_index(self.months_elapsed)
    }

    pub fn is_first_month(&self) -> bool {
        self.months_elapsed == 0
    }

    /// Book one month's rounded revenue and expenses and advance
    pub fn book_month(&mut self, revenue: i64, expenses: i64) -> i64 {
        self.total_revenue += revenue;
        self.total_expenses += expenses;
        self.cumulative_cash += revenue - expenses;
        self.months_elapsed += 1;
        self.cumulative_cash
    }

    /// Net cash generated so far
    pub fn net_cash(&self) -> i64 {
        self.total_revenue - self.total_expenses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_month_advances() {
        let mut state = ProjectionState::new();
        assert!(state.is_first_month());
        assert_eq!(state.month(), FiscalMonth::Apr);

        assert_eq!(state.book_month(1_000, 400), 600);
        assert_eq!(state.book_month(500, 700), 400);

        assert_eq!(state.month_index(), 2);
        assert_eq!(state.month(), FiscalMonth::Jun);
        assert_eq!(state.net_cash(), state.cumulative_cash);
    }
}
