//! Fiscal month sequence (April to March)

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

/// A month of the Indian fiscal year, in fiscal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FiscalMonth {
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
    Jan,
    Feb,
    Mar,
}

impl FiscalMonth {
    /// All twelve months starting from April
    pub const ALL: [FiscalMonth; 12] = [
        FiscalMonth::Apr,
        FiscalMonth::May,
        FiscalMonth::Jun,
        FiscalMonth::Jul,
        FiscalMonth::Aug,
        FiscalMonth::Sep,
        FiscalMonth::Oct,
        FiscalMonth::Nov,
        FiscalMonth::Dec,
        FiscalMonth::Jan,
        FiscalMonth::Feb,
        FiscalMonth::Mar,
    ];

    /// Month at a 0-based fiscal index (0 = April). Wraps past March.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// 0-based position within the fiscal year
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FiscalMonth::Apr => "Apr",
            FiscalMonth::May => "May",
            FiscalMonth::Jun => "Jun",
            FiscalMonth::Jul => "Jul",
            FiscalMonth::Aug => "Aug",
            FiscalMonth::Sep => "Sep",
            FiscalMonth::Oct => "Oct",
            FiscalMonth::Nov => "Nov",
            FiscalMonth::Dec => "Dec",
            FiscalMonth::Jan => "Jan",
            FiscalMonth::Feb => "Feb",
            FiscalMonth::Mar => "Mar",
        }
    }

    /// Calendar month this fiscal month falls in
    pub fn calendar_month(self) -> Month {
        // April is calendar month 4 (0-based 3)
        let zero_based = (self.index() + 3) % 12;
        Month::try_from(zero_based as u8 + 1).unwrap_or(Month::April)
    }

    pub fn from_calendar(month: Month) -> Self {
        let zero_based = month.number_from_month() as usize - 1;
        Self::from_index((zero_based + 9) % 12)
    }
}

impl std::fmt::Display for FiscalMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar year in which the fiscal year containing `date` starts
pub fn fiscal_year_start(date: NaiveDate) -> i32 {
    if date.month() >= 4 {
        date.year()
    } else {
        date.year() - 1
    }
}

/// Label such as `FY2026-27` for the fiscal year containing `date`
pub fn fiscal_year_label(date: NaiveDate) -> String {
    let start = fiscal_year_start(date);
    format!("FY{}-{:02}", start, (start + 1).rem_euclid(100))
}
