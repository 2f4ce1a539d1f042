//! Whole-month service durations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::YearFractionConvention;

/// A span of service counted in whole calendar months.
///
/// Always build one with [`ServicePeriod::from_months`] so that `years`,
/// `months` and `total_months` stay consistent.
///
/// # Example
///
/// ```
/// use vrs_engine::models::ServicePeriod;
///
/// let period = ServicePeriod::from_months(394);
/// assert_eq!(period.years, 32);
/// assert_eq!(period.months, 10);
/// assert_eq!(period.total_months, 394);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServicePeriod {
    /// Whole years.
    pub years: u32,
    /// Remainder months (0..=11).
    pub months: u32,
    /// The full span in months.
    pub total_months: u32,
}

impl ServicePeriod {
    /// Splits a month count into years and remainder months.
    pub fn from_months(total_months: u32) -> Self {
        Self {
            years: total_months / 12,
            months: total_months % 12,
            total_months,
        }
    }

    /// A zero-length period.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns true when no whole month has elapsed.
    pub fn is_zero(&self) -> bool {
        self.total_months == 0
    }

    /// Decimal years under the given convention.
    pub fn decimal_years(&self, convention: YearFractionConvention) -> Decimal {
        convention.as_decimal_years(self.years, self.months)
    }

    /// True fractional years (`total_months / 12`), independent of any
    /// compensation convention.
    pub fn fractional_years(&self) -> Decimal {
        Decimal::from(self.total_months) / Decimal::from(12)
    }
}
