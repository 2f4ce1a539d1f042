//! Named policy switches for the two observed formula variants.
//!
//! The scheme has been published with two incompatible readings of
//! "years of service" and two incompatible bounds on the final amount.
//! Rather than hard-coding one, both are enumerated here and selected
//! through [`Policy`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a `years + months` duration is turned into a decimal multiplier.
///
/// # Example
///
/// ```
/// use vrs_engine::models::YearFractionConvention;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let point = YearFractionConvention::DecimalPoint.as_decimal_years(32, 10);
/// assert_eq!(point, Decimal::from_str("32.10").unwrap());
///
/// let twelfths = YearFractionConvention::Twelfths.as_decimal_years(2, 9);
/// assert_eq!(twelfths, Decimal::from_str("2.75").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearFractionConvention {
    /// True fractional years: `years + months / 12`.
    #[default]
    Twelfths,
    /// Months written after a decimal point: `years + months / 100`,
    /// so 32 years 10 months reads as 32.10.
    DecimalPoint,
}

impl YearFractionConvention {
    /// Converts whole years and remainder months into decimal years.
    pub fn as_decimal_years(self, years: u32, months: u32) -> Decimal {
        let divisor = match self {
            YearFractionConvention::Twelfths => Decimal::from(12),
            YearFractionConvention::DecimalPoint => Decimal::from(100),
        };
        Decimal::from(years) + Decimal::from(months) / divisor
    }

    /// Returns the snake_case name used in configuration and audit output.
    pub fn as_str(self) -> &'static str {
        match self {
            YearFractionConvention::Twelfths => "twelfths",
            YearFractionConvention::DecimalPoint => "decimal_point",
        }
    }
}

/// Which bound is applied to the 35/25 total to produce the final amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundRule {
    /// `max(total, statutory minimum)`.
    #[default]
    FloorAtMinimum,
    /// `min(total, monthly pay × months until superannuation)`.
    CapAtContinuedEarnings,
}

impl BoundRule {
    /// Returns the snake_case name used in configuration and audit output.
    pub fn as_str(self) -> &'static str {
        match self {
            BoundRule::FloorAtMinimum => "floor_at_minimum",
            BoundRule::CapAtContinuedEarnings => "cap_at_continued_earnings",
        }
    }
}

/// The pair of policy switches in force for a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Policy {
    /// Convention for turning service durations into decimal years.
    #[serde(default)]
    pub year_fraction_convention: YearFractionConvention,
    /// Bound applied to the total compensation.
    #[serde(default)]
    pub bound_rule: BoundRule,
}
