//! What-if comparison of taking VRS now against taking it later.
//!
//! The calculator is run twice, once at the input's reference date and once
//! with the reference date pushed forward, and the payouts are compared.

use chrono::Months;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SchemeConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{VrsBreakdown, VrsInput};

use super::vrs::evaluate_vrs;

/// Default number of months between the two scenarios.
pub const DEFAULT_SCENARIO_SHIFT_MONTHS: u32 = 6;

/// Two evaluations of the same employee at different reference dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    /// How far the second scenario's reference date was moved.
    pub shift_months: u32,
    /// VRS taken at the input's reference date.
    pub current: VrsBreakdown,
    /// VRS taken `shift_months` later.
    pub shifted: VrsBreakdown,
    /// `shifted.total_payout - current.total_payout`.
    pub difference: Decimal,
    /// `difference` as a percentage of the current payout. `None` when that payout is zero.
    pub percentage_change: Option<Decimal>,
}

/// Compares VRS at the reference date with VRS `shift_months` later.
///
/// Pay is held constant across both scenarios.
///
/// # Errors
///
/// - [`EngineError::CalculationError`] if the shifted date is out of range
/// - Any error from evaluating either scenario
///
/// # Examples
///
/// ```
/// use vrs_engine::calculation::compare_scenarios;
/// use vrs_engine::config::SchemeConfig;
/// use vrs_engine::models::VrsInput;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = VrsInput {
///     basic_pay: Decimal::from(44260),
///     dearness_allowance: Decimal::from(100514),
///     stagnation_increment: Decimal::ZERO,
///     personal_pay: Decimal::ZERO,
///     date_of_joining: NaiveDate::from_ymd_opt(1992, 11, 24).unwrap(),
///     date_of_birth: Some(NaiveDate::from_ymd_opt(1970, 6, 30).unwrap()),
///     date_of_retirement: None,
///     reference_date: NaiveDate::from_ymd_opt(2025, 9, 30).unwrap(),
/// };
///
/// let comparison = compare_scenarios(&input, &SchemeConfig::gujarat_pattern(), 6).unwrap();
/// assert_eq!(comparison.shifted.reference_date, NaiveDate::from_ymd_opt(2026, 3, 30).unwrap());
/// assert_eq!(comparison.shifted.service.completed.total_months, 400);
/// ```
pub fn compare_scenarios(
    input: &VrsInput,
    config: &SchemeConfig,
    shift_months: u32,
) -> EngineResult<ScenarioComparison> {
    let shifted_date = input
        .reference_date
        .checked_add_months(Months::new(shift_months))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "reference date {} cannot be shifted by {} months",
                input.reference_date, shift_months
            ),
        })?;

    let current = evaluate_vrs(input, config)?.breakdown;
    let shifted = evaluate_vrs(&input.with_reference_date(shifted_date), config)?.breakdown;

    let difference = shifted.total_payout - current.total_payout;
    let percentage_change = if current.total_payout.is_zero() {
        None
    } else {
        Some(difference / current.total_payout * Decimal::ONE_HUNDRED)
    };

    Ok(ScenarioComparison {
        shift_months,
        current,
        shifted,
        difference,
        percentage_change,
    })
}
