//! Service duration calculation.
//!
//! This module counts whole calendar months of service on either side of
//! the reference date and locates the superannuation boundary.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, ServicePeriod, VrsInput};

/// The result of measuring service, including the audit step.
#[derive(Debug, Clone)]
pub struct ServiceDurationResult {
    /// The superannuation boundary.
    pub superannuation_date: NaiveDate,
    /// Age at the reference date in fractional years, when a date of birth is known.
    pub current_age: Option<Decimal>,
    /// Whole months from joining to the reference date.
    pub completed: ServicePeriod,
    /// Whole months from the reference date to superannuation, clamped at zero.
    pub leftover: ServicePeriod,
    /// The audit step recording this measurement.
    pub audit_step: AuditStep,
}

/// Counts whole calendar months from `from` to `to`.
///
/// A month is complete once adding it to `from` does not pass `to`. Month
/// addition clamps to the last day of shorter months, so 31 January plus one
/// month is the last day of February. Returns zero when `to` is not after
/// `from`.
///
/// The count never decreases as `to` moves later, but a later `to` does not
/// always complete a new month. With `from` on the 30th, the February
/// anniversary falls on the 28th, so 28 February and 28 March give the same
/// count.
///
/// # Examples
///
/// ```
/// use vrs_engine::calculation::months_between;
/// use chrono::NaiveDate;
///
/// let joined = NaiveDate::from_ymd_opt(1992, 11, 24).unwrap();
/// let release = NaiveDate::from_ymd_opt(2025, 9, 30).unwrap();
/// assert_eq!(months_between(joined, release), 394);
///
/// // One day short of a full month
/// let end = NaiveDate::from_ymd_opt(1992, 12, 23).unwrap();
/// assert_eq!(months_between(joined, end), 0);
/// ```
pub fn months_between(from: NaiveDate, to: NaiveDate) -> u32 {
    if to <= from {
        return 0;
    }

    let estimate = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    let mut months = estimate.max(0) as u32;

    while months > 0 && add_months(from, months).is_none_or(|date| date > to) {
        months -= 1;
    }

    months
}

fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

/// Returns the date an employee reaches superannuation.
///
/// An explicit `date_of_retirement` wins; otherwise the boundary is
/// `date_of_birth` plus `superannuation_age` years, with 29 February
/// mapping to 28 February in non-leap years.
///
/// # Errors
///
/// - [`EngineError::InvalidInput`] if neither date is present
/// - [`EngineError::CalculationError`] if the date is out of range
pub fn superannuation_date(input: &VrsInput, superannuation_age: u32) -> EngineResult<NaiveDate> {
    if let Some(retirement) = input.date_of_retirement {
        return Ok(retirement);
    }

    let dob = input.date_of_birth.ok_or_else(|| {
        EngineError::invalid_input(
            "date_of_birth",
            "either date_of_birth or date_of_retirement is required",
        )
    })?;

    add_months(dob, superannuation_age * 12).ok_or_else(|| EngineError::CalculationError {
        message: format!(
            "superannuation date out of range for date of birth {} and age {}",
            dob, superannuation_age
        ),
    })
}

/// Measures completed and leftover service for an input.
///
/// Completed service runs from `date_of_joining` to `reference_date`.
/// Leftover service is the remainder of the span from `date_of_joining` to
/// the superannuation boundary, so the two always add up to that span.
/// Leftover service is zero once the reference date reaches superannuation.
/// The audit step also records the direct reference to superannuation count
/// and how many months the leftover exceeds it by.
///
/// # Errors
///
/// Propagates errors from [`superannuation_date`].
pub fn calculate_service_duration(
    input: &VrsInput,
    superannuation_age: u32,
    step_number: u32,
) -> EngineResult<ServiceDurationResult> {
    let superannuation = superannuation_date(input, superannuation_age)?;

    let completed_months = months_between(input.date_of_joining, input.reference_date);
    let (leftover_months, direct_leftover_months) = if input.reference_date >= superannuation {
        (0, 0)
    } else {
        (
            months_between(input.date_of_joining, superannuation).saturating_sub(completed_months),
            months_between(input.reference_date, superannuation),
        )
    };
    // Leftover can exceed a direct reference -> superannuation count when days of the month misalign
    let seam_adjustment_months = leftover_months.saturating_sub(direct_leftover_months);

    let completed = ServicePeriod::from_months(completed_months);
    let leftover = ServicePeriod::from_months(leftover_months);

    let current_age = input
        .date_of_birth
        .map(|dob| Decimal::from(months_between(dob, input.reference_date)) / Decimal::from(12));

    let anchor = if input.date_of_retirement.is_some() {
        "date_of_retirement"
    } else {
        "date_of_birth"
    };

    let mut reasoning = format!(
        "Completed {}y {}m to {}, leftover {}y {}m to superannuation on {}",
        completed.years,
        completed.months,
        input.reference_date,
        leftover.years,
        leftover.months,
        superannuation
    );
    if seam_adjustment_months > 0 {
        reasoning.push_str(&format!(
            "; leftover includes {} month(s) beyond the {} counted directly from the reference date",
            seam_adjustment_months, direct_leftover_months
        ));
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "service_duration".to_string(),
        rule_name: "Service Duration".to_string(),
        formula: "whole months joining -> reference -> superannuation".to_string(),
        input: serde_json::json!({
            "date_of_joining": input.date_of_joining.to_string(),
            "reference_date": input.reference_date.to_string(),
            "superannuation_anchor": anchor,
            "superannuation_age": superannuation_age
        }),
        output: serde_json::json!({
            "superannuation_date": superannuation.to_string(),
            "completed_months": completed.total_months,
            "leftover_months": leftover.total_months,
            "direct_leftover_months": direct_leftover_months,
            "seam_adjustment_months": seam_adjustment_months
        }),
        reasoning,
    };

    Ok(ServiceDurationResult {
        superannuation_date: superannuation,
        current_age,
        completed,
        leftover,
        audit_step,
    })
}
