//! The employee record a VRS calculation is evaluated for.
//!
//! This module defines [`VrsInput`] and the validation that stands in for
//! the data-entry form: every check here runs before the calculator does.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Pay components and service dates for one employee.
///
/// # Examples
///
/// ```
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
/// assert!(input.validate().is_ok());
/// assert_eq!(input.total_pay(), Decimal::from(144774));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VrsInput {
    /// Base monthly salary.
    pub basic_pay: Decimal,
    /// Monthly dearness allowance.
    pub dearness_allowance: Decimal,
    /// Stagnation increment, counted into total basic pay.
    #[serde(default)]
    pub stagnation_increment: Decimal,
    /// Personal pay, counted into total basic pay.
    #[serde(default)]
    pub personal_pay: Decimal,
    /// First day of employment.
    pub date_of_joining: NaiveDate,
    /// Date of birth; anchors superannuation when no retirement date is given.
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Explicit superannuation date. Takes precedence over `date_of_birth`.
    #[serde(default)]
    pub date_of_retirement: Option<NaiveDate>,
    /// The date VRS is evaluated at.
    pub reference_date: NaiveDate,
}

impl VrsInput {
    /// Largest accepted value for any single monthly pay component.
    pub const MAX_PAY_COMPONENT: i64 = 1_000_000_000_000;

    /// Basic pay plus stagnation increment and personal pay.
    pub fn total_basic_pay(&self) -> Decimal {
        self.basic_pay + self.stagnation_increment + self.personal_pay
    }

    /// Total basic pay plus dearness allowance.
    pub fn total_pay(&self) -> Decimal {
        self.total_basic_pay() + self.dearness_allowance
    }

    /// Returns a copy evaluated at a different reference date.
    pub fn with_reference_date(&self, reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            ..self.clone()
        }
    }

    /// Rejects inputs the calculator must never see.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] naming the first offending field when:
    /// - any pay component is negative or above [`Self::MAX_PAY_COMPONENT`]
    /// - `date_of_joining` is after `reference_date`
    /// - neither `date_of_birth` nor `date_of_retirement` is present
    /// - `date_of_birth` is not before `date_of_joining`
    /// - `date_of_retirement` is before `date_of_joining`
    pub fn validate(&self) -> EngineResult<()> {
        let pay_fields = [
            ("basic_pay", self.basic_pay),
            ("dearness_allowance", self.dearness_allowance),
            ("stagnation_increment", self.stagnation_increment),
            ("personal_pay", self.personal_pay),
        ];
        let max_pay = Decimal::from(Self::MAX_PAY_COMPONENT);
        for (field, value) in pay_fields {
            if value < Decimal::ZERO {
                return Err(EngineError::invalid_input(
                    field,
                    format!("must not be negative (got {})", value),
                ));
            }
            if value > max_pay {
                return Err(EngineError::invalid_input(
                    field,
                    format!("must not exceed {} (got {})", max_pay, value),
                ));
            }
        }

        if self.date_of_joining > self.reference_date {
            return Err(EngineError::invalid_input(
                "date_of_joining",
                format!(
                    "{} is after the reference date {}",
                    self.date_of_joining, self.reference_date
                ),
            ));
        }

        if self.date_of_birth.is_none() && self.date_of_retirement.is_none() {
            return Err(EngineError::invalid_input(
                "date_of_birth",
                "either date_of_birth or date_of_retirement is required",
            ));
        }

        if let Some(dob) = self.date_of_birth {
            if dob >= self.date_of_joining {
                return Err(EngineError::invalid_input(
                    "date_of_birth",
                    format!("{} is not before date_of_joining {}", dob, self.date_of_joining),
                ));
            }
        }

        if let Some(retirement) = self.date_of_retirement {
            if retirement < self.date_of_joining {
                return Err(EngineError::invalid_input(
                    "date_of_retirement",
                    format!(
                        "{} is before date_of_joining {}",
                        retirement, self.date_of_joining
                    ),
                ));
            }
        }

        Ok(())
    }
}
