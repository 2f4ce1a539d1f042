//! Request types for the VRS API.
//!
//! This module defines the JSON request structures for the `/calculate` and
//! `/compare` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::DEFAULT_SCENARIO_SHIFT_MONTHS;
use crate::models::{Policy, VrsInput};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee's pay and service dates.
    pub employee: EmployeeRequest,
    /// The date VRS is evaluated at. Defaults to today.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    /// Overrides the scheme's configured policy switches.
    #[serde(default)]
    pub policy: Option<Policy>,
}

/// Request body for the `/compare` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioRequest {
    /// The employee's pay and service dates.
    pub employee: EmployeeRequest,
    /// The date of the first scenario. Defaults to today.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    /// Overrides the scheme's configured policy switches.
    #[serde(default)]
    pub policy: Option<Policy>,
    /// Months between the two scenarios.
    #[serde(default = "default_shift_months")]
    pub shift_months: u32,
}

fn default_shift_months() -> u32 {
    DEFAULT_SCENARIO_SHIFT_MONTHS
}

/// Employee information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Caller's identifier for the employee, used only for logging.
    #[serde(default)]
    pub id: Option<String>,
    /// Base monthly salary.
    pub basic_pay: Decimal,
    /// Monthly dearness allowance.
    pub dearness_allowance: Decimal,
    /// Stagnation increment.
    #[serde(default)]
    pub stagnation_increment: Decimal,
    /// Personal pay.
    #[serde(default)]
    pub personal_pay: Decimal,
    /// First day of employment.
    pub date_of_joining: NaiveDate,
    /// Date of birth.
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Explicit superannuation date.
    #[serde(default)]
    pub date_of_retirement: Option<NaiveDate>,
}

impl EmployeeRequest {
    /// Builds the calculator input for a given reference date.
    pub fn to_input(&self, reference_date: NaiveDate) -> VrsInput {
        VrsInput {
            basic_pay: self.basic_pay,
            dearness_allowance: self.dearness_allowance,
            stagnation_increment: self.stagnation_increment,
            personal_pay: self.personal_pay,
            date_of_joining: self.date_of_joining,
            date_of_birth: self.date_of_birth,
            date_of_retirement: self.date_of_retirement,
            reference_date,
        }
    }

    /// The identifier to log, or `"anonymous"` when none was sent.
    pub fn log_id(&self) -> &str {
        self.id.as_deref().unwrap_or("anonymous")
    }
}

impl CalculationRequest {
    /// Builds the calculator input, falling back to `today` for the reference date.
    pub fn to_input(&self, today: NaiveDate) -> VrsInput {
        self.employee.to_input(self.reference_date.unwrap_or(today))
    }
}

impl ScenarioRequest {
    /// Builds the first scenario's input, falling back to `today` for the reference date.
    pub fn to_input(&self, today: NaiveDate) -> VrsInput {
        self.employee.to_input(self.reference_date.unwrap_or(today))
    }
}
