//! Calculation result models for the VRS compensation engine.
//!
//! This module contains the [`VrsCalculation`] envelope and the
//! [`VrsBreakdown`] it wraps, along with the audit trace that records
//! every rule applied while producing them.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BoundRule, Policy, ServicePeriod};

/// Pay figures derived from the input's components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Basic pay plus stagnation increment and personal pay.
    pub total_basic_pay: Decimal,
    /// Total basic pay plus dearness allowance (monthly).
    pub total_pay: Decimal,
    /// `total_pay` divided by the fixed days-per-month convention.
    pub daily_salary: Decimal,
}

/// Service durations on either side of the reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSummary {
    /// The superannuation boundary used for leftover service.
    pub superannuation_date: NaiveDate,
    /// Age at the reference date in fractional years, when a date of birth is known.
    pub current_age: Option<Decimal>,
    /// Whole months from joining to the reference date.
    pub completed: ServicePeriod,
    /// `completed` in decimal years under the active convention.
    pub completed_years_decimal: Decimal,
    /// Whole months from the reference date to superannuation, clamped at zero.
    pub leftover: ServicePeriod,
    /// `leftover` in decimal years under the active convention.
    pub leftover_years_decimal: Decimal,
}

/// The 35/25 compensation components and the bound applied to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationBreakdown {
    /// Compensation for completed service (35 days per year).
    pub completed: Decimal,
    /// Compensation for leftover service (25 days per year).
    pub leftover: Decimal,
    /// `completed + leftover`.
    pub total: Decimal,
    /// `max(fixed floor, 250 days' salary)`.
    pub statutory_minimum: Decimal,
    /// Monthly pay times months until superannuation.
    pub continued_service_earnings: Decimal,
    /// The bound rule that produced `final_compensation`.
    pub bound_rule: BoundRule,
    /// Whether the bound changed the total.
    pub bound_applied: bool,
    /// The amount payable as VRS ex-gratia.
    pub final_compensation: Decimal,
}

/// Flat-rate tax treatment of the final compensation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxTreatment {
    /// The amount being taxed.
    pub gross: Decimal,
    /// Amount exempt from tax.
    pub exemption_threshold: Decimal,
    /// `max(0, gross - exemption_threshold)`.
    pub taxable: Decimal,
    /// The flat rate applied to `taxable`.
    pub tax_rate: Decimal,
    /// `taxable × tax_rate`.
    pub tax: Decimal,
    /// `gross - tax`.
    pub after_tax: Decimal,
}

/// Compound growth of the after-tax payout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentProjection {
    /// The invested amount.
    pub principal: Decimal,
    /// Annual growth rate as a fraction (0.065 = 6.5%).
    pub annual_rate: Decimal,
    /// Investment horizon in fractional years.
    pub years: Decimal,
    /// `principal × (1 + annual_rate)^years`.
    pub matured: Decimal,
    /// `matured - principal`.
    pub growth: Decimal,
}

/// A single point on a year-by-year growth curve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthPoint {
    /// Whole years since investment.
    pub year: u32,
    /// Value at the end of `year`.
    pub amount: Decimal,
}

/// Whether taking VRS leaves the employee better or worse off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOutcome {
    /// The VRS payout exceeds continued-service earnings.
    Gain,
    /// Continued service earns more than the VRS payout.
    Loss,
    /// Both options are worth the same.
    BreakEven,
}

/// VRS payout measured against working on until superannuation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinuedServiceComparison {
    /// Months of pay forgone by leaving now.
    pub months: u32,
    /// Salary over those months before tax.
    pub gross_earnings: Decimal,
    /// `gross_earnings` after the flat tax rate.
    pub net_earnings: Decimal,
    /// Untaxed provident-fund accrual over the same months.
    pub provident_fund: Decimal,
    /// `net_earnings + provident_fund`.
    pub continued_total: Decimal,
    /// After-tax compensation plus notice pay.
    pub vrs_net_payout: Decimal,
    /// `vrs_net_payout - continued_total`; positive means VRS pays more.
    pub difference: Decimal,
    /// The sign of `difference`.
    pub outcome: ComparisonOutcome,
    /// Years of salary the VRS payout is worth, rounded up. `None` when pay is zero.
    pub break_even_years: Option<u32>,
}

/// The deterministic part of a VRS calculation.
///
/// Identical inputs and configuration always produce an identical
/// breakdown; see [`VrsCalculation`] for the per-request envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VrsBreakdown {
    /// The reference date the calculation was evaluated at.
    pub reference_date: NaiveDate,
    /// The policy switches in force.
    pub policy: Policy,
    /// Pay figures.
    pub pay: PayBreakdown,
    /// Service durations.
    pub service: ServiceSummary,
    /// Compensation components and final amount.
    pub compensation: CompensationBreakdown,
    /// Notice pay (30 days' salary).
    pub notice_pay: Decimal,
    /// `final_compensation + notice_pay`.
    pub total_payout: Decimal,
    /// Tax treatment of the final compensation.
    pub tax: TaxTreatment,
    /// Growth of the after-tax amount over the leftover service period.
    pub investment: InvestmentProjection,
    /// Comparison against continuing to work.
    pub continued_service: ContinuedServiceComparison,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The formula the rule evaluates.
    pub formula: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag conditions that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use vrs_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a VRS calculation.
///
/// Wraps the deterministic [`VrsBreakdown`] with request metadata and an
/// audit trace. It is produced fresh for every request and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VrsCalculation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Code of the scheme configuration used.
    pub scheme_code: String,
    /// The calculated figures.
    #[serde(flatten)]
    pub breakdown: VrsBreakdown,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
