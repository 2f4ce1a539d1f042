//! End-to-end VRS calculation.
//!
//! [`calculate_vrs`] validates the input, runs every rule in order and
//! assembles the [`VrsCalculation`] with its audit trace.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::config::SchemeConfig;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, BoundRule, CompensationBreakdown, ServiceSummary,
    VrsBreakdown, VrsCalculation, VrsInput, YearFractionConvention,
};

use super::continued_service::compare_continued_service;
use super::daily_salary::calculate_daily_salary;
use super::final_compensation::calculate_final_compensation;
use super::investment::project_investment;
use super::notice_pay::calculate_notice_pay;
use super::service_compensation::calculate_service_compensation;
use super::service_duration::calculate_service_duration;
use super::tax::calculate_tax;

/// The deterministic output of the rule pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VrsEvaluation {
    /// The calculated figures.
    pub breakdown: VrsBreakdown,
    /// One step per rule applied, in order.
    pub steps: Vec<AuditStep>,
    /// Conditions worth flagging to the caller.
    pub warnings: Vec<AuditWarning>,
}

/// Runs the full rule pipeline without the per-request envelope.
///
/// The same input and configuration always produce an identical
/// [`VrsEvaluation`].
///
/// # Errors
///
/// - [`crate::error::EngineError::InvalidInput`] if validation fails
/// - [`crate::error::EngineError::CalculationError`] if a date, growth factor or matured investment is out of range
pub fn evaluate_vrs(input: &VrsInput, config: &SchemeConfig) -> EngineResult<VrsEvaluation> {
    input.validate()?;

    let rules = config.compensation();
    let policy = config.policy();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let salary = calculate_daily_salary(input, rules, step_number);
    let pay = salary.pay;
    steps.push(salary.audit_step);
    step_number += 1;

    let service = calculate_service_duration(input, rules.superannuation_age, step_number)?;
    steps.push(service.audit_step);
    step_number += 1;

    if input.reference_date >= service.superannuation_date {
        warnings.push(AuditWarning {
            code: "PAST_SUPERANNUATION".to_string(),
            message: format!(
                "Reference date {} is on or after superannuation on {}; leftover service is zero",
                input.reference_date, service.superannuation_date
            ),
            severity: "medium".to_string(),
        });
    }

    let components = calculate_service_compensation(
        pay.daily_salary,
        service.completed,
        service.leftover,
        rules,
        policy.year_fraction_convention,
        step_number,
    );
    step_number += components.audit_steps.len() as u32;
    steps.extend(components.audit_steps);

    if policy.year_fraction_convention == YearFractionConvention::DecimalPoint {
        warnings.push(AuditWarning {
            code: "DECIMAL_POINT_YEARS".to_string(),
            message: "Service years read as years.months (months / 100), not true fractional years"
                .to_string(),
            severity: "low".to_string(),
        });
    }

    let bounded = calculate_final_compensation(
        components.total,
        pay.daily_salary,
        pay.total_pay,
        service.leftover.total_months,
        rules,
        policy.bound_rule,
        step_number,
    );
    steps.push(bounded.audit_step);
    step_number += 1;

    if policy.bound_rule == BoundRule::CapAtContinuedEarnings
        && bounded.final_compensation < bounded.statutory_minimum
    {
        warnings.push(AuditWarning {
            code: "BELOW_STATUTORY_MINIMUM".to_string(),
            message: format!(
                "Capped compensation Rs {} is below the statutory minimum Rs {}",
                bounded.final_compensation.round_dp(2),
                bounded.statutory_minimum.round_dp(2)
            ),
            severity: "high".to_string(),
        });
    }

    let notice = calculate_notice_pay(pay.daily_salary, rules, step_number);
    steps.push(notice.audit_step);
    step_number += 1;

    let tax = calculate_tax(bounded.final_compensation, config.tax(), step_number);
    steps.push(tax.audit_step);
    step_number += 1;

    let investment = project_investment(
        tax.treatment.after_tax,
        config.projection().investment_rate,
        service.leftover.fractional_years(),
        step_number,
    )?;
    steps.push(investment.audit_step);
    step_number += 1;

    let vrs_net_payout = tax.treatment.after_tax + notice.notice_pay;
    let continued = compare_continued_service(
        pay.total_pay,
        service.leftover.total_months,
        vrs_net_payout,
        config.tax(),
        config.projection(),
        step_number,
    );
    steps.push(continued.audit_step);

    let total_payout = bounded.final_compensation + notice.notice_pay;

    let breakdown = VrsBreakdown {
        reference_date: input.reference_date,
        policy,
        pay,
        service: ServiceSummary {
            superannuation_date: service.superannuation_date,
            current_age: service.current_age,
            completed: service.completed,
            completed_years_decimal: components.completed_years_decimal,
            leftover: service.leftover,
            leftover_years_decimal: components.leftover_years_decimal,
        },
        compensation: CompensationBreakdown {
            completed: components.completed,
            leftover: components.leftover,
            total: components.total,
            statutory_minimum: bounded.statutory_minimum,
            continued_service_earnings: bounded.continued_service_earnings,
            bound_rule: bounded.bound_rule,
            bound_applied: bounded.bound_applied,
            final_compensation: bounded.final_compensation,
        },
        notice_pay: notice.notice_pay,
        total_payout,
        tax: tax.treatment,
        investment: investment.projection,
        continued_service: continued.comparison,
    };

    Ok(VrsEvaluation {
        breakdown,
        steps,
        warnings,
    })
}

/// Calculates VRS compensation for one employee.
///
/// Wraps [`evaluate_vrs`] with a calculation ID, timestamp, engine version
/// and timed audit trace.
///
/// # Errors
///
/// Propagates every error from [`evaluate_vrs`].
///
/// # Examples
///
/// ```
/// use vrs_engine::calculation::calculate_vrs;
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
/// let result = calculate_vrs(&input, &SchemeConfig::gujarat_pattern()).unwrap();
/// assert_eq!(result.breakdown.notice_pay, Decimal::from(144774));
/// assert_eq!(result.breakdown.service.completed.years, 32);
/// ```
pub fn calculate_vrs(input: &VrsInput, config: &SchemeConfig) -> EngineResult<VrsCalculation> {
    let start_time = Instant::now();
    let evaluation = evaluate_vrs(input, config)?;
    let duration_us = start_time.elapsed().as_micros() as u64;

    debug!(
        scheme = %config.metadata().code,
        convention = evaluation.breakdown.policy.year_fraction_convention.as_str(),
        bound_rule = evaluation.breakdown.policy.bound_rule.as_str(),
        final_compensation = %evaluation.breakdown.compensation.final_compensation.round_dp(2),
        warnings = evaluation.warnings.len(),
        duration_us,
        "VRS calculation evaluated"
    );

    Ok(VrsCalculation {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        scheme_code: config.metadata().code.clone(),
        breakdown: evaluation.breakdown,
        audit_trace: AuditTrace {
            steps: evaluation.steps,
            warnings: evaluation.warnings,
            duration_us,
        },
    })
}

/// Money rounded to paise for display or comparison against printed figures.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
