//! Gujarat Pattern service compensation.
//!
//! This module computes the two compensation components: 35 days' salary
//! per completed year of service and 25 days' salary per year of leftover
//! service until superannuation.

use rust_decimal::Decimal;

use crate::config::CompensationRules;
use crate::models::{AuditStep, ServicePeriod, YearFractionConvention};

/// The result of the 35/25 calculation, including audit steps.
#[derive(Debug, Clone)]
pub struct ServiceCompensationResult {
    /// Completed service in decimal years under the convention used.
    pub completed_years_decimal: Decimal,
    /// Leftover service in decimal years under the convention used.
    pub leftover_years_decimal: Decimal,
    /// `daily_salary × completed_service_days × completed_years_decimal`.
    pub completed: Decimal,
    /// `daily_salary × leftover_service_days × leftover_years_decimal`.
    pub leftover: Decimal,
    /// `completed + leftover`.
    pub total: Decimal,
    /// One audit step per component.
    pub audit_steps: Vec<AuditStep>,
}

/// Computes completed and leftover service compensation.
///
/// The same [`YearFractionConvention`] converts both periods into decimal
/// years, so the two components are never computed under mixed rules.
///
/// # Examples
///
/// ```
/// use vrs_engine::calculation::calculate_service_compensation;
/// use vrs_engine::config::SchemeConfig;
/// use vrs_engine::models::{ServicePeriod, YearFractionConvention};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = SchemeConfig::gujarat_pattern();
/// let result = calculate_service_compensation(
///     Decimal::from_str("4825.8").unwrap(),
///     ServicePeriod::from_months(394),
///     ServicePeriod::from_months(33),
///     config.compensation(),
///     YearFractionConvention::DecimalPoint,
///     1,
/// );
/// assert_eq!(result.completed, Decimal::from_str("5421786.30").unwrap());
/// ```
pub fn calculate_service_compensation(
    daily_salary: Decimal,
    completed: ServicePeriod,
    leftover: ServicePeriod,
    rules: &CompensationRules,
    convention: YearFractionConvention,
    step_number: u32,
) -> ServiceCompensationResult {
    let completed_years_decimal = completed.decimal_years(convention);
    let leftover_years_decimal = leftover.decimal_years(convention);

    let completed_amount = daily_salary * rules.completed_service_days * completed_years_decimal;
    let leftover_amount = daily_salary * rules.leftover_service_days * leftover_years_decimal;
    let total = completed_amount + leftover_amount;

    let audit_steps = vec![
        component_step(
            step_number,
            "completed_service_compensation",
            "Completed Service Compensation",
            "daily_salary × completed_service_days × completed_years",
            daily_salary,
            rules.completed_service_days,
            completed,
            completed_years_decimal,
            convention,
            completed_amount,
        ),
        component_step(
            step_number + 1,
            "leftover_service_compensation",
            "Leftover Service Compensation",
            "daily_salary × leftover_service_days × leftover_years",
            daily_salary,
            rules.leftover_service_days,
            leftover,
            leftover_years_decimal,
            convention,
            leftover_amount,
        ),
    ];

    ServiceCompensationResult {
        completed_years_decimal,
        leftover_years_decimal,
        completed: completed_amount,
        leftover: leftover_amount,
        total,
        audit_steps,
    }
}

#[allow(clippy::too_many_arguments)]
fn component_step(
    step_number: u32,
    rule_id: &str,
    rule_name: &str,
    formula: &str,
    daily_salary: Decimal,
    days: Decimal,
    period: ServicePeriod,
    years_decimal: Decimal,
    convention: YearFractionConvention,
    amount: Decimal,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        formula: formula.to_string(),
        input: serde_json::json!({
            "daily_salary": daily_salary.normalize().to_string(),
            "days": days.to_string(),
            "years": period.years,
            "months": period.months,
            "year_fraction_convention": convention.as_str()
        }),
        output: serde_json::json!({
            "years_decimal": years_decimal.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "Rs {} x {} days x {} years ({}y {}m, {}) = Rs {}",
            daily_salary.round_dp(2),
            days,
            years_decimal.round_dp(4),
            period.years,
            period.months,
            convention.as_str(),
            amount.round_dp(2)
        ),
    }
}
