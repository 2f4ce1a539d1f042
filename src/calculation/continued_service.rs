//! Comparison of the VRS payout against working on until superannuation.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::{ProjectionRules, TaxRules};
use crate::models::{AuditStep, ComparisonOutcome, ContinuedServiceComparison};

/// The result of the continued-service comparison, including the audit step.
#[derive(Debug, Clone)]
pub struct ContinuedServiceResult {
    /// The comparison.
    pub comparison: ContinuedServiceComparison,
    /// The audit step recording this comparison.
    pub audit_step: AuditStep,
}

/// Compares the net VRS payout with the net earnings of staying on.
///
/// Salary for the leftover months is taxed at the flat rate with no
/// exemption; provident-fund accrual is added untaxed. A positive
/// difference means VRS pays more.
///
/// # Arguments
///
/// * `total_pay` - Monthly pay (total basic pay plus DA)
/// * `leftover_months` - Months until superannuation
/// * `vrs_net_payout` - After-tax compensation plus notice pay
/// * `tax` - Tax rules supplying the flat rate
/// * `projection` - Rates supplying the provident-fund share
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use vrs_engine::calculation::compare_continued_service;
/// use vrs_engine::config::SchemeConfig;
/// use vrs_engine::models::ComparisonOutcome;
/// use rust_decimal::Decimal;
///
/// let config = SchemeConfig::gujarat_pattern();
/// let result = compare_continued_service(
///     Decimal::from(100_000),
///     12,
///     Decimal::from(2_000_000),
///     config.tax(),
///     config.projection(),
///     1,
/// );
/// // 1.2M gross, 816k net, 144k provident fund
/// assert_eq!(result.comparison.continued_total, Decimal::from(960_000));
/// assert_eq!(result.comparison.outcome, ComparisonOutcome::Gain);
/// ```
pub fn compare_continued_service(
    total_pay: Decimal,
    leftover_months: u32,
    vrs_net_payout: Decimal,
    tax: &TaxRules,
    projection: &ProjectionRules,
    step_number: u32,
) -> ContinuedServiceResult {
    let months = Decimal::from(leftover_months);
    let gross_earnings = total_pay * months;
    let net_earnings = gross_earnings * (Decimal::ONE - tax.tax_rate);
    let provident_fund = total_pay * projection.provident_fund_rate * months;
    let continued_total = net_earnings + provident_fund;
    let difference = vrs_net_payout - continued_total;

    let outcome = if difference > Decimal::ZERO {
        ComparisonOutcome::Gain
    } else if difference < Decimal::ZERO {
        ComparisonOutcome::Loss
    } else {
        ComparisonOutcome::BreakEven
    };

    let break_even_years = break_even_years(vrs_net_payout, total_pay);

    let reasoning = match outcome {
        ComparisonOutcome::Gain => format!(
            "VRS pays Rs {} more than {} months of continued service",
            difference.round_dp(2),
            leftover_months
        ),
        ComparisonOutcome::Loss => format!(
            "Continued service for {} months pays Rs {} more than VRS",
            leftover_months,
            difference.abs().round_dp(2)
        ),
        ComparisonOutcome::BreakEven => format!(
            "VRS and {} months of continued service pay the same",
            leftover_months
        ),
    };

    ContinuedServiceResult {
        comparison: ContinuedServiceComparison {
            months: leftover_months,
            gross_earnings,
            net_earnings,
            provident_fund,
            continued_total,
            vrs_net_payout,
            difference,
            outcome,
            break_even_years,
        },
        audit_step: AuditStep {
            step_number,
            rule_id: "continued_service_comparison".to_string(),
            rule_name: "Continued Service Comparison".to_string(),
            formula: "vrs_net_payout - (total_pay × months × (1 - tax_rate) + total_pay × pf_rate × months)"
                .to_string(),
            input: serde_json::json!({
                "total_pay": total_pay.normalize().to_string(),
                "months": leftover_months,
                "vrs_net_payout": vrs_net_payout.normalize().to_string(),
                "tax_rate": tax.tax_rate.to_string(),
                "provident_fund_rate": projection.provident_fund_rate.to_string()
            }),
            output: serde_json::json!({
                "continued_total": continued_total.normalize().to_string(),
                "difference": difference.normalize().to_string(),
                "outcome": outcome,
                "break_even_years": break_even_years
            }),
            reasoning,
        },
    }
}

/// Whole years of salary the payout is worth, rounded up.
///
/// Returns `None` when monthly pay is zero.
pub fn break_even_years(payout: Decimal, total_pay: Decimal) -> Option<u32> {
    if total_pay <= Decimal::ZERO {
        return None;
    }
    (payout / (total_pay * Decimal::from(12))).ceil().to_u32()
}
