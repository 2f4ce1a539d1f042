//! Statutory minimum and the bound applied to total compensation.
//!
//! Two mutually exclusive bound rules exist: the total is either raised to
//! the statutory minimum, or capped at what the employee would earn by
//! staying until superannuation.

use rust_decimal::Decimal;

use crate::config::CompensationRules;
use crate::models::{AuditStep, BoundRule};

/// The result of applying the bound rule, including the audit step.
#[derive(Debug, Clone)]
pub struct FinalCompensationResult {
    /// `max(minimum_compensation_floor, minimum_compensation_days × daily_salary)`.
    pub statutory_minimum: Decimal,
    /// `total_pay × leftover_months`.
    pub continued_service_earnings: Decimal,
    /// The rule that was applied.
    pub bound_rule: BoundRule,
    /// Whether the bound changed the total.
    pub bound_applied: bool,
    /// The amount payable.
    pub final_compensation: Decimal,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
}

/// Returns the statutory minimum compensation.
///
/// # Examples
///
/// ```
/// use vrs_engine::calculation::statutory_minimum;
/// use vrs_engine::config::SchemeConfig;
/// use rust_decimal::Decimal;
///
/// let config = SchemeConfig::gujarat_pattern();
///
/// // 250 days at 50/day is below the Rs. 25,000 floor
/// assert_eq!(statutory_minimum(Decimal::from(50), config.compensation()), Decimal::from(25000));
///
/// // 250 days at 1000/day exceeds it
/// assert_eq!(statutory_minimum(Decimal::from(1000), config.compensation()), Decimal::from(250000));
/// ```
pub fn statutory_minimum(daily_salary: Decimal, rules: &CompensationRules) -> Decimal {
    let days_based = daily_salary * rules.minimum_compensation_days;
    days_based.max(rules.minimum_compensation_floor)
}

/// Returns the salary the employee would draw by staying until superannuation.
pub fn continued_service_earnings(total_pay: Decimal, leftover_months: u32) -> Decimal {
    total_pay * Decimal::from(leftover_months)
}

/// Applies the configured bound rule to the 35/25 total.
///
/// - [`BoundRule::FloorAtMinimum`]: `max(total, statutory_minimum)`
/// - [`BoundRule::CapAtContinuedEarnings`]: `min(total, total_pay × leftover_months)`
///
/// # Examples
///
/// ```
/// use vrs_engine::calculation::calculate_final_compensation;
/// use vrs_engine::config::SchemeConfig;
/// use vrs_engine::models::BoundRule;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = SchemeConfig::gujarat_pattern();
/// let result = calculate_final_compensation(
///     Decimal::from_str("5753560.05").unwrap(),
///     Decimal::from_str("4825.8").unwrap(),
///     Decimal::from(144774),
///     33,
///     config.compensation(),
///     BoundRule::CapAtContinuedEarnings,
///     1,
/// );
/// assert_eq!(result.final_compensation, Decimal::from(4777542));
/// assert!(result.bound_applied);
/// ```
pub fn calculate_final_compensation(
    total_compensation: Decimal,
    daily_salary: Decimal,
    total_pay: Decimal,
    leftover_months: u32,
    rules: &CompensationRules,
    bound_rule: BoundRule,
    step_number: u32,
) -> FinalCompensationResult {
    let minimum = statutory_minimum(daily_salary, rules);
    let cap = continued_service_earnings(total_pay, leftover_months);

    let (final_compensation, reasoning) = match bound_rule {
        BoundRule::FloorAtMinimum => {
            let amount = total_compensation.max(minimum);
            let reasoning = if amount > total_compensation {
                format!(
                    "Total Rs {} is below the statutory minimum Rs {}; minimum paid",
                    total_compensation.round_dp(2),
                    minimum.round_dp(2)
                )
            } else {
                format!(
                    "Total Rs {} meets the statutory minimum Rs {}",
                    total_compensation.round_dp(2),
                    minimum.round_dp(2)
                )
            };
            (amount, reasoning)
        }
        BoundRule::CapAtContinuedEarnings => {
            let amount = total_compensation.min(cap);
            let reasoning = if amount < total_compensation {
                format!(
                    "Total Rs {} exceeds salary for {} remaining months Rs {}; capped",
                    total_compensation.round_dp(2),
                    leftover_months,
                    cap.round_dp(2)
                )
            } else {
                format!(
                    "Total Rs {} is within salary for {} remaining months Rs {}",
                    total_compensation.round_dp(2),
                    leftover_months,
                    cap.round_dp(2)
                )
            };
            (amount, reasoning)
        }
    };

    let bound_applied = final_compensation != total_compensation;

    let audit_step = AuditStep {
        step_number,
        rule_id: "final_compensation".to_string(),
        rule_name: "Final Compensation".to_string(),
        formula: match bound_rule {
            BoundRule::FloorAtMinimum => {
                "max(total, max(floor, minimum_days × daily_salary))".to_string()
            }
            BoundRule::CapAtContinuedEarnings => {
                "min(total, total_pay × leftover_months)".to_string()
            }
        },
        input: serde_json::json!({
            "total_compensation": total_compensation.normalize().to_string(),
            "statutory_minimum": minimum.normalize().to_string(),
            "continued_service_earnings": cap.normalize().to_string(),
            "bound_rule": bound_rule.as_str()
        }),
        output: serde_json::json!({
            "final_compensation": final_compensation.normalize().to_string(),
            "bound_applied": bound_applied
        }),
        reasoning,
    };

    FinalCompensationResult {
        statutory_minimum: minimum,
        continued_service_earnings: cap,
        bound_rule,
        bound_applied,
        final_compensation,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchemeConfig;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn apply(total: &str, daily: &str, months: u32, rule: BoundRule) -> FinalCompensationResult {
        let config = SchemeConfig::gujarat_pattern();
        let daily = dec(daily);
        calculate_final_compensation(
            dec(total),
            daily,
            daily * dec("30"),
            months,
            config.compensation(),
            rule,
            1,
        )
    }

    #[test]
    fn test_statutory_minimum_uses_higher_of_floor_and_days() {
        let config = SchemeConfig::gujarat_pattern();
        assert_eq!(statutory_minimum(dec("4825.8"), config.compensation()), dec("1206450"));
        assert_eq!(statutory_minimum(dec("99"), config.compensation()), dec("25000"));
        assert_eq!(statutory_minimum(dec("100"), config.compensation()), dec("25000"));
    }

    #[test]
    fn test_floor_keeps_total_above_minimum() {
        let result = apply("5877434.25", "4825.8", 33, BoundRule::FloorAtMinimum);
        assert_eq!(result.final_compensation, dec("5877434.25"));
        assert!(!result.bound_applied);
    }

    #[test]
    fn test_floor_raises_total_to_minimum() {
        // One year of service at 1000/day: 35,000 against a 250,000 minimum
        let result = apply("35000", "1000", 0, BoundRule::FloorAtMinimum);
        assert_eq!(result.final_compensation, dec("250000"));
        assert!(result.bound_applied);
        assert!(result.audit_step.reasoning.contains("minimum paid"));
    }

    #[test]
    fn test_floor_applies_fixed_floor_for_low_pay() {
        let result = apply("700", "20", 0, BoundRule::FloorAtMinimum);
        assert_eq!(result.final_compensation, dec("25000"));
    }

    #[test]
    fn test_cap_limits_to_continued_earnings() {
        let result = apply("5753560.05", "4825.8", 33, BoundRule::CapAtContinuedEarnings);
        assert_eq!(result.continued_service_earnings, dec("4777542"));
        assert_eq!(result.final_compensation, dec("4777542"));
        assert!(result.bound_applied);
    }

    #[test]
    fn test_cap_leaves_smaller_total_alone() {
        let result = apply("1000000", "4825.8", 33, BoundRule::CapAtContinuedEarnings);
        assert_eq!(result.final_compensation, dec("1000000"));
        assert!(!result.bound_applied);
    }

    #[test]
    fn test_cap_with_no_leftover_service_pays_nothing() {
        let result = apply("1000000", "4825.8", 0, BoundRule::CapAtContinuedEarnings);
        assert_eq!(result.final_compensation, Decimal::ZERO);
    }

    #[test]
    fn test_audit_step_records_rule() {
        let result = apply("1000000", "4825.8", 33, BoundRule::CapAtContinuedEarnings);
        assert_eq!(result.audit_step.rule_id, "final_compensation");
        assert_eq!(result.audit_step.input["bound_rule"], "cap_at_continued_earnings");
        assert_eq!(result.audit_step.output["bound_applied"], false);
    }
}
