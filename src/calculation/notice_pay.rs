//! Notice pay calculation.

use rust_decimal::Decimal;

use crate::config::CompensationRules;
use crate::models::AuditStep;

use super::daily_salary::days_salary;

/// The result of the notice pay calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct NoticePayResult {
    /// Salary paid in lieu of notice.
    pub notice_pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes notice pay as `daily_salary × notice_pay_days`.
///
/// # Examples
///
/// ```
/// use vrs_engine::calculation::calculate_notice_pay;
/// use vrs_engine::config::SchemeConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = SchemeConfig::gujarat_pattern();
/// let result = calculate_notice_pay(Decimal::from_str("4825.8").unwrap(), config.compensation(), 1);
/// assert_eq!(result.notice_pay, Decimal::from(144774));
/// ```
pub fn calculate_notice_pay(
    daily_salary: Decimal,
    rules: &CompensationRules,
    step_number: u32,
) -> NoticePayResult {
    let notice_pay = days_salary(daily_salary, rules.notice_pay_days);

    NoticePayResult {
        notice_pay,
        audit_step: AuditStep {
            step_number,
            rule_id: "notice_pay".to_string(),
            rule_name: "Notice Pay".to_string(),
            formula: "daily_salary × notice_pay_days".to_string(),
            input: serde_json::json!({
                "daily_salary": daily_salary.normalize().to_string(),
                "notice_pay_days": rules.notice_pay_days.to_string()
            }),
            output: serde_json::json!({
                "notice_pay": notice_pay.normalize().to_string()
            }),
            reasoning: format!(
                "Rs {} x {} days = Rs {}",
                daily_salary.round_dp(2),
                rules.notice_pay_days,
                notice_pay.round_dp(2)
            ),
        },
    }
}
