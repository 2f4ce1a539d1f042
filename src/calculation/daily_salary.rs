//! Combined pay and daily salary calculation.
//!
//! Daily salary uses a fixed 30-day month regardless of the calendar
//! month's actual length.

use rust_decimal::Decimal;

use crate::config::CompensationRules;
use crate::models::{AuditStep, PayBreakdown, VrsInput};

/// The result of the pay calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct DailySalaryResult {
    /// Combined pay figures.
    pub pay: PayBreakdown,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Combines the pay components and derives the daily salary.
///
/// `total_pay = basic + stagnation increment + personal pay + DA`, and
/// `daily_salary = total_pay / days_per_month`.
///
/// # Examples
///
/// ```
/// use vrs_engine::calculation::calculate_daily_salary;
/// use vrs_engine::config::SchemeConfig;
/// use vrs_engine::models::VrsInput;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
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
/// let config = SchemeConfig::gujarat_pattern();
/// let result = calculate_daily_salary(&input, config.compensation(), 1);
/// assert_eq!(result.pay.total_pay, Decimal::from(144774));
/// assert_eq!(result.pay.daily_salary, Decimal::from_str("4825.8").unwrap());
/// ```
pub fn calculate_daily_salary(
    input: &VrsInput,
    rules: &CompensationRules,
    step_number: u32,
) -> DailySalaryResult {
    let total_basic_pay = input.total_basic_pay();
    let total_pay = input.total_pay();
    let daily_salary = total_pay / rules.days_per_month;

    let audit_step = AuditStep {
        step_number,
        rule_id: "daily_salary".to_string(),
        rule_name: "Daily Salary".to_string(),
        formula: "(basic + stagnation_increment + personal_pay + da) / days_per_month"
            .to_string(),
        input: serde_json::json!({
            "basic_pay": input.basic_pay.to_string(),
            "stagnation_increment": input.stagnation_increment.to_string(),
            "personal_pay": input.personal_pay.to_string(),
            "dearness_allowance": input.dearness_allowance.to_string(),
            "days_per_month": rules.days_per_month.to_string()
        }),
        output: serde_json::json!({
            "total_basic_pay": total_basic_pay.normalize().to_string(),
            "total_pay": total_pay.normalize().to_string(),
            "daily_salary": daily_salary.normalize().to_string()
        }),
        reasoning: format!(
            "Rs {} / {} = Rs {} per day",
            total_pay.normalize(),
            rules.days_per_month,
            daily_salary.round_dp(2)
        ),
    };

    DailySalaryResult {
        pay: PayBreakdown {
            total_basic_pay,
            total_pay,
            daily_salary,
        },
        audit_step,
    }
}

/// Salary for a number of days at the given daily rate.
pub fn days_salary(daily_salary: Decimal, days: Decimal) -> Decimal {
    daily_salary * days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchemeConfig;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_input(basic: &str, da: &str) -> VrsInput {
        VrsInput {
            basic_pay: dec(basic),
            dearness_allowance: dec(da),
            stagnation_increment: Decimal::ZERO,
            personal_pay: Decimal::ZERO,
            date_of_joining: NaiveDate::from_ymd_opt(1992, 11, 24).unwrap(),
            date_of_birth: Some(NaiveDate::from_ymd_opt(1970, 6, 30).unwrap()),
            date_of_retirement: None,
            reference_date: NaiveDate::from_ymd_opt(2025, 9, 30).unwrap(),
        }
    }

    #[test]
    fn test_daily_salary_is_total_pay_over_thirty() {
        let config = SchemeConfig::gujarat_pattern();
        let input = create_test_input("44260", "100514");

        let result = calculate_daily_salary(&input, config.compensation(), 1);

        assert_eq!(result.pay.total_pay, dec("144774"));
        assert_eq!(result.pay.daily_salary, dec("4825.80"));
        assert_eq!(result.pay.daily_salary * dec("30"), result.pay.total_pay);
    }

    #[test]
    fn test_supplements_count_into_total_basic_pay() {
        let config = SchemeConfig::gujarat_pattern();
        let mut input = create_test_input("40000", "60000");
        input.stagnation_increment = dec("1500");
        input.personal_pay = dec("500");

        let result = calculate_daily_salary(&input, config.compensation(), 1);

        assert_eq!(result.pay.total_basic_pay, dec("42000"));
        assert_eq!(result.pay.total_pay, dec("102000"));
        assert_eq!(result.pay.daily_salary, dec("3400"));
    }

    #[test]
    fn test_daily_salary_keeps_full_precision() {
        let config = SchemeConfig::gujarat_pattern();
        let input = create_test_input("50000", "50000");

        let result = calculate_daily_salary(&input, config.compensation(), 1);

        assert_eq!(result.pay.daily_salary.round_dp(4), dec("3333.3333"));
        assert!(result.pay.daily_salary.scale() > 4);
    }

    #[test]
    fn test_zero_pay_gives_zero_daily_salary() {
        let config = SchemeConfig::gujarat_pattern();
        let input = create_test_input("0", "0");

        let result = calculate_daily_salary(&input, config.compensation(), 1);
        assert_eq!(result.pay.daily_salary, Decimal::ZERO);
    }

    #[test]
    fn test_audit_step_contents() {
        let config = SchemeConfig::gujarat_pattern();
        let input = create_test_input("44260", "100514");

        let result = calculate_daily_salary(&input, config.compensation(), 2);

        assert_eq!(result.audit_step.step_number, 2);
        assert_eq!(result.audit_step.rule_id, "daily_salary");
        assert_eq!(result.audit_step.output["total_pay"], "144774");
        assert_eq!(result.audit_step.output["daily_salary"], "4825.8");
        assert!(result.audit_step.reasoning.contains("4825.8"));
    }

    #[test]
    fn test_days_salary() {
        assert_eq!(days_salary(dec("4825.8"), dec("30")), dec("144774"));
    }
}
