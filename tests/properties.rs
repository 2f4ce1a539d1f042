//! Property tests for the VRS calculator.

use chrono::{Datelike, Months, NaiveDate};
use proptest::prelude::{Strategy, prop_assert, prop_assert_eq, prop_assume, proptest};
use rust_decimal::Decimal;

use vrs_engine::calculation::{evaluate_vrs, months_between, superannuation_date};
use vrs_engine::config::SchemeConfig;
use vrs_engine::models::{BoundRule, Policy, VrsInput, YearFractionConvention};

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

/// `day` of the month starting at `first`, clamped to the month's last day.
fn day_of_month(first: NaiveDate, day: u32) -> NaiveDate {
    first
        .with_day(day)
        .unwrap_or_else(|| (first + Months::new(1)).pred_opt().unwrap())
}

/// Employees with any day of the month, including 29th to 31st.
fn input_strategy() -> impl Strategy<Value = VrsInput> {
    (
        1u32..200_000,
        0u32..200_000,
        1980i32..2015,
        1u32..=12,
        1u32..=31,
        216u32..480,
        1u32..=31,
        1u32..480,
        1u32..=31,
    )
        .prop_map(
            |(basic, da, join_year, join_month, join_day, age_at_joining, birth_day, service, ref_day)| {
                let joining_month = first_of_month(join_year, join_month);
                let date_of_joining = day_of_month(joining_month, join_day);
                let date_of_birth = day_of_month(joining_month - Months::new(age_at_joining), birth_day);
                let reference_date = day_of_month(joining_month + Months::new(service), ref_day);

                VrsInput {
                    basic_pay: Decimal::from(basic),
                    dearness_allowance: Decimal::from(da),
                    stagnation_increment: Decimal::ZERO,
                    personal_pay: Decimal::ZERO,
                    date_of_joining,
                    date_of_birth: Some(date_of_birth),
                    date_of_retirement: None,
                    reference_date,
                }
            },
        )
}

fn policy_strategy() -> impl Strategy<Value = Policy> {
    (proptest::bool::ANY, proptest::bool::ANY).prop_map(|(decimal_point, cap)| Policy {
        year_fraction_convention: if decimal_point {
            YearFractionConvention::DecimalPoint
        } else {
            YearFractionConvention::Twelfths
        },
        bound_rule: if cap {
            BoundRule::CapAtContinuedEarnings
        } else {
            BoundRule::FloorAtMinimum
        },
    })
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(64))]

    #[test]
    fn prop_evaluation_is_deterministic(input in input_strategy(), policy in policy_strategy()) {
        let config = SchemeConfig::gujarat_pattern().with_policy(policy);

        let first = evaluate_vrs(&input, &config).unwrap();
        let second = evaluate_vrs(&input, &config).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_daily_salary_is_exactly_monthly_pay_over_thirty(input in input_strategy()) {
        let result = evaluate_vrs(&input, &SchemeConfig::gujarat_pattern()).unwrap();
        prop_assert_eq!(
            result.breakdown.pay.daily_salary,
            (input.basic_pay + input.dearness_allowance) / Decimal::from(30)
        );
    }

    #[test]
    fn prop_completed_and_leftover_span_joining_to_superannuation(input in input_strategy()) {
        let config = SchemeConfig::gujarat_pattern();
        let result = evaluate_vrs(&input, &config).unwrap().breakdown;
        let boundary = superannuation_date(&input, config.compensation().superannuation_age).unwrap();
        prop_assume!(input.reference_date < boundary);

        prop_assert_eq!(
            result.service.completed.total_months + result.service.leftover.total_months,
            months_between(input.date_of_joining, boundary)
        );
    }

    #[test]
    fn prop_floor_rule_never_pays_below_minimum(
        input in input_strategy(),
        decimal_point in proptest::bool::ANY,
    ) {
        let policy = Policy {
            year_fraction_convention: if decimal_point {
                YearFractionConvention::DecimalPoint
            } else {
                YearFractionConvention::Twelfths
            },
            bound_rule: BoundRule::FloorAtMinimum,
        };
        let config = SchemeConfig::gujarat_pattern().with_policy(policy);
        let compensation = evaluate_vrs(&input, &config).unwrap().breakdown.compensation;

        prop_assert!(compensation.final_compensation >= compensation.statutory_minimum);
        prop_assert!(compensation.final_compensation >= compensation.total);
    }

    #[test]
    fn prop_later_reference_month_never_moves_weight_back_to_leftover_service(
        input in input_strategy(),
        policy in policy_strategy(),
    ) {
        let config = SchemeConfig::gujarat_pattern().with_policy(policy);
        let current = evaluate_vrs(&input, &config).unwrap().breakdown;

        let later = input.with_reference_date(input.reference_date + Months::new(1));
        let shifted = evaluate_vrs(&later, &config).unwrap().breakdown;

        prop_assert!(shifted.compensation.completed >= current.compensation.completed);
        prop_assert!(shifted.compensation.leftover <= current.compensation.leftover);
    }

    #[test]
    fn prop_later_reference_month_shifts_weight_to_completed_service(
        input in input_strategy(),
        policy in policy_strategy(),
    ) {
        let config = SchemeConfig::gujarat_pattern().with_policy(policy);
        let current = evaluate_vrs(&input, &config).unwrap().breakdown;
        prop_assume!(current.service.leftover.total_months > 0);

        let later = input.with_reference_date(input.reference_date + Months::new(1));
        // Strict only when neither the joining anniversary nor the reference date clamps at month end
        prop_assume!(input.date_of_joining.day() <= 28);
        prop_assume!(later.reference_date.day() == input.reference_date.day());
        let shifted = evaluate_vrs(&later, &config).unwrap().breakdown;

        prop_assert!(shifted.compensation.completed > current.compensation.completed);
        prop_assert!(shifted.compensation.leftover < current.compensation.leftover);
    }
}
