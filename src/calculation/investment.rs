//! Investment projection for the after-tax payout.
//!
//! Compound growth at a fixed annual rate, either over a fractional
//! horizon or as a year-by-year series.

use rust_decimal::{Decimal, MathematicalOps};

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, GrowthPoint, InvestmentProjection};

/// The result of the investment projection, including the audit step.
#[derive(Debug, Clone)]
pub struct InvestmentResult {
    /// The projection.
    pub projection: InvestmentProjection,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Projects `principal × (1 + annual_rate)^years`.
///
/// `years` may be fractional; a zero horizon returns the principal.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] if the growth factor or the
/// matured amount overflows.
///
/// # Examples
///
/// ```
/// use vrs_engine::calculation::project_investment;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = project_investment(
///     Decimal::from(100_000),
///     Decimal::from_str("0.10").unwrap(),
///     Decimal::from(2),
///     1,
/// )
/// .unwrap();
/// assert_eq!(result.projection.matured.round_dp(2), Decimal::from(121_000));
/// ```
pub fn project_investment(
    principal: Decimal,
    annual_rate: Decimal,
    years: Decimal,
    step_number: u32,
) -> EngineResult<InvestmentResult> {
    let factor = growth_factor(annual_rate, years)?;
    let matured = principal
        .checked_mul(factor)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "investment of {} overflowed at rate {} over {} years",
                principal, annual_rate, years
            ),
        })?;
    let growth = matured - principal;

    Ok(InvestmentResult {
        projection: InvestmentProjection {
            principal,
            annual_rate,
            years,
            matured,
            growth,
        },
        audit_step: AuditStep {
            step_number,
            rule_id: "investment_projection".to_string(),
            rule_name: "Investment Projection".to_string(),
            formula: "after_tax × (1 + investment_rate)^leftover_years".to_string(),
            input: serde_json::json!({
                "principal": principal.normalize().to_string(),
                "annual_rate": annual_rate.to_string(),
                "years": years.normalize().to_string()
            }),
            output: serde_json::json!({
                "matured": matured.normalize().to_string(),
                "growth": growth.normalize().to_string()
            }),
            reasoning: format!(
                "Rs {} at {} for {} years grows to Rs {}",
                principal.round_dp(2),
                annual_rate,
                years.round_dp(4),
                matured.round_dp(2)
            ),
        },
    })
}

fn growth_factor(annual_rate: Decimal, years: Decimal) -> EngineResult<Decimal> {
    if years.is_zero() {
        return Ok(Decimal::ONE);
    }

    (Decimal::ONE + annual_rate)
        .checked_powd(years)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "investment growth overflowed at rate {} over {} years",
                annual_rate, years
            ),
        })
}

/// Year-by-year value of `principal` compounding at `annual_rate`.
///
/// The series starts at year 0 (the principal) and has `years + 1` points.
/// It ends early at the first year whose amount would overflow.
///
/// # Examples
///
/// ```
/// use vrs_engine::calculation::project_growth_series;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let series = project_growth_series(Decimal::from(1000), Decimal::from_str("0.5").unwrap(), 2);
/// let amounts: Vec<Decimal> = series.iter().map(|p| p.amount).collect();
/// assert_eq!(amounts, vec![Decimal::from(1000), Decimal::from(1500), Decimal::from(2250)]);
/// ```
pub fn project_growth_series(principal: Decimal, annual_rate: Decimal, years: u32) -> Vec<GrowthPoint> {
    let multiplier = Decimal::ONE + annual_rate;
    let mut amount = Some(principal);

    (0..=years)
        .map_while(|year| {
            if year > 0 {
                amount = amount.and_then(|value| value.checked_mul(multiplier));
            }
            amount.map(|amount| GrowthPoint { year, amount })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn assert_close(actual: Decimal, expected: Decimal, tolerance: Decimal) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "Expected {} within {} of {}",
            actual,
            tolerance,
            expected
        );
    }

    #[test]
    fn test_zero_years_returns_principal() {
        let result = project_investment(dec("4240000"), dec("0.065"), Decimal::ZERO, 1).unwrap();
        assert_eq!(result.projection.matured, dec("4240000"));
        assert_eq!(result.projection.growth, Decimal::ZERO);
    }

    #[test]
    fn test_whole_years_compound() {
        let result = project_investment(dec("1000000"), dec("0.065"), dec("3"), 1).unwrap();
        // 1.065^3 = 1.207949625
        assert_close(result.projection.matured, dec("1207949.625"), dec("0.01"));
    }

    #[test]
    fn test_fractional_years_compound() {
        let result = project_investment(dec("1000000"), dec("0.21"), dec("0.5"), 1).unwrap();
        // sqrt(1.21) = 1.1
        assert_close(result.projection.matured, dec("1100000"), dec("0.01"));
    }

    #[test]
    fn test_zero_rate_keeps_principal() {
        let result = project_investment(dec("500000"), Decimal::ZERO, dec("2.75"), 1).unwrap();
        assert_close(result.projection.matured, dec("500000"), dec("0.0001"));
    }

    #[test]
    fn test_growth_is_matured_minus_principal() {
        let result = project_investment(dec("4240000"), dec("0.065"), dec("2.75"), 1).unwrap();
        assert_eq!(
            result.projection.growth,
            result.projection.matured - result.projection.principal
        );
        assert!(result.projection.growth > Decimal::ZERO);
    }

    #[test]
    fn test_growth_series_length_and_start() {
        let series = project_growth_series(dec("100000"), dec("0.12"), 10);
        assert_eq!(series.len(), 11);
        assert_eq!(series[0].year, 0);
        assert_eq!(series[0].amount, dec("100000"));
        assert_eq!(series[10].year, 10);
    }

    #[test]
    fn test_growth_series_matches_projection_on_whole_years() {
        let series = project_growth_series(dec("100000"), dec("0.065"), 5);
        let projected = project_investment(dec("100000"), dec("0.065"), dec("5"), 1).unwrap();
        assert_close(series[5].amount, projected.projection.matured, dec("0.01"));
    }

    #[test]
    fn test_matured_amount_overflow_is_an_error() {
        // 2^30 x 1e20 exceeds the largest representable decimal
        let result = project_investment(dec("100000000000000000000"), Decimal::ONE, dec("30"), 1);
        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }

    #[test]
    fn test_growth_series_stops_before_overflow() {
        let series = project_growth_series(dec("100000000000000000000"), Decimal::ONE, 40);
        assert!(series.len() < 41);
        assert_eq!(series[0].amount, dec("100000000000000000000"));
        assert_eq!(series[1].amount, dec("200000000000000000000"));
    }

    #[test]
    fn test_audit_step_contents() {
        let result = project_investment(dec("100000"), dec("0.065"), dec("2.75"), 11).unwrap();
        assert_eq!(result.audit_step.step_number, 11);
        assert_eq!(result.audit_step.rule_id, "investment_projection");
        assert_eq!(result.audit_step.input["years"], "2.75");
    }
}
