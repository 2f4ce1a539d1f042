//! Flat-rate tax treatment of the VRS payout.
//!
//! Amounts up to the exemption threshold are tax free; everything above it
//! is taxed at a single flat rate.

use rust_decimal::Decimal;

use crate::config::TaxRules;
use crate::models::{AuditStep, TaxTreatment};

/// The result of the tax calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct TaxResult {
    /// The tax treatment.
    pub treatment: TaxTreatment,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Applies the exemption threshold and flat rate to a gross amount.
///
/// `taxable = max(0, gross - exemption_threshold)`, `tax = taxable × tax_rate`
/// and `after_tax = gross - tax`.
///
/// # Examples
///
/// ```
/// use vrs_engine::calculation::calculate_tax;
/// use vrs_engine::config::SchemeConfig;
/// use rust_decimal::Decimal;
///
/// let config = SchemeConfig::gujarat_pattern();
/// let result = calculate_tax(Decimal::from(6_000_000), config.tax(), 1);
/// assert_eq!(result.treatment.taxable, Decimal::from(5_500_000));
/// assert_eq!(result.treatment.tax, Decimal::from(1_760_000));
/// assert_eq!(result.treatment.after_tax, Decimal::from(4_240_000));
/// ```
pub fn calculate_tax(gross: Decimal, rules: &TaxRules, step_number: u32) -> TaxResult {
    let taxable = (gross - rules.exemption_threshold).max(Decimal::ZERO);
    let tax = taxable * rules.tax_rate;
    let after_tax = gross - tax;

    let reasoning = if taxable.is_zero() {
        format!(
            "Rs {} is within the Rs {} exemption; no tax",
            gross.round_dp(2),
            rules.exemption_threshold
        )
    } else {
        format!(
            "(Rs {} - Rs {}) x {} = Rs {} tax; Rs {} after tax",
            gross.round_dp(2),
            rules.exemption_threshold,
            rules.tax_rate,
            tax.round_dp(2),
            after_tax.round_dp(2)
        )
    };

    TaxResult {
        treatment: TaxTreatment {
            gross,
            exemption_threshold: rules.exemption_threshold,
            taxable,
            tax_rate: rules.tax_rate,
            tax,
            after_tax,
        },
        audit_step: AuditStep {
            step_number,
            rule_id: "tax_treatment".to_string(),
            rule_name: "Tax Treatment".to_string(),
            formula: "gross - max(0, gross - exemption_threshold) × tax_rate".to_string(),
            input: serde_json::json!({
                "gross": gross.normalize().to_string(),
                "exemption_threshold": rules.exemption_threshold.to_string(),
                "tax_rate": rules.tax_rate.to_string()
            }),
            output: serde_json::json!({
                "taxable": taxable.normalize().to_string(),
                "tax": tax.normalize().to_string(),
                "after_tax": after_tax.normalize().to_string()
            }),
            reasoning,
        },
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

    #[test]
    fn test_amount_above_threshold_is_taxed() {
        let config = SchemeConfig::gujarat_pattern();
        let result = calculate_tax(dec("6000000"), config.tax(), 1);

        assert_eq!(result.treatment.taxable, dec("5500000"));
        assert_eq!(result.treatment.tax, dec("1760000"));
        assert_eq!(result.treatment.after_tax, dec("4240000"));
    }

    #[test]
    fn test_amount_below_threshold_is_untaxed() {
        let config = SchemeConfig::gujarat_pattern();
        let result = calculate_tax(dec("400000"), config.tax(), 1);

        assert_eq!(result.treatment.taxable, Decimal::ZERO);
        assert_eq!(result.treatment.tax, Decimal::ZERO);
        assert_eq!(result.treatment.after_tax, dec("400000"));
        assert!(result.audit_step.reasoning.contains("no tax"));
    }

    #[test]
    fn test_amount_at_threshold_is_untaxed() {
        let config = SchemeConfig::gujarat_pattern();
        let result = calculate_tax(dec("500000"), config.tax(), 1);
        assert_eq!(result.treatment.after_tax, dec("500000"));
    }

    #[test]
    fn test_audit_step_contents() {
        let config = SchemeConfig::gujarat_pattern();
        let result = calculate_tax(dec("6000000"), config.tax(), 9);
        assert_eq!(result.audit_step.step_number, 9);
        assert_eq!(result.audit_step.rule_id, "tax_treatment");
        assert_eq!(result.audit_step.output["after_tax"], "4240000");
    }
}
