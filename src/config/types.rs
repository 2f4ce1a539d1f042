//! Configuration types for VRS schemes.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the built-in
//! Gujarat Pattern defaults.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Policy;

/// Metadata about the scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeMetadata {
    /// Short identifier for the scheme (e.g., "gujarat_pattern").
    pub code: String,
    /// The human-readable name of the scheme.
    pub name: String,
    /// The organisation offering the scheme.
    pub issuer: String,
    /// The version or effective date of the scheme rules.
    pub version: String,
}

/// Day weights, floors and the superannuation age.
///
/// Every "days" figure is a number of days' salary, with the daily salary
/// taken as monthly pay over `days_per_month`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationRules {
    /// Divisor turning monthly pay into daily salary.
    pub days_per_month: Decimal,
    /// Days' salary per completed year of service.
    pub completed_service_days: Decimal,
    /// Days' salary per year of leftover service.
    pub leftover_service_days: Decimal,
    /// Days' salary forming the statutory minimum.
    pub minimum_compensation_days: Decimal,
    /// Fixed currency floor for the statutory minimum.
    pub minimum_compensation_floor: Decimal,
    /// Days' salary paid in lieu of notice.
    pub notice_pay_days: Decimal,
    /// Superannuation age in whole years.
    pub superannuation_age: u32,
    /// The formula variant in force.
    #[serde(default)]
    pub policy: Policy,
}

/// Flat-rate tax applied above an exemption threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRules {
    /// Amount exempt from tax.
    pub exemption_threshold: Decimal,
    /// Flat rate applied above the threshold, as a fraction.
    pub tax_rate: Decimal,
}

/// Rates used by the investment projection and continued-service comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionRules {
    /// Annual compound growth rate for the after-tax payout, as a fraction.
    pub investment_rate: Decimal,
    /// Monthly provident-fund accrual as a fraction of monthly pay.
    pub provident_fund_rate: Decimal,
}

/// The complete scheme configuration.
///
/// # Example
///
/// ```
/// use vrs_engine::config::SchemeConfig;
/// use rust_decimal::Decimal;
///
/// let config = SchemeConfig::gujarat_pattern();
/// assert_eq!(config.compensation().superannuation_age, 58);
/// assert_eq!(config.compensation().days_per_month, Decimal::from(30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeConfig {
    metadata: SchemeMetadata,
    compensation: CompensationRules,
    tax: TaxRules,
    projection: ProjectionRules,
}

impl SchemeConfig {
    /// Creates a new SchemeConfig from its component parts.
    pub fn new(
        metadata: SchemeMetadata,
        compensation: CompensationRules,
        tax: TaxRules,
        projection: ProjectionRules,
    ) -> Self {
        Self {
            metadata,
            compensation,
            tax,
            projection,
        }
    }

    /// The Gujarat Pattern as applied by the steel plant's VRS circular.
    ///
    /// 35 days per completed year, 25 days per leftover year, a 30-day
    /// month, a minimum of Rs. 25,000 or 250 days' salary, 30 days' notice
    /// pay and superannuation at 58.
    pub fn gujarat_pattern() -> Self {
        Self::new(
            SchemeMetadata {
                code: "gujarat_pattern".to_string(),
                name: "Voluntary Retirement Scheme (Gujarat Pattern)".to_string(),
                issuer: "Rashtriya Ispat Nigam Limited".to_string(),
                version: "2025-09-30".to_string(),
            },
            CompensationRules {
                days_per_month: Decimal::from(30),
                completed_service_days: Decimal::from(35),
                leftover_service_days: Decimal::from(25),
                minimum_compensation_days: Decimal::from(250),
                minimum_compensation_floor: Decimal::from(25_000),
                notice_pay_days: Decimal::from(30),
                superannuation_age: 58,
                policy: Policy::default(),
            },
            TaxRules {
                exemption_threshold: Decimal::from(500_000),
                tax_rate: Decimal::new(32, 2),
            },
            ProjectionRules {
                investment_rate: Decimal::new(65, 3),
                provident_fund_rate: Decimal::new(12, 2),
            },
        )
    }

    /// Returns a copy with different policy switches.
    pub fn with_policy(&self, policy: Policy) -> Self {
        let mut config = self.clone();
        config.compensation.policy = policy;
        config
    }

    /// Checks that every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> EngineResult<()> {
        let rules = &self.compensation;
        let positive = [
            ("days_per_month", rules.days_per_month),
            ("completed_service_days", rules.completed_service_days),
            ("leftover_service_days", rules.leftover_service_days),
        ];
        for (field, value) in positive {
            if value <= Decimal::ZERO {
                return Err(invalid_config(field, format!("must be positive (got {})", value)));
            }
        }

        let non_negative = [
            ("minimum_compensation_days", rules.minimum_compensation_days),
            ("minimum_compensation_floor", rules.minimum_compensation_floor),
            ("notice_pay_days", rules.notice_pay_days),
            ("exemption_threshold", self.tax.exemption_threshold),
            ("investment_rate", self.projection.investment_rate),
        ];
        for (field, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(invalid_config(
                    field,
                    format!("must not be negative (got {})", value),
                ));
            }
        }

        let fractions = [
            ("tax_rate", self.tax.tax_rate),
            ("provident_fund_rate", self.projection.provident_fund_rate),
        ];
        for (field, value) in fractions {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(invalid_config(
                    field,
                    format!("must be between 0 and 1 (got {})", value),
                ));
            }
        }

        if rules.superannuation_age == 0 {
            return Err(invalid_config("superannuation_age", "must be positive"));
        }

        Ok(())
    }

    /// Returns the scheme metadata.
    pub fn metadata(&self) -> &SchemeMetadata {
        &self.metadata
    }

    /// Returns the compensation rules.
    pub fn compensation(&self) -> &CompensationRules {
        &self.compensation
    }

    /// Returns the policy switches in force.
    pub fn policy(&self) -> Policy {
        self.compensation.policy
    }

    /// Returns the tax rules.
    pub fn tax(&self) -> &TaxRules {
        &self.tax
    }

    /// Returns the projection rates.
    pub fn projection(&self) -> &ProjectionRules {
        &self.projection
    }
}

impl Default for SchemeConfig {
    fn default() -> Self {
        Self::gujarat_pattern()
    }
}

fn invalid_config(field: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message: message.into(),
    }
}
