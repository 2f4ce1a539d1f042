//! Core data models for the VRS compensation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod policy;
mod service_period;
mod vrs_input;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, CompensationBreakdown, ComparisonOutcome,
    ContinuedServiceComparison, GrowthPoint, InvestmentProjection, PayBreakdown, ServiceSummary,
    TaxTreatment, VrsBreakdown, VrsCalculation,
};
pub use policy::{BoundRule, Policy, YearFractionConvention};
pub use service_period::ServicePeriod;
pub use vrs_input::VrsInput;
