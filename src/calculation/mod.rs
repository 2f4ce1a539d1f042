//! Calculation logic for the VRS engine.
//!
//! Each rule lives in its own module and returns its figures together with
//! an audit step. [`calculate_vrs`] chains them: daily salary, service
//! duration, completed and leftover compensation, the minimum/cap bound,
//! notice pay, tax, investment projection and the continued-service
//! comparison. [`compare_scenarios`] runs the chain at two reference dates.

mod continued_service;
mod daily_salary;
mod final_compensation;
mod investment;
mod notice_pay;
mod scenario;
mod service_compensation;
mod service_duration;
mod tax;
mod vrs;

pub use continued_service::{ContinuedServiceResult, break_even_years, compare_continued_service};
pub use daily_salary::{DailySalaryResult, calculate_daily_salary, days_salary};
pub use final_compensation::{
    FinalCompensationResult, calculate_final_compensation, continued_service_earnings,
    statutory_minimum,
};
pub use investment::{InvestmentResult, project_growth_series, project_investment};
pub use notice_pay::{NoticePayResult, calculate_notice_pay};
pub use scenario::{DEFAULT_SCENARIO_SHIFT_MONTHS, ScenarioComparison, compare_scenarios};
pub use service_compensation::{ServiceCompensationResult, calculate_service_compensation};
pub use service_duration::{
    ServiceDurationResult, calculate_service_duration, months_between, superannuation_date,
};
pub use tax::{TaxResult, calculate_tax};
pub use vrs::{VrsEvaluation, calculate_vrs, evaluate_vrs, round_money};
