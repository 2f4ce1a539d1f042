//! Voluntary Retirement Scheme compensation engine (Gujarat Pattern)
//!
//! This crate calculates the ex-gratia compensation owed to an employee who
//! opts for VRS: 35 days' salary per completed year of service plus 25 days'
//! salary per year of service left until superannuation, bounded by a
//! statutory minimum, with notice pay, tax treatment, an investment
//! projection and a comparison against working on until retirement.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
