//! Configuration loading and management for the VRS compensation engine.
//!
//! This module provides functionality to load scheme configurations from YAML
//! files: scheme metadata, day weights and floors, tax rules and projection
//! rates, along with the policy switches selecting a formula variant.
//!
//! # Example
//!
//! ```no_run
//! use vrs_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/gujarat_pattern").unwrap();
//! println!("Loaded scheme: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CompensationRules, ProjectionRules, SchemeConfig, SchemeMetadata, TaxRules};
