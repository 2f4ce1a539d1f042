//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading scheme
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{CompensationRules, ProjectionRules, SchemeConfig, SchemeMetadata, TaxRules};

/// Loads and provides access to a scheme configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/gujarat_pattern/
/// ├── scheme.yaml        # Scheme metadata
/// ├── compensation.yaml  # Day weights, floors, superannuation age, policy
/// ├── tax.yaml           # Exemption threshold and flat rate
/// └── projection.yaml    # Investment and provident-fund rates
/// ```
///
/// # Example
///
/// ```no_run
/// use vrs_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/gujarat_pattern")?;
/// println!("Loaded scheme: {}", loader.metadata().name);
/// # Ok::<(), vrs_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SchemeConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any value is out of range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<SchemeMetadata>(&path.join("scheme.yaml"))?;
        let compensation = Self::load_yaml::<CompensationRules>(&path.join("compensation.yaml"))?;
        let tax = Self::load_yaml::<TaxRules>(&path.join("tax.yaml"))?;
        let projection = Self::load_yaml::<ProjectionRules>(&path.join("projection.yaml"))?;

        let config = SchemeConfig::new(metadata, compensation, tax, projection);
        config.validate()?;

        debug!(
            scheme = %config.metadata().code,
            version = %config.metadata().version,
            convention = config.policy().year_fraction_convention.as_str(),
            bound_rule = config.policy().bound_rule.as_str(),
            "Loaded scheme configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: SchemeConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying scheme configuration.
    pub fn config(&self) -> &SchemeConfig {
        &self.config
    }

    /// Returns the scheme metadata.
    pub fn metadata(&self) -> &SchemeMetadata {
        self.config.metadata()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            config: SchemeConfig::gujarat_pattern(),
        }
    }
}
