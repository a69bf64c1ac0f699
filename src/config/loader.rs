//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! organization configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{HrisError, HrisResult};

use super::types::HrisConfig;

/// Loads and provides access to the organization configuration.
///
/// # File Format
///
/// ```text
/// organization: Mehra Software Company
/// salary_policy:
///   kind: tax_deducted
///   rate: "0.20"
/// channels:
///   - kind: email
///     address: hr@mehrasoftware.com
/// employees:
///   - kind: developer
///     id: DEV001
///     name: Alice Johnson
///     email: alice@mehrasoftware.com
///     department: Engineering
///     base_salary: "75000"
///     language: Java
///     experience_years: 3
/// ```
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use hris::activity_log::ActivityLog;
/// use hris::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/hris.yaml")?;
/// let registry = loader.config().build_registry(Arc::new(ActivityLog::new()))?;
/// println!("Loaded {} employees", registry.len());
/// # Ok::<(), hris::error::HrisError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: HrisConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if the file cannot be read.
    /// - `ConfigParseError` if the file is not valid configuration YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> HrisResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| HrisError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        debug!(path = %path_str, bytes = content.len(), "Read configuration file");
        Self::from_yaml(&content, &path_str)
    }

    /// Parses configuration from YAML text; `origin` names the source in errors.
    pub fn from_yaml(content: &str, origin: &str) -> HrisResult<Self> {
        let config = serde_yaml::from_str::<HrisConfig>(content).map_err(|e| {
            HrisError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &HrisConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> HrisConfig {
        self.config
    }
}
