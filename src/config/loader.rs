//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory
//! payroll rules from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::types::{AttendanceRules, DeductionRules, StatutoryConfig};

/// Loads statutory configuration from a directory of YAML files.
///
/// # Directory Structure
///
/// ```text
/// config/statutory/
/// ├── deductions.yaml  # PF, ESIC, PT slabs, TDS
/// └── attendance.yaml  # paid-off allowance, overtime multiplier, shift hours
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/statutory").unwrap();
/// let config = loader.config();
/// println!("paid offs per month: {}", config.attendance().paid_off_allowance);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StatutoryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::ConfigNotFound`] when a required file is
    /// missing and [`PayrollError::ConfigParse`] when a file contains
    /// invalid YAML or is missing a required field.
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let deductions_path = path.join("deductions.yaml");
        let deductions = Self::load_yaml::<DeductionRules>(&deductions_path)?;

        let attendance_path = path.join("attendance.yaml");
        let attendance = Self::load_yaml::<AttendanceRules>(&attendance_path)?;

        Ok(Self {
            config: StatutoryConfig::new(deductions, attendance),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParse {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &StatutoryConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> StatutoryConfig {
        self.config
    }
}
