// crates/trigger-gate-config/src/config.rs
// ============================================================================
// Module: Trigger Gate Configuration
// Description: Configuration loading and validation for the trigger gate.
// Purpose: Provide strict, fail-closed filter config parsing with hard limits.
// Dependencies: trigger-gate-core, trig-logic, serde, toml
// ============================================================================

//! ## Overview
//! The filter specification is loaded from a TOML file with strict size and
//! path limits. Every configured expression is compiled under the menu
//! grammar at validation time, so a malformed menu is rejected when the
//! configuration is read instead of surfacing one event at a time.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;
use trig_logic::parse_expr;
use trigger_gate_core::Category;
use trigger_gate_core::CategoryConfig;
use trigger_gate_core::FilterConfig;
use trigger_gate_core::strip_negation;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "trigger-gate.toml";
/// Environment variable used to override the config path.
const CONFIG_ENV_VAR: &str = "TRIGGER_GATE_CONFIG";
/// Maximum configuration file size in bytes.
const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
const MAX_TOTAL_PATH_LENGTH: usize = 4096;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Trigger gate configuration file model.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterFileConfig {
    /// Event filter specification, the `[filter]` table.
    ///
    /// When the table is missing entirely the filter is disabled and every
    /// event is accepted.
    #[serde(default)]
    pub filter: FilterConfig,
}

impl FilterFileConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// The path is taken from the explicit argument first, then from the
    /// `TRIGGER_GATE_CONFIG` environment variable, then `./trigger-gate.toml`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a limit is exceeded or an expression does
    /// not compile under the menu grammar.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.filter.validate().map_err(|err| ConfigError::Invalid(err.to_string()))?;
        for category in Category::ALL {
            if let Some(spec) = self.filter.category(category) {
                validate_expressions(category, spec)?;
            }
        }
        Ok(())
    }

    /// Consumes the file model, yielding the materialized filter specification.
    #[must_use]
    pub fn into_filter_config(self) -> FilterConfig {
        self.filter
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from the explicit argument or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Ensures every non-empty expression in a category compiles.
fn validate_expressions(category: Category, spec: &CategoryConfig) -> Result<(), ConfigError> {
    for (index, raw) in spec.expressions.iter().enumerate() {
        let (body, _) = strip_negation(raw);
        if body.is_empty() {
            // Empty slots stand for the error reply at evaluation time.
            continue;
        }
        if let Err(err) = parse_expr(body) {
            return Err(ConfigError::Invalid(format!(
                "filter.{category} expression {index} does not parse: {err}"
            )));
        }
    }
    Ok(())
}
