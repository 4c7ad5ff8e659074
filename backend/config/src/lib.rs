//! `menulens-config`: runtime configuration for the MenuLens service.
//!
//! Provides:
//! - Typed config schema (server, LLM, image search, pipeline, logging)
//! - Optional YAML config file
//! - Environment variable overrides for credentials and deployment knobs
//! - Config redaction for safe logging
//! - Validation with errors and warnings

pub mod defaults;
pub mod env;
pub mod io;
pub mod redact;
pub mod schema;
pub mod validation;

pub use env::{apply_env_overrides, apply_process_env};
pub use io::{config_file_path, load_config};
pub use redact::redact;
pub use schema::{
    LlmConfig, LoggingConfig, MenuLensConfig, PipelineConfig, SearchConfig, ServerConfig,
};
pub use validation::{validate, ConfigValidationError, ValidationReport};

use anyhow::{bail, Result};
use std::path::Path;

/// Load the optional config file and apply environment overrides.
///
/// Does not validate; callers that want warnings logged should initialise
/// logging from the result and then call [`check`].
pub async fn load(path: Option<&Path>) -> Result<MenuLensConfig> {
    let config = match path {
        Some(path) => load_config(path).await?,
        None => MenuLensConfig::default(),
    };
    apply_process_env(config)
}

/// Like [`load`], but the named file must exist.
///
/// Used when the path was given explicitly on the command line.
pub async fn load_from(path: &Path) -> Result<MenuLensConfig> {
    if !path.exists() {
        bail!("Config file not found: {}", path.display());
    }
    load(Some(path)).await
}

/// Validate a loaded config, logging every finding. Errors are fatal.
pub fn check(config: &MenuLensConfig) -> Result<()> {
    let report = validate(config);
    for warning in &report.warnings {
        tracing::warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    for error in &report.errors {
        tracing::error!(path = %error.path, message = %error.message, "Config error");
    }
    if !report.is_valid() {
        bail!("configuration has {} error(s)", report.errors.len());
    }
    Ok(())
}

/// Load the optional config file, apply environment overrides and validate.
pub async fn load_and_prepare(path: Option<&Path>) -> Result<MenuLensConfig> {
    let config = load(path).await?;
    check(&config)?;
    Ok(config)
}
