//! Config validation: checks with user-friendly error messages.

use crate::defaults::DISH_PLACEHOLDER;
use crate::schema::{is_present, MenuLensConfig};
use thiserror::Error;

/// A config validation error with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// A collection of validation errors found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &MenuLensConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_server(config, &mut report);
    validate_llm(config, &mut report);
    validate_search(config, &mut report);
    validate_pipeline(config, &mut report);
    report
}

fn validate_server(config: &MenuLensConfig, report: &mut ValidationReport) {
    let server = &config.server;
    if server.port == 0 {
        report.error("server.port", "Port must be between 1 and 65535");
    }
    if server.upload_field.trim().is_empty() {
        report.error("server.uploadField", "Upload field name cannot be empty");
    }
    if server.max_upload_bytes == 0 {
        report.error("server.maxUploadBytes", "Upload limit must be greater than zero");
    }
}

fn validate_llm(config: &MenuLensConfig, report: &mut ValidationReport) {
    let llm = &config.llm;
    if !is_present(&llm.api_key) {
        report.warn("llm.apiKey", "No LLM API key; every menu will yield the placeholder item");
    }
    if llm.model.trim().is_empty() {
        report.error("llm.model", "Model id cannot be empty");
    }
    if llm.extract_max_tokens == 0 || llm.select_max_tokens == 0 {
        report.error("llm", "Token limits must be greater than zero");
    }
    if !(0.0..=2.0).contains(&llm.select_temperature) {
        report.error("llm.selectTemperature", "Temperature must be within 0.0..=2.0");
    }
}

fn validate_search(config: &MenuLensConfig, report: &mut ValidationReport) {
    let search = &config.search;
    if !search.is_configured() {
        report.warn(
            "search",
            "GOOGLE_API_KEY or GOOGLE_CSE_ID missing; image search disabled",
        );
    }
    // The Custom Search API caps `num` at 10.
    if !(2..=10).contains(&search.candidate_count) {
        report.error(
            "search.candidateCount",
            "Candidate count must be within 2..=10 so the selector has a choice",
        );
    }
    if !(1..=10).contains(&search.fallback_count) {
        report.error("search.fallbackCount", "Fallback count must be within 1..=10");
    }
}

fn validate_pipeline(config: &MenuLensConfig, report: &mut ValidationReport) {
    let pipeline = &config.pipeline;
    if pipeline.item_concurrency == 0 {
        report.error("pipeline.itemConcurrency", "Concurrency must be at least 1");
    }
    if pipeline.strategies.is_empty() {
        report.warn("pipeline.strategies", "No strategies; only the fallback query will run");
    }
    for (i, template) in pipeline.strategies.iter().enumerate() {
        if !template.contains(DISH_PLACEHOLDER) {
            report.error(
                format!("pipeline.strategies[{i}]"),
                format!("Template must contain {DISH_PLACEHOLDER}"),
            );
        }
    }
    if !pipeline.fallback_template.contains(DISH_PLACEHOLDER) {
        report.error(
            "pipeline.fallbackTemplate",
            format!("Template must contain {DISH_PLACEHOLDER}"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> MenuLensConfig {
        let mut config = MenuLensConfig::default();
        config.llm.api_key = Some("sk-test".into());
        config.search.api_key = Some("key".into());
        config.search.engine_id = Some("cx".into());
        config
    }

    #[test]
    fn fully_configured_is_clean() {
        let report = validate(&configured());
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn missing_credentials_only_warn() {
        let report = validate(&MenuLensConfig::default());
        assert!(report.is_valid());
        assert!(report.warnings.iter().any(|w| w.path == "search"));
        assert!(report.warnings.iter().any(|w| w.path == "llm.apiKey"));
    }

    #[test]
    fn template_without_placeholder_is_error() {
        let mut config = configured();
        config.pipeline.strategies.push("pizza pinterest".into());
        let report = validate(&config);
        assert!(!report.is_valid());
        assert_eq!(report.errors[0].path, "pipeline.strategies[4]");
    }

    #[test]
    fn zero_concurrency_is_error() {
        let mut config = configured();
        config.pipeline.item_concurrency = 0;
        assert!(!validate(&config).is_valid());
    }

    #[test]
    fn single_candidate_is_error() {
        let mut config = configured();
        config.search.candidate_count = 1;
        let report = validate(&config);
        assert!(report.errors.iter().any(|e| e.path == "search.candidateCount"));
    }
}
