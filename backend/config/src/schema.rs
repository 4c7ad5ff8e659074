//! MenuLens configuration schema.
//!
//! Typed for serde YAML/JSON deserialization. Every section falls back to
//! built-in defaults, so an empty file is a valid config.

use serde::{Deserialize, Serialize};

use crate::defaults::*;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Root configuration for MenuLens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuLensConfig {
    /// HTTP server settings
    pub server: ServerConfig,

    /// Language model used for extraction and selection
    pub llm: LlmConfig,

    /// Image search credentials and limits
    pub search: SearchConfig,

    /// Per-item orchestration
    pub pipeline: PipelineConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

// ---------------------------------------------------------------------------
// Server
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    /// Multipart field name carrying the menu photo.
    pub upload_field: String,
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            upload_field: DEFAULT_UPLOAD_FIELD.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

// ---------------------------------------------------------------------------
// LLM
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LlmConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// OpenAI-compatible API root (without `/chat/completions`).
    pub base_url: String,
    pub model: String,
    pub extract_max_tokens: u32,
    pub select_max_tokens: u32,
    pub select_temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_LLM_BASE_URL.to_string(),
            model: DEFAULT_LLM_MODEL.to_string(),
            extract_max_tokens: DEFAULT_EXTRACT_MAX_TOKENS,
            select_max_tokens: DEFAULT_SELECT_MAX_TOKENS,
            select_temperature: DEFAULT_SELECT_TEMPERATURE,
        }
    }
}

// ---------------------------------------------------------------------------
// Image search
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Programmable search engine ID (`cx`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_id: Option<String>,
    pub base_url: String,
    /// Candidates requested per strategy.
    pub candidate_count: u32,
    /// Candidates requested by the fallback query.
    pub fallback_count: u32,
}

impl SearchConfig {
    /// Search runs only when both credentials are present.
    pub fn is_configured(&self) -> bool {
        is_present(&self.api_key) && is_present(&self.engine_id)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            engine_id: None,
            base_url: DEFAULT_SEARCH_BASE_URL.to_string(),
            candidate_count: DEFAULT_CANDIDATE_COUNT,
            fallback_count: DEFAULT_FALLBACK_COUNT,
        }
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineConfig {
    /// Items resolved at once within a single request. 1 = strictly sequential.
    pub item_concurrency: usize,
    /// Query templates tried in order; `{dish}` is replaced with the dish name.
    pub strategies: Vec<String>,
    pub fallback_template: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            item_concurrency: DEFAULT_ITEM_CONCURRENCY,
            strategies: DEFAULT_STRATEGIES.iter().map(|s| s.to_string()).collect(),
            fallback_template: DEFAULT_FALLBACK_TEMPLATE.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for rolling NDJSON logs. Console only when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            dir: None,
        }
    }
}

pub(crate) fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_is_all_defaults() {
        let config: MenuLensConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.server.upload_field, "menuImage");
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.pipeline.strategies.len(), 4);
        assert!(!config.search.is_configured());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let yaml = "search:\n  candidateCount: 5\npipeline:\n  itemConcurrency: 1\n";
        let config: MenuLensConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.search.candidate_count, 5);
        assert_eq!(config.search.fallback_count, DEFAULT_FALLBACK_COUNT);
        assert_eq!(config.pipeline.item_concurrency, 1);
        assert_eq!(config.pipeline.fallback_template, "{dish} food");
    }

    #[test]
    fn search_needs_both_credentials() {
        let mut search = SearchConfig {
            api_key: Some("key".into()),
            ..SearchConfig::default()
        };
        assert!(!search.is_configured());
        search.engine_id = Some("  ".into());
        assert!(!search.is_configured());
        search.engine_id = Some("cx-123".into());
        assert!(search.is_configured());
    }
}
