//! Environment variable overrides for config values.
//!
//! Credentials normally arrive through the environment rather than the config
//! file. Empty values are treated as unset.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::str::FromStr;

use crate::schema::MenuLensConfig;

pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
pub const ENV_GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
pub const ENV_GOOGLE_CSE_ID: &str = "GOOGLE_CSE_ID";
pub const ENV_BIND: &str = "MENULENS_BIND";
pub const ENV_PORT: &str = "MENULENS_PORT";
pub const ENV_ITEM_CONCURRENCY: &str = "MENULENS_ITEM_CONCURRENCY";
pub const ENV_LOG_DIR: &str = "MENULENS_LOG_DIR";
pub const ENV_LOG_LEVEL: &str = "RUST_LOG";

/// Path of an optional YAML config file.
pub const ENV_CONFIG_PATH: &str = "MENULENS_CONFIG";

/// Apply overrides from the current process environment.
pub fn apply_process_env(config: MenuLensConfig) -> Result<MenuLensConfig> {
    apply_env_overrides(config, &std::env::vars().collect())
}

/// Apply overrides from a provided map (useful for testing).
pub fn apply_env_overrides(
    mut config: MenuLensConfig,
    env: &HashMap<String, String>,
) -> Result<MenuLensConfig> {
    if let Some(v) = lookup(env, ENV_OPENAI_API_KEY) {
        config.llm.api_key = Some(v);
    }
    if let Some(v) = lookup(env, ENV_OPENAI_BASE_URL) {
        config.llm.base_url = v;
    }
    if let Some(v) = lookup(env, ENV_GOOGLE_API_KEY) {
        config.search.api_key = Some(v);
    }
    if let Some(v) = lookup(env, ENV_GOOGLE_CSE_ID) {
        config.search.engine_id = Some(v);
    }
    if let Some(v) = lookup(env, ENV_BIND) {
        config.server.bind_address = v;
    }
    if let Some(port) = parse_var(env, ENV_PORT)? {
        config.server.port = port;
    }
    if let Some(n) = parse_var(env, ENV_ITEM_CONCURRENCY)? {
        config.pipeline.item_concurrency = n;
    }
    if let Some(v) = lookup(env, ENV_LOG_DIR) {
        config.logging.dir = Some(v);
    }
    if let Some(v) = lookup(env, ENV_LOG_LEVEL) {
        config.logging.level = v;
    }
    Ok(config)
}

fn lookup(env: &HashMap<String, String>, name: &str) -> Option<String> {
    env.get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn parse_var<T>(env: &HashMap<String, String>, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(env, name)
        .map(|raw| {
            raw.parse::<T>()
                .with_context(|| format!("Invalid value for {name}: {raw:?}"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn credentials_come_from_env() {
        let env = env(&[
            ("OPENAI_API_KEY", "sk-abc123"),
            ("GOOGLE_API_KEY", "AIza-xyz"),
            ("GOOGLE_CSE_ID", "cx-1"),
        ]);
        let config = apply_env_overrides(MenuLensConfig::default(), &env).unwrap();
        assert_eq!(config.llm.api_key.as_deref(), Some("sk-abc123"));
        assert!(config.search.is_configured());
    }

    #[test]
    fn empty_values_are_ignored() {
        let env = env(&[("GOOGLE_API_KEY", ""), ("MENULENS_PORT", "  ")]);
        let config = apply_env_overrides(MenuLensConfig::default(), &env).unwrap();
        assert!(config.search.api_key.is_none());
        assert_eq!(config.server.port, crate::defaults::DEFAULT_PORT);
    }

    #[test]
    fn parses_numeric_overrides() {
        let env = env(&[("MENULENS_PORT", "8088"), ("MENULENS_ITEM_CONCURRENCY", "1")]);
        let config = apply_env_overrides(MenuLensConfig::default(), &env).unwrap();
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.pipeline.item_concurrency, 1);
    }

    #[test]
    fn error_on_bad_port() {
        let env = env(&[("MENULENS_PORT", "eighty")]);
        let result = apply_env_overrides(MenuLensConfig::default(), &env);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("MENULENS_PORT"));
    }
}
