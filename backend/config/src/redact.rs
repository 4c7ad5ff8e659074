//! Config redaction: produce safe-to-log config snapshots by masking secrets.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::schema::MenuLensConfig;

/// Keys whose values are always secret.
static SECRET_KEYS: &[&str] = &["apiKey", "api_key", "engineId", "engine_id", "token", "secret"];

/// `key=` query parameters embedded in URLs (Google APIs take the key this way).
static URL_KEY_PARAM: Lazy<Regex> = Lazy::new(|| Regex::new(r"([?&]key=)[^&\s]+").unwrap());

/// Redact a config, replacing all sensitive fields with a short hint + `***`.
pub fn redact(config: &MenuLensConfig) -> Value {
    match serde_json::to_value(config) {
        Ok(value) => redact_value(&value, ""),
        Err(_) => Value::Null,
    }
}

fn is_secret_key(key: &str) -> bool {
    SECRET_KEYS.iter().any(|k| k.eq_ignore_ascii_case(key))
}

fn redact_string(s: &str, key: &str) -> Value {
    if is_secret_key(key) && !s.is_empty() {
        let hint = if s.chars().count() > 8 {
            format!("{}***", s.chars().take(4).collect::<String>())
        } else {
            "***".to_string()
        };
        return Value::String(hint);
    }
    Value::String(URL_KEY_PARAM.replace_all(s, "${1}***").into_owned())
}

fn redact_value(value: &Value, key: &str) -> Value {
    match value {
        Value::String(s) => redact_string(s, key),
        Value::Array(arr) => Value::Array(arr.iter().map(|v| redact_value(v, key)).collect()),
        Value::Object(map) => {
            let mut result = serde_json::Map::new();
            for (k, v) in map {
                result.insert(k.clone(), redact_value(v, k));
            }
            Value::Object(result)
        }
        other => other.clone(),
    }
}
