//! Log Redaction Layer
//!
//! Scrubs API keys, bearer tokens and `key=` URL parameters from strings prior to logging.

use regex::Regex;
use std::sync::LazyLock;

static API_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(sk-[a-zA-Z0-9_\-]{16,})|(Bearer\s+[a-zA-Z0-9\-\._~+/]+=*)|(AIza[0-9A-Za-z_\-]{20,})")
        .unwrap()
});
static URL_KEY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([?&](?:key|cx)=)[^&\s]+").unwrap());

/// Redacts sensitive patterns in a string.
pub fn redact_sensitive_data(input: &str) -> String {
    let redacted = URL_KEY_RE.replace_all(input, "${1}[REDACTED]");
    API_KEY_RE.replace_all(&redacted, "[REDACTED_TOKEN]").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redaction() {
        let raw = "401 from upstream with Bearer eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9 and sk-proj-abcdefghijklmnopqrstuv";
        let clean = redact_sensitive_data(raw);
        assert!(!clean.contains("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"));
        assert!(!clean.contains("abcdefghijklmnopqrstuv"));
    }

    #[test]
    fn redacts_google_query_credentials() {
        let raw = "error sending request for url (https://www.googleapis.com/customsearch/v1?key=AIzaSyD-123&cx=abc:def&q=pho)";
        let clean = redact_sensitive_data(raw);
        assert!(!clean.contains("AIzaSyD-123"));
        assert!(!clean.contains("abc:def"));
        assert!(clean.contains("q=pho"));
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(redact_sensitive_data("Grilled Salmon - $24"), "Grilled Salmon - $24");
    }
}
