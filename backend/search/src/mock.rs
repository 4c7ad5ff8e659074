use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use menulens_core::ImageSearch;

/// Scripted image search keyed by exact query text.
///
/// Unknown queries return an empty list. Every call is recorded as `(query, count)`.
pub struct MockImageSearch {
    configured: bool,
    results: HashMap<String, Result<Vec<String>, String>>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl MockImageSearch {
    pub fn new() -> Self {
        Self {
            configured: true,
            results: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A backend without credentials.
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new()
        }
    }

    pub fn with_results<I, S>(mut self, query: impl Into<String>, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.results
            .insert(query.into(), Ok(urls.into_iter().map(Into::into).collect()));
        self
    }

    pub fn with_error(mut self, query: impl Into<String>, error: impl Into<String>) -> Self {
        self.results.insert(query.into(), Err(error.into()));
        self
    }

    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn queries(&self) -> Vec<String> {
        self.calls().into_iter().map(|(q, _)| q).collect()
    }
}

impl Default for MockImageSearch {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageSearch for MockImageSearch {
    fn name(&self) -> &str {
        "mock"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn search(&self, query: &str, count: u32) -> Result<Vec<String>> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((query.to_string(), count));
        }
        match self.results.get(query) {
            Some(Ok(urls)) => Ok(urls.iter().take(count as usize).cloned().collect()),
            Some(Err(e)) => Err(anyhow!(e.clone())),
            None => Ok(Vec::new()),
        }
    }
}
