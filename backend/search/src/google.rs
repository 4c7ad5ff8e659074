//! Google Custom Search image client.
//!
//! Issues `searchType=image` queries with safe search on, medium size and
//! photo type, then filters the returned links through the URL denylist.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use menulens_core::{ImageSearch, MenuError};

use crate::filter::filter_candidates;

const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// API key + programmable search engine ID.
#[derive(Debug, Clone)]
pub struct SearchCredentials {
    pub api_key: String,
    pub engine_id: String,
}

impl SearchCredentials {
    /// Both values must be present and non-blank, otherwise search stays disabled.
    pub fn from_parts(api_key: Option<&str>, engine_id: Option<&str>) -> Option<Self> {
        let api_key = api_key.map(str::trim).filter(|k| !k.is_empty())?;
        let engine_id = engine_id.map(str::trim).filter(|k| !k.is_empty())?;
        Some(Self {
            api_key: api_key.to_string(),
            engine_id: engine_id.to_string(),
        })
    }
}

pub struct GoogleImageSearch {
    client: Client,
    credentials: Option<SearchCredentials>,
    endpoint: String,
}

impl GoogleImageSearch {
    pub fn new(credentials: Option<SearchCredentials>) -> Self {
        Self {
            client: Client::new(),
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Deserialize)]
struct SearchItem {
    link: Option<String>,
}

fn query_params<'a>(creds: &'a SearchCredentials, query: &'a str, num: &'a str) -> [(&'static str, &'a str); 8] {
    [
        ("key", creds.api_key.as_str()),
        ("cx", creds.engine_id.as_str()),
        ("q", query),
        ("searchType", "image"),
        ("num", num),
        ("safe", "active"),
        ("imgSize", "medium"),
        ("imgType", "photo"),
    ]
}

fn links(body: SearchResponse) -> Vec<String> {
    filter_candidates(body.items.into_iter().filter_map(|item| item.link))
}

#[async_trait]
impl ImageSearch for GoogleImageSearch {
    fn name(&self) -> &str {
        "google-cse"
    }

    fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    async fn search(&self, query: &str, count: u32) -> Result<Vec<String>> {
        let Some(creds) = &self.credentials else {
            return Ok(Vec::new());
        };

        let num = count.to_string();
        debug!(query = %query, num = count, "Searching images");

        let resp = self
            .client
            .get(&self.endpoint)
            .query(&query_params(creds, query, &num))
            .send()
            .await
            .context("Image search HTTP request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(MenuError::Search {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let body: SearchResponse = resp
            .json()
            .await
            .context("Failed to parse image search response")?;

        Ok(links(body))
    }
}
