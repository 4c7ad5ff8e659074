use anyhow::Result;
use async_trait::async_trait;

/// Trait for chat-completion LLM providers used by the extractor and the selector.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name (e.g., "openai", "mock").
    fn name(&self) -> &str;

    /// Send a completion request and return the response text.
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse>;
}

/// Raw image attached to a multimodal request.
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// Request to an LLM provider.
#[derive(Debug, Clone)]
pub struct LlmRequest {
    pub model: String,
    pub system_prompt: String,
    pub user_prompt: String,
    /// Sent alongside the user prompt when present.
    pub image: Option<ImageAttachment>,
    pub max_tokens: u32,
    /// `None` leaves the provider default in place.
    pub temperature: Option<f32>,
}

impl LlmRequest {
    pub fn text(model: impl Into<String>, user_prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            system_prompt: String::new(),
            user_prompt: user_prompt.into(),
            image: None,
            max_tokens,
            temperature: None,
        }
    }

    pub fn with_image(mut self, image: ImageAttachment) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Response from an LLM provider.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub content: String,
    pub provider: String,
    pub model: String,
    pub tokens_used: u64,
    pub latency_ms: u64,
}

/// Trait for image search backends.
#[async_trait]
pub trait ImageSearch: Send + Sync {
    /// Backend name (e.g., "google-cse").
    fn name(&self) -> &str;

    /// Whether credentials are present. An unconfigured backend never touches the network.
    fn is_configured(&self) -> bool;

    /// Return up to `count` candidate image URLs for `query`, best-ranked first.
    async fn search(&self, query: &str, count: u32) -> Result<Vec<String>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_request_has_no_image_or_temperature() {
        let req = LlmRequest::text("gpt-4o-mini", "hello", 10);
        assert!(req.image.is_none());
        assert!(req.temperature.is_none());
        assert!(req.system_prompt.is_empty());
    }

    #[test]
    fn builder_sets_image_and_temperature() {
        let req = LlmRequest::text("gpt-4o-mini", "describe", 100)
            .with_image(ImageAttachment {
                mime_type: "image/png".into(),
                data: vec![1, 2, 3],
            })
            .with_temperature(0.1);
        assert_eq!(req.image.as_ref().map(|i| i.mime_type.as_str()), Some("image/png"));
        assert_eq!(req.temperature, Some(0.1));
    }
}
