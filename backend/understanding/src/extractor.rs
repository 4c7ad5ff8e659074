//! Menu transcription: read dish names and prices off a menu photo with a vision LLM.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use menulens_core::{ImageAttachment, LlmProvider, LlmRequest, UNEXTRACTABLE_PLACEHOLDER};

/// Fixed instruction sent with every menu photo.
pub const EXTRACTION_PROMPT: &str = "Extract each individual food and drink item from this menu image. \
List ONLY the specific dish names with their prices, one per line. \
Skip category headers like 'Appetizers', 'Entrees', etc. \
Format: 'Dish Name - $Price'. \
Focus on actual food items that customers can order.";

pub struct MenuExtractor {
    provider: Arc<dyn LlmProvider>,
    model: String,
    max_tokens: u32,
}

impl MenuExtractor {
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            provider,
            model: model.into(),
            max_tokens,
        }
    }

    /// Transcribe the menu, never failing.
    ///
    /// Any provider error collapses into the single placeholder item.
    pub async fn extract_items(&self, image: &[u8], mime_type: &str) -> Vec<String> {
        match self.try_extract(image, mime_type).await {
            Ok(items) => {
                info!(count = items.len(), "Extracted menu items");
                items
            }
            Err(e) => {
                warn!(error = %format!("{e:#}"), "Menu extraction failed; using placeholder");
                vec![UNEXTRACTABLE_PLACEHOLDER.to_string()]
            }
        }
    }

    /// Transcribe the menu, surfacing provider errors.
    pub async fn try_extract(&self, image: &[u8], mime_type: &str) -> Result<Vec<String>> {
        let request = LlmRequest::text(&self.model, EXTRACTION_PROMPT, self.max_tokens).with_image(
            ImageAttachment {
                mime_type: mime_type.to_string(),
                data: image.to_vec(),
            },
        );
        let response = self
            .provider
            .complete(&request)
            .await
            .with_context(|| format!("{} extraction call failed", self.provider.name()))?;
        Ok(parse_item_lines(&response.content))
    }
}

/// Split a model answer into items: one per line, trimmed, blanks dropped, order kept.
///
/// Every Unicode line boundary counts, including a lone `\r`.
pub fn parse_item_lines(text: &str) -> Vec<String> {
    text.split(is_line_boundary)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
