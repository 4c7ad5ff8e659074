//! Image selection: let the language model pick the most appetizing candidate
//! from the URL text alone.

use std::sync::Arc;

use tracing::{debug, warn};

use menulens_core::{LlmProvider, LlmRequest};

/// Sentinel the model answers with when no candidate is suitable.
pub const NO_SELECTION: &str = "NONE";

pub struct ImageSelector {
    provider: Arc<dyn LlmProvider>,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl ImageSelector {
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        model: impl Into<String>,
        max_tokens: u32,
        temperature: f32,
    ) -> Self {
        Self {
            provider,
            model: model.into(),
            max_tokens,
            temperature,
        }
    }

    /// Pick the best candidate for `dish_name`.
    ///
    /// `None` means the model rejected every candidate or answered with
    /// something unparseable. If the model call itself fails, the first
    /// candidate is returned instead.
    pub async fn select_best(&self, dish_name: &str, candidates: &[String]) -> Option<String> {
        if candidates.is_empty() {
            return None;
        }

        let prompt = build_selection_prompt(dish_name, candidates);
        let request = LlmRequest::text(&self.model, prompt, self.max_tokens)
            .with_temperature(self.temperature);

        match self.provider.complete(&request).await {
            Ok(response) => {
                let choice = parse_choice(&response.content, candidates);
                debug!(
                    dish = %dish_name,
                    answer = %response.content.trim(),
                    selected = choice.is_some(),
                    "Selector answered"
                );
                choice
            }
            Err(e) => {
                warn!(dish = %dish_name, error = %e, "Image selection failed; using first candidate");
                candidates.first().cloned()
            }
        }
    }
}

/// Map the model's answer to a candidate.
///
/// Accepts only the [`NO_SELECTION`] sentinel or a 1-based index within range;
/// anything else is treated as no selection.
pub fn parse_choice(response: &str, candidates: &[String]) -> Option<String> {
    let answer = response.trim();
    if answer == NO_SELECTION {
        return None;
    }
    let index: usize = answer.parse().ok()?;
    index
        .checked_sub(1)
        .and_then(|i| candidates.get(i))
        .cloned()
}

/// Build the ranking prompt with a 1-based enumerated URL list.
pub fn build_selection_prompt(dish_name: &str, candidates: &[String]) -> String {
    let url_list = candidates
        .iter()
        .enumerate()
        .map(|(i, url)| format!("{}. {}", i + 1, url))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Analyze these image URLs for the dish "{dish_name}" and pick the BEST one for a menu visualization app.

URLs to analyze:
{url_list}

Look for URLs that indicate:
- High-quality food photography (recipe sites, food blogs, cooking websites)
- Professional presentation (restaurant sites, food magazines)
- Appetizing, well-plated dishes
- Clear, high-resolution images

AVOID URLs that suggest:
- Stock photos or generic images
- Menu screenshots or text-heavy images
- Low-quality or thumbnail images
- Irrelevant content

Respond with ONLY the number ({choices}) of the best URL. If none are suitable, respond with "{NO_SELECTION}"."#,
        choices = choice_list(candidates.len()),
    )
}

/// "1", "1 or 2", "1, 2, or 3", ...
fn choice_list(n: usize) -> String {
    let numbers: Vec<String> = (1..=n).map(|i| i.to_string()).collect();
    match numbers.as_slice() {
        [] => String::new(),
        [one] => one.clone(),
        [a, b] => format!("{a} or {b}"),
        [head @ .., last] => format!("{}, or {last}", head.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menulens_providers::MockProvider;

    fn urls(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("https://food.example/{i}.jpg")).collect()
    }

    #[test]
    fn parses_in_range_index() {
        let c = urls(3);
        assert_eq!(parse_choice("2", &c), Some(c[1].clone()));
        assert_eq!(parse_choice("  3\n", &c), Some(c[2].clone()));
    }

    #[test]
    fn sentinel_and_garbage_mean_no_selection() {
        let c = urls(3);
        assert_eq!(parse_choice("NONE", &c), None);
        assert_eq!(parse_choice("0", &c), None);
        assert_eq!(parse_choice("4", &c), None);
        assert_eq!(parse_choice("-1", &c), None);
        assert_eq!(parse_choice("The second one", &c), None);
        assert_eq!(parse_choice("", &c), None);
    }

    #[test]
    fn prompt_enumerates_from_one() {
        let prompt = build_selection_prompt("Pho", &urls(3));
        assert!(prompt.contains("\"Pho\""));
        assert!(prompt.contains("1. https://food.example/1.jpg\n2. https://food.example/2.jpg"));
        assert!(prompt.contains("(1, 2, or 3)"));
        assert!(prompt.contains("respond with \"NONE\""));
    }

    #[test]
    fn choice_list_phrasing() {
        assert_eq!(choice_list(1), "1");
        assert_eq!(choice_list(2), "1 or 2");
        assert_eq!(choice_list(4), "1, 2, 3, or 4");
    }

    #[tokio::test]
    async fn model_answer_picks_candidate() {
        let mock = Arc::new(MockProvider::new("mock").then_reply("2"));
        let selector = ImageSelector::new(mock.clone(), "gpt-4o-mini", 10, 0.1);
        let c = urls(3);

        assert_eq!(selector.select_best("Pho", &c).await, Some(c[1].clone()));
        let req = &mock.requests()[0];
        assert_eq!(req.max_tokens, 10);
        assert_eq!(req.temperature, Some(0.1));
        assert!(req.image.is_none());
    }

    #[tokio::test]
    async fn model_error_falls_back_to_first_candidate() {
        let mock = Arc::new(MockProvider::new("mock").then_fail("rate limited"));
        let selector = ImageSelector::new(mock, "gpt-4o-mini", 10, 0.1);
        let c = urls(3);
        assert_eq!(selector.select_best("Pho", &c).await, Some(c[0].clone()));
    }

    #[tokio::test]
    async fn empty_candidates_skip_model() {
        let mock = Arc::new(MockProvider::new("mock"));
        let selector = ImageSelector::new(mock.clone(), "gpt-4o-mini", 10, 0.1);
        assert_eq!(selector.select_best("Pho", &[]).await, None);
        assert_eq!(mock.call_count(), 0);
    }
}
