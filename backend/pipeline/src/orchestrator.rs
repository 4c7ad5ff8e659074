//! Per-item orchestration: clean the dish name, walk the query strategies,
//! and fall back to one broad query when nothing was selected.

use std::sync::Arc;

use tracing::{debug, info, warn};

use menulens_core::{ImageSearch, ItemOutcome};
use menulens_logging::{redact_sensitive_data, PipelineEvent, PipelineEventLogger};

use crate::dish::DishName;
use crate::selector::ImageSelector;
use crate::strategy::StrategySet;

/// A selector needs at least this many candidates to make a real choice.
const MIN_CANDIDATES_FOR_SELECTION: usize = 2;

pub struct ItemOrchestrator {
    search: Arc<dyn ImageSearch>,
    selector: ImageSelector,
    strategies: StrategySet,
    candidate_count: u32,
    fallback_count: u32,
}

impl ItemOrchestrator {
    pub fn new(search: Arc<dyn ImageSearch>, selector: ImageSelector, strategies: StrategySet) -> Self {
        Self {
            search,
            selector,
            strategies,
            candidate_count: 3,
            fallback_count: 1,
        }
    }

    pub fn with_counts(mut self, candidate_count: u32, fallback_count: u32) -> Self {
        self.candidate_count = candidate_count;
        self.fallback_count = fallback_count;
        self
    }

    /// Image URL for one extracted menu item, if any.
    pub async fn select_image(&self, item: &str) -> Option<String> {
        self.resolve(item, "-").await.into_image()
    }

    /// Run the full lookup for one item and report its terminal state.
    ///
    /// Never fails: search and selection errors only skip the strategy they occur in.
    pub async fn resolve(&self, item: &str, request_id: &str) -> ItemOutcome {
        if !self.search.is_configured() {
            return ItemOutcome::SearchDisabled;
        }

        let Some(dish) = DishName::parse(item) else {
            debug!(item = %item, "Skipping category header or short item");
            return ItemOutcome::Excluded;
        };

        for query in self.strategies.queries(&dish) {
            let candidates = match self.search.search(&query, self.candidate_count).await {
                Ok(candidates) => candidates,
                Err(e) => {
                    let error = describe_error(&e);
                    warn!(query = %query, item = %item, error = %error, "Search strategy failed");
                    PipelineEventLogger::log_event(
                        request_id,
                        PipelineEvent::UpstreamError {
                            stage: format!("search:{query}"),
                            error_msg: error,
                        },
                    );
                    continue;
                }
            };

            PipelineEventLogger::log_event(
                request_id,
                PipelineEvent::StrategyAttempt {
                    dish: dish.to_string(),
                    query: query.clone(),
                    candidates: candidates.len(),
                },
            );

            if candidates.len() < MIN_CANDIDATES_FOR_SELECTION {
                continue;
            }

            if let Some(url) = self.selector.select_best(dish.as_str(), &candidates).await {
                info!(dish = %dish, strategy = %query, "Selected image");
                return ItemOutcome::Selected { url, strategy: query };
            }
        }

        self.fallback(&dish, request_id).await
    }

    /// Broad single query whose first result is taken without review.
    async fn fallback(&self, dish: &DishName, request_id: &str) -> ItemOutcome {
        let query = self.strategies.fallback_query(dish);
        match self.search.search(&query, self.fallback_count).await {
            Ok(urls) => match urls.into_iter().next() {
                Some(url) => {
                    info!(dish = %dish, "Using fallback image");
                    ItemOutcome::Fallback { url }
                }
                None => ItemOutcome::Unselected,
            },
            Err(e) => {
                let error = describe_error(&e);
                warn!(query = %query, error = %error, "Fallback search failed");
                PipelineEventLogger::log_event(
                    request_id,
                    PipelineEvent::UpstreamError {
                        stage: format!("fallback:{query}"),
                        error_msg: error,
                    },
                );
                ItemOutcome::Unselected
            }
        }
    }
}

/// Full error chain with credentials scrubbed; request URLs carry the search key.
fn describe_error(err: &anyhow::Error) -> String {
    redact_sensitive_data(&format!("{err:#}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use menulens_providers::MockProvider;
    use menulens_search::MockImageSearch;

    const A: &str = "https://food.example/a.jpg";
    const B: &str = "https://food.example/b.jpg";
    const C: &str = "https://food.example/c.jpg";
    const F: &str = "https://food.example/fallback.jpg";

    fn orchestrator(search: Arc<MockImageSearch>, llm: Arc<MockProvider>) -> ItemOrchestrator {
        let selector = ImageSelector::new(llm, "gpt-4o-mini", 10, 0.1);
        ItemOrchestrator::new(search, selector, StrategySet::default())
    }

    #[tokio::test]
    async fn first_strategy_selection_short_circuits() {
        let search = Arc::new(MockImageSearch::new().with_results("Grilled Salmon pinterest", [A, B, C]));
        let llm = Arc::new(MockProvider::new("mock").then_reply("2"));
        let orch = orchestrator(search.clone(), llm.clone());

        let outcome = orch.resolve("3. Grilled Salmon - $24", "t").await;
        assert_eq!(
            outcome,
            ItemOutcome::Selected {
                url: B.into(),
                strategy: "Grilled Salmon pinterest".into()
            }
        );
        assert_eq!(search.calls(), vec![("Grilled Salmon pinterest".to_string(), 3)]);
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn single_candidate_skips_selector() {
        let search = Arc::new(
            MockImageSearch::new()
                .with_results("Pho pinterest", [A])
                .with_results("Pho food blog", [B, C]),
        );
        let llm = Arc::new(MockProvider::new("mock").then_reply("1"));
        let orch = orchestrator(search.clone(), llm.clone());

        assert_eq!(orch.select_image("Pho - $12").await, Some(B.to_string()));
        assert_eq!(llm.call_count(), 1);
        assert!(llm.requests()[0].user_prompt.contains(B));
        assert_eq!(search.queries(), vec!["Pho pinterest", "Pho food blog"]);
    }

    #[tokio::test]
    async fn none_answer_moves_to_next_strategy() {
        let search = Arc::new(
            MockImageSearch::new()
                .with_results("Pho pinterest", [A, B])
                .with_results("Pho food blog", [B, C]),
        );
        let llm = Arc::new(MockProvider::new("mock").then_reply("NONE").then_reply("2"));
        let orch = orchestrator(search.clone(), llm.clone());

        assert_eq!(orch.select_image("Pho").await, Some(C.to_string()));
        assert_eq!(llm.call_count(), 2);
    }

    #[tokio::test]
    async fn exhausted_strategies_use_fallback_without_selector() {
        let search = Arc::new(MockImageSearch::new().with_results("Pho food", [F]));
        let llm = Arc::new(MockProvider::new("mock"));
        let orch = orchestrator(search.clone(), llm.clone());

        assert_eq!(
            orch.resolve("Pho", "t").await,
            ItemOutcome::Fallback { url: F.into() }
        );
        assert_eq!(llm.call_count(), 0);
        assert_eq!(
            search.calls().last().cloned(),
            Some(("Pho food".to_string(), 1))
        );
        assert_eq!(search.calls().len(), 5);
    }

    #[tokio::test]
    async fn search_errors_skip_strategy() {
        let search = Arc::new(
            MockImageSearch::new()
                .with_error("Pho pinterest", "429 Too Many Requests")
                .with_results("Pho food blog", [A, B]),
        );
        let llm = Arc::new(MockProvider::new("mock").then_reply("1"));
        let orch = orchestrator(search, llm);

        assert_eq!(orch.select_image("Pho").await, Some(A.to_string()));
    }

    #[tokio::test]
    async fn fallback_error_is_unselected() {
        let search = Arc::new(MockImageSearch::new().with_error("Pho food", "500"));
        let orch = orchestrator(search, Arc::new(MockProvider::new("mock")));
        assert_eq!(orch.resolve("Pho", "t").await, ItemOutcome::Unselected);
    }

    #[tokio::test]
    async fn excluded_items_make_no_calls() {
        let search = Arc::new(MockImageSearch::new());
        let llm = Arc::new(MockProvider::new("mock"));
        let orch = orchestrator(search.clone(), llm.clone());

        assert_eq!(orch.resolve("APPETIZERS", "t").await, ItemOutcome::Excluded);
        assert!(search.calls().is_empty());
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn unconfigured_search_makes_no_calls() {
        let search = Arc::new(MockImageSearch::unconfigured().with_results("Pho pinterest", [A, B]));
        let llm = Arc::new(MockProvider::new("mock").with_response("1"));
        let orch = orchestrator(search.clone(), llm.clone());

        assert_eq!(orch.resolve("Pho - $12", "t").await, ItemOutcome::SearchDisabled);
        assert!(search.calls().is_empty());
        assert_eq!(llm.call_count(), 0);
    }

    #[test]
    fn error_description_keeps_cause_and_hides_key() {
        let err = anyhow::anyhow!(
            "error sending request for url (https://www.googleapis.com/customsearch/v1?key=AIzaSyD-secret&q=pho)"
        )
        .context("Image search HTTP request failed");

        let described = describe_error(&err);
        assert!(described.starts_with("Image search HTTP request failed: error sending request"));
        assert!(described.contains("q=pho"));
        assert!(!described.contains("AIzaSyD-secret"));
    }
}
