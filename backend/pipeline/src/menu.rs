//! Whole-menu processing: one extraction call, then an image lookup per item.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{info, instrument};
use uuid::Uuid;

use menulens_config::MenuLensConfig;
use menulens_core::{
    ImageSearch, ItemOutcome, LlmProvider, MenuResponse, MenuResult, UNEXTRACTABLE_PLACEHOLDER,
};
use menulens_logging::{PipelineEvent, PipelineEventLogger};
use menulens_providers::OpenAiProvider;
use menulens_search::{GoogleImageSearch, SearchCredentials};
use menulens_understanding::MenuExtractor;

use crate::orchestrator::ItemOrchestrator;
use crate::selector::ImageSelector;
use crate::strategy::StrategySet;

pub struct MenuPipeline {
    extractor: MenuExtractor,
    orchestrator: ItemOrchestrator,
    item_concurrency: usize,
}

impl MenuPipeline {
    pub fn new(extractor: MenuExtractor, orchestrator: ItemOrchestrator) -> Self {
        Self {
            extractor,
            orchestrator,
            item_concurrency: 1,
        }
    }

    /// Items resolved at once. Results keep extraction order regardless.
    pub fn with_item_concurrency(mut self, n: usize) -> Self {
        self.item_concurrency = n.max(1);
        self
    }

    /// Wire the pipeline from explicit collaborators and the config's tuning values.
    pub fn from_parts(
        config: &MenuLensConfig,
        llm: Arc<dyn LlmProvider>,
        search: Arc<dyn ImageSearch>,
    ) -> Self {
        let extractor = MenuExtractor::new(
            Arc::clone(&llm),
            config.llm.model.clone(),
            config.llm.extract_max_tokens,
        );
        let selector = ImageSelector::new(
            llm,
            config.llm.model.clone(),
            config.llm.select_max_tokens,
            config.llm.select_temperature,
        );
        let strategies = StrategySet::new(
            config.pipeline.strategies.clone(),
            config.pipeline.fallback_template.clone(),
        );
        let orchestrator = ItemOrchestrator::new(search, selector, strategies)
            .with_counts(config.search.candidate_count, config.search.fallback_count);

        Self::new(extractor, orchestrator).with_item_concurrency(config.pipeline.item_concurrency)
    }

    /// Wire the production pipeline: OpenAI-compatible LLM + Google image search.
    pub fn from_config(config: &MenuLensConfig) -> Self {
        let llm = OpenAiProvider::new(config.llm.api_key.clone().unwrap_or_default())
            .with_base_url(config.llm.base_url.clone());

        let credentials = SearchCredentials::from_parts(
            config.search.api_key.as_deref(),
            config.search.engine_id.as_deref(),
        );
        let search = GoogleImageSearch::new(credentials).with_endpoint(config.search.base_url.clone());

        Self::from_parts(config, Arc::new(llm), Arc::new(search))
    }

    /// Transcribe the menu photo and attach at most one image to every item.
    ///
    /// The response has exactly one entry per extracted item, in extraction order.
    #[instrument(skip(self, image), fields(bytes = image.len()))]
    pub async fn process(&self, image: &[u8], mime_type: &str) -> MenuResponse {
        let request_id = Uuid::new_v4().to_string();

        let items = self.extractor.extract_items(image, mime_type).await;
        PipelineEventLogger::log_event(
            &request_id,
            PipelineEvent::ItemsExtracted {
                count: items.len(),
                placeholder: is_placeholder(&items),
            },
        );

        let orchestrator = &self.orchestrator;
        let request_id = request_id.as_str();
        let menu: Vec<MenuResult> = stream::iter(items)
            .map(|item| async move {
                let outcome = orchestrator.resolve(&item, request_id).await;
                log_outcome(request_id, &item, &outcome);
                MenuResult {
                    image: outcome.into_image(),
                    item,
                }
            })
            .buffered(self.item_concurrency)
            .collect()
            .await;

        let with_image = menu.iter().filter(|r| r.image.is_some()).count();
        info!(request_id, items = menu.len(), with_image, "Menu processed");

        MenuResponse { menu }
    }
}

fn is_placeholder(items: &[String]) -> bool {
    matches!(items, [only] if only.as_str() == UNEXTRACTABLE_PLACEHOLDER)
}

fn log_outcome(request_id: &str, item: &str, outcome: &ItemOutcome) {
    let state = match outcome {
        ItemOutcome::SearchDisabled => "search_disabled",
        ItemOutcome::Excluded => "excluded",
        ItemOutcome::Selected { .. } => "selected",
        ItemOutcome::Fallback { .. } => "fallback",
        ItemOutcome::Unselected => "unselected",
    };
    PipelineEventLogger::log_event(
        request_id,
        PipelineEvent::ItemResolved {
            item: item.to_string(),
            outcome: state.to_string(),
            image: outcome.image().map(str::to_string),
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use menulens_providers::MockProvider;
    use menulens_search::MockImageSearch;

    fn config(concurrency: usize) -> MenuLensConfig {
        let mut config = MenuLensConfig::default();
        config.pipeline.item_concurrency = concurrency;
        config
    }

    #[tokio::test]
    async fn one_result_per_item_in_order() {
        let llm = Arc::new(
            MockProvider::new("mock")
                .then_reply("APPETIZERS\n1. Pho - $12\nBanh Mi - $9\n\nTea - $2")
                .with_response("1"),
        );
        let search = Arc::new(
            MockImageSearch::new()
                .with_results("Pho pinterest", ["https://a/pho1.jpg", "https://a/pho2.jpg"])
                .with_results("Banh Mi food", ["https://a/banhmi.jpg"]),
        );
        let pipeline = MenuPipeline::from_parts(&config(4), llm, search);

        let response = pipeline.process(b"img", "image/jpeg").await;
        let items: Vec<&str> = response.menu.iter().map(|r| r.item.as_str()).collect();
        assert_eq!(items, vec!["APPETIZERS", "1. Pho - $12", "Banh Mi - $9", "Tea - $2"]);

        assert_eq!(response.menu[0].image, None);
        assert_eq!(response.menu[1].image.as_deref(), Some("https://a/pho1.jpg"));
        assert_eq!(response.menu[2].image.as_deref(), Some("https://a/banhmi.jpg"));
        assert_eq!(response.menu[3].image, None);
    }

    #[tokio::test]
    async fn missing_search_credentials_yield_null_images() {
        let llm = Arc::new(MockProvider::new("mock").then_reply("Pho - $12\nBanh Mi - $9"));
        let search = Arc::new(MockImageSearch::unconfigured());
        let pipeline = MenuPipeline::from_parts(&config(1), llm.clone(), search.clone());

        let response = pipeline.process(b"img", "image/jpeg").await;
        assert_eq!(response.menu.len(), 2);
        assert!(response.menu.iter().all(|r| r.image.is_none()));
        assert!(search.calls().is_empty());
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn extraction_failure_yields_placeholder_row() {
        let llm = Arc::new(MockProvider::new("mock").then_fail("connection refused"));
        let search = Arc::new(MockImageSearch::new());
        let pipeline = MenuPipeline::from_parts(&config(1), llm, search);

        let response = pipeline.process(b"img", "image/jpeg").await;
        assert_eq!(
            response.menu,
            vec![MenuResult {
                item: UNEXTRACTABLE_PLACEHOLDER.to_string(),
                image: None
            }]
        );
    }

    #[test]
    fn placeholder_is_only_the_lone_fallback_row() {
        assert!(is_placeholder(&[UNEXTRACTABLE_PLACEHOLDER.to_string()]));
        assert!(!is_placeholder(&["Pho - $12".to_string()]));
        assert!(!is_placeholder(&[]));
    }

    #[test]
    fn concurrency_is_at_least_one() {
        let llm: Arc<dyn LlmProvider> = Arc::new(MockProvider::new("mock"));
        let search: Arc<dyn ImageSearch> = Arc::new(MockImageSearch::new());
        let pipeline = MenuPipeline::from_parts(&config(0), llm, search);
        assert_eq!(pipeline.item_concurrency, 1);
    }
}
