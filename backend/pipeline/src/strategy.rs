//! Query templates for dish image search.

use menulens_config::defaults::{DEFAULT_FALLBACK_TEMPLATE, DEFAULT_STRATEGIES, DISH_PLACEHOLDER};

use crate::dish::DishName;

/// Ordered query templates plus the broad fallback template.
///
/// Earlier templates are preferred; they are always tried first.
#[derive(Debug, Clone)]
pub struct StrategySet {
    templates: Vec<String>,
    fallback: String,
}

impl StrategySet {
    pub fn new(templates: Vec<String>, fallback: impl Into<String>) -> Self {
        Self {
            templates,
            fallback: fallback.into(),
        }
    }

    /// Search queries for `dish`, in the order they should be tried.
    pub fn queries(&self, dish: &DishName) -> Vec<String> {
        self.templates.iter().map(|t| render(t, dish)).collect()
    }

    pub fn fallback_query(&self, dish: &DishName) -> String {
        render(&self.fallback, dish)
    }
}

impl Default for StrategySet {
    fn default() -> Self {
        Self::new(
            DEFAULT_STRATEGIES.iter().map(|s| s.to_string()).collect(),
            DEFAULT_FALLBACK_TEMPLATE,
        )
    }
}

fn render(template: &str, dish: &DishName) -> String {
    template.replace(DISH_PLACEHOLDER, dish.as_str())
}
