use serde::{Deserialize, Serialize};

/// Item emitted when the menu image could not be transcribed.
pub const UNEXTRACTABLE_PLACEHOLDER: &str = "Unable to extract menu items";

/// One transcribed menu entry paired with at most one image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuResult {
    /// The item exactly as the extractor produced it.
    pub item: String,
    pub image: Option<String>,
}

/// Body of a successful upload response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuResponse {
    pub menu: Vec<MenuResult>,
}

/// Terminal state of one item's image lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ItemOutcome {
    /// Image search has no credentials; nothing was attempted.
    SearchDisabled,
    /// Dish name was too short or a category header.
    Excluded,
    /// The selector picked a candidate for this strategy query.
    Selected { url: String, strategy: String },
    /// Every strategy failed; the broad fallback query supplied the image.
    Fallback { url: String },
    /// Nothing usable was found.
    Unselected,
}

impl ItemOutcome {
    pub fn image(&self) -> Option<&str> {
        match self {
            ItemOutcome::Selected { url, .. } | ItemOutcome::Fallback { url } => Some(url),
            _ => None,
        }
    }

    pub fn into_image(self) -> Option<String> {
        match self {
            ItemOutcome::Selected { url, .. } | ItemOutcome::Fallback { url } => Some(url),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_image_serializes_as_null() {
        let resp = MenuResponse {
            menu: vec![
                MenuResult { item: "Soup - $5".into(), image: None },
                MenuResult {
                    item: "Steak - $30".into(),
                    image: Some("https://example.com/steak.jpg".into()),
                },
            ],
        };
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            value,
            json!({"menu": [
                {"item": "Soup - $5", "image": null},
                {"item": "Steak - $30", "image": "https://example.com/steak.jpg"}
            ]})
        );
    }

    #[test]
    fn outcome_image_only_for_resolved_states() {
        let selected = ItemOutcome::Selected {
            url: "https://a/1.jpg".into(),
            strategy: "Pho pinterest".into(),
        };
        assert_eq!(selected.image(), Some("https://a/1.jpg"));
        assert_eq!(ItemOutcome::Excluded.image(), None);
        assert_eq!(ItemOutcome::Unselected.into_image(), None);
    }
}
