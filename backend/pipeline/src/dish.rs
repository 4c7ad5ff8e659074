//! Dish name cleaning: turn a transcribed menu line into a search-ready name.

/// Category headers that the extractor sometimes emits as if they were dishes.
pub const CATEGORY_HEADERS: &[&str] = &[
    "soups",
    "starters",
    "salads",
    "entrees",
    "pastas",
    "appetizers",
    "mains",
    "desserts",
];

/// Names shorter than this carry too little signal to search for.
pub const MIN_DISH_NAME_CHARS: usize = 3;

const ENUMERATION_CHARS: &str = "0123456789.- ";

/// A cleaned dish name that is worth searching for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishName(String);

impl DishName {
    /// Clean `item` and return `None` when the result must not be searched.
    pub fn parse(item: &str) -> Option<Self> {
        let clean = clean_dish_name(item);
        if clean.chars().count() < MIN_DISH_NAME_CHARS || is_category_header(&clean) {
            return None;
        }
        Some(Self(clean))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DishName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strip the price, list markers, asterisks and hyphens from a menu line.
///
/// `"3. Grilled Salmon - $24"` becomes `"Grilled Salmon"`.
pub fn clean_dish_name(item: &str) -> String {
    let before_price = item.split(" - $").next().unwrap_or(item);
    let before_price = before_price.split(" $").next().unwrap_or(before_price).trim();

    let unmarked: String = before_price.chars().filter(|c| *c != '*' && *c != '-').collect();

    unmarked
        .trim()
        .trim_start_matches(|c| ENUMERATION_CHARS.contains(c))
        .trim()
        .to_string()
}

/// Case-insensitive match against [`CATEGORY_HEADERS`].
pub fn is_category_header(name: &str) -> bool {
    let lower = name.to_lowercase();
    CATEGORY_HEADERS.iter().any(|h| *h == lower)
}
