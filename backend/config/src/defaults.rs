//! Built-in configuration values.

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5001;

/// Multipart field carrying the menu photo.
pub const DEFAULT_UPLOAD_FIELD: &str = "menuImage";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_EXTRACT_MAX_TOKENS: u32 = 1500;
pub const DEFAULT_SELECT_MAX_TOKENS: u32 = 10;
pub const DEFAULT_SELECT_TEMPERATURE: f32 = 0.1;

pub const DEFAULT_SEARCH_BASE_URL: &str = "https://www.googleapis.com/customsearch/v1";
pub const DEFAULT_CANDIDATE_COUNT: u32 = 3;
pub const DEFAULT_FALLBACK_COUNT: u32 = 1;

pub const DEFAULT_ITEM_CONCURRENCY: usize = 4;

/// Placeholder substituted with the cleaned dish name in query templates.
pub const DISH_PLACEHOLDER: &str = "{dish}";

/// Query templates tried in order for every dish.
pub const DEFAULT_STRATEGIES: &[&str] = &[
    "{dish} pinterest",
    "{dish} food blog",
    "{dish} restaurant dish",
    "{dish} plated",
];

/// Broad single-candidate query used once every strategy has failed.
pub const DEFAULT_FALLBACK_TEMPLATE: &str = "{dish} food";

pub const DEFAULT_LOG_LEVEL: &str = "info";
