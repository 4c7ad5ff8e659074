pub mod error;
pub mod traits;
pub mod types;

pub use error::MenuError;
pub use traits::{ImageAttachment, ImageSearch, LlmProvider, LlmRequest, LlmResponse};
pub use types::{ItemOutcome, MenuResponse, MenuResult, UNEXTRACTABLE_PLACEHOLDER};
