pub mod extractor;
pub mod mime;

pub use extractor::{EXTRACTION_PROMPT, MenuExtractor, parse_item_lines};
pub use mime::{detect_image_mime, sniff_image_mime};
