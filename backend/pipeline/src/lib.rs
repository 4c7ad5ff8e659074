//! The MenuLens pipeline: transcribe a menu photo, then find one appetizing
//! image per dish.
//!
//! Both HTTP adapters in `menulens-gateway` and the CLI drive this crate; it
//! holds the only copy of the orchestration logic.

pub mod dish;
pub mod menu;
pub mod orchestrator;
pub mod selector;
pub mod strategy;

pub use dish::{clean_dish_name, is_category_header, DishName, CATEGORY_HEADERS, MIN_DISH_NAME_CHARS};
pub use menu::MenuPipeline;
pub use orchestrator::ItemOrchestrator;
pub use selector::{build_selection_prompt, parse_choice, ImageSelector, NO_SELECTION};
pub use strategy::StrategySet;
