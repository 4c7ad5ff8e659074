//! Image search for menu dishes.
//!
//! `GoogleImageSearch` talks to the Custom Search JSON API; `MockImageSearch`
//! serves scripted results for tests.

pub mod filter;
pub mod google;
pub mod mock;

pub use filter::{filter_candidates, is_denylisted, URL_DENYLIST};
pub use google::{GoogleImageSearch, SearchCredentials};
pub use mock::MockImageSearch;
