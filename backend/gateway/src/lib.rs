//! MenuLens HTTP Gateway
//!
//! Two thin transport adapters over the same pipeline: an axum server and a
//! single-request serverless handler.

pub mod error;
pub mod health_api;
pub mod server;
pub mod serverless;
pub mod upload;

pub use error::ApiError;
pub use server::{GatewayState, build_router, start_server};
pub use serverless::ServerlessHandler;
