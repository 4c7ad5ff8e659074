//! Single-request entry point for serverless hosts.
//!
//! The host hands over one already-parsed HTTP request at a time; routing,
//! error mapping and CORS are the same as the long-running server.

use std::convert::Infallible;

use axum::{Router, body::Body, http::Request, response::Response};
use tower::ServiceExt;

use crate::server::{GatewayState, build_router};

#[derive(Clone)]
pub struct ServerlessHandler {
    router: Router,
}

impl ServerlessHandler {
    pub fn new(state: GatewayState) -> Self {
        Self {
            router: build_router(state),
        }
    }

    /// Serve one request.
    pub async fn handle(&self, request: Request<Body>) -> Response {
        let result: Result<Response, Infallible> = self.router.clone().oneshot(request).await;
        match result {
            Ok(response) => response,
            Err(never) => match never {},
        }
    }
}
