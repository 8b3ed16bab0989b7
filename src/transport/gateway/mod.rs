//! Axum-based HTTP gateway for the echo endpoint family.
//!
//! - `POST /api/echo` with `OPTIONS` preflight
//! - `GET /api/echo/health`
//! - Request body size limits (64KB max)
//! - CORS headers on every response
//! - Panics converted to JSON 500 bodies

mod handlers;
mod reply;
mod server;

pub use handlers::EchoQuery;
pub use reply::EchoReply;
pub use server::{build_app, run_gateway, run_gateway_with_listener};

use crate::Config;
use crate::echo::EchoService;
use std::sync::Arc;

/// Maximum request body size (64KB) -- prevents memory exhaustion
pub const MAX_BODY_SIZE: usize = 65_536;

pub const ECHO_PATH: &str = "/api/echo";
pub const HEALTH_PATH: &str = "/api/echo/health";

/// Shared state for all axum handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub echo: Arc<EchoService>,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Self {
        let echo = Arc::new(EchoService::from_config(&config));
        Self { config, echo }
    }
}
