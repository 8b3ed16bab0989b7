use serde::{Deserialize, Serialize};

/// Origin allowed to call the echo endpoints from a browser.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://grock0706.github.io";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Gateway host (default: 127.0.0.1)
    #[serde(default = "default_gateway_host")]
    pub host: String,
    /// Gateway port (default: 3001)
    #[serde(default = "default_gateway_port")]
    pub port: u16,
    /// Value sent in `Access-Control-Allow-Origin` on every echo response
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
    /// Allow binding to a non-loopback address (default: false)
    #[serde(default)]
    pub allow_public_bind: bool,
}

fn default_gateway_host() -> String {
    "127.0.0.1".into()
}

fn default_gateway_port() -> u16 {
    3001
}

fn default_allowed_origin() -> String {
    DEFAULT_ALLOWED_ORIGIN.into()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_gateway_host(),
            port: default_gateway_port(),
            allowed_origin: default_allowed_origin(),
            allow_public_bind: false,
        }
    }
}
