use reqwest::Client;
use std::time::Duration;

/// Default timeout for a single provider call.
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 120;

pub fn build_provider_client() -> Client {
    build_provider_client_with_timeout(DEFAULT_PROVIDER_TIMEOUT_SECS)
}

/// Shared client for all upstream calls; the timeout here is the only bound
/// on how long a hanging provider can hold a request.
pub fn build_provider_client_with_timeout(timeout_secs: u64) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        .build()
        .unwrap_or_else(|error| {
            tracing::warn!("provider client builder failed, using defaults: {error}");
            Client::new()
        })
}
