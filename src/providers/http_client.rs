use reqwest::Client;
use std::time::Duration;

/// Shared pooled client for remote completion calls.
///
/// Timeouts live here, at the transport; the analysis layer never sets its own.
pub fn build_provider_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(120))
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .build()
        .unwrap_or_else(|_| Client::new())
}
