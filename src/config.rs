//! Environment-driven configuration (MESHVIEW_* variables)

use anyhow::{Context, Result};
use std::env;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TELEMETRY_URL: &str = "http://localhost:9090";
const DEFAULT_TRACING_URL: &str = "http://localhost:16686";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    /// Base URL of the telemetry backend (metrics, health, graph).
    pub telemetry_url: String,
    /// Base URL of the tracing backend.
    pub tracing_url: String,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let request_timeout_secs = match env::var("MESHVIEW_REQUEST_TIMEOUT_SECS") {
            Ok(v) => v
                .parse()
                .context("MESHVIEW_REQUEST_TIMEOUT_SECS must be a number of seconds")?,
            Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            bind_addr: env::var("MESHVIEW_BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            telemetry_url: trim_base(
                env::var("MESHVIEW_TELEMETRY_URL")
                    .unwrap_or_else(|_| DEFAULT_TELEMETRY_URL.to_string()),
            ),
            tracing_url: trim_base(
                env::var("MESHVIEW_TRACING_URL")
                    .unwrap_or_else(|_| DEFAULT_TRACING_URL.to_string()),
            ),
            request_timeout_secs,
        })
    }
}

/// Backend base URLs are joined with request paths, so a trailing slash
/// would produce `//namespaces/...`.
fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash_from_base_urls() {
        assert_eq!(trim_base("http://jaeger:16686/".to_string()), "http://jaeger:16686");
        assert_eq!(trim_base("http://jaeger:16686".to_string()), "http://jaeger:16686");
    }
}
