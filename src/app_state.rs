use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use crate::config::Config;
use crate::domain::mesh::service::{
    HttpTelemetryService, HttpTracingService, TelemetryService, TracingService,
};

#[derive(Clone)]
pub struct AppState {
    pub telemetry_service: Arc<dyn TelemetryService>,
    pub tracing_service: Arc<dyn TracingService>,
}

pub fn build_app_state(config: &Config) -> Result<AppState> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()?;

    Ok(AppState {
        telemetry_service: Arc::new(HttpTelemetryService::new(
            client.clone(),
            config.telemetry_url.clone(),
        )),
        tracing_service: Arc::new(HttpTracingService::new(client, config.tracing_url.clone())),
    })
}
