//! Tracing backend collaborator

use anyhow::{bail, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};
use urlencoding::encode;

use crate::domain::mesh::dto::TraceQuery;

#[async_trait]
pub trait TracingService: Send + Sync {
    async fn service_traces(&self, q: TraceQuery) -> Result<Value>;
}

pub struct HttpTracingService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTracingService {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl TracingService for HttpTracingService {
    async fn service_traces(&self, q: TraceQuery) -> Result<Value> {
        let path = format!(
            "/namespaces/{}/services/{}/traces",
            encode(&q.namespace),
            encode(&q.service)
        );
        debug!("querying tracing backend: {path}");

        let resp = self
            .client
            .get(format!("{}{path}", self.base_url))
            .query(&q.to_wire())
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            warn!("tracing backend returned {status} for {path}");
            bail!("tracing backend returned {status}: {message}");
        }

        Ok(resp.json().await?)
    }
}
