//! Telemetry backend collaborator (metrics, health, dependency graphs)
//!
//! The router owns no aggregation logic. Every operation forwards its
//! descriptor to the configured backend and returns the payload untouched.

use anyhow::{bail, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};
use urlencoding::encode;

use crate::domain::mesh::dto::{GraphQuery, HealthKind, HealthQuery, MetricsQuery, MetricsScope};

#[async_trait]
pub trait TelemetryService: Send + Sync {
    async fn service_metrics(&self, q: MetricsQuery) -> Result<Value>;
    async fn app_metrics(&self, q: MetricsQuery) -> Result<Value>;
    async fn workload_metrics(&self, q: MetricsQuery) -> Result<Value>;
    async fn namespace_metrics(&self, q: MetricsQuery) -> Result<Value>;

    async fn namespace_graph(&self, q: GraphQuery) -> Result<Value>;
    async fn namespaces_graph(&self, q: GraphQuery) -> Result<Value>;

    async fn namespace_health(&self, q: HealthQuery) -> Result<Value>;
    async fn service_health(&self, q: HealthQuery) -> Result<Value>;
    async fn app_health(&self, q: HealthQuery) -> Result<Value>;
    async fn workload_health(&self, q: HealthQuery) -> Result<Value>;
}

pub struct HttpTelemetryService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTelemetryService {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    async fn fetch(&self, path: String, params: Vec<(&'static str, String)>) -> Result<Value> {
        debug!("querying telemetry backend: {path}");

        let resp = self
            .client
            .get(format!("{}{path}", self.base_url))
            .query(&params)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            warn!("telemetry backend returned {status} for {path}");
            bail!("telemetry backend returned {status}: {message}");
        }

        Ok(resp.json().await?)
    }
}

fn metrics_path(q: &MetricsQuery) -> String {
    let ns = encode(&q.namespace);
    match &q.scope {
        MetricsScope::Namespace => format!("/namespaces/{ns}/metrics"),
        MetricsScope::Service(s) => format!("/namespaces/{ns}/services/{}/metrics", encode(s)),
        MetricsScope::App(a) => format!("/namespaces/{ns}/apps/{}/metrics", encode(a)),
        MetricsScope::Workload(w) => format!("/namespaces/{ns}/workloads/{}/metrics", encode(w)),
    }
}

fn health_path(q: &HealthQuery) -> String {
    let ns = encode(&q.namespace);
    match (&q.target, q.kind) {
        (None, _) => format!("/namespaces/{ns}/health"),
        (Some(t), HealthKind::Service) => format!("/namespaces/{ns}/services/{}/health", encode(t)),
        (Some(t), HealthKind::App) => format!("/namespaces/{ns}/apps/{}/health", encode(t)),
        (Some(t), HealthKind::Workload) => {
            format!("/namespaces/{ns}/workloads/{}/health", encode(t))
        }
    }
}

#[async_trait]
impl TelemetryService for HttpTelemetryService {
    async fn service_metrics(&self, q: MetricsQuery) -> Result<Value> {
        self.fetch(metrics_path(&q), q.to_wire()).await
    }

    async fn app_metrics(&self, q: MetricsQuery) -> Result<Value> {
        self.fetch(metrics_path(&q), q.to_wire()).await
    }

    async fn workload_metrics(&self, q: MetricsQuery) -> Result<Value> {
        self.fetch(metrics_path(&q), q.to_wire()).await
    }

    async fn namespace_metrics(&self, q: MetricsQuery) -> Result<Value> {
        self.fetch(metrics_path(&q), q.to_wire()).await
    }

    async fn namespace_graph(&self, q: GraphQuery) -> Result<Value> {
        // The single-namespace descriptor always holds exactly one target.
        let ns = q.namespaces.first().map(String::as_str).unwrap_or_default();
        let path = format!("/namespaces/{}/graph", encode(ns));
        self.fetch(path, q.to_wire()).await
    }

    async fn namespaces_graph(&self, q: GraphQuery) -> Result<Value> {
        let mut params = q.to_wire();
        if !q.namespaces.is_empty() {
            params.push(("namespaces", q.namespaces.join(",")));
        }
        self.fetch("/namespaces/graph".to_string(), params).await
    }

    async fn namespace_health(&self, q: HealthQuery) -> Result<Value> {
        self.fetch(health_path(&q), q.to_wire()).await
    }

    async fn service_health(&self, q: HealthQuery) -> Result<Value> {
        self.fetch(health_path(&q), q.to_wire()).await
    }

    async fn app_health(&self, q: HealthQuery) -> Result<Value> {
        self.fetch(health_path(&q), q.to_wire()).await
    }

    async fn workload_health(&self, q: HealthQuery) -> Result<Value> {
        self.fetch(health_path(&q), q.to_wire()).await
    }
}
