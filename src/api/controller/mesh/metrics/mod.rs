//! Mesh metrics controller: connects routes to the telemetry backend

use axum::extract::{Path, RawQuery, State};
use axum::Json;
use serde_json::Value;

use crate::api::util::json::to_json;
use crate::api::util::query::QueryPairs;
use crate::app_state::AppState;
use crate::domain::mesh::dto::MetricsQuery;
use crate::errors::AppError;

pub struct MeshMetricsController;

impl MeshMetricsController {
    pub async fn get_service_metrics(
        State(state): State<AppState>,
        Path((namespace, service)): Path<(String, String)>,
        RawQuery(raw): RawQuery,
    ) -> Result<Json<Value>, AppError> {
        let pairs = QueryPairs::parse(raw.as_deref());
        let q = MetricsQuery::for_service(namespace, service, &pairs)?;
        to_json(state.telemetry_service.service_metrics(q).await)
    }

    pub async fn get_app_metrics(
        State(state): State<AppState>,
        Path((namespace, app)): Path<(String, String)>,
        RawQuery(raw): RawQuery,
    ) -> Result<Json<Value>, AppError> {
        let pairs = QueryPairs::parse(raw.as_deref());
        let q = MetricsQuery::for_app(namespace, app, &pairs)?;
        to_json(state.telemetry_service.app_metrics(q).await)
    }

    pub async fn get_workload_metrics(
        State(state): State<AppState>,
        Path((namespace, workload)): Path<(String, String)>,
        RawQuery(raw): RawQuery,
    ) -> Result<Json<Value>, AppError> {
        let pairs = QueryPairs::parse(raw.as_deref());
        let q = MetricsQuery::for_workload(namespace, workload, &pairs)?;
        to_json(state.telemetry_service.workload_metrics(q).await)
    }

    pub async fn get_namespace_metrics(
        State(state): State<AppState>,
        Path(namespace): Path<String>,
        RawQuery(raw): RawQuery,
    ) -> Result<Json<Value>, AppError> {
        let pairs = QueryPairs::parse(raw.as_deref());
        let q = MetricsQuery::for_namespace(namespace, &pairs)?;
        to_json(state.telemetry_service.namespace_metrics(q).await)
    }
}
