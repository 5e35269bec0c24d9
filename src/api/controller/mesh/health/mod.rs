//! Mesh health controller

use axum::extract::{Path, RawQuery, State};
use axum::Json;
use serde_json::Value;

use crate::api::util::json::to_json;
use crate::api::util::query::QueryPairs;
use crate::app_state::AppState;
use crate::domain::mesh::dto::HealthQuery;
use crate::errors::AppError;

pub struct MeshHealthController;

impl MeshHealthController {
    pub async fn get_namespace_health(
        State(state): State<AppState>,
        Path(namespace): Path<String>,
        RawQuery(raw): RawQuery,
    ) -> Result<Json<Value>, AppError> {
        let pairs = QueryPairs::parse(raw.as_deref());
        let q = HealthQuery::for_namespace(namespace, &pairs)?;
        to_json(state.telemetry_service.namespace_health(q).await)
    }

    pub async fn get_service_health(
        State(state): State<AppState>,
        Path((namespace, service)): Path<(String, String)>,
        RawQuery(raw): RawQuery,
    ) -> Result<Json<Value>, AppError> {
        let pairs = QueryPairs::parse(raw.as_deref());
        let q = HealthQuery::for_service(namespace, service, &pairs)?;
        to_json(state.telemetry_service.service_health(q).await)
    }

    pub async fn get_app_health(
        State(state): State<AppState>,
        Path((namespace, app)): Path<(String, String)>,
        RawQuery(raw): RawQuery,
    ) -> Result<Json<Value>, AppError> {
        let pairs = QueryPairs::parse(raw.as_deref());
        let q = HealthQuery::for_app(namespace, app, &pairs)?;
        to_json(state.telemetry_service.app_health(q).await)
    }

    pub async fn get_workload_health(
        State(state): State<AppState>,
        Path((namespace, workload)): Path<(String, String)>,
        RawQuery(raw): RawQuery,
    ) -> Result<Json<Value>, AppError> {
        let pairs = QueryPairs::parse(raw.as_deref());
        let q = HealthQuery::for_workload(namespace, workload, &pairs)?;
        to_json(state.telemetry_service.workload_health(q).await)
    }
}
