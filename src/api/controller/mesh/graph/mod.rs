//! Mesh dependency-graph controller

use axum::extract::{Path, RawQuery, State};
use axum::Json;
use serde_json::Value;

use crate::api::util::json::to_json;
use crate::api::util::query::QueryPairs;
use crate::app_state::AppState;
use crate::domain::mesh::dto::GraphQuery;
use crate::errors::AppError;

pub struct MeshGraphController;

impl MeshGraphController {
    pub async fn get_namespace_graph(
        State(state): State<AppState>,
        Path(namespace): Path<String>,
        RawQuery(raw): RawQuery,
    ) -> Result<Json<Value>, AppError> {
        let pairs = QueryPairs::parse(raw.as_deref());
        let q = GraphQuery::for_namespace(namespace, &pairs)?;
        to_json(state.telemetry_service.namespace_graph(q).await)
    }

    pub async fn get_namespaces_graph(
        State(state): State<AppState>,
        RawQuery(raw): RawQuery,
    ) -> Result<Json<Value>, AppError> {
        let pairs = QueryPairs::parse(raw.as_deref());
        let q = GraphQuery::for_namespaces(&pairs)?;
        to_json(state.telemetry_service.namespaces_graph(q).await)
    }
}
