//! Mesh traces controller: connects routes to the tracing backend

use axum::extract::{Path, RawQuery, State};
use axum::Json;
use serde_json::Value;

use crate::api::util::json::to_json;
use crate::api::util::query::QueryPairs;
use crate::app_state::AppState;
use crate::domain::mesh::dto::TraceQuery;
use crate::errors::AppError;

pub struct MeshTracesController;

impl MeshTracesController {
    pub async fn get_service_traces(
        State(state): State<AppState>,
        Path((namespace, service)): Path<(String, String)>,
        RawQuery(raw): RawQuery,
    ) -> Result<Json<Value>, AppError> {
        let pairs = QueryPairs::parse(raw.as_deref());
        let q = TraceQuery::for_service(namespace, service, &pairs)?;
        to_json(state.tracing_service.service_traces(q).await)
    }
}
