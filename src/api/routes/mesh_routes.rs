//! Service-mesh telemetry routes under /api/v1

use axum::{routing::get, Router};

use crate::api::controller::mesh::{
    MeshGraphController, MeshHealthController, MeshMetricsController, MeshTracesController,
};
use crate::app_state::AppState;

/// Build the router for mesh telemetry endpoints.
///
/// The multi-namespace graph lives at the static path `/namespaces/graph`;
/// the router matches it ahead of the `{namespace}` capture.
pub fn mesh_routes() -> Router<AppState> {
    Router::new()
        // Graphs
        .route("/namespaces/graph", get(MeshGraphController::get_namespaces_graph))
        .route("/namespaces/{namespace}/graph", get(MeshGraphController::get_namespace_graph))

        // Metrics
        .route("/namespaces/{namespace}/metrics", get(MeshMetricsController::get_namespace_metrics))
        .route("/namespaces/{namespace}/services/{service}/metrics", get(MeshMetricsController::get_service_metrics))
        .route("/namespaces/{namespace}/apps/{app}/metrics", get(MeshMetricsController::get_app_metrics))
        .route("/namespaces/{namespace}/workloads/{workload}/metrics", get(MeshMetricsController::get_workload_metrics))

        // Health
        .route("/namespaces/{namespace}/health", get(MeshHealthController::get_namespace_health))
        .route("/namespaces/{namespace}/services/{service}/health", get(MeshHealthController::get_service_health))
        .route("/namespaces/{namespace}/apps/{app}/health", get(MeshHealthController::get_app_health))
        .route("/namespaces/{namespace}/workloads/{workload}/health", get(MeshHealthController::get_workload_health))

        // Traces
        .route("/namespaces/{namespace}/services/{service}/traces", get(MeshTracesController::get_service_traces))
}
