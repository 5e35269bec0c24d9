pub mod graph;
pub mod health;
pub mod metrics;
pub mod traces;

pub use graph::MeshGraphController;
pub use health::MeshHealthController;
pub use metrics::MeshMetricsController;
pub use traces::MeshTracesController;
