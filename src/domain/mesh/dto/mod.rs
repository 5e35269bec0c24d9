//! Typed query descriptors built from raw request parameters

pub mod graph_query;
pub mod health_query;
pub mod metrics_query;
pub mod trace_query;

pub use graph_query::GraphQuery;
pub use health_query::{HealthKind, HealthQuery};
pub use metrics_query::{MetricsQuery, MetricsScope, Reporter, RequestProtocol};
pub use trace_query::TraceQuery;
