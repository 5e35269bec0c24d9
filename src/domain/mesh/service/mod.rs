pub mod telemetry_service;
pub mod tracing_service;

pub use telemetry_service::{HttpTelemetryService, TelemetryService};
pub use tracing_service::{HttpTracingService, TracingService};
