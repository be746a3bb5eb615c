pub mod available;
pub mod datasource;
pub mod defaults;
pub mod editor;
pub mod functions;
pub mod resolver;
pub mod strategy;
pub mod telemetry;

pub use available::compute_available;
pub use datasource::{MetricsDatasource, PropertiesDict};
pub use defaults::{
    Defaultable, DEFAULT_ANOMALY_QUERY, DEFAULT_METRICS_COMPOSITE_QUERY, DEFAULT_TOPOLOGY_QUERY,
};
pub use editor::{
    default_query_for, AnomalyEditorSession, CompositeEditorSession, QueryEditor, QueryHost,
    TopologyEditorSession, TopologyPatch,
};
pub use functions::{FunctionComposer, SelectedFunctions};
pub use resolver::{derive_duration, PropertyResolver};
pub use strategy::classify;
pub use telemetry::{NoopTelemetry, TelemetryEvent, TelemetrySink, TracingTelemetry};
