//! Meridian Query-Builder Core
//!
//! Form-driven query builders for a dashboard-visualization host: each
//! builder assembles a structured query object (metrics, anomaly filters,
//! topology selection, derived-metric functions) that the host later sends
//! to the external data service. The host owns rendering, panel lifecycle,
//! and query execution; this crate only produces and mutates query objects
//! and decides when the host should re-execute them.

pub mod config;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::EditorConfig;
pub use models::{
    AnomalyQuery, EditorQuery, MetricsCompositeQuery, RequestStrategy, Scenario, TopologyQuery,
};
pub use services::{
    classify, AnomalyEditorSession, CompositeEditorSession, MetricsDatasource, QueryEditor,
    QueryHost, TopologyEditorSession, TopologyPatch,
};
pub use utils::{EditorError, EditorResult};

#[cfg(test)]
mod tests;
