//! Query variants
//!
//! A query is the de facto serialization contract with the host's
//! saved-dashboard storage: field names (camelCase) and the JSON-string
//! encoding of `dimensions` must round-trip exactly. Every user-settable
//! field is an `Option`, where `None` means "absent" and is filled by the
//! Defaulting Engine; explicitly set falsy values (`false`, `0`, `""`)
//! always survive.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::functions::{FunctionEntry, FunctionKind};
use super::options::{
    DeltaType, DurationUnit, MetricOption, NodeSelector, SelectableOption, SortKey,
    TimeScaleOption,
};

/// The closed set of builder scenarios offered by the top-level editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scenario {
    Alerts,
    Anomalies,
    MetricsComposite,
    Topology,
}

/// Which subset of backend work the host must redo after an edit
///
/// Recomputed by the change classifier, never hand-set by the user.
/// `NoRequests` still triggers a panel re-render; it only tells the host to
/// skip backend fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequestStrategy {
    All,
    AnomaliesOnly,
    EventsOnly,
    NoRequests,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnomalyQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<MetricOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_operator: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_step: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_unit: Option<DurationUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_type: Option<DeltaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Vec<SelectableOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_scales: Option<Vec<TimeScaleOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opened_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_charts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_baseline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_query: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_variables: Option<bool>,
    /// JSON-encoded list of `{key, ...}` entries, see `models::dimensions`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    /// Candidate property names cached for downstream dimension validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions_options: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopologyQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<MetricOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<NodeSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<NodeSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_step: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_unit: Option<DurationUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_type: Option<DeltaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Vec<SelectableOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_scales: Option<Vec<TimeScaleOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opened_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_events: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests_strategy: Option<RequestStrategy>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricsCompositeQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_functions: Option<HashMap<FunctionKind, FunctionEntry>>,
    /// JSON-encoded list of `{key, ...}` entries, see `models::dimensions`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
}

/// The query object as stored per panel, discriminated by `scenario`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scenario")]
pub enum EditorQuery {
    /// The alerts builder carries no derivation logic; its fields pass
    /// through untouched.
    #[serde(rename = "alerts")]
    Alerts(serde_json::Map<String, serde_json::Value>),
    #[serde(rename = "anomalies")]
    Anomalies(AnomalyQuery),
    #[serde(rename = "metricsComposite")]
    MetricsComposite(MetricsCompositeQuery),
    #[serde(rename = "topology")]
    Topology(TopologyQuery),
}

impl EditorQuery {
    pub fn scenario(&self) -> Scenario {
        match self {
            EditorQuery::Alerts(_) => Scenario::Alerts,
            EditorQuery::Anomalies(_) => Scenario::Anomalies,
            EditorQuery::MetricsComposite(_) => Scenario::MetricsComposite,
            EditorQuery::Topology(_) => Scenario::Topology,
        }
    }
}
