//! Defaulting Engine
//!
//! Fills an incoming partial query with named defaults without overwriting
//! fields already present. `None` means "absent"; `Some(false)`, `Some(0)`
//! and `Some("")` are user choices and survive. Applying twice yields the
//! same result.

use once_cell::sync::Lazy;

use crate::models::{
    AnomalyQuery, DeltaType, MetricsCompositeQuery, RequestStrategy, SortKey, TopologyQuery,
    DIRECTIONS_OPTIONS, EMPTY_DIMENSIONS, TIME_SCALE_OPTIONS,
};

/// Fill every `None` field from the defaults, leaving present fields alone
pub trait Defaultable {
    fn apply_defaults(&mut self, defaults: &Self);
}

macro_rules! fill_defaults {
    ($query:expr, $defaults:expr, [$($field:ident),+ $(,)?]) => {
        $(
            if $query.$field.is_none() {
                $query.$field = $defaults.$field.clone();
            }
        )+
    };
}

impl Defaultable for AnomalyQuery {
    fn apply_defaults(&mut self, defaults: &Self) {
        fill_defaults!(self, defaults, [
            metrics,
            not_operator,
            duration,
            duration_step,
            duration_unit,
            score,
            delta_type,
            delta_value,
            direction,
            time_scales,
            sort_by,
            size,
            opened_only,
            request_charts,
            include_baseline,
            add_query,
            apply_variables,
            dimensions,
            dimensions_options,
        ]);
    }
}

impl Defaultable for TopologyQuery {
    fn apply_defaults(&mut self, defaults: &Self) {
        fill_defaults!(self, defaults, [
            metrics,
            source,
            destination,
            duration,
            duration_step,
            duration_unit,
            score,
            delta_type,
            delta_value,
            direction,
            time_scales,
            sort_by,
            opened_only,
            show_events,
            requests_strategy,
        ]);
    }
}

impl Defaultable for MetricsCompositeQuery {
    fn apply_defaults(&mut self, defaults: &Self) {
        fill_defaults!(self, defaults, [selected_functions, dimensions]);
    }
}

pub static DEFAULT_ANOMALY_QUERY: Lazy<AnomalyQuery> = Lazy::new(|| AnomalyQuery {
    metrics: Some(Vec::new()),
    not_operator: Some(false),
    duration: Some(vec![1]),
    duration_step: Some(1),
    duration_unit: Some(crate::models::DurationUnit::Minutes),
    score: Some(vec![5]),
    delta_type: Some(DeltaType::Absolute),
    delta_value: Some(5.0),
    direction: Some(DIRECTIONS_OPTIONS.clone()),
    time_scales: Some(vec![TIME_SCALE_OPTIONS[0].clone(), TIME_SCALE_OPTIONS[1].clone()]),
    sort_by: Some(SortKey::Score),
    size: Some(10),
    opened_only: Some(false),
    request_charts: Some(true),
    include_baseline: Some(true),
    add_query: Some(true),
    apply_variables: Some(false),
    dimensions: Some(EMPTY_DIMENSIONS.to_string()),
    dimensions_options: None,
});

pub static DEFAULT_TOPOLOGY_QUERY: Lazy<TopologyQuery> = Lazy::new(|| TopologyQuery {
    metrics: Some(Vec::new()),
    source: None,
    destination: None,
    duration: Some(vec![1]),
    duration_step: Some(1),
    duration_unit: Some(crate::models::DurationUnit::Minutes),
    score: Some(vec![5]),
    delta_type: Some(DeltaType::Absolute),
    delta_value: Some(5.0),
    direction: Some(DIRECTIONS_OPTIONS.clone()),
    time_scales: Some(vec![TIME_SCALE_OPTIONS[0].clone()]),
    sort_by: Some(SortKey::Score),
    opened_only: Some(false),
    show_events: Some(true),
    requests_strategy: Some(RequestStrategy::All),
});

pub static DEFAULT_METRICS_COMPOSITE_QUERY: Lazy<MetricsCompositeQuery> =
    Lazy::new(|| MetricsCompositeQuery {
        selected_functions: Some(std::collections::HashMap::new()),
        dimensions: Some(EMPTY_DIMENSIONS.to_string()),
    });
