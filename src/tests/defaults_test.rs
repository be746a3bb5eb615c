use crate::models::{
    parse_dimensions, AnomalyQuery, DurationUnit, RequestStrategy, TopologyQuery,
};
use crate::services::defaults::{
    Defaultable, DEFAULT_ANOMALY_QUERY, DEFAULT_METRICS_COMPOSITE_QUERY, DEFAULT_TOPOLOGY_QUERY,
};

#[test]
fn test_empty_anomaly_query_gets_all_defaults() {
    let mut query = AnomalyQuery::default();
    query.apply_defaults(&DEFAULT_ANOMALY_QUERY);

    assert_eq!(query.duration, Some(vec![1]));
    assert_eq!(query.score, Some(vec![5]));
    assert_eq!(query.delta_value, Some(5.0));
    assert_eq!(query.size, Some(10));
    assert_eq!(query.duration_step, Some(1));
    assert_eq!(query.duration_unit, Some(DurationUnit::Minutes));
    assert_eq!(query.dimensions.as_deref(), Some("[]"));
    assert_eq!(query.opened_only, Some(false));
    assert_eq!(query.request_charts, Some(true));
    assert_eq!(query.include_baseline, Some(true));
    assert_eq!(query.metrics, Some(Vec::new()));
}

#[test]
fn test_apply_defaults_is_idempotent() {
    let mut once = AnomalyQuery { score: Some(vec![9]), ..Default::default() };
    once.apply_defaults(&DEFAULT_ANOMALY_QUERY);

    let mut twice = once.clone();
    twice.apply_defaults(&DEFAULT_ANOMALY_QUERY);

    assert_eq!(once, twice);
}

#[test]
fn test_explicit_falsy_values_survive_defaulting() {
    let mut query = AnomalyQuery {
        request_charts: Some(false),
        size: Some(0),
        dimensions: Some(String::new()),
        ..Default::default()
    };
    query.apply_defaults(&DEFAULT_ANOMALY_QUERY);

    assert_eq!(query.request_charts, Some(false));
    assert_eq!(query.size, Some(0));
    assert_eq!(query.dimensions.as_deref(), Some(""));
    // Untouched fields still get filled.
    assert_eq!(query.score, Some(vec![5]));
}

#[test]
fn test_default_dimensions_always_parse() {
    let raw = DEFAULT_ANOMALY_QUERY.dimensions.clone().expect("default dimensions");
    let parsed = parse_dimensions(&raw).expect("default dimensions must be valid JSON");
    assert!(parsed.is_empty());

    let raw = DEFAULT_METRICS_COMPOSITE_QUERY.dimensions.clone().expect("default dimensions");
    assert!(parse_dimensions(&raw).expect("valid").is_empty());
}

#[test]
fn test_topology_defaults() {
    let mut query = TopologyQuery::default();
    query.apply_defaults(&DEFAULT_TOPOLOGY_QUERY);

    assert_eq!(query.requests_strategy, Some(RequestStrategy::All));
    assert_eq!(query.show_events, Some(true));
    assert_eq!(query.time_scales.as_ref().map(Vec::len), Some(1));
    assert_eq!(query.source, None);
    assert_eq!(query.destination, None);
}

#[test]
fn test_defaults_do_not_overwrite_existing_selection() {
    let mut query = TopologyQuery {
        score: Some(vec![8]),
        show_events: Some(false),
        ..Default::default()
    };
    query.apply_defaults(&DEFAULT_TOPOLOGY_QUERY);

    assert_eq!(query.score, Some(vec![8]));
    assert_eq!(query.show_events, Some(false));
}
