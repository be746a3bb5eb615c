use std::sync::Arc;

use crate::config::EditorConfig;
use crate::models::{
    parse_dimensions, AnomalyQuery, Dimension, DurationUnit, MetricOption,
    TIME_SCALE_OPTIONS,
};
use crate::services::editor::AnomalyEditorSession;
use crate::tests::common::{MockDatasource, RecordingHost};

type TestHost = Arc<RecordingHost<AnomalyQuery>>;

fn session_with(
    query: AnomalyQuery,
    datasource: Arc<MockDatasource>,
) -> (AnomalyEditorSession<TestHost>, TestHost) {
    let host: TestHost = Arc::new(RecordingHost::new());
    let session = AnomalyEditorSession::new(
        query,
        datasource,
        host.clone(),
        &EditorConfig::default(),
    );
    (session, host)
}

#[tokio::test]
async fn test_mount_settles_and_issues_one_property_lookup() {
    let datasource =
        Arc::new(MockDatasource::new().with_properties("cpu.load", &["host", "region"]));
    let query =
        AnomalyQuery { metrics: Some(vec![MetricOption::new("cpu.load")]), ..Default::default() };
    let (mut session, host) = session_with(query, datasource.clone());

    assert!(session.is_pristine());
    session.mount().await.expect("mount");

    assert!(!session.is_pristine());
    assert_eq!(datasource.properties_call_count(), 1);
    assert_eq!(
        datasource.properties_calls.lock().expect("log").as_slice(),
        ["cpu.load".to_string()]
    );
    assert_eq!(host.run_count(), 1);
    assert_eq!(session.properties(), ["host".to_string(), "region".to_string()]);
    assert_eq!(
        session.query().dimensions_options,
        Some(vec!["host".to_string(), "region".to_string()])
    );
}

#[tokio::test]
async fn test_mount_without_metrics_skips_lookup() {
    let datasource = Arc::new(MockDatasource::new());
    let (mut session, host) = session_with(AnomalyQuery::default(), datasource.clone());

    session.mount().await.expect("mount");

    assert_eq!(datasource.properties_call_count(), 0);
    assert_eq!(host.run_count(), 1);
    assert!(session.properties().is_empty());
}

#[tokio::test]
async fn test_metric_change_resets_chosen_dimensions() {
    let datasource = Arc::new(
        MockDatasource::new()
            .with_properties("cpu.load", &["host"])
            .with_properties("mem.used", &["pod", "region"]),
    );
    let query =
        AnomalyQuery { metrics: Some(vec![MetricOption::new("cpu.load")]), ..Default::default() };
    let (mut session, host) = session_with(query, datasource.clone());
    session.mount().await.expect("mount");

    session.set_dimensions(&[Dimension::with_value("host", "web-1")]).expect("dimensions");
    assert_eq!(
        parse_dimensions(session.query().dimensions.as_deref().expect("dimensions"))
            .expect("valid")
            .len(),
        1
    );

    session.set_metrics(vec![MetricOption::new("mem.used")]).await.expect("metrics");

    // Stale dimension selection is gone and options follow the new metric.
    assert_eq!(session.query().dimensions.as_deref(), Some("[]"));
    assert_eq!(
        session.query().dimensions_options,
        Some(vec!["pod".to_string(), "region".to_string()])
    );
    let available: Vec<&str> =
        session.available_options().iter().map(|o| o.value.as_str()).collect();
    assert_eq!(available, vec!["pod", "region"]);
    assert!(host.run_count() >= 2);
}

#[tokio::test]
async fn test_chosen_dimensions_reduce_available_options() {
    let datasource =
        Arc::new(MockDatasource::new().with_properties("cpu.load", &["az", "host", "region"]));
    let query =
        AnomalyQuery { metrics: Some(vec![MetricOption::new("cpu.load")]), ..Default::default() };
    let (mut session, _host) = session_with(query, datasource);
    session.mount().await.expect("mount");

    session.set_dimensions(&[Dimension::with_value("host", "web-1")]).expect("dimensions");

    let available: Vec<&str> =
        session.available_options().iter().map(|o| o.value.as_str()).collect();
    assert_eq!(available, vec!["az", "region"]);
}

#[tokio::test]
async fn test_dimensions_round_trip_through_the_query() {
    let datasource = Arc::new(MockDatasource::new().with_properties("cpu.load", &["host"]));
    let query =
        AnomalyQuery { metrics: Some(vec![MetricOption::new("cpu.load")]), ..Default::default() };
    let (mut session, _host) = session_with(query, datasource);
    session.mount().await.expect("mount");

    let dimensions =
        vec![Dimension::with_value("host", "web-1"), Dimension::new("region")];
    session.set_dimensions(&dimensions).expect("dimensions");

    let reparsed =
        parse_dimensions(session.query().dimensions.as_deref().expect("dimensions"))
            .expect("valid");
    assert_eq!(reparsed, dimensions);
}

#[tokio::test]
async fn test_limit_is_clamped_at_entry() {
    let datasource = Arc::new(MockDatasource::new());
    let (mut session, _host) = session_with(AnomalyQuery::default(), datasource);
    session.mount().await.expect("mount");

    session.set_size(999);
    assert_eq!(session.query().size, Some(20));

    session.set_size(-5);
    assert_eq!(session.query().size, Some(1));

    session.set_size(7);
    assert_eq!(session.query().size, Some(7));
}

#[tokio::test]
async fn test_time_scale_edit_derives_duration_step_and_unit() {
    let datasource = Arc::new(MockDatasource::new());
    let (mut session, host) = session_with(AnomalyQuery::default(), datasource);
    session.mount().await.expect("mount");

    session.set_time_scales(vec![TIME_SCALE_OPTIONS[2].clone(), TIME_SCALE_OPTIONS[3].clone()]);

    let query = session.query();
    assert_eq!(query.duration_step, Some(1));
    assert_eq!(query.duration_unit, Some(DurationUnit::Hours));
    assert_eq!(query.time_scales.as_ref().map(Vec::len), Some(2));

    // Clearing the selection falls back to the fixed defaults.
    session.set_time_scales(Vec::new());
    assert_eq!(session.query().duration_step, Some(1));
    assert_eq!(session.query().duration_unit, Some(DurationUnit::Minutes));
    assert!(host.run_count() >= 3);
}

#[tokio::test]
async fn test_failed_lookup_leaves_previous_options_in_place() {
    let datasource = Arc::new(
        MockDatasource::new()
            .with_properties("cpu.load", &["host"])
            .failing_for("mem.used"),
    );
    let query =
        AnomalyQuery { metrics: Some(vec![MetricOption::new("cpu.load")]), ..Default::default() };
    let (mut session, _host) = session_with(query, datasource);
    session.mount().await.expect("mount");
    assert_eq!(session.properties(), ["host".to_string()]);

    session.set_metrics(vec![MetricOption::new("mem.used")]).await.expect("metrics");

    // Previous derived set stays; no partial or undefined state.
    assert_eq!(session.properties(), ["host".to_string()]);
}
