//! Shared test doubles: a scripted datasource, a recording host, and a
//! counting telemetry sink

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::models::MetricOption;
use crate::services::datasource::{MetricsDatasource, PropertiesDict};
use crate::services::editor::QueryHost;
use crate::services::telemetry::{TelemetryEvent, TelemetrySink};
use crate::utils::{EditorError, EditorResult};

/// Scripted datasource: per-metric property lists, optional per-metric
/// delays and failures, and a call log
#[derive(Default)]
pub struct MockDatasource {
    properties: HashMap<String, Vec<String>>,
    delays_ms: HashMap<String, u64>,
    failing: HashSet<String>,
    pub properties_calls: Mutex<Vec<String>>,
}

impl MockDatasource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_properties(mut self, metric: &str, properties: &[&str]) -> Self {
        self.properties
            .insert(metric.to_string(), properties.iter().map(|p| p.to_string()).collect());
        self
    }

    pub fn with_delay_ms(mut self, metric: &str, millis: u64) -> Self {
        self.delays_ms.insert(metric.to_string(), millis);
        self
    }

    pub fn failing_for(mut self, metric: &str) -> Self {
        self.failing.insert(metric.to_string());
        self
    }

    pub fn properties_call_count(&self) -> usize {
        self.properties_calls.lock().expect("call log poisoned").len()
    }
}

#[async_trait]
impl MetricsDatasource for MockDatasource {
    async fn get_metrics_options(&self, search: &str) -> EditorResult<Vec<MetricOption>> {
        Ok(self
            .properties
            .keys()
            .filter(|metric| metric.contains(search))
            .map(|metric| MetricOption::new(metric.clone()))
            .collect())
    }

    async fn get_properties_dict(&self, metric: &str) -> EditorResult<PropertiesDict> {
        self.properties_calls.lock().expect("call log poisoned").push(metric.to_string());
        if let Some(millis) = self.delays_ms.get(metric) {
            tokio::time::sleep(Duration::from_millis(*millis)).await;
        }
        if self.failing.contains(metric) {
            return Err(EditorError::Lookup(format!("no dictionary for {metric}")));
        }
        Ok(PropertiesDict { properties: self.properties.get(metric).cloned().unwrap_or_default() })
    }

    async fn get_metrics_prop_val(
        &self,
        _metric: &str,
        _property: &str,
    ) -> EditorResult<Vec<String>> {
        Ok(Vec::new())
    }
}

/// Host double recording every query update and counting re-run signals
pub struct RecordingHost<Q> {
    pub changes: Mutex<Vec<Q>>,
    pub runs: AtomicUsize,
}

impl<Q: Clone> RecordingHost<Q> {
    pub fn new() -> Self {
        Self { changes: Mutex::new(Vec::new()), runs: AtomicUsize::new(0) }
    }

    pub fn last_change(&self) -> Option<Q> {
        self.changes.lock().expect("change log poisoned").last().cloned()
    }

    pub fn change_count(&self) -> usize {
        self.changes.lock().expect("change log poisoned").len()
    }

    pub fn run_count(&self) -> usize {
        self.runs.load(Ordering::SeqCst)
    }
}

impl<Q: Clone + Send> QueryHost<Q> for RecordingHost<Q> {
    fn on_change(&self, query: &Q) {
        self.changes.lock().expect("change log poisoned").push(query.clone());
    }

    fn on_run_query(&self) {
        self.runs.fetch_add(1, Ordering::SeqCst);
    }
}

/// Telemetry sink capturing every emitted event
#[derive(Default)]
pub struct CountingSink {
    pub events: Mutex<Vec<TelemetryEvent>>,
}

impl CountingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().expect("event log poisoned").len()
    }

    pub fn last_event(&self) -> Option<TelemetryEvent> {
        self.events.lock().expect("event log poisoned").last().cloned()
    }
}

impl TelemetrySink for CountingSink {
    fn track(&self, event: TelemetryEvent) {
        self.events.lock().expect("event log poisoned").push(event);
    }
}
