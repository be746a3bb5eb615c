//! Topology builder session
//!
//! Edits arrive as [`TopologyPatch`] values; after each one the session
//! refreshes derived state and runs the change classifier to pick the
//! request strategy for the host's next execution.

use std::sync::Arc;

use crate::config::EditorConfig;
use crate::models::{
    DeltaType, MetricOption, NodeSelector, SelectableOption, SortKey, TimeScaleOption,
    TopologyQuery,
};
use crate::services::available::compute_available;
use crate::services::datasource::MetricsDatasource;
use crate::services::defaults::{Defaultable, DEFAULT_TOPOLOGY_QUERY};
use crate::services::editor::QueryHost;
use crate::services::resolver::{derive_duration, PropertyResolver};
use crate::services::strategy::classify;
use crate::utils::EditorResult;

/// One field-group edit to a topology query
#[derive(Debug, Clone)]
pub enum TopologyPatch {
    Metrics(Vec<MetricOption>),
    Source(Option<NodeSelector>),
    Destination(Option<NodeSelector>),
    Duration(Vec<u32>),
    Score(Vec<u32>),
    DeltaType(Option<DeltaType>),
    DeltaValue(f64),
    Direction(Vec<SelectableOption>),
    TimeScales(Vec<TimeScaleOption>),
    OpenedOnly(bool),
    ShowEvents(bool),
    SortBy(SortKey),
}

/// One mounted topology builder
pub struct TopologyEditorSession<H: QueryHost<TopologyQuery>> {
    query: TopologyQuery,
    resolver: PropertyResolver,
    host: H,
    pristine: bool,
    properties: Vec<String>,
    available: Vec<SelectableOption>,
}

impl<H: QueryHost<TopologyQuery>> TopologyEditorSession<H> {
    /// Construct with defaults merged; the seeded query is handed to the
    /// host immediately so the panel stores a fully-defaulted object
    pub fn new(
        query: TopologyQuery,
        datasource: Arc<dyn MetricsDatasource>,
        host: H,
        _config: &EditorConfig,
    ) -> Self {
        let mut query = query;
        query.apply_defaults(&DEFAULT_TOPOLOGY_QUERY);
        host.on_change(&query);
        Self {
            query,
            resolver: PropertyResolver::new(datasource),
            host,
            pristine: true,
            properties: Vec::new(),
            available: Vec::new(),
        }
    }

    /// Initial settle: fetch property options for any restored metric
    /// selection, then clear the pristine flag
    ///
    /// No classifier transition can fire before this completes, which
    /// prevents a spurious backend request on panel load.
    pub async fn mount(&mut self) {
        if self.query.metrics.as_ref().is_some_and(|metrics| !metrics.is_empty()) {
            self.refresh_properties().await;
            self.recompute_available();
        }
        self.pristine = false;
    }

    pub fn query(&self) -> &TopologyQuery {
        &self.query
    }

    pub fn is_pristine(&self) -> bool {
        self.pristine
    }

    pub fn properties(&self) -> &[String] {
        &self.properties
    }

    /// Candidate properties minus the ones already used as source or
    /// destination
    pub fn available_options(&self) -> &[SelectableOption] {
        &self.available
    }

    /// Apply one edit, recompute derived state, and classify the change
    ///
    /// Every edit updates the panel query. When the classifier picks a
    /// strategy (past the initial settle, with at least one metric
    /// selected), the strategy is written into the query and the host is
    /// asked to re-run.
    pub async fn update(&mut self, patch: TopologyPatch) -> EditorResult<()> {
        let prev = self.query.clone();

        match patch {
            TopologyPatch::Metrics(metrics) => self.query.metrics = Some(metrics),
            TopologyPatch::Source(source) => self.query.source = source,
            TopologyPatch::Destination(destination) => self.query.destination = destination,
            TopologyPatch::Duration(duration) => self.query.duration = Some(duration),
            TopologyPatch::Score(score) => self.query.score = Some(score),
            TopologyPatch::DeltaType(delta_type) => self.query.delta_type = delta_type,
            TopologyPatch::DeltaValue(delta_value) => {
                self.query.delta_value = Some(delta_value)
            }
            TopologyPatch::Direction(direction) => self.query.direction = Some(direction),
            TopologyPatch::TimeScales(time_scales) => {
                // Joined change: duration step/unit follow the finest
                // selected granularity.
                let (step, unit) = derive_duration(&time_scales);
                self.query.time_scales = Some(time_scales);
                self.query.duration_step = Some(step);
                self.query.duration_unit = Some(unit);
            }
            TopologyPatch::OpenedOnly(opened_only) => {
                self.query.opened_only = Some(opened_only)
            }
            TopologyPatch::ShowEvents(show_events) => {
                self.query.show_events = Some(show_events)
            }
            TopologyPatch::SortBy(sort_by) => self.query.sort_by = Some(sort_by),
        }

        if self.query.metrics != prev.metrics
            && self.query.metrics.as_ref().is_some_and(|metrics| !metrics.is_empty())
        {
            self.refresh_properties().await;
        }
        self.recompute_available();

        self.host.on_change(&self.query);

        let has_metrics =
            self.query.metrics.as_ref().is_some_and(|metrics| !metrics.is_empty());
        if !self.pristine
            && has_metrics
            && let Some(strategy) = classify(&prev, &self.query)
        {
            self.query.requests_strategy = Some(strategy);
            self.host.on_change(&self.query);
            self.host.on_run_query();
        }

        Ok(())
    }

    async fn refresh_properties(&mut self) {
        let metrics = self.query.metrics.clone().unwrap_or_default();
        if let Some(properties) = self.resolver.resolve_properties(&metrics).await {
            self.properties = properties;
        }
    }

    fn recompute_available(&mut self) {
        if self.properties.is_empty() {
            return;
        }
        let mut chosen = Vec::new();
        if let Some(source) = &self.query.source {
            chosen.push(source.value().to_string());
        }
        if let Some(destination) = &self.query.destination {
            chosen.push(destination.value().to_string());
        }
        self.available = compute_available(&self.properties, &chosen);
    }
}
