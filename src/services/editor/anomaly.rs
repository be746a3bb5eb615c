//! Anomaly builder session

use std::sync::Arc;

use crate::config::EditorConfig;
use crate::models::{
    parse_dimensions, AnomalyQuery, DeltaType, Dimension, MetricOption, SelectableOption,
    SortKey, TimeScaleOption, EMPTY_DIMENSIONS,
};
use crate::services::available::compute_available;
use crate::services::datasource::MetricsDatasource;
use crate::services::defaults::{Defaultable, DEFAULT_ANOMALY_QUERY};
use crate::services::editor::QueryHost;
use crate::services::resolver::{derive_duration, PropertyResolver};
use crate::utils::EditorResult;

/// One mounted anomaly builder
///
/// Lifecycle: construct (defaults merged), [`mount`](Self::mount) once
/// (settles the pristine flag and issues the initial property lookup),
/// then one setter call per user edit until the editor unmounts.
pub struct AnomalyEditorSession<H: QueryHost<AnomalyQuery>> {
    query: AnomalyQuery,
    resolver: PropertyResolver,
    host: H,
    max_charts: i64,
    pristine: bool,
    properties: Vec<String>,
    available: Vec<SelectableOption>,
}

impl<H: QueryHost<AnomalyQuery>> AnomalyEditorSession<H> {
    pub fn new(
        query: AnomalyQuery,
        datasource: Arc<dyn MetricsDatasource>,
        host: H,
        config: &EditorConfig,
    ) -> Self {
        let mut query = query;
        query.apply_defaults(&DEFAULT_ANOMALY_QUERY);
        Self {
            query,
            resolver: PropertyResolver::new(datasource),
            host,
            max_charts: config.limits.max_charts,
            pristine: true,
            properties: Vec::new(),
            available: Vec::new(),
        }
    }

    /// Initial settle: request property options for the selected metrics,
    /// clear the pristine flag, and ask the host for the first run
    ///
    /// The pristine flag clears here regardless of user action; it only
    /// exists to suppress spurious classifier transitions before this
    /// point.
    pub async fn mount(&mut self) -> EditorResult<()> {
        self.refresh_properties().await;
        self.recompute_available()?;
        self.pristine = false;
        self.host.on_change(&self.query);
        self.host.on_run_query();
        Ok(())
    }

    pub fn query(&self) -> &AnomalyQuery {
        &self.query
    }

    pub fn is_pristine(&self) -> bool {
        self.pristine
    }

    /// Full candidate property set for the current metric selection
    pub fn properties(&self) -> &[String] {
        &self.properties
    }

    /// Candidate properties minus already-chosen dimension keys
    pub fn available_options(&self) -> &[SelectableOption] {
        &self.available
    }

    /// Change the selected metrics and recompute everything derived from
    /// them
    pub async fn set_metrics(&mut self, metrics: Vec<MetricOption>) -> EditorResult<()> {
        let changed = self.query.metrics.as_ref() != Some(&metrics);
        if changed && !self.pristine {
            // Chosen dimensions may reference a metric that is no longer
            // selected; reset before requesting new options.
            self.query.dimensions = Some(EMPTY_DIMENSIONS.to_string());
        }
        self.query.metrics = Some(metrics);
        if changed {
            self.refresh_properties().await;
        }
        self.recompute_available()?;
        self.host.on_change(&self.query);
        self.host.on_run_query();
        Ok(())
    }

    /// Replace the dimensions filter
    pub fn set_dimensions(&mut self, dimensions: &[Dimension]) -> EditorResult<()> {
        self.query.dimensions = Some(crate::models::encode_dimensions(dimensions)?);
        self.recompute_available()?;
        self.notify(true);
        Ok(())
    }

    /// Change the time-scale set; duration step/unit follow the finest
    /// selected granularity as one joined change
    pub fn set_time_scales(&mut self, time_scales: Vec<TimeScaleOption>) {
        let (step, unit) = derive_duration(&time_scales);
        self.query.time_scales = Some(time_scales);
        self.query.duration_step = Some(step);
        self.query.duration_unit = Some(unit);
        self.notify(true);
    }

    /// Requested chart limit, clamped into `[1, max_charts]` at entry
    pub fn set_size(&mut self, size: i64) {
        self.query.size = Some(size.clamp(1, self.max_charts));
        self.notify(true);
    }

    pub fn set_duration(&mut self, duration: Vec<u32>) {
        self.query.duration = Some(duration);
        self.notify(true);
    }

    pub fn set_score(&mut self, score: Vec<u32>) {
        self.query.score = Some(score);
        self.notify(true);
    }

    /// Clearable select: `None` clears the delta type
    pub fn set_delta_type(&mut self, delta_type: Option<DeltaType>) {
        self.query.delta_type = delta_type;
        self.notify(true);
    }

    pub fn set_delta_value(&mut self, delta_value: f64) {
        self.query.delta_value = Some(delta_value);
        self.notify(true);
    }

    pub fn set_direction(&mut self, direction: Vec<SelectableOption>) {
        self.query.direction = Some(direction);
        self.notify(true);
    }

    pub fn set_sort_by(&mut self, sort_by: SortKey) {
        self.query.sort_by = Some(sort_by);
        self.notify(true);
    }

    pub fn set_opened_only(&mut self, opened_only: bool) {
        self.query.opened_only = Some(opened_only);
        self.notify(true);
    }

    pub fn set_not_operator(&mut self, not_operator: bool) {
        self.query.not_operator = Some(not_operator);
        self.notify(true);
    }

    pub fn set_request_charts(&mut self, request_charts: bool) {
        self.query.request_charts = Some(request_charts);
        self.notify(true);
    }

    pub fn set_include_baseline(&mut self, include_baseline: bool) {
        self.query.include_baseline = Some(include_baseline);
        self.notify(true);
    }

    pub fn set_add_query(&mut self, add_query: bool) {
        self.query.add_query = Some(add_query);
        self.notify(true);
    }

    pub fn set_apply_variables(&mut self, apply_variables: bool) {
        self.query.apply_variables = Some(apply_variables);
        self.notify(true);
    }

    fn notify(&self, run: bool) {
        self.host.on_change(&self.query);
        if run {
            self.host.on_run_query();
        }
    }

    /// One lookup per selected metric, unioned and sorted; the result is
    /// kept both as session state and in the query so the datasource can
    /// validate dashboard-variable dimensions later
    async fn refresh_properties(&mut self) {
        let metrics = self.query.metrics.clone().unwrap_or_default();
        if let Some(properties) = self.resolver.resolve_properties(&metrics).await {
            self.properties = properties.clone();
            self.query.dimensions_options = Some(properties);
        }
    }

    fn recompute_available(&mut self) -> EditorResult<()> {
        let raw = self.query.dimensions.as_deref().unwrap_or(EMPTY_DIMENSIONS);
        let chosen: Vec<String> =
            parse_dimensions(raw)?.into_iter().map(|dimension| dimension.key).collect();
        self.available = compute_available(&self.properties, &chosen);
        Ok(())
    }
}
