//! Editor sessions
//!
//! One session per mounted builder: it owns the query object and the
//! ephemeral derived state (pristine flag, candidate properties, available
//! options), and notifies the host through [`QueryHost`]. The session is
//! the only writer of the query; the host consumes `on_change` /
//! `on_run_query` exactly as it would from any other panel editor.

pub mod anomaly;
pub mod composite;
pub mod topology;

pub use anomaly::AnomalyEditorSession;
pub use composite::CompositeEditorSession;
pub use topology::{TopologyEditorSession, TopologyPatch};

use std::sync::Arc;

use uuid::Uuid;

use crate::config::EditorConfig;
use crate::models::{EditorQuery, Scenario};
use crate::services::defaults::{
    DEFAULT_ANOMALY_QUERY, DEFAULT_METRICS_COMPOSITE_QUERY, DEFAULT_TOPOLOGY_QUERY,
};
use crate::services::telemetry::{TelemetryEvent, TelemetrySink};

/// Host notification pathway
///
/// `on_change` hands the host an updated query for the panel;
/// `on_run_query` asks it to re-execute. The two are deliberately separate:
/// a `NoRequests` strategy still re-runs, the host just skips backend
/// fetches.
pub trait QueryHost<Q>: Send + Sync {
    fn on_change(&self, query: &Q);
    fn on_run_query(&self);
}

impl<Q, T: QueryHost<Q> + ?Sized> QueryHost<Q> for Arc<T> {
    fn on_change(&self, query: &Q) {
        (**self).on_change(query)
    }

    fn on_run_query(&self) {
        (**self).on_run_query()
    }
}

/// Fresh, fully-defaulted query for a scenario
pub fn default_query_for(scenario: Scenario) -> EditorQuery {
    match scenario {
        Scenario::Alerts => EditorQuery::Alerts(serde_json::Map::new()),
        Scenario::Anomalies => EditorQuery::Anomalies(DEFAULT_ANOMALY_QUERY.clone()),
        Scenario::MetricsComposite => {
            EditorQuery::MetricsComposite(DEFAULT_METRICS_COMPOSITE_QUERY.clone())
        }
        Scenario::Topology => EditorQuery::Topology(DEFAULT_TOPOLOGY_QUERY.clone()),
    }
}

/// Top-level editor: the scenario selector above the per-scenario builders
pub struct QueryEditor<H: QueryHost<EditorQuery>> {
    query: EditorQuery,
    session: Uuid,
    telemetry: Arc<dyn TelemetrySink>,
    telemetry_enabled: bool,
    host: H,
}

impl<H: QueryHost<EditorQuery>> QueryEditor<H> {
    pub fn new(
        query: Option<EditorQuery>,
        host: H,
        telemetry: Arc<dyn TelemetrySink>,
        config: &EditorConfig,
    ) -> Self {
        let query = query.unwrap_or_else(|| default_query_for(Scenario::Alerts));
        Self {
            query,
            session: Uuid::new_v4(),
            telemetry,
            telemetry_enabled: config.telemetry.enabled,
            host,
        }
    }

    pub fn query(&self) -> &EditorQuery {
        &self.query
    }

    pub fn session(&self) -> Uuid {
        self.session
    }

    /// Switch to another builder scenario
    ///
    /// Emits one telemetry event and reseeds the query from the target
    /// scenario's defaults; fields of the previous scenario do not carry
    /// over.
    pub fn switch_scenario(&mut self, scenario: Scenario) {
        if self.telemetry_enabled {
            self.telemetry.track(TelemetryEvent::scenario_switched(self.session, scenario));
        }
        self.query = default_query_for(scenario);
        self.host.on_change(&self.query);
    }
}
