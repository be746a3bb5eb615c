//! Telemetry sink
//!
//! The sink is an injected capability rather than an ambient global, so
//! hosts decide where events go and tests can count them.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Scenario;

/// A structured editor event
#[derive(Debug, Clone, Serialize)]
pub struct TelemetryEvent {
    pub category: String,
    pub scenario: Scenario,
    /// Identity of the editor session that emitted the event
    pub session: Uuid,
    pub at: DateTime<Utc>,
}

impl TelemetryEvent {
    pub fn scenario_switched(session: Uuid, scenario: Scenario) -> Self {
        Self { category: "Switched scenario".to_string(), scenario, session, at: Utc::now() }
    }
}

pub trait TelemetrySink: Send + Sync {
    fn track(&self, event: TelemetryEvent);
}

/// Default sink: structured log line per event
pub struct TracingTelemetry;

impl TelemetrySink for TracingTelemetry {
    fn track(&self, event: TelemetryEvent) {
        tracing::info!(
            category = %event.category,
            scenario = ?event.scenario,
            session = %event.session,
            at = %event.at,
            "Editor telemetry event"
        );
    }
}

/// Sink for hosts that opt out of telemetry
pub struct NoopTelemetry;

impl TelemetrySink for NoopTelemetry {
    fn track(&self, _event: TelemetryEvent) {}
}
