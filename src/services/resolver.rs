//! Dependent-Field Resolver
//!
//! Recomputes derived fields from other fields: candidate property names
//! from the selected metrics (via the datasource collaborator) and the
//! duration step/unit from the selected time scales.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::models::{DurationUnit, MetricOption, TimeScaleOption};
use crate::services::datasource::MetricsDatasource;
use crate::utils::unique_ordered;

const DEFAULT_DURATION_STEP: u32 = 1;

/// Resolves candidate property names for the current metric selection
///
/// Every resolution takes a ticket from a monotonic sequence; a resolution
/// that is no longer the latest issued when its lookups complete is
/// discarded, so a slow stale lookup can never overwrite fresher options.
pub struct PropertyResolver {
    datasource: Arc<dyn MetricsDatasource>,
    seq: AtomicU64,
}

impl PropertyResolver {
    pub fn new(datasource: Arc<dyn MetricsDatasource>) -> Self {
        Self { datasource, seq: AtomicU64::new(0) }
    }

    /// Union + sort + dedup of the property dictionaries of all selected
    /// metrics; one lookup per metric
    ///
    /// Returns `None` when there is nothing to resolve, when the resolution
    /// was superseded, or when a lookup failed. In all three cases the
    /// caller keeps its previous derived state.
    pub async fn resolve_properties(&self, metrics: &[MetricOption]) -> Option<Vec<String>> {
        if metrics.is_empty() {
            return None;
        }
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;

        let mut merged = Vec::new();
        for metric in metrics {
            match self.datasource.get_properties_dict(&metric.value).await {
                Ok(dict) => merged.extend(dict.properties),
                Err(e) => {
                    tracing::warn!(
                        metric = %metric.value,
                        error = %e,
                        "Property lookup failed, keeping previous options"
                    );
                    return None;
                }
            }
        }

        if self.seq.load(Ordering::SeqCst) != ticket {
            tracing::debug!("Discarding superseded property resolution");
            return None;
        }

        let mut properties = unique_ordered(merged);
        properties.sort();
        Some(properties)
    }
}

/// Derive the duration step/unit from the finest selected time scale
///
/// Falls back to `1`/`minutes` when no selection remains.
pub fn derive_duration(time_scales: &[TimeScaleOption]) -> (u32, DurationUnit) {
    time_scales
        .iter()
        .min_by_key(|scale| scale.rank)
        .map(|scale| (scale.step, scale.unit))
        .unwrap_or((DEFAULT_DURATION_STEP, DurationUnit::Minutes))
}
