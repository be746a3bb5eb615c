// Datasource collaborator seam
// Purpose: abstract the external data service behind one async trait so the
// editor core stays independent of the host's client implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::MetricOption;
use crate::utils::EditorResult;

/// Property-name dictionary returned for a metric
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertiesDict {
    pub properties: Vec<String>,
}

/// Async lookups consumed by the query builders
///
/// Implementations own retries and timeouts; the editor core only recovers
/// from rejection by keeping its previous derived state.
#[async_trait]
pub trait MetricsDatasource: Send + Sync {
    /// Search selectable metrics by free-text term
    async fn get_metrics_options(&self, search: &str) -> EditorResult<Vec<MetricOption>>;

    /// Candidate dimension/property names for one metric
    async fn get_properties_dict(&self, metric: &str) -> EditorResult<PropertiesDict>;

    /// Values of one property of one metric
    async fn get_metrics_prop_val(
        &self,
        metric: &str,
        property: &str,
    ) -> EditorResult<Vec<String>>;
}
