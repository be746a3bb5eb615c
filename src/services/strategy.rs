//! Change Classifier / Request-Strategy Selector
//!
//! A pure reducer over edits: compares previous and next query state
//! field-group by field-group and picks the request strategy the host
//! should use for the next execution. Independent of any re-render
//! mechanism, so the transition table is directly unit-testable.

use crate::models::{RequestStrategy, TopologyQuery};

/// Classify an edit into a request strategy
///
/// Evaluated in fixed priority order; each condition compares a disjoint
/// field subset against its previous value, and at most one transition
/// fires per update. Returns `None` when no tracked group changed.
///
/// The caller gates transitions on "session past its initial settle" and
/// "at least one metric selected", and pairs every fired transition with a
/// re-run signal.
pub fn classify(prev: &TopologyQuery, next: &TopologyQuery) -> Option<RequestStrategy> {
    if next.metrics != prev.metrics
        && next.metrics.as_ref().is_some_and(|metrics| !metrics.is_empty())
    {
        // Common case - metrics changed, redo everything
        return Some(RequestStrategy::All);
    }

    if anomaly_filter_group(next) != anomaly_filter_group(prev) {
        return Some(RequestStrategy::AnomaliesOnly);
    }

    if next.show_events != prev.show_events {
        return Some(RequestStrategy::EventsOnly);
    }

    if next.source != prev.source || next.destination != prev.destination {
        // Local params only: update the panel query, no backend fetch
        return Some(RequestStrategy::NoRequests);
    }

    None
}

type AnomalyFilterGroup<'a> = (
    Option<&'a Vec<u32>>,
    Option<&'a Vec<u32>>,
    Option<f64>,
    Option<&'a Vec<crate::models::SelectableOption>>,
    Option<crate::models::DeltaType>,
    Option<&'a Vec<crate::models::TimeScaleOption>>,
    Option<bool>,
    Option<crate::models::SortKey>,
);

fn anomaly_filter_group(query: &TopologyQuery) -> AnomalyFilterGroup<'_> {
    (
        query.score.as_ref(),
        query.duration.as_ref(),
        query.delta_value,
        query.direction.as_ref(),
        query.delta_type,
        query.time_scales.as_ref(),
        query.opened_only,
        query.sort_by,
    )
}
