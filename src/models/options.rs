//! Selectable option types and the static option tables rendered by the
//! form layer
//!
//! Field names follow the saved-dashboard JSON contract, so everything here
//! serializes camelCase.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Generic label/value pair as consumed by form selects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectableOption {
    pub label: String,
    pub value: String,
}

impl SelectableOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into() }
    }
}

/// Wrap a bare value as a label/value pair (label mirrors the value)
pub fn add_label(value: &str) -> SelectableOption {
    SelectableOption::new(value, value)
}

/// A metric reference selected in the measure search field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub value: String,
}

impl MetricOption {
    pub fn new(value: impl Into<String>) -> Self {
        Self { label: None, value: value.into() }
    }
}

/// Topology node selector
///
/// Saved dashboards contain both `{label, value}` objects and bare strings
/// for `source`/`destination`, so both shapes must deserialize and
/// round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeSelector {
    Labeled(SelectableOption),
    Bare(String),
}

impl NodeSelector {
    /// The underlying property name regardless of representation
    pub fn value(&self) -> &str {
        match self {
            NodeSelector::Labeled(option) => &option.value,
            NodeSelector::Bare(value) => value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeltaType {
    Absolute,
    Percentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Score,
    StartDate,
    Delta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DurationUnit {
    Minutes,
    Hours,
    Days,
    Weeks,
}

/// A granularity bucket selectable as an anomaly time scale
///
/// `rank` orders buckets from finest to coarsest; the duration step/unit of
/// a query are derived from the finest selected bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeScaleOption {
    pub label: String,
    pub value: String,
    pub step: u32,
    pub unit: DurationUnit,
    pub rank: u32,
}

impl TimeScaleOption {
    fn new(label: &str, value: &str, step: u32, unit: DurationUnit, rank: u32) -> Self {
        Self { label: label.to_string(), value: value.to_string(), step, unit, rank }
    }
}

pub static TIME_SCALE_OPTIONS: Lazy<Vec<TimeScaleOption>> = Lazy::new(|| {
    vec![
        TimeScaleOption::new("1 Minute", "1m", 1, DurationUnit::Minutes, 1),
        TimeScaleOption::new("5 Minutes", "5m", 5, DurationUnit::Minutes, 2),
        TimeScaleOption::new("1 Hour", "1h", 1, DurationUnit::Hours, 3),
        TimeScaleOption::new("1 Day", "1d", 1, DurationUnit::Days, 4),
        TimeScaleOption::new("1 Week", "1w", 1, DurationUnit::Weeks, 5),
    ]
});

pub static DIRECTIONS_OPTIONS: Lazy<Vec<SelectableOption>> = Lazy::new(|| {
    vec![SelectableOption::new("Up", "up"), SelectableOption::new("Down", "down")]
});

pub static DELTA_TYPES_OPTIONS: Lazy<Vec<SelectableOption>> = Lazy::new(|| {
    vec![
        SelectableOption::new("Absolute", "absolute"),
        SelectableOption::new("Percentage", "percentage"),
    ]
});

pub static SORT_ANOMALY_OPTIONS: Lazy<Vec<SelectableOption>> = Lazy::new(|| {
    vec![
        SelectableOption::new("Score", "score"),
        SelectableOption::new("Start Date", "startDate"),
        SelectableOption::new("Delta", "delta"),
    ]
});
