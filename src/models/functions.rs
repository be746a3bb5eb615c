//! Derived-metric function entries
//!
//! A metrics-composite query carries a `selectedFunctions` map keyed by
//! function kind. The key MUST equal the entry's `functionName`; the
//! composer in `services::functions` is the only writer and keeps that
//! invariant across renames.

use serde::{Deserialize, Serialize};

use super::options::{MetricOption, SelectableOption};

/// The closed catalog of function kinds, plus the `new` placeholder for an
/// in-progress, not-yet-typed addition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FunctionKind {
    New,
    RatioPairs,
    Pairs,
    TimeShift,
    Alias,
    Abs,
    Accumulate,
}

impl FunctionKind {
    /// Every user-selectable kind (the placeholder is excluded)
    pub const CATALOG: [FunctionKind; 6] = [
        FunctionKind::RatioPairs,
        FunctionKind::Pairs,
        FunctionKind::TimeShift,
        FunctionKind::Alias,
        FunctionKind::Abs,
        FunctionKind::Accumulate,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            FunctionKind::New => "",
            FunctionKind::RatioPairs => "Ratio Pairs",
            FunctionKind::Pairs => "Pairs",
            FunctionKind::TimeShift => "Time Shift",
            FunctionKind::Alias => "Alias",
            FunctionKind::Abs => "Abs",
            FunctionKind::Accumulate => "Accumulate",
        }
    }

    /// Root-level aggregation transforms cannot be combined with further
    /// root-level functions
    pub fn is_root_aggregation(&self) -> bool {
        matches!(self, FunctionKind::RatioPairs | FunctionKind::Pairs | FunctionKind::TimeShift)
    }
}

/// Parameters of a ratio-pair function: two measure/aggregation/group-by
/// triples
///
/// Group-by selections stay JSON-encoded (`{"properties": [...]}`) in the
/// wire form, mirroring the dimensions filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RatioPairParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divident_measure: Option<MetricOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divident_aggregation: Option<SelectableOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divident_group_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divisor_measure: Option<MetricOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divisor_aggregation: Option<SelectableOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divisor_group_by: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PairsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair_measure: Option<MetricOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<SelectableOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TimeShiftParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AliasParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// Variant-by-kind parameter payload
///
/// The composer never interprets parameters; only the owning widget does.
/// Generic kinds carry opaque JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FunctionParameters {
    RatioPair(RatioPairParams),
    Pairs(PairsParams),
    TimeShift(TimeShiftParams),
    Alias(AliasParams),
    Opaque(serde_json::Value),
}

impl Default for FunctionParameters {
    fn default() -> Self {
        FunctionParameters::Opaque(serde_json::Value::Object(serde_json::Map::new()))
    }
}

/// One entry of the `selectedFunctions` map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEntry {
    /// `None` while the entry is still the untyped placeholder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_name: Option<FunctionKind>,
    pub function_label: String,
    #[serde(default)]
    pub parameters: FunctionParameters,
    /// Monotonic per-session counter value; never reused after deletions
    pub index: u32,
}
