//! The dimensions filter and its JSON-string encoding
//!
//! The host stores the filter inside the query as a JSON-encoded string of
//! `[{key, ...}]` entries. The encoding must round-trip exactly, so parsing
//! and encoding both go through this module and nowhere else.

use serde::{Deserialize, Serialize};

use crate::utils::EditorResult;

/// Empty filter, the default for every query variant
pub const EMPTY_DIMENSIONS: &str = "[]";

/// One row of the dimensions filter
///
/// Extra fields round-trip through `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Dimension {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), value: None, not: None, extra: serde_json::Map::new() }
    }

    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
            not: None,
            extra: serde_json::Map::new(),
        }
    }
}

/// Parse the JSON-encoded filter loaded from a saved query
///
/// Fails fast only here, at the load boundary. A defaulted query carries
/// `"[]"` and always parses.
pub fn parse_dimensions(raw: &str) -> EditorResult<Vec<Dimension>> {
    Ok(serde_json::from_str(raw)?)
}

/// Encode the filter back into its wire form
pub fn encode_dimensions(dimensions: &[Dimension]) -> EditorResult<String> {
    Ok(serde_json::to_string(dimensions)?)
}
