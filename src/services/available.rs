//! Option-Set Reducer
//!
//! Computes what remains selectable after removing already-chosen values,
//! so the form never offers a dimension or node that is already in use.

use crate::models::SelectableOption;
use crate::utils::difference_ordered;

/// Pure set difference, order of `all` preserved, survivors wrapped as
/// label/value pairs
///
/// `chosen` entries absent from `all` are ignored; this never fails.
pub fn compute_available(all: &[String], chosen: &[String]) -> Vec<SelectableOption> {
    difference_ordered(all, chosen)
        .into_iter()
        .map(|value| SelectableOption::new(value.clone(), value.clone()))
        .collect()
}
