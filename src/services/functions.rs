//! Function-Chain Composer
//!
//! Manages the keyed collection of derived-metric functions of a
//! metrics-composite query. An entry's identity tracks its kind: the map
//! key always equals `functionName`, and renaming a function is one atomic
//! move through [`FunctionComposer::rename`], never an ad-hoc
//! delete-plus-insert at a call site.

use std::collections::HashMap;

use crate::models::{FunctionEntry, FunctionKind, FunctionParameters};

/// Entries keyed by kind, as stored in `selectedFunctions`
pub type SelectedFunctions = HashMap<FunctionKind, FunctionEntry>;

/// Stateful composer: owns the monotonic index counter of one editor
/// session
///
/// Counter values are never reused, even after deletions, so render order
/// stays stable across the session.
#[derive(Debug, Default)]
pub struct FunctionComposer {
    next_index: u32,
}

impl FunctionComposer {
    pub fn new() -> Self {
        Self { next_index: 0 }
    }

    /// Resume a session over an existing map, continuing after its highest
    /// index
    pub fn resume(selected: &SelectedFunctions) -> Self {
        let next_index =
            selected.values().map(|entry| entry.index).max().map_or(0, |max| max + 1);
        Self { next_index }
    }

    /// All function kinds still selectable: the catalog minus present
    /// kinds; the `new` placeholder is never offered
    pub fn available_kinds(selected: &SelectedFunctions) -> Vec<FunctionKind> {
        FunctionKind::CATALOG
            .iter()
            .copied()
            .filter(|kind| !selected.contains_key(kind))
            .collect()
    }

    /// Whether the "+ Function" affordance is enabled
    ///
    /// Root aggregation transforms (ratio-pairs, pairs, time-shift) are
    /// incompatible with further root-level nesting; a pending placeholder
    /// or an exhausted catalog also block adding.
    pub fn can_add(selected: &SelectedFunctions) -> bool {
        !selected.keys().any(FunctionKind::is_root_aggregation)
            && !selected.contains_key(&FunctionKind::New)
            && !Self::available_kinds(selected).is_empty()
    }

    /// Insert an untyped placeholder entry; no-op when adding is blocked
    ///
    /// Returns whether the map changed.
    pub fn add(&mut self, selected: &mut SelectedFunctions) -> bool {
        if !Self::can_add(selected) {
            return false;
        }
        self.next_index += 1;
        selected.insert(
            FunctionKind::New,
            FunctionEntry {
                function_name: None,
                function_label: String::new(),
                parameters: FunctionParameters::default(),
                index: self.next_index,
            },
        );
        true
    }

    /// Move the entry at `old` to the key of its new kind, preserving
    /// `parameters` and `index`
    ///
    /// A self-rename is a no-op move that still refreshes the label.
    /// Returns whether an entry was found at `old`.
    pub fn rename(
        selected: &mut SelectedFunctions,
        old: FunctionKind,
        kind: FunctionKind,
        label: &str,
    ) -> bool {
        let Some(mut entry) = selected.remove(&old) else {
            return false;
        };
        entry.function_name = Some(kind);
        entry.function_label = label.to_string();
        selected.insert(kind, entry);
        true
    }

    /// Replace the parameters of the entry at `kind`, leaving name, label
    /// and index untouched
    pub fn set_params(
        selected: &mut SelectedFunctions,
        kind: FunctionKind,
        parameters: FunctionParameters,
    ) -> bool {
        match selected.get_mut(&kind) {
            Some(entry) => {
                entry.parameters = parameters;
                true
            }
            None => false,
        }
    }

    /// Delete the entry; remaining `index` values are not renumbered
    pub fn remove(selected: &mut SelectedFunctions, kind: FunctionKind) -> bool {
        selected.remove(&kind).is_some()
    }

    /// Entries in stable render order (ascending index)
    pub fn ordered(selected: &SelectedFunctions) -> Vec<(FunctionKind, &FunctionEntry)> {
        let mut entries: Vec<_> =
            selected.iter().map(|(kind, entry)| (*kind, entry)).collect();
        entries.sort_by_key(|(_, entry)| entry.index);
        entries
    }
}
