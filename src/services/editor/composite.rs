//! Metrics-composite builder session

use std::collections::HashMap;

use crate::models::{
    Dimension, FunctionEntry, FunctionKind, FunctionParameters, MetricsCompositeQuery,
};
use crate::services::defaults::{Defaultable, DEFAULT_METRICS_COMPOSITE_QUERY};
use crate::services::editor::QueryHost;
use crate::services::functions::{FunctionComposer, SelectedFunctions};
use crate::utils::EditorResult;

/// One mounted metrics-composite builder: the function chain plus a
/// dimensions filter
pub struct CompositeEditorSession<H: QueryHost<MetricsCompositeQuery>> {
    query: MetricsCompositeQuery,
    composer: FunctionComposer,
    host: H,
}

impl<H: QueryHost<MetricsCompositeQuery>> CompositeEditorSession<H> {
    pub fn new(query: MetricsCompositeQuery, host: H) -> Self {
        let mut query = query;
        query.apply_defaults(&DEFAULT_METRICS_COMPOSITE_QUERY);
        let composer = match &query.selected_functions {
            Some(selected) => FunctionComposer::resume(selected),
            None => FunctionComposer::new(),
        };
        Self { query, composer, host }
    }

    pub fn query(&self) -> &MetricsCompositeQuery {
        &self.query
    }

    pub fn selected_functions(&self) -> &SelectedFunctions {
        static EMPTY: once_cell::sync::Lazy<SelectedFunctions> =
            once_cell::sync::Lazy::new(HashMap::new);
        self.query.selected_functions.as_ref().unwrap_or(&EMPTY)
    }

    /// Function entries in stable render order
    pub fn ordered_functions(&self) -> Vec<(FunctionKind, &FunctionEntry)> {
        FunctionComposer::ordered(self.selected_functions())
    }

    pub fn available_functions(&self) -> Vec<FunctionKind> {
        FunctionComposer::available_kinds(self.selected_functions())
    }

    /// Whether the "+ Function" affordance is shown and enabled
    pub fn can_add_function(&self) -> bool {
        FunctionComposer::can_add(self.selected_functions())
    }

    /// Add an untyped placeholder row; no-op when blocked
    pub fn add_function(&mut self) -> bool {
        let selected = self.query.selected_functions.get_or_insert_with(HashMap::new);
        let changed = self.composer.add(selected);
        if changed {
            self.notify();
        }
        changed
    }

    /// Give the entry at `old` its (new) kind, preserving parameters and
    /// index
    pub fn rename_function(&mut self, old: FunctionKind, kind: FunctionKind) -> bool {
        let selected = self.query.selected_functions.get_or_insert_with(HashMap::new);
        let changed = FunctionComposer::rename(selected, old, kind, kind.display_name());
        if changed {
            self.notify();
        }
        changed
    }

    pub fn set_function_params(
        &mut self,
        kind: FunctionKind,
        parameters: FunctionParameters,
    ) -> bool {
        let selected = self.query.selected_functions.get_or_insert_with(HashMap::new);
        let changed = FunctionComposer::set_params(selected, kind, parameters);
        if changed {
            self.notify();
        }
        changed
    }

    pub fn remove_function(&mut self, kind: FunctionKind) -> bool {
        let selected = self.query.selected_functions.get_or_insert_with(HashMap::new);
        let changed = FunctionComposer::remove(selected, kind);
        if changed {
            self.notify();
        }
        changed
    }

    pub fn set_dimensions(&mut self, dimensions: &[Dimension]) -> EditorResult<()> {
        self.query.dimensions = Some(crate::models::encode_dimensions(dimensions)?);
        self.notify();
        Ok(())
    }

    fn notify(&self) {
        self.host.on_change(&self.query);
        self.host.on_run_query();
    }
}
