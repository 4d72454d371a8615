//! The built catalog: flat model list plus derived groups.

use std::sync::Arc;

use model_desc_core::{ModelCategory, ModelDescriptor, Provider};
use serde::Serialize;

use crate::group::ModelGroup;

/// The read-only result of a catalog build.
///
/// Holds the flat, insertion-ordered descriptor list (shared `Arc` handles)
/// and the groups derived from it. Built once per process in production
/// (see [`crate::global`]); everything here is lookup, no mutation.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    models: Vec<Arc<ModelDescriptor>>,
    groups: Vec<ModelGroup>,
}

impl Catalog {
    pub(crate) fn new(models: Vec<Arc<ModelDescriptor>>, groups: Vec<ModelGroup>) -> Self {
        Self { models, groups }
    }

    /// The full ordered model list.
    pub fn models(&self) -> &[Arc<ModelDescriptor>] {
        &self.models
    }

    /// The derived groups (by provider, then by category).
    pub fn groups(&self) -> &[ModelGroup] {
        &self.groups
    }

    /// Lookup by id or alias, ignoring case. Absence is an ordinary result.
    pub fn get(&self, id_or_alias: &str) -> Option<&Arc<ModelDescriptor>> {
        self.models.iter().find(|m| m.answers_to(id_or_alias))
    }

    /// Models from one provider, in catalog order.
    pub fn models_by_provider(&self, provider: Provider) -> Vec<Arc<ModelDescriptor>> {
        self.models
            .iter()
            .filter(|m| m.provider == provider)
            .cloned()
            .collect()
    }

    /// Models carrying a category tag, in catalog order.
    pub fn models_by_category(&self, category: ModelCategory) -> Vec<Arc<ModelDescriptor>> {
        self.models
            .iter()
            .filter(|m| m.has_category(category))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
