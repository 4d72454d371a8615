//! The model registry: insertion-ordered id → descriptor map.

use std::collections::HashMap;
use std::sync::Arc;

use model_desc_core::{
    CatalogOverrides, ModelCategory, ModelDescriptor, ParameterOverride, Provider,
};

use crate::error::CatalogError;

/// Insertion-ordered collection of registered descriptors, keyed by id.
///
/// Constructed explicitly and passed to the builder and generators — there is
/// no module-level mutable registry. Production code builds one registry per
/// process (see [`crate::global`]); tests construct and discard fresh
/// instances for isolation.
///
/// Descriptors are stored behind `Arc` so derived groups can reference them
/// without copies.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    models: Vec<Arc<ModelDescriptor>>,
    by_id: HashMap<String, usize>,
    /// Lowercased alias → canonical id.
    by_alias: HashMap<String, String>,
    overrides: CatalogOverrides,
}

impl ModelRegistry {
    /// An empty registry with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty registry that applies `overrides` at registration time.
    pub fn with_overrides(overrides: CatalogOverrides) -> Self {
        Self {
            overrides,
            ..Self::default()
        }
    }

    /// Register a descriptor.
    ///
    /// Validates the §3 invariants, applies the configured overrides (a
    /// disabled model is skipped, parameter defaults are replaced and
    /// re-validated, regions are filtered), then inserts keyed by id.
    /// A duplicate id — or an alias colliding with the id/alias namespace —
    /// fails with [`CatalogError::DuplicateId`].
    pub fn register(&mut self, descriptor: ModelDescriptor) -> Result<(), CatalogError> {
        descriptor.validate()?;

        if self.overrides.is_disabled(&descriptor.id) {
            tracing::debug!(model = %descriptor.id, "model disabled by override, skipping");
            return Ok(());
        }

        let mut descriptor = descriptor;
        if let Some(patch) = self.overrides.parameter_override(&descriptor.id) {
            apply_parameter_override(&mut descriptor, patch);
            descriptor.validate()?;
        }
        if let Some(allowed) = &self.overrides.regions {
            if !descriptor.regions.is_empty() {
                descriptor.regions.retain(|r| allowed.contains(r));
                if descriptor.regions.is_empty() {
                    tracing::warn!(
                        model = %descriptor.id,
                        "no region left after region filter, dropping model"
                    );
                    return Ok(());
                }
            }
        }

        if self.is_taken(&descriptor.id) {
            return Err(CatalogError::DuplicateId {
                id: descriptor.id.clone(),
            });
        }
        for alias in &descriptor.aliases {
            if self.is_taken(alias) {
                return Err(CatalogError::DuplicateId { id: alias.clone() });
            }
        }

        let index = self.models.len();
        self.by_id.insert(descriptor.id.clone(), index);
        for alias in &descriptor.aliases {
            self.by_alias
                .insert(alias.to_ascii_lowercase(), descriptor.id.clone());
        }
        self.models.push(Arc::new(descriptor));
        Ok(())
    }

    /// All registered descriptors, in insertion order.
    pub fn get_all(&self) -> &[Arc<ModelDescriptor>] {
        &self.models
    }

    /// Exact-id lookup. Absence is an ordinary result, never an error.
    pub fn get_by_id(&self, id: &str) -> Option<&Arc<ModelDescriptor>> {
        self.by_id.get(id).map(|&i| &self.models[i])
    }

    /// Lookup by id or alias, ignoring case.
    pub fn find(&self, id_or_alias: &str) -> Option<&Arc<ModelDescriptor>> {
        if let Some(found) = self.get_by_id(id_or_alias) {
            return Some(found);
        }
        let lower = id_or_alias.to_ascii_lowercase();
        if let Some(canonical) = self.by_alias.get(&lower) {
            return self.get_by_id(canonical);
        }
        // Ids are matched case-insensitively as a fallback.
        self.models.iter().find(|m| m.id.eq_ignore_ascii_case(id_or_alias))
    }

    /// Descriptors from one provider, in insertion order.
    pub fn get_by_provider(&self, provider: Provider) -> Vec<Arc<ModelDescriptor>> {
        self.models
            .iter()
            .filter(|m| m.provider == provider)
            .cloned()
            .collect()
    }

    /// Descriptors carrying a category tag, in insertion order.
    pub fn get_by_category(&self, category: ModelCategory) -> Vec<Arc<ModelDescriptor>> {
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

    fn is_taken(&self, name: &str) -> bool {
        self.by_id.contains_key(name) || self.by_alias.contains_key(&name.to_ascii_lowercase())
    }
}

fn apply_parameter_override(descriptor: &mut ModelDescriptor, patch: &ParameterOverride) {
    let params = &mut descriptor.parameters;
    if let (Some(value), Some(range)) = (patch.temperature, params.temperature.as_mut()) {
        range.default = value;
    }
    if let (Some(value), Some(range)) = (patch.top_p, params.top_p.as_mut()) {
        range.default = value;
    }
    if let (Some(value), Some(range)) = (patch.top_k, params.top_k.as_mut()) {
        range.default = value;
    }
    if let (Some(value), Some(range)) = (patch.max_tokens, params.max_tokens.as_mut()) {
        range.default = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model_desc_core::{
        IntRange, Modality, ModelFeatures, ModelParameters, ModelStatus, ParameterRange,
        TextFeatures, ValidationError,
    };

    fn descriptor(id: &str) -> ModelDescriptor {
        ModelDescriptor::builder(id, "Test Model", Provider::Amazon)
            .categories([ModelCategory::Chat])
            .input_modalities([Modality::Text])
            .output_modalities([Modality::Text])
            .regions(["us-east-1", "us-west-2"])
            .parameters(ModelParameters {
                temperature: Some(ParameterRange::new(0.0, 0.7, 1.0)),
                max_tokens: Some(IntRange::new(1, 2048, 8192)),
                ..ModelParameters::default()
            })
            .features(ModelFeatures::Text(TextFeatures::default()))
            .status(ModelStatus::Stable)
            .last_updated("2024-06-01")
            .build()
            .unwrap()
    }

    #[test]
    fn register_then_lookup() {
        let mut registry = ModelRegistry::new();
        registry.register(descriptor("m-1")).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get_by_id("m-1").unwrap().id, "m-1");
        assert!(registry.get_by_id("m-2").is_none());
    }

    #[test]
    fn duplicate_id_fails_and_first_wins() {
        let mut registry = ModelRegistry::new();
        registry.register(descriptor("dup-id")).unwrap();
        let err = registry.register(descriptor("dup-id")).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { ref id } if id == "dup-id"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn invalid_descriptor_fails_validation() {
        let mut invalid = descriptor("m-1");
        invalid.category.clear();
        let mut registry = ModelRegistry::new();
        let err = registry.register(invalid).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Validation(ValidationError::EmptyList { field: "category" })
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn find_resolves_aliases_case_insensitively() {
        let mut with_alias = descriptor("model.one-v1");
        with_alias.aliases = vec!["one".to_string()];
        let mut registry = ModelRegistry::new();
        registry.register(with_alias).unwrap();

        assert_eq!(registry.find("ONE").unwrap().id, "model.one-v1");
        assert_eq!(registry.find("Model.One-V1").unwrap().id, "model.one-v1");
        assert!(registry.find("two").is_none());
    }

    #[test]
    fn alias_colliding_with_id_is_a_duplicate() {
        let mut registry = ModelRegistry::new();
        registry.register(descriptor("m-1")).unwrap();
        let mut colliding = descriptor("m-2");
        colliding.aliases = vec!["m-1".to_string()];
        let err = registry.register(colliding).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { ref id } if id == "m-1"));
    }

    #[test]
    fn disabled_override_skips_registration() {
        let overrides = CatalogOverrides {
            disabled: vec!["m-1".to_string()],
            ..CatalogOverrides::default()
        };
        let mut registry = ModelRegistry::with_overrides(overrides);
        registry.register(descriptor("m-1")).unwrap();
        registry.register(descriptor("m-2")).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.get_by_id("m-1").is_none());
    }

    #[test]
    fn parameter_override_replaces_default() {
        let mut overrides = CatalogOverrides::default();
        overrides.parameters.insert(
            "m-1".to_string(),
            ParameterOverride {
                temperature: Some(0.2),
                max_tokens: Some(4096),
                ..ParameterOverride::default()
            },
        );
        let mut registry = ModelRegistry::with_overrides(overrides);
        registry.register(descriptor("m-1")).unwrap();

        let registered = registry.get_by_id("m-1").unwrap();
        assert_eq!(registered.parameters.temperature.unwrap().default, 0.2);
        assert_eq!(registered.parameters.max_tokens.unwrap().default, 4096);
        // Bounds are untouched.
        assert_eq!(registered.parameters.temperature.unwrap().max, 1.0);
    }

    #[test]
    fn out_of_bounds_override_is_a_validation_error() {
        let mut overrides = CatalogOverrides::default();
        overrides.parameters.insert(
            "m-1".to_string(),
            ParameterOverride {
                temperature: Some(3.0),
                ..ParameterOverride::default()
            },
        );
        let mut registry = ModelRegistry::with_overrides(overrides);
        let err = registry.register(descriptor("m-1")).unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[test]
    fn region_filter_drops_models_with_no_region_left() {
        let overrides = CatalogOverrides {
            regions: Some(vec!["eu-central-1".to_string()]),
            ..CatalogOverrides::default()
        };
        let mut registry = ModelRegistry::with_overrides(overrides);
        registry.register(descriptor("m-1")).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn region_filter_keeps_intersection() {
        let overrides = CatalogOverrides {
            regions: Some(vec!["us-east-1".to_string()]),
            ..CatalogOverrides::default()
        };
        let mut registry = ModelRegistry::with_overrides(overrides);
        registry.register(descriptor("m-1")).unwrap();
        let registered = registry.get_by_id("m-1").unwrap();
        assert_eq!(registered.regions, vec!["us-east-1".to_string()]);
    }

    #[test]
    fn provider_and_category_filters_preserve_order() {
        let mut registry = ModelRegistry::new();
        registry.register(descriptor("m-1")).unwrap();
        registry.register(descriptor("m-2")).unwrap();

        let by_provider = registry.get_by_provider(Provider::Amazon);
        assert_eq!(by_provider.len(), 2);
        assert_eq!(by_provider[0].id, "m-1");
        assert!(registry.get_by_provider(Provider::Groq).is_empty());

        let by_category = registry.get_by_category(ModelCategory::Chat);
        assert_eq!(by_category.len(), 2);
        assert!(registry.get_by_category(ModelCategory::Image).is_empty());
    }
}
