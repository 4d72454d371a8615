//! Catalog construction: run every provider generator, derive groups.

use once_cell::sync::Lazy;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::generator::ModelGenerator;
use crate::group::{groups_by_category, groups_by_provider};
use crate::providers::{
    AmazonGenerator, AnthropicGenerator, CohereGenerator, DeepSeekGenerator, GroqGenerator,
    MetaGenerator, MistralGenerator, OpenAiGenerator, SambanovaGenerator, StabilityGenerator,
};
use crate::registry::ModelRegistry;

/// Every known generator, in the fixed order the catalog is built in.
fn generators() -> Vec<Box<dyn ModelGenerator>> {
    vec![
        Box::new(AmazonGenerator),
        Box::new(AnthropicGenerator),
        Box::new(MetaGenerator),
        Box::new(MistralGenerator),
        Box::new(CohereGenerator),
        Box::new(StabilityGenerator),
        Box::new(OpenAiGenerator),
        Box::new(GroqGenerator),
        Box::new(SambanovaGenerator),
        Box::new(DeepSeekGenerator),
    ]
}

/// Build the catalog into a fresh registry with no overrides.
pub fn build_catalog() -> Result<Catalog, CatalogError> {
    let mut registry = ModelRegistry::new();
    build_catalog_with(&mut registry)
}

/// Build the catalog into a caller-supplied registry.
///
/// The caller controls overrides and isolation (tests pass a fresh instance).
/// Runs every generator in declaration order, then derives the provider and
/// category groups from the flat list. Running this twice against the same
/// registry fails with a duplicate-id error — generation is a single linear
/// pass with no partial-failure recovery.
pub fn build_catalog_with(registry: &mut ModelRegistry) -> Result<Catalog, CatalogError> {
    for generator in generators() {
        let before = registry.len();
        generator.generate_models(registry)?;
        tracing::debug!(
            provider = %generator.provider(),
            added = registry.len() - before,
            "registered provider models"
        );
    }

    let models = registry.get_all().to_vec();
    let mut groups = groups_by_provider(&models);
    groups.extend(groups_by_category(&models));
    tracing::info!(
        models = models.len(),
        groups = groups.len(),
        "model catalog built"
    );
    Ok(Catalog::new(models, groups))
}

static GLOBAL: Lazy<Catalog> = Lazy::new(|| {
    let overrides = override_config::load_default()
        .unwrap_or_else(|e| panic!("model catalog overrides failed to load: {e}"));
    let mut registry = ModelRegistry::with_overrides(overrides);
    build_catalog_with(&mut registry)
        .unwrap_or_else(|e| panic!("model catalog construction failed: {e}"))
});

/// The process-wide catalog, built once on first access.
///
/// Overrides are discovered from the environment (`override_config`). The
/// catalog is static configuration: a failure here panics and prevents the
/// application from starting, like a malformed config file would. Tests
/// should build their own registry via [`build_catalog_with`] instead.
pub fn global() -> &'static Catalog {
    &GLOBAL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_order_is_stable() {
        let order: Vec<String> = generators().iter().map(|g| g.provider().to_string()).collect();
        assert_eq!(order[0], "amazon");
        assert_eq!(order[order.len() - 1], "deepseek");
        assert_eq!(order.len(), 10);
    }

    #[test]
    fn rebuilding_into_the_same_registry_is_a_duplicate_error() {
        let mut registry = ModelRegistry::new();
        build_catalog_with(&mut registry).unwrap();
        let count = registry.len();
        let err = build_catalog_with(&mut registry).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { .. }));
        // The failed pass must not have grown the registry past the first
        // duplicate; the original entries are untouched.
        assert_eq!(registry.get_all().len(), count);
    }
}
