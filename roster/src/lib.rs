//! # Roster
//!
//! A typed model catalog: one immutable [`ModelDescriptor`] per hosted model,
//! registered by per-provider generators into a [`ModelRegistry`] and exposed
//! as a read-only [`Catalog`] with derived provider/category groups.
//!
//! ## Design principles
//!
//! - **Explicit registry instance**: there is no module-level mutable
//!   registry. Production builds one catalog per process via [`global`];
//!   tests construct and discard fresh [`ModelRegistry`] instances.
//! - **Single linear build pass**: [`build_catalog`] runs every generator in
//!   declaration order, synchronously, with no I/O and no partial-failure
//!   recovery. A validation or duplicate-id failure aborts construction —
//!   the catalog is static configuration.
//! - **Lookup misses are not errors**: [`Catalog::get`] and the registry
//!   lookups return `Option`/empty vectors; only registration can fail.
//!
//! ## Main modules
//!
//! - [`registry`]: [`ModelRegistry`] — insertion-ordered id → descriptor map.
//! - [`generator`]: the [`ModelGenerator`] seam implemented per provider.
//! - [`providers`]: one module per provider (Amazon, Anthropic, Meta, ...).
//! - [`defaults`]: shared parameter-contract archetypes.
//! - [`builder`]: [`build_catalog`], [`build_catalog_with`], [`global`].
//! - [`group`]: derived [`ModelGroup`] views.
//!
//! Descriptor types live in the `model-desc-core` crate and are re-exported
//! at this crate's root.
//!
//! ## Quick start
//!
//! ```rust
//! use roster::{build_catalog, ModelCategory, Provider};
//!
//! let catalog = build_catalog().expect("builtin catalog is valid");
//! let chat = catalog.models_by_category(ModelCategory::Chat);
//! assert!(!chat.is_empty());
//!
//! let claude = catalog.models_by_provider(Provider::Anthropic);
//! assert!(claude.iter().all(|m| m.provider == Provider::Anthropic));
//! ```

pub mod builder;
pub mod catalog;
pub mod defaults;
pub mod error;
pub mod generator;
pub mod group;
pub mod providers;
pub mod registry;

pub use builder::{build_catalog, build_catalog_with, global};
pub use catalog::Catalog;
pub use error::CatalogError;
pub use generator::ModelGenerator;
pub use group::{groups_by_category, groups_by_provider, ModelGroup};
pub use registry::ModelRegistry;

pub use model_desc_core::{
    CatalogOverrides, DescriptorBuilder, EmbeddingFeatures, ImageFeatures, IntRange, Modality,
    ModelCategory, ModelDescriptor, ModelFeatures, ModelParameters, ModelPricing, ModelStatus,
    ModelTier, MultimodalFeatures, ParameterOverride, ParameterRange, Provider, TextFeatures,
    UnknownProvider, UseCases, ValidationError,
};

use std::sync::Arc;

/// All models in the process-wide catalog, in catalog order.
pub fn all_models() -> &'static [Arc<ModelDescriptor>] {
    global().models()
}

/// Process-wide catalog models from one provider.
pub fn models_by_provider(provider: Provider) -> Vec<Arc<ModelDescriptor>> {
    global().models_by_provider(provider)
}

/// Process-wide catalog models carrying a category tag.
pub fn models_by_category(category: ModelCategory) -> Vec<Arc<ModelDescriptor>> {
    global().models_by_category(category)
}

/// Derived groups of the process-wide catalog.
pub fn model_groups() -> &'static [ModelGroup] {
    global().groups()
}

/// When running `cargo test -p roster`, initializes tracing from `RUST_LOG` so
/// that unit tests in `src/**` can print logs with `--nocapture`.
#[cfg(test)]
mod test_logging {
    use ctor::ctor;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::Layer;

    #[ctor]
    fn init() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_filter(filter),
            )
            .try_init();
    }
}
