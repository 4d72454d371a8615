//! Shared model descriptor types for the Roster catalog.
//!
//! One [`ModelDescriptor`] describes one addressable hosted model: identity,
//! classification, capabilities, parameter contract, feature flags, and
//! lifecycle metadata. Descriptors are immutable once built; construction goes
//! through [`DescriptorBuilder`], which enforces the required-field and
//! parameter-range invariants and fails with a [`ValidationError`] otherwise.
//!
//! This crate carries no registry or construction logic — only the data
//! contract shared by the `roster` and `config` crates.

mod descriptor;
mod error;
mod features;
mod overrides;
mod parameters;
mod provider;
mod taxonomy;

pub use descriptor::{DescriptorBuilder, ModelDescriptor, ModelPricing, UseCases};
pub use error::ValidationError;
pub use features::{
    EmbeddingFeatures, ImageFeatures, ModelFeatures, MultimodalFeatures, TextFeatures,
};
pub use overrides::{CatalogOverrides, ParameterOverride};
pub use parameters::{IntRange, ModelParameters, ParameterRange};
pub use provider::{Provider, UnknownProvider};
pub use taxonomy::{Modality, ModelCategory, ModelStatus, ModelTier};
