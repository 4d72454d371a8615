//! The provider generator seam.

use model_desc_core::Provider;

use crate::error::CatalogError;
use crate::registry::ModelRegistry;

/// Constructs the descriptors for one provider and registers them.
///
/// Implemented by the independent modules under [`crate::providers`]; shared
/// parameter defaults live in [`crate::defaults`] as free functions rather
/// than on this trait. A generator does not catch [`CatalogError`]: a
/// duplicate id or validation failure is a build-time configuration defect
/// that must abort catalog construction. Calling `generate_models` twice
/// against the same registry fails for the same reason.
pub trait ModelGenerator {
    /// The provider this generator covers.
    fn provider(&self) -> Provider;

    /// Build and register this provider's descriptors.
    fn generate_models(&self, registry: &mut ModelRegistry) -> Result<(), CatalogError>;
}
