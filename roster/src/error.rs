//! Catalog construction errors.
//!
//! Both variants are fatal build-time defects: nothing in this subsystem
//! catches or retries them, and a failure during catalog construction aborts
//! application startup the same way a malformed config file would. Lookup
//! misses are never errors — they are `Option`/empty results.

use model_desc_core::ValidationError;
use thiserror::Error;

/// A failure while registering descriptors or building the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A descriptor failed the construction invariants.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Two registrations share an id (or an alias collides with the id/alias
    /// namespace).
    #[error("duplicate model id: {id}")]
    DuplicateId { id: String },
}
