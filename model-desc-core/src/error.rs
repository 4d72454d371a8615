//! Descriptor validation errors.

use thiserror::Error;

/// A descriptor failed the construction invariants.
///
/// Validation failures are build-time configuration defects; nothing in the
/// catalog subsystem catches or retries them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field was not set (or set to an empty string).
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    /// A list field that must carry at least one entry was empty.
    #[error("`{field}` must not be empty")]
    EmptyList { field: &'static str },

    /// A bounded parameter violates `min <= default <= max`.
    #[error("parameter `{parameter}` violates min <= default <= max ({min} <= {default} <= {max})")]
    InvalidRange {
        parameter: String,
        min: f64,
        default: f64,
        max: f64,
    },
}
