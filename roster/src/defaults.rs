//! Canned parameter contracts shared across provider generators.
//!
//! These exist so dozens of descriptors do not repeat the same default/limit
//! literals. Providers that deviate (e.g. a model with a fixed temperature)
//! construct [`ModelParameters`] directly instead.

use model_desc_core::{IntRange, ModelParameters, ParameterRange};

/// Output-token default used when a model's maximum allows it.
const DEFAULT_OUTPUT_TOKENS: u32 = 2048;

/// Parameter contract for the common text/chat model archetype.
///
/// `max_output_tokens` becomes the `max_tokens` upper bound; the default is
/// capped at 2048 so UI sliders start at a sane value on large-output models.
pub fn text_model_parameters(max_output_tokens: u32) -> ModelParameters {
    ModelParameters {
        temperature: Some(ParameterRange::new(0.0, 0.7, 1.0)),
        top_p: Some(ParameterRange::new(0.0, 0.9, 1.0)),
        top_k: Some(IntRange::new(0, 50, 500)),
        max_tokens: Some(IntRange::new(
            1,
            max_output_tokens.min(DEFAULT_OUTPUT_TOKENS),
            max_output_tokens,
        )),
        cfg_scale: None,
        stop_sequences_max: Some(4),
    }
}

/// Parameter contract for the common image generation model archetype.
pub fn image_model_parameters() -> ModelParameters {
    ModelParameters {
        temperature: None,
        top_p: None,
        top_k: None,
        max_tokens: None,
        cfg_scale: Some(ParameterRange::new(1.1, 8.0, 10.0)),
        stop_sequences_max: None,
    }
}

/// Embedding models accept no generation parameters.
pub fn embedding_parameters() -> ModelParameters {
    ModelParameters::none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_defaults_validate() {
        assert!(text_model_parameters(8192).validate().is_ok());
    }

    #[test]
    fn text_defaults_cap_the_default_not_the_max() {
        let params = text_model_parameters(65_536);
        let max_tokens = params.max_tokens.unwrap();
        assert_eq!(max_tokens.default, 2048);
        assert_eq!(max_tokens.max, 65_536);
    }

    #[test]
    fn small_output_budget_lowers_the_default() {
        let max_tokens = text_model_parameters(512).max_tokens.unwrap();
        assert_eq!(max_tokens.default, 512);
        assert_eq!(max_tokens.max, 512);
    }

    #[test]
    fn image_defaults_validate_and_carry_no_token_params() {
        let params = image_model_parameters();
        assert!(params.validate().is_ok());
        assert!(params.max_tokens.is_none());
        assert!(params.cfg_scale.is_some());
    }

    #[test]
    fn embedding_defaults_are_empty() {
        assert_eq!(embedding_parameters(), ModelParameters::none());
    }
}
