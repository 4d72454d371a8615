//! Models served on the SambaNova Cloud connector.

use model_desc_core::{
    Modality, ModelCategory, ModelDescriptor, ModelFeatures, ModelPricing, ModelStatus, ModelTier,
    Provider, TextFeatures, ValidationError,
};

use crate::defaults::text_model_parameters;
use crate::error::CatalogError;
use crate::generator::ModelGenerator;
use crate::registry::ModelRegistry;

const SAMBANOVA_DOCS: &str = "https://docs.sambanova.ai/cloud/docs/get-started/supported-models";

/// Generates descriptors for models hosted by SambaNova.
pub struct SambanovaGenerator;

impl ModelGenerator for SambanovaGenerator {
    fn provider(&self) -> Provider {
        Provider::Sambanova
    }

    fn generate_models(&self, registry: &mut ModelRegistry) -> Result<(), CatalogError> {
        for descriptor in descriptors()? {
            registry.register(descriptor)?;
        }
        Ok(())
    }
}

fn sambanova_llama(
    id: &str,
    name: &str,
    tier: ModelTier,
    input_rate: f64,
    output_rate: f64,
) -> Result<ModelDescriptor, ValidationError> {
    ModelDescriptor::builder(id, name, Provider::Sambanova)
        .version("3.1")
        .categories([ModelCategory::Chat, ModelCategory::TextGeneration])
        .tier(tier)
        .capabilities(["High-throughput inference", "Instruction following"])
        .input_modalities([Modality::Text])
        .output_modalities([Modality::Text])
        .max_input_tokens(16_000)
        .max_output_tokens(4_096)
        .streaming(true)
        .regions(["global"])
        .parameters(text_model_parameters(4_096))
        .features(ModelFeatures::Text(TextFeatures {
            multilingual: true,
            ..TextFeatures::default()
        }))
        .recommended_for(["Fast chat", "Batch generation"])
        .status(ModelStatus::Stable)
        .last_updated("2024-09-10")
        .pricing(ModelPricing::per_tokens(input_rate, output_rate))
        .documentation_url(SAMBANOVA_DOCS)
        .build()
}

fn descriptors() -> Result<Vec<ModelDescriptor>, ValidationError> {
    Ok(vec![
        sambanova_llama(
            "Meta-Llama-3.1-8B-Instruct",
            "Llama 3.1 8B Instruct (SambaNova)",
            ModelTier::Free,
            0.0001,
            0.0002,
        )?,
        sambanova_llama(
            "Meta-Llama-3.1-70B-Instruct",
            "Llama 3.1 70B Instruct (SambaNova)",
            ModelTier::Standard,
            0.0006,
            0.0012,
        )?,
        sambanova_llama(
            "Meta-Llama-3.1-405B-Instruct",
            "Llama 3.1 405B Instruct (SambaNova)",
            ModelTier::Premium,
            0.005,
            0.01,
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_descriptors_build_and_belong_to_sambanova() {
        let models = descriptors().unwrap();
        assert_eq!(models.len(), 3);
        assert!(models.iter().all(|m| m.provider == Provider::Sambanova));
        assert!(models.iter().all(|m| m.id.starts_with("Meta-Llama-3.1-")));
    }

    #[test]
    fn tiers_scale_with_model_size() {
        let models = descriptors().unwrap();
        assert_eq!(models[0].tier, ModelTier::Free);
        assert_eq!(models[2].tier, ModelTier::Premium);
    }
}
