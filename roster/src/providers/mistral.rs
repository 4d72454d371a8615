//! Mistral AI models.

use model_desc_core::{
    Modality, ModelCategory, ModelDescriptor, ModelFeatures, ModelPricing, ModelStatus, ModelTier,
    Provider, TextFeatures, ValidationError,
};

use crate::defaults::text_model_parameters;
use crate::error::CatalogError;
use crate::generator::ModelGenerator;
use crate::registry::ModelRegistry;

const MISTRAL_DOCS: &str = "https://docs.mistral.ai/getting-started/models/";

/// Generates descriptors for Mistral AI's models.
pub struct MistralGenerator;

impl ModelGenerator for MistralGenerator {
    fn provider(&self) -> Provider {
        Provider::Mistral
    }

    fn generate_models(&self, registry: &mut ModelRegistry) -> Result<(), CatalogError> {
        for descriptor in descriptors()? {
            registry.register(descriptor)?;
        }
        Ok(())
    }
}

fn descriptors() -> Result<Vec<ModelDescriptor>, ValidationError> {
    Ok(vec![
        ModelDescriptor::builder(
            "mistral.mistral-7b-instruct-v0:2",
            "Mistral 7B Instruct",
            Provider::Mistral,
        )
        .version("0.2")
        .categories([ModelCategory::Chat, ModelCategory::TextGeneration])
        .tier(ModelTier::Free)
        .capabilities(["Instruction following", "Summarization"])
        .input_modalities([Modality::Text])
        .output_modalities([Modality::Text])
        .max_input_tokens(32_000)
        .max_output_tokens(8_192)
        .streaming(true)
        .regions(["us-east-1", "us-west-2", "eu-central-1"])
        .parameters(text_model_parameters(8_192))
        .features(ModelFeatures::Text(TextFeatures::default()))
        .recommended_for(["Prototyping", "Simple chat"])
        .status(ModelStatus::Stable)
        .last_updated("2024-03-01")
        .pricing(ModelPricing::per_tokens(0.00015, 0.0002))
        .documentation_url(MISTRAL_DOCS)
        .build()?,
        ModelDescriptor::builder(
            "mistral.mixtral-8x7b-instruct-v0:1",
            "Mixtral 8x7B Instruct",
            Provider::Mistral,
        )
        .version("0.1")
        .categories([ModelCategory::Chat, ModelCategory::TextGeneration])
        .tier(ModelTier::Basic)
        .capabilities(["Sparse mixture-of-experts generation", "Multilingual chat"])
        .input_modalities([Modality::Text])
        .output_modalities([Modality::Text])
        .max_input_tokens(32_000)
        .max_output_tokens(4_096)
        .streaming(true)
        .regions(["us-east-1", "us-west-2", "eu-central-1"])
        .parameters(text_model_parameters(4_096))
        .features(ModelFeatures::Text(TextFeatures {
            multilingual: true,
            supported_languages: vec![
                "en".into(),
                "fr".into(),
                "de".into(),
                "es".into(),
                "it".into(),
            ],
            ..TextFeatures::default()
        }))
        .recommended_for(["Multilingual chat", "Throughput-sensitive generation"])
        .status(ModelStatus::Stable)
        .last_updated("2024-03-01")
        .pricing(ModelPricing::per_tokens(0.00045, 0.0007))
        .documentation_url(MISTRAL_DOCS)
        .build()?,
        ModelDescriptor::builder(
            "mistral.mistral-large-2402-v1:0",
            "Mistral Large (24.02)",
            Provider::Mistral,
        )
        .version("24.02")
        .categories([ModelCategory::Chat, ModelCategory::Code])
        .tier(ModelTier::Premium)
        .capabilities(["Complex reasoning", "Function calling", "Code generation"])
        .input_modalities([Modality::Text])
        .output_modalities([Modality::Text])
        .max_input_tokens(32_000)
        .max_output_tokens(8_192)
        .streaming(true)
        .regions(["us-east-1", "us-west-2", "eu-central-1"])
        .parameters(text_model_parameters(8_192))
        .features(ModelFeatures::Text(TextFeatures {
            multilingual: true,
            tool_use: true,
            ..TextFeatures::default()
        }))
        .recommended_for(["Function-calling agents", "Code assistance"])
        .status(ModelStatus::Stable)
        .last_updated("2024-02-26")
        .pricing(ModelPricing::per_tokens(0.004, 0.012))
        .documentation_url(MISTRAL_DOCS)
        .build()?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_descriptors_build_and_belong_to_mistral() {
        let models = descriptors().unwrap();
        assert_eq!(models.len(), 3);
        assert!(models.iter().all(|m| m.provider == Provider::Mistral));
        assert!(models.iter().all(|m| m.id.starts_with("mistral.")));
    }

    #[test]
    fn context_windows_are_uniform() {
        for model in descriptors().unwrap() {
            assert_eq!(model.max_input_tokens, Some(32_000));
        }
    }
}
