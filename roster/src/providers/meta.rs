//! Meta Llama instruction-tuned models.

use model_desc_core::{
    Modality, ModelCategory, ModelDescriptor, ModelFeatures, ModelPricing, ModelStatus, ModelTier,
    Provider, TextFeatures, ValidationError,
};

use crate::defaults::text_model_parameters;
use crate::error::CatalogError;
use crate::generator::ModelGenerator;
use crate::registry::ModelRegistry;

const LLAMA_DOCS: &str = "https://www.llama.com/docs/overview/";

/// Generates descriptors for Meta's Llama models.
pub struct MetaGenerator;

impl ModelGenerator for MetaGenerator {
    fn provider(&self) -> Provider {
        Provider::Meta
    }

    fn generate_models(&self, registry: &mut ModelRegistry) -> Result<(), CatalogError> {
        for descriptor in descriptors()? {
            registry.register(descriptor)?;
        }
        Ok(())
    }
}

fn llama_features() -> ModelFeatures {
    ModelFeatures::Text(TextFeatures {
        multilingual: true,
        supported_languages: vec![
            "en".into(),
            "de".into(),
            "fr".into(),
            "it".into(),
            "pt".into(),
            "hi".into(),
            "es".into(),
            "th".into(),
        ],
        tool_use: true,
        ..TextFeatures::default()
    })
}

fn descriptors() -> Result<Vec<ModelDescriptor>, ValidationError> {
    Ok(vec![
        ModelDescriptor::builder(
            "meta.llama3-8b-instruct-v1:0",
            "Llama 3 8B Instruct",
            Provider::Meta,
        )
        .version("3.0")
        .categories([ModelCategory::Chat, ModelCategory::TextGeneration])
        .tier(ModelTier::Basic)
        .capabilities(["Instruction following", "Summarization"])
        .input_modalities([Modality::Text])
        .output_modalities([Modality::Text])
        .max_input_tokens(8_192)
        .max_output_tokens(2_048)
        .streaming(true)
        .regions(["us-east-1", "us-west-2"])
        .parameters(text_model_parameters(2_048))
        .features(llama_features())
        .recommended_for(["Lightweight assistants", "Classification"])
        .status(ModelStatus::Stable)
        .last_updated("2024-04-18")
        .pricing(ModelPricing::per_tokens(0.0003, 0.0006))
        .documentation_url(LLAMA_DOCS)
        .build()?,
        ModelDescriptor::builder(
            "meta.llama3-70b-instruct-v1:0",
            "Llama 3 70B Instruct",
            Provider::Meta,
        )
        .version("3.0")
        .categories([ModelCategory::Chat, ModelCategory::TextGeneration])
        .tier(ModelTier::Standard)
        .capabilities(["Instruction following", "Reasoning", "Code assistance"])
        .input_modalities([Modality::Text])
        .output_modalities([Modality::Text])
        .max_input_tokens(8_192)
        .max_output_tokens(2_048)
        .streaming(true)
        .regions(["us-east-1", "us-west-2"])
        .parameters(text_model_parameters(2_048))
        .features(llama_features())
        .recommended_for(["General chat", "Content generation"])
        .status(ModelStatus::Stable)
        .last_updated("2024-04-18")
        .pricing(ModelPricing::per_tokens(0.00265, 0.0035))
        .documentation_url(LLAMA_DOCS)
        .build()?,
        ModelDescriptor::builder(
            "meta.llama3-1-70b-instruct-v1:0",
            "Llama 3.1 70B Instruct",
            Provider::Meta,
        )
        .version("3.1")
        .categories([ModelCategory::Chat, ModelCategory::TextGeneration])
        .tier(ModelTier::Standard)
        .capabilities(["Long-context chat", "Tool use", "Multilingual generation"])
        .input_modalities([Modality::Text])
        .output_modalities([Modality::Text])
        .max_input_tokens(128_000)
        .max_output_tokens(4_096)
        .streaming(true)
        .regions(["us-east-1", "us-west-2"])
        .parameters(text_model_parameters(4_096))
        .features(llama_features())
        .recommended_for(["Long-document Q&A", "Agents with tools"])
        .status(ModelStatus::Stable)
        .last_updated("2024-07-23")
        .pricing(ModelPricing::per_tokens(0.00099, 0.00099))
        .documentation_url(LLAMA_DOCS)
        .build()?,
        ModelDescriptor::builder(
            "meta.llama3-1-405b-instruct-v1:0",
            "Llama 3.1 405B Instruct",
            Provider::Meta,
        )
        .version("3.1")
        .categories([ModelCategory::Chat, ModelCategory::TextGeneration])
        .tier(ModelTier::Premium)
        .capabilities(["Frontier open-weights reasoning", "Tool use", "Synthetic data"])
        .input_modalities([Modality::Text])
        .output_modalities([Modality::Text])
        .max_input_tokens(128_000)
        .max_output_tokens(4_096)
        .streaming(true)
        .regions(["us-west-2"])
        .parameters(text_model_parameters(4_096))
        .features(llama_features())
        .recommended_for(["Hard reasoning", "Distillation source"])
        .not_recommended_for(["Cost-sensitive workloads"])
        .status(ModelStatus::Stable)
        .last_updated("2024-07-23")
        .pricing(ModelPricing::per_tokens(0.00532, 0.016))
        .documentation_url(LLAMA_DOCS)
        .build()?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_descriptors_build_and_belong_to_meta() {
        let models = descriptors().unwrap();
        assert_eq!(models.len(), 4);
        assert!(models.iter().all(|m| m.provider == Provider::Meta));
        assert!(models.iter().all(|m| m.id.starts_with("meta.llama3")));
    }

    #[test]
    fn llama_3_1_models_carry_the_long_context_window() {
        let models = descriptors().unwrap();
        for model in models.iter().filter(|m| m.version == "3.1") {
            assert_eq!(model.max_input_tokens, Some(128_000));
        }
    }
}
