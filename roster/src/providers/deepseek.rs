//! DeepSeek models.

use model_desc_core::{
    Modality, ModelCategory, ModelDescriptor, ModelFeatures, ModelPricing, ModelStatus, ModelTier,
    Provider, TextFeatures, ValidationError,
};

use crate::defaults::text_model_parameters;
use crate::error::CatalogError;
use crate::generator::ModelGenerator;
use crate::registry::ModelRegistry;

const DEEPSEEK_DOCS: &str = "https://api-docs.deepseek.com/quick_start/pricing";

/// Generates descriptors for DeepSeek's models.
pub struct DeepSeekGenerator;

impl ModelGenerator for DeepSeekGenerator {
    fn provider(&self) -> Provider {
        Provider::DeepSeek
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
        ModelDescriptor::builder("deepseek-chat", "DeepSeek-V3", Provider::DeepSeek)
            .version("3")
            .categories([ModelCategory::Chat, ModelCategory::Code])
            .tier(ModelTier::Basic)
            .capabilities(["General chat", "Code generation", "Tool use"])
            .input_modalities([Modality::Text])
            .output_modalities([Modality::Text])
            .max_input_tokens(64_000)
            .max_output_tokens(8_192)
            .streaming(true)
            .regions(["global"])
            .parameters(text_model_parameters(8_192))
            .features(ModelFeatures::Text(TextFeatures {
                multilingual: true,
                supported_languages: vec!["en".into(), "zh".into()],
                tool_use: true,
                ..TextFeatures::default()
            }))
            .recommended_for(["Cost-efficient chat", "Code assistance"])
            .status(ModelStatus::Stable)
            .last_updated("2024-12-26")
            .pricing(ModelPricing::per_tokens(0.00014, 0.00028))
            .documentation_url(DEEPSEEK_DOCS)
            .build()?,
        ModelDescriptor::builder("deepseek-reasoner", "DeepSeek-R1", Provider::DeepSeek)
            .version("1")
            .categories([ModelCategory::Chat, ModelCategory::Code])
            .tier(ModelTier::Standard)
            .capabilities(["Chain-of-thought reasoning", "Math", "Code generation"])
            .input_modalities([Modality::Text])
            .output_modalities([Modality::Text])
            .max_input_tokens(64_000)
            .max_output_tokens(8_192)
            .streaming(true)
            .regions(["global"])
            .parameters(text_model_parameters(8_192))
            .features(ModelFeatures::Text(TextFeatures {
                multilingual: true,
                supported_languages: vec!["en".into(), "zh".into()],
                ..TextFeatures::default()
            }))
            .recommended_for(["Math and logic problems", "Hard code tasks"])
            .not_recommended_for(["Latency-sensitive chat"])
            .status(ModelStatus::Stable)
            .last_updated("2025-01-20")
            .pricing(ModelPricing::per_tokens(0.00055, 0.00219))
            .documentation_url(DEEPSEEK_DOCS)
            .aliases(["deepseek-r1"])
            .build()?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_descriptors_build_and_belong_to_deepseek() {
        let models = descriptors().unwrap();
        assert_eq!(models.len(), 2);
        assert!(models.iter().all(|m| m.provider == Provider::DeepSeek));
    }

    #[test]
    fn reasoner_answers_to_its_alias() {
        let models = descriptors().unwrap();
        let reasoner = models.iter().find(|m| m.id == "deepseek-reasoner").unwrap();
        assert!(reasoner.answers_to("deepseek-R1"));
    }
}
