//! Anthropic Claude models.

use model_desc_core::{
    Modality, ModelCategory, ModelDescriptor, ModelFeatures, ModelPricing, ModelStatus, ModelTier,
    MultimodalFeatures, Provider, ValidationError,
};

use crate::defaults::text_model_parameters;
use crate::error::CatalogError;
use crate::generator::ModelGenerator;
use crate::registry::ModelRegistry;

const CLAUDE_DOCS: &str = "https://docs.anthropic.com/en/docs/about-claude/models";

/// Generates descriptors for Anthropic's Claude models.
pub struct AnthropicGenerator;

impl ModelGenerator for AnthropicGenerator {
    fn provider(&self) -> Provider {
        Provider::Anthropic
    }

    fn generate_models(&self, registry: &mut ModelRegistry) -> Result<(), CatalogError> {
        for descriptor in descriptors()? {
            registry.register(descriptor)?;
        }
        Ok(())
    }
}

/// All Claude 3.x models share the multimodal chat shape; only limits, tier,
/// and pricing differ.
fn claude_features() -> ModelFeatures {
    ModelFeatures::Multimodal(MultimodalFeatures {
        image_analysis: true,
        document_analysis: true,
        tool_use: true,
        ..MultimodalFeatures::default()
    })
}

fn descriptors() -> Result<Vec<ModelDescriptor>, ValidationError> {
    Ok(vec![
        ModelDescriptor::builder(
            "anthropic.claude-3-haiku-20240307-v1:0",
            "Claude 3 Haiku",
            Provider::Anthropic,
        )
        .version("3.0")
        .categories([ModelCategory::Chat, ModelCategory::Multimodal])
        .tier(ModelTier::Basic)
        .capabilities(["Fast chat", "Vision", "Tool use"])
        .input_modalities([Modality::Text, Modality::Image])
        .output_modalities([Modality::Text])
        .max_input_tokens(200_000)
        .max_output_tokens(4_096)
        .streaming(true)
        .regions(["us-east-1", "us-west-2", "eu-central-1", "ap-southeast-2"])
        .parameters(text_model_parameters(4_096))
        .features(claude_features())
        .recommended_for(["High-volume chat", "Moderation", "Quick summaries"])
        .not_recommended_for(["Deep multi-step reasoning"])
        .status(ModelStatus::Stable)
        .last_updated("2024-03-07")
        .pricing(ModelPricing::per_tokens(0.00025, 0.00125))
        .documentation_url(CLAUDE_DOCS)
        .compliance(["soc2", "hipaa"])
        .aliases(["claude-haiku"])
        .build()?,
        ModelDescriptor::builder(
            "anthropic.claude-3-sonnet-20240229-v1:0",
            "Claude 3 Sonnet",
            Provider::Anthropic,
        )
        .version("3.0")
        .categories([ModelCategory::Chat, ModelCategory::Multimodal])
        .tier(ModelTier::Standard)
        .capabilities(["Balanced chat", "Vision", "Tool use"])
        .input_modalities([Modality::Text, Modality::Image])
        .output_modalities([Modality::Text])
        .max_input_tokens(200_000)
        .max_output_tokens(4_096)
        .streaming(true)
        .regions(["us-east-1", "us-west-2", "eu-central-1"])
        .parameters(text_model_parameters(4_096))
        .features(claude_features())
        .recommended_for(["General assistants", "Document analysis"])
        .status(ModelStatus::Stable)
        .last_updated("2024-02-29")
        .pricing(ModelPricing::per_tokens(0.003, 0.015))
        .documentation_url(CLAUDE_DOCS)
        .compliance(["soc2", "hipaa"])
        .build()?,
        ModelDescriptor::builder(
            "anthropic.claude-3-5-sonnet-20240620-v1:0",
            "Claude 3.5 Sonnet",
            Provider::Anthropic,
        )
        .version("3.5")
        .categories([ModelCategory::Chat, ModelCategory::Multimodal, ModelCategory::Code])
        .tier(ModelTier::Premium)
        .capabilities(["Advanced reasoning", "Vision", "Code generation", "Tool use"])
        .input_modalities([Modality::Text, Modality::Image])
        .output_modalities([Modality::Text])
        .max_input_tokens(200_000)
        .max_output_tokens(8_192)
        .streaming(true)
        .regions(["us-east-1", "us-west-2", "eu-central-1", "ap-southeast-2"])
        .parameters(text_model_parameters(8_192))
        .features(claude_features())
        .recommended_for(["Coding assistants", "Complex analysis", "Agentic workflows"])
        .status(ModelStatus::Stable)
        .last_updated("2024-06-20")
        .pricing(ModelPricing::per_tokens(0.003, 0.015))
        .documentation_url(CLAUDE_DOCS)
        .compliance(["soc2", "hipaa"])
        .aliases(["claude-3.5-sonnet"])
        .build()?,
        ModelDescriptor::builder(
            "anthropic.claude-3-opus-20240229-v1:0",
            "Claude 3 Opus",
            Provider::Anthropic,
        )
        .version("3.0")
        .categories([ModelCategory::Chat, ModelCategory::Multimodal])
        .tier(ModelTier::Enterprise)
        .capabilities(["Strongest reasoning", "Vision", "Tool use"])
        .input_modalities([Modality::Text, Modality::Image])
        .output_modalities([Modality::Text])
        .max_input_tokens(200_000)
        .max_output_tokens(4_096)
        .streaming(true)
        .regions(["us-east-1", "us-west-2"])
        .parameters(text_model_parameters(4_096))
        .features(claude_features())
        .recommended_for(["Research analysis", "High-stakes drafting"])
        .not_recommended_for(["Latency-sensitive chat"])
        .status(ModelStatus::Stable)
        .last_updated("2024-02-29")
        .pricing(ModelPricing::per_tokens(0.015, 0.075))
        .documentation_url(CLAUDE_DOCS)
        .compliance(["soc2", "hipaa"])
        .build()?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_descriptors_build_and_belong_to_anthropic() {
        let models = descriptors().unwrap();
        assert_eq!(models.len(), 4);
        assert!(models.iter().all(|m| m.provider == Provider::Anthropic));
        assert!(models.iter().all(|m| m.id.starts_with("anthropic.claude-")));
    }

    #[test]
    fn every_claude_accepts_images_and_streams() {
        for model in descriptors().unwrap() {
            assert!(model.input_modalities.contains(&Modality::Image));
            assert!(model.streaming);
            assert_eq!(model.max_input_tokens, Some(200_000));
        }
    }
}
