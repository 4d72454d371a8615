//! OpenAI models, reached through the OpenAI API connector.

use model_desc_core::{
    EmbeddingFeatures, ImageFeatures, Modality, ModelCategory, ModelDescriptor, ModelFeatures,
    ModelPricing, ModelStatus, ModelTier, MultimodalFeatures, Provider, ValidationError,
};

use crate::defaults::{embedding_parameters, image_model_parameters, text_model_parameters};
use crate::error::CatalogError;
use crate::generator::ModelGenerator;
use crate::registry::ModelRegistry;

const OPENAI_DOCS: &str = "https://platform.openai.com/docs/models";

/// Generates descriptors for OpenAI's models.
pub struct OpenAiGenerator;

impl ModelGenerator for OpenAiGenerator {
    fn provider(&self) -> Provider {
        Provider::OpenAi
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
        ModelDescriptor::builder("gpt-4o", "GPT-4o", Provider::OpenAi)
            .version("2024-05-13")
            .categories([ModelCategory::Chat, ModelCategory::Multimodal])
            .tier(ModelTier::Premium)
            .capabilities(["Omni-modal chat", "Vision", "Tool use"])
            .input_modalities([Modality::Text, Modality::Image, Modality::Audio])
            .output_modalities([Modality::Text])
            .max_input_tokens(128_000)
            .max_output_tokens(16_384)
            .streaming(true)
            .regions(["global"])
            .parameters(text_model_parameters(16_384))
            .features(ModelFeatures::Multimodal(MultimodalFeatures {
                image_analysis: true,
                document_analysis: true,
                tool_use: true,
                ..MultimodalFeatures::default()
            }))
            .recommended_for(["General assistants", "Vision workflows"])
            .status(ModelStatus::Stable)
            .last_updated("2024-05-13")
            .pricing(ModelPricing::per_tokens(0.0025, 0.01))
            .documentation_url(OPENAI_DOCS)
            .aliases(["gpt4o"])
            .build()?,
        ModelDescriptor::builder("gpt-4o-mini", "GPT-4o mini", Provider::OpenAi)
            .version("2024-07-18")
            .categories([ModelCategory::Chat, ModelCategory::Multimodal])
            .tier(ModelTier::Basic)
            .capabilities(["Fast multimodal chat", "Tool use"])
            .input_modalities([Modality::Text, Modality::Image])
            .output_modalities([Modality::Text])
            .max_input_tokens(128_000)
            .max_output_tokens(16_384)
            .streaming(true)
            .regions(["global"])
            .parameters(text_model_parameters(16_384))
            .features(ModelFeatures::Multimodal(MultimodalFeatures {
                image_analysis: true,
                tool_use: true,
                ..MultimodalFeatures::default()
            }))
            .recommended_for(["High-volume chat", "Cost-sensitive pipelines"])
            .status(ModelStatus::Stable)
            .last_updated("2024-07-18")
            .pricing(ModelPricing::per_tokens(0.00015, 0.0006))
            .documentation_url(OPENAI_DOCS)
            .build()?,
        ModelDescriptor::builder("gpt-4-turbo", "GPT-4 Turbo", Provider::OpenAi)
            .version("2024-04-09")
            .categories([ModelCategory::Chat, ModelCategory::Code])
            .tier(ModelTier::Premium)
            .capabilities(["Long-context chat", "Code generation", "Tool use"])
            .input_modalities([Modality::Text, Modality::Image])
            .output_modalities([Modality::Text])
            .max_input_tokens(128_000)
            .max_output_tokens(4_096)
            .streaming(true)
            .regions(["global"])
            .parameters(text_model_parameters(4_096))
            .features(ModelFeatures::Multimodal(MultimodalFeatures {
                image_analysis: true,
                tool_use: true,
                ..MultimodalFeatures::default()
            }))
            .recommended_for(["Code assistance", "Structured extraction"])
            .status(ModelStatus::Stable)
            .last_updated("2024-04-09")
            .pricing(ModelPricing::per_tokens(0.01, 0.03))
            .documentation_url(OPENAI_DOCS)
            .build()?,
        // Registered exactly once; a second registration would be a
        // duplicate-id defect caught at build time.
        ModelDescriptor::builder("dall-e-3", "DALL-E 3", Provider::OpenAi)
            .version("3")
            .categories([ModelCategory::Image])
            .tier(ModelTier::Standard)
            .capabilities(["Text-to-image", "Prompt rewriting"])
            .input_modalities([Modality::Text])
            .output_modalities([Modality::Image])
            .regions(["global"])
            .parameters(image_model_parameters())
            .features(ModelFeatures::Image(ImageFeatures {
                negative_prompts: false,
                styles: vec!["vivid".into(), "natural".into()],
                max_resolution: Some("1792x1024".into()),
                ..ImageFeatures::default()
            }))
            .recommended_for(["Illustrations", "Creative imagery"])
            .not_recommended_for(["Exact brand reproduction"])
            .status(ModelStatus::Stable)
            .last_updated("2024-04-04")
            .pricing(ModelPricing::per_image(0.04))
            .documentation_url(OPENAI_DOCS)
            .build()?,
        ModelDescriptor::builder(
            "text-embedding-3-small",
            "Text Embedding 3 Small",
            Provider::OpenAi,
        )
        .version("3")
        .categories([ModelCategory::Embedding])
        .tier(ModelTier::Basic)
        .capabilities(["Text embeddings"])
        .input_modalities([Modality::Text])
        .output_modalities([Modality::Embedding])
        .max_input_tokens(8_191)
        .regions(["global"])
        .parameters(embedding_parameters())
        .features(ModelFeatures::Embedding(EmbeddingFeatures {
            dimensions: 1_536,
            normalized: true,
            ..EmbeddingFeatures::default()
        }))
        .recommended_for(["Search", "Clustering"])
        .status(ModelStatus::Stable)
        .last_updated("2024-01-25")
        .pricing(ModelPricing {
            input_per_1k_tokens: Some(0.00002),
            ..ModelPricing::default()
        })
        .documentation_url(OPENAI_DOCS)
        .build()?,
    ])
}
