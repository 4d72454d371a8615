//! Cohere Command and Embed models.

use model_desc_core::{
    EmbeddingFeatures, Modality, ModelCategory, ModelDescriptor, ModelFeatures, ModelPricing,
    ModelStatus, ModelTier, Provider, TextFeatures, ValidationError,
};

use crate::defaults::{embedding_parameters, text_model_parameters};
use crate::error::CatalogError;
use crate::generator::ModelGenerator;
use crate::registry::ModelRegistry;

const COHERE_DOCS: &str = "https://docs.cohere.com/docs/models";

/// Generates descriptors for Cohere's models.
pub struct CohereGenerator;

impl ModelGenerator for CohereGenerator {
    fn provider(&self) -> Provider {
        Provider::Cohere
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
        ModelDescriptor::builder("cohere.command-r-v1:0", "Command R", Provider::Cohere)
            .version("1")
            .categories([ModelCategory::Chat, ModelCategory::TextGeneration])
            .tier(ModelTier::Standard)
            .capabilities(["RAG-optimized chat", "Tool use", "Grounded citations"])
            .input_modalities([Modality::Text])
            .output_modalities([Modality::Text])
            .max_input_tokens(128_000)
            .max_output_tokens(4_096)
            .streaming(true)
            .regions(["us-east-1", "us-west-2"])
            .parameters(text_model_parameters(4_096))
            .features(ModelFeatures::Text(TextFeatures {
                multilingual: true,
                tool_use: true,
                ..TextFeatures::default()
            }))
            .recommended_for(["Retrieval-augmented chat", "Enterprise search"])
            .status(ModelStatus::Stable)
            .last_updated("2024-04-02")
            .pricing(ModelPricing::per_tokens(0.0005, 0.0015))
            .documentation_url(COHERE_DOCS)
            .build()?,
        ModelDescriptor::builder("cohere.command-r-plus-v1:0", "Command R+", Provider::Cohere)
            .version("1")
            .categories([ModelCategory::Chat, ModelCategory::TextGeneration])
            .tier(ModelTier::Premium)
            .capabilities(["Advanced RAG", "Multi-step tool use", "Grounded citations"])
            .input_modalities([Modality::Text])
            .output_modalities([Modality::Text])
            .max_input_tokens(128_000)
            .max_output_tokens(4_096)
            .streaming(true)
            .regions(["us-east-1", "us-west-2"])
            .parameters(text_model_parameters(4_096))
            .features(ModelFeatures::Text(TextFeatures {
                multilingual: true,
                tool_use: true,
                ..TextFeatures::default()
            }))
            .recommended_for(["Complex RAG workflows", "Multi-step agents"])
            .status(ModelStatus::Stable)
            .last_updated("2024-04-04")
            .pricing(ModelPricing::per_tokens(0.003, 0.015))
            .documentation_url(COHERE_DOCS)
            .build()?,
        ModelDescriptor::builder(
            "cohere.embed-english-v3",
            "Embed English v3",
            Provider::Cohere,
        )
        .version("3")
        .categories([ModelCategory::Embedding])
        .tier(ModelTier::Basic)
        .capabilities(["English text embeddings"])
        .input_modalities([Modality::Text])
        .output_modalities([Modality::Embedding])
        .max_input_tokens(512)
        .regions(["us-east-1", "us-west-2"])
        .parameters(embedding_parameters())
        .features(ModelFeatures::Embedding(EmbeddingFeatures {
            dimensions: 1_024,
            normalized: true,
            ..EmbeddingFeatures::default()
        }))
        .recommended_for(["English semantic search"])
        .status(ModelStatus::Stable)
        .last_updated("2023-11-02")
        .pricing(ModelPricing {
            input_per_1k_tokens: Some(0.0001),
            ..ModelPricing::default()
        })
        .documentation_url(COHERE_DOCS)
        .build()?,
        ModelDescriptor::builder(
            "cohere.embed-multilingual-v3",
            "Embed Multilingual v3",
            Provider::Cohere,
        )
        .version("3")
        .categories([ModelCategory::Embedding])
        .tier(ModelTier::Basic)
        .capabilities(["Embeddings across 100+ languages"])
        .input_modalities([Modality::Text])
        .output_modalities([Modality::Embedding])
        .max_input_tokens(512)
        .regions(["us-east-1", "us-west-2"])
        .parameters(embedding_parameters())
        .features(ModelFeatures::Embedding(EmbeddingFeatures {
            dimensions: 1_024,
            normalized: true,
            ..EmbeddingFeatures::default()
        }))
        .recommended_for(["Cross-lingual search"])
        .status(ModelStatus::Stable)
        .last_updated("2023-11-02")
        .pricing(ModelPricing {
            input_per_1k_tokens: Some(0.0001),
            ..ModelPricing::default()
        })
        .documentation_url(COHERE_DOCS)
        .build()?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_descriptors_build_and_belong_to_cohere() {
        let models = descriptors().unwrap();
        assert_eq!(models.len(), 4);
        assert!(models.iter().all(|m| m.provider == Provider::Cohere));
        assert!(models.iter().all(|m| m.id.starts_with("cohere.")));
    }

    #[test]
    fn embed_models_share_dimensions() {
        let models = descriptors().unwrap();
        for embed in models.iter().filter(|m| m.has_category(ModelCategory::Embedding)) {
            match &embed.features {
                ModelFeatures::Embedding(f) => assert_eq!(f.dimensions, 1_024),
                other => panic!("unexpected features for {}: {:?}", embed.id, other),
            }
        }
    }
}
