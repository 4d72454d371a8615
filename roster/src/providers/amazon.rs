//! Amazon first-party models: the Titan and Nova families.

use model_desc_core::{
    EmbeddingFeatures, ImageFeatures, Modality, ModelCategory, ModelDescriptor, ModelFeatures,
    ModelPricing, ModelStatus, ModelTier, MultimodalFeatures, Provider, TextFeatures,
    ValidationError,
};

use crate::defaults::{embedding_parameters, image_model_parameters, text_model_parameters};
use crate::error::CatalogError;
use crate::generator::ModelGenerator;
use crate::registry::ModelRegistry;

const TITAN_DOCS: &str =
    "https://docs.aws.amazon.com/bedrock/latest/userguide/titan-models.html";
const NOVA_DOCS: &str = "https://docs.aws.amazon.com/nova/latest/userguide/what-is-nova.html";

/// Generates descriptors for Amazon's first-party models.
pub struct AmazonGenerator;

impl ModelGenerator for AmazonGenerator {
    fn provider(&self) -> Provider {
        Provider::Amazon
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
            "amazon.titan-text-express-v1",
            "Titan Text G1 - Express",
            Provider::Amazon,
        )
        .version("1")
        .categories([ModelCategory::Chat, ModelCategory::TextGeneration])
        .tier(ModelTier::Basic)
        .capabilities(["Text generation", "Summarization", "Open-ended Q&A"])
        .input_modalities([Modality::Text])
        .output_modalities([Modality::Text])
        .max_input_tokens(8_192)
        .max_output_tokens(8_192)
        .streaming(true)
        .regions(["us-east-1", "us-west-2", "eu-central-1", "ap-southeast-2"])
        .parameters(text_model_parameters(8_192))
        .features(ModelFeatures::Text(TextFeatures {
            multilingual: true,
            supported_languages: vec!["en".into(), "es".into(), "fr".into(), "de".into()],
            fine_tuning: true,
            ..TextFeatures::default()
        }))
        .recommended_for(["Drafting text", "Chatbots", "Data formatting"])
        .not_recommended_for(["Complex reasoning", "Code generation"])
        .status(ModelStatus::Stable)
        .last_updated("2024-04-30")
        .pricing(ModelPricing::per_tokens(0.0002, 0.0006))
        .documentation_url(TITAN_DOCS)
        .compliance(["soc2", "hipaa"])
        .build()?,
        ModelDescriptor::builder(
            "amazon.titan-text-lite-v1",
            "Titan Text G1 - Lite",
            Provider::Amazon,
        )
        .version("1")
        .categories([ModelCategory::TextGeneration])
        .tier(ModelTier::Free)
        .capabilities(["Text generation", "Summarization"])
        .input_modalities([Modality::Text])
        .output_modalities([Modality::Text])
        .max_input_tokens(4_096)
        .max_output_tokens(4_096)
        .streaming(true)
        .regions(["us-east-1", "us-west-2"])
        .parameters(text_model_parameters(4_096))
        .features(ModelFeatures::Text(TextFeatures {
            fine_tuning: true,
            ..TextFeatures::default()
        }))
        .recommended_for(["Short-form drafting", "Cost-sensitive workloads"])
        .not_recommended_for(["Long documents"])
        .status(ModelStatus::Stable)
        .last_updated("2024-04-30")
        .pricing(ModelPricing::per_tokens(0.00015, 0.0002))
        .documentation_url(TITAN_DOCS)
        .compliance(["soc2"])
        .build()?,
        ModelDescriptor::builder(
            "amazon.titan-embed-text-v1",
            "Titan Embeddings G1 - Text",
            Provider::Amazon,
        )
        .version("1.2")
        .categories([ModelCategory::Embedding])
        .tier(ModelTier::Basic)
        .capabilities(["Text embeddings for search and RAG"])
        .input_modalities([Modality::Text])
        .output_modalities([Modality::Embedding])
        .max_input_tokens(8_192)
        .regions(["us-east-1", "us-west-2", "eu-central-1"])
        .parameters(embedding_parameters())
        .features(ModelFeatures::Embedding(EmbeddingFeatures {
            dimensions: 1_536,
            normalized: false,
            ..EmbeddingFeatures::default()
        }))
        .recommended_for(["Semantic search", "Retrieval-augmented generation"])
        .status(ModelStatus::Stable)
        .last_updated("2024-02-14")
        .pricing(ModelPricing {
            input_per_1k_tokens: Some(0.0001),
            ..ModelPricing::default()
        })
        .documentation_url(TITAN_DOCS)
        .compliance(["soc2", "hipaa"])
        .build()?,
        ModelDescriptor::builder(
            "amazon.titan-embed-text-v2:0",
            "Titan Text Embeddings V2",
            Provider::Amazon,
        )
        .version("2")
        .categories([ModelCategory::Embedding])
        .tier(ModelTier::Standard)
        .capabilities(["Text embeddings with configurable dimensions"])
        .input_modalities([Modality::Text])
        .output_modalities([Modality::Embedding])
        .max_input_tokens(8_192)
        .regions(["us-east-1", "us-west-2"])
        .parameters(embedding_parameters())
        .features(ModelFeatures::Embedding(EmbeddingFeatures {
            dimensions: 1_024,
            normalized: true,
            ..EmbeddingFeatures::default()
        }))
        .recommended_for(["Semantic search", "Clustering", "Classification"])
        .status(ModelStatus::Stable)
        .last_updated("2024-05-02")
        .pricing(ModelPricing {
            input_per_1k_tokens: Some(0.00002),
            ..ModelPricing::default()
        })
        .documentation_url(TITAN_DOCS)
        .compliance(["soc2", "hipaa"])
        .build()?,
        // Image generation: no token limits, cfg-scale parameter contract.
        ModelDescriptor::builder(
            "amazon.titan-image-generator-v1",
            "Titan Image Generator G1",
            Provider::Amazon,
        )
        .version("1")
        .categories([ModelCategory::Image])
        .tier(ModelTier::Standard)
        .capabilities(["Text-to-image", "Image editing", "Image variation"])
        .input_modalities([Modality::Text, Modality::Image])
        .output_modalities([Modality::Image])
        .regions(["us-east-1", "us-west-2"])
        .parameters(image_model_parameters())
        .features(ModelFeatures::Image(ImageFeatures {
            negative_prompts: true,
            max_resolution: Some("1408x1408".into()),
            ..ImageFeatures::default()
        }))
        .recommended_for(["Product imagery", "Concept art"])
        .not_recommended_for(["Photorealistic faces"])
        .status(ModelStatus::Stable)
        .last_updated("2024-03-18")
        .pricing(ModelPricing::per_image(0.008))
        .documentation_url(TITAN_DOCS)
        .compliance(["soc2"])
        .build()?,
        ModelDescriptor::builder("amazon.nova-lite-v1:0", "Nova Lite", Provider::Amazon)
            .version("1")
            .categories([ModelCategory::Chat, ModelCategory::Multimodal])
            .tier(ModelTier::Standard)
            .capabilities(["Multimodal chat", "Document analysis", "Video understanding"])
            .input_modalities([Modality::Text, Modality::Image, Modality::Video])
            .output_modalities([Modality::Text])
            .max_input_tokens(300_000)
            .max_output_tokens(5_000)
            .streaming(true)
            .regions(["us-east-1", "us-west-2"])
            .parameters(text_model_parameters(5_000))
            .features(ModelFeatures::Multimodal(MultimodalFeatures {
                image_analysis: true,
                document_analysis: true,
                tool_use: true,
                ..MultimodalFeatures::default()
            }))
            .recommended_for(["Low-latency multimodal chat", "Document Q&A"])
            .status(ModelStatus::Stable)
            .last_updated("2024-12-03")
            .pricing(ModelPricing::per_tokens(0.00006, 0.00024))
            .documentation_url(NOVA_DOCS)
            .compliance(["soc2", "hipaa"])
            .build()?,
        ModelDescriptor::builder("amazon.nova-pro-v1:0", "Nova Pro", Provider::Amazon)
            .version("1")
            .categories([ModelCategory::Chat, ModelCategory::Multimodal])
            .tier(ModelTier::Premium)
            .capabilities(["Multimodal chat", "Agentic workflows", "Complex reasoning"])
            .input_modalities([Modality::Text, Modality::Image, Modality::Video])
            .output_modalities([Modality::Text])
            .max_input_tokens(300_000)
            .max_output_tokens(5_000)
            .streaming(true)
            .regions(["us-east-1", "us-west-2"])
            .parameters(text_model_parameters(5_000))
            .features(ModelFeatures::Multimodal(MultimodalFeatures {
                image_analysis: true,
                document_analysis: true,
                tool_use: true,
                ..MultimodalFeatures::default()
            }))
            .recommended_for(["Agent pipelines", "Long-context analysis"])
            .status(ModelStatus::Stable)
            .last_updated("2024-12-03")
            .pricing(ModelPricing::per_tokens(0.0008, 0.0032))
            .documentation_url(NOVA_DOCS)
            .compliance(["soc2", "hipaa"])
            .build()?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_descriptors_build_and_belong_to_amazon() {
        let models = descriptors().unwrap();
        assert_eq!(models.len(), 7);
        assert!(models.iter().all(|m| m.provider == Provider::Amazon));
        assert!(models.iter().all(|m| m.id.starts_with("amazon.")));
    }

    #[test]
    fn image_generator_has_no_token_limits() {
        let models = descriptors().unwrap();
        let image = models
            .iter()
            .find(|m| m.id == "amazon.titan-image-generator-v1")
            .unwrap();
        assert!(image.has_category(ModelCategory::Image));
        assert!(!image.has_category(ModelCategory::Chat));
        assert!(image.max_output_tokens.is_none());
        assert!(image.parameters.max_tokens.is_none());
    }

    #[test]
    fn embeddings_output_the_embedding_modality() {
        let models = descriptors().unwrap();
        for embed in models.iter().filter(|m| m.has_category(ModelCategory::Embedding)) {
            assert_eq!(embed.output_modalities, vec![Modality::Embedding]);
            assert!(!embed.streaming);
        }
    }
}
