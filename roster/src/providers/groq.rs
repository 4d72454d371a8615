//! Models served on Groq's LPU inference connector.

use std::collections::BTreeMap;

use serde_json::json;

use model_desc_core::{
    Modality, ModelCategory, ModelDescriptor, ModelFeatures, ModelPricing, ModelStatus, ModelTier,
    Provider, TextFeatures, ValidationError,
};

use crate::defaults::text_model_parameters;
use crate::error::CatalogError;
use crate::generator::ModelGenerator;
use crate::registry::ModelRegistry;

const GROQ_DOCS: &str = "https://console.groq.com/docs/models";

/// Generates descriptors for models hosted by Groq.
pub struct GroqGenerator;

impl ModelGenerator for GroqGenerator {
    fn provider(&self) -> Provider {
        Provider::Groq
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
            "llama-3.1-8b-instant",
            "Llama 3.1 8B Instant",
            Provider::Groq,
        )
        .version("3.1")
        .categories([ModelCategory::Chat, ModelCategory::TextGeneration])
        .tier(ModelTier::Free)
        .capabilities(["Very low latency chat", "Tool use"])
        .input_modalities([Modality::Text])
        .output_modalities([Modality::Text])
        .max_input_tokens(128_000)
        .max_output_tokens(8_192)
        .streaming(true)
        .regions(["global"])
        .parameters(text_model_parameters(8_192))
        .features(ModelFeatures::Text(TextFeatures {
            tool_use: true,
            extensions: BTreeMap::from([("tokens_per_second".to_string(), json!(750))]),
            ..TextFeatures::default()
        }))
        .recommended_for(["Interactive chat", "Realtime completions"])
        .status(ModelStatus::Stable)
        .last_updated("2024-07-23")
        .pricing(ModelPricing::per_tokens(0.00005, 0.00008))
        .documentation_url(GROQ_DOCS)
        .build()?,
        ModelDescriptor::builder(
            "llama-3.1-70b-versatile",
            "Llama 3.1 70B Versatile",
            Provider::Groq,
        )
        .version("3.1")
        .categories([ModelCategory::Chat, ModelCategory::TextGeneration])
        .tier(ModelTier::Standard)
        .capabilities(["Fast general-purpose chat", "Tool use"])
        .input_modalities([Modality::Text])
        .output_modalities([Modality::Text])
        .max_input_tokens(128_000)
        .max_output_tokens(8_192)
        .streaming(true)
        .regions(["global"])
        .parameters(text_model_parameters(8_192))
        .features(ModelFeatures::Text(TextFeatures {
            tool_use: true,
            ..TextFeatures::default()
        }))
        .recommended_for(["Latency-sensitive assistants"])
        .status(ModelStatus::Stable)
        .last_updated("2024-07-23")
        .pricing(ModelPricing::per_tokens(0.00059, 0.00079))
        .documentation_url(GROQ_DOCS)
        .build()?,
        ModelDescriptor::builder("mixtral-8x7b-32768", "Mixtral 8x7B", Provider::Groq)
            .version("0.1")
            .categories([ModelCategory::Chat, ModelCategory::TextGeneration])
            .tier(ModelTier::Basic)
            .capabilities(["Mixture-of-experts generation"])
            .input_modalities([Modality::Text])
            .output_modalities([Modality::Text])
            .max_input_tokens(32_768)
            .max_output_tokens(8_192)
            .streaming(true)
            .regions(["global"])
            .parameters(text_model_parameters(8_192))
            .features(ModelFeatures::Text(TextFeatures {
                multilingual: true,
                ..TextFeatures::default()
            }))
            .recommended_for(["Throughput-heavy generation"])
            .status(ModelStatus::Stable)
            .last_updated("2024-03-05")
            .pricing(ModelPricing::per_tokens(0.00024, 0.00024))
            .documentation_url(GROQ_DOCS)
            .build()?,
        ModelDescriptor::builder("gemma2-9b-it", "Gemma 2 9B", Provider::Groq)
            .version("2")
            .categories([ModelCategory::Chat])
            .tier(ModelTier::Free)
            .capabilities(["Lightweight chat"])
            .input_modalities([Modality::Text])
            .output_modalities([Modality::Text])
            .max_input_tokens(8_192)
            .max_output_tokens(8_192)
            .streaming(true)
            .regions(["global"])
            .parameters(text_model_parameters(8_192))
            .features(ModelFeatures::Text(TextFeatures::default()))
            .recommended_for(["Simple assistants", "Prototyping"])
            .status(ModelStatus::Stable)
            .last_updated("2024-06-27")
            .pricing(ModelPricing::per_tokens(0.0002, 0.0002))
            .documentation_url(GROQ_DOCS)
            .build()?,
    ])
}
