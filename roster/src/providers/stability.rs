//! Stability AI image generation models.

use std::collections::BTreeMap;

use serde_json::json;

use model_desc_core::{
    ImageFeatures, Modality, ModelCategory, ModelDescriptor, ModelFeatures, ModelPricing,
    ModelStatus, ModelTier, Provider, ValidationError,
};

use crate::defaults::image_model_parameters;
use crate::error::CatalogError;
use crate::generator::ModelGenerator;
use crate::registry::ModelRegistry;

const STABILITY_DOCS: &str = "https://platform.stability.ai/docs/getting-started";

/// Generates descriptors for Stability AI's image models.
pub struct StabilityGenerator;

impl ModelGenerator for StabilityGenerator {
    fn provider(&self) -> Provider {
        Provider::StabilityAi
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
            "stability.stable-diffusion-xl-v1",
            "Stable Diffusion XL 1.0",
            Provider::StabilityAi,
        )
        .version("1.0")
        .categories([ModelCategory::Image])
        .tier(ModelTier::Standard)
        .capabilities(["Text-to-image", "Image-to-image", "Inpainting"])
        .input_modalities([Modality::Text, Modality::Image])
        .output_modalities([Modality::Image])
        .regions(["us-east-1", "us-west-2"])
        .parameters(image_model_parameters())
        .features(ModelFeatures::Image(ImageFeatures {
            negative_prompts: true,
            styles: vec![
                "photographic".into(),
                "digital-art".into(),
                "cinematic".into(),
                "anime".into(),
            ],
            max_resolution: Some("1024x1024".into()),
            extensions: BTreeMap::from([
                ("default_steps".to_string(), json!(30)),
                ("supports_seed".to_string(), json!(true)),
            ]),
        }))
        .recommended_for(["Concept art", "Marketing imagery"])
        .not_recommended_for(["Legible text in images"])
        .status(ModelStatus::Stable)
        .last_updated("2023-07-26")
        .pricing(ModelPricing::per_image(0.04))
        .documentation_url(STABILITY_DOCS)
        .aliases(["sdxl"])
        .build()?,
        ModelDescriptor::builder(
            "stability.sd3-large-v1:0",
            "Stable Diffusion 3 Large",
            Provider::StabilityAi,
        )
        .version("3.0")
        .categories([ModelCategory::Image])
        .tier(ModelTier::Premium)
        .capabilities(["Text-to-image with prompt adherence", "Typography"])
        .input_modalities([Modality::Text])
        .output_modalities([Modality::Image])
        .regions(["us-west-2"])
        .parameters(image_model_parameters())
        .features(ModelFeatures::Image(ImageFeatures {
            negative_prompts: true,
            max_resolution: Some("1536x1536".into()),
            ..ImageFeatures::default()
        }))
        .recommended_for(["Detailed prompts", "Text rendering"])
        .status(ModelStatus::Stable)
        .last_updated("2024-06-12")
        .pricing(ModelPricing::per_image(0.08))
        .documentation_url(STABILITY_DOCS)
        .build()?,
    ])
}
