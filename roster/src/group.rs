//! Derived model groupings.

use std::sync::Arc;

use model_desc_core::{ModelCategory, ModelDescriptor, Provider};
use serde::Serialize;

/// A named, non-owning view over a subset of registered descriptors.
///
/// Members are `Arc` references into the flat list, never copies. Groups are
/// derived from the full list and recomputed whenever it changes; they carry
/// no state of their own.
#[derive(Debug, Clone, Serialize)]
pub struct ModelGroup {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub models: Vec<Arc<ModelDescriptor>>,
}

/// One group per provider, ordered by first appearance in `models`;
/// members keep flat-list order.
pub fn groups_by_provider(models: &[Arc<ModelDescriptor>]) -> Vec<ModelGroup> {
    let mut providers: Vec<Provider> = Vec::new();
    for model in models {
        if !providers.contains(&model.provider) {
            providers.push(model.provider);
        }
    }
    providers
        .into_iter()
        .map(|provider| ModelGroup {
            name: provider.id().to_string(),
            description: Some(format!("Models hosted by {}", provider.label())),
            tags: vec!["provider".to_string(), provider.id().to_string()],
            models: models
                .iter()
                .filter(|m| m.provider == provider)
                .cloned()
                .collect(),
        })
        .collect()
}

/// One group per category tag, ordered by first appearance in `models`;
/// a descriptor with several tags appears in each matching group.
pub fn groups_by_category(models: &[Arc<ModelDescriptor>]) -> Vec<ModelGroup> {
    let mut categories: Vec<ModelCategory> = Vec::new();
    for model in models {
        for category in &model.category {
            if !categories.contains(category) {
                categories.push(*category);
            }
        }
    }
    categories
        .into_iter()
        .map(|category| ModelGroup {
            name: category.id().to_string(),
            description: None,
            tags: vec!["category".to_string(), category.id().to_string()],
            models: models
                .iter()
                .filter(|m| m.has_category(category))
                .cloned()
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use model_desc_core::{
        Modality, ModelFeatures, ModelParameters, ModelStatus, TextFeatures,
    };

    fn descriptor(id: &str, provider: Provider, categories: &[ModelCategory]) -> Arc<ModelDescriptor> {
        Arc::new(
            ModelDescriptor::builder(id, id, provider)
                .categories(categories.iter().copied())
                .input_modalities([Modality::Text])
                .output_modalities([Modality::Text])
                .parameters(ModelParameters::none())
                .features(ModelFeatures::Text(TextFeatures::default()))
                .status(ModelStatus::Stable)
                .last_updated("2024-06-01")
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn provider_groups_partition_the_flat_list() {
        let models = vec![
            descriptor("a-1", Provider::Amazon, &[ModelCategory::Chat]),
            descriptor("g-1", Provider::Groq, &[ModelCategory::Chat]),
            descriptor("a-2", Provider::Amazon, &[ModelCategory::Embedding]),
        ];
        let groups = groups_by_provider(&models);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "amazon");
        assert_eq!(groups[1].name, "groq");
        // Union of members equals the flat list.
        let total: usize = groups.iter().map(|g| g.models.len()).sum();
        assert_eq!(total, models.len());
        // Members keep flat-list order.
        assert_eq!(groups[0].models[0].id, "a-1");
        assert_eq!(groups[0].models[1].id, "a-2");
    }

    #[test]
    fn category_groups_repeat_multi_tagged_models() {
        let models = vec![descriptor(
            "m-1",
            Provider::Amazon,
            &[ModelCategory::Chat, ModelCategory::Multimodal],
        )];
        let groups = groups_by_category(&models);
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.models.len() == 1));
    }

    #[test]
    fn groups_share_descriptors_not_copies() {
        let models = vec![descriptor("m-1", Provider::Amazon, &[ModelCategory::Chat])];
        let groups = groups_by_provider(&models);
        assert!(Arc::ptr_eq(&groups[0].models[0], &models[0]));
    }
}
