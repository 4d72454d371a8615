//! Model feature flags, one variant per feature category.
//!
//! Well-known flags are typed fields; anything provider-specific that does not
//! fit the common shape goes into the variant's `extensions` map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Feature flags for one model, tagged by feature category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelFeatures {
    Text(TextFeatures),
    Image(ImageFeatures),
    Embedding(EmbeddingFeatures),
    Multimodal(MultimodalFeatures),
}

impl ModelFeatures {
    /// The category tag, matching the serialized `kind` field.
    pub fn kind(&self) -> &'static str {
        match self {
            ModelFeatures::Text(_) => "text",
            ModelFeatures::Image(_) => "image",
            ModelFeatures::Embedding(_) => "embedding",
            ModelFeatures::Multimodal(_) => "multimodal",
        }
    }
}

/// Features of text-only generation models.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFeatures {
    #[serde(default)]
    pub multilingual: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supported_languages: Vec<String>,
    #[serde(default)]
    pub fine_tuning: bool,
    #[serde(default)]
    pub tool_use: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extensions: BTreeMap<String, Value>,
}

/// Features of image generation models.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageFeatures {
    #[serde(default)]
    pub negative_prompts: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_resolution: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extensions: BTreeMap<String, Value>,
}

/// Features of embedding models.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingFeatures {
    pub dimensions: u32,
    #[serde(default)]
    pub normalized: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extensions: BTreeMap<String, Value>,
}

/// Features of models that accept mixed input modalities.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultimodalFeatures {
    #[serde(default)]
    pub image_analysis: bool,
    #[serde(default)]
    pub document_analysis: bool,
    #[serde(default)]
    pub tool_use: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extensions: BTreeMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tagged_serialization_carries_kind() {
        let features = ModelFeatures::Embedding(EmbeddingFeatures {
            dimensions: 1536,
            normalized: true,
            extensions: BTreeMap::new(),
        });
        let value = serde_json::to_value(&features).unwrap();
        assert_eq!(value["kind"], "embedding");
        assert_eq!(value["dimensions"], 1536);
    }

    #[test]
    fn extensions_survive_roundtrip() {
        let mut extensions = BTreeMap::new();
        extensions.insert("watermark".to_string(), json!(true));
        let features = ModelFeatures::Image(ImageFeatures {
            negative_prompts: true,
            max_resolution: Some("1024x1024".to_string()),
            extensions,
            ..ImageFeatures::default()
        });
        let json = serde_json::to_string(&features).unwrap();
        let parsed: ModelFeatures = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, features);
    }

    #[test]
    fn kind_matches_variant() {
        let features = ModelFeatures::Text(TextFeatures::default());
        assert_eq!(features.kind(), "text");
    }
}
