//! Classification enums: category, modality, tier, lifecycle status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Functional category tags. A descriptor carries at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelCategory {
    Chat,
    TextGeneration,
    Embedding,
    Image,
    Multimodal,
    Code,
}

impl ModelCategory {
    /// Stable snake_case identifier, matching the serialized form.
    pub fn id(&self) -> &'static str {
        match self {
            ModelCategory::Chat => "chat",
            ModelCategory::TextGeneration => "text_generation",
            ModelCategory::Embedding => "embedding",
            ModelCategory::Image => "image",
            ModelCategory::Multimodal => "multimodal",
            ModelCategory::Code => "code",
        }
    }
}

impl fmt::Display for ModelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The kind of content a model accepts or produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Text,
    Image,
    Video,
    Audio,
    Embedding,
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Modality::Text => "text",
            Modality::Image => "image",
            Modality::Video => "video",
            Modality::Audio => "audio",
            Modality::Embedding => "embedding",
        };
        f.write_str(s)
    }
}

/// Coarse pricing/capability class.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    Free,
    Basic,
    #[default]
    Standard,
    Premium,
    Enterprise,
    Preview,
}

impl fmt::Display for ModelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ModelTier::Free => "free",
            ModelTier::Basic => "basic",
            ModelTier::Standard => "standard",
            ModelTier::Premium => "premium",
            ModelTier::Enterprise => "enterprise",
            ModelTier::Preview => "preview",
        };
        f.write_str(s)
    }
}

/// Lifecycle status of a model.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelStatus {
    #[default]
    Stable,
    Beta,
    Alpha,
    Deprecated,
    Preview,
}

impl fmt::Display for ModelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ModelStatus::Stable => "stable",
            ModelStatus::Beta => "beta",
            ModelStatus::Alpha => "alpha",
            ModelStatus::Deprecated => "deprecated",
            ModelStatus::Preview => "preview",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_display_matches_serialized_form() {
        assert_eq!(ModelCategory::TextGeneration.to_string(), "text_generation");
        let json = serde_json::to_string(&ModelCategory::TextGeneration).unwrap();
        assert_eq!(json, "\"text_generation\"");
    }

    #[test]
    fn tier_default_is_standard() {
        assert_eq!(ModelTier::default(), ModelTier::Standard);
    }

    #[test]
    fn status_default_is_stable() {
        assert_eq!(ModelStatus::default(), ModelStatus::Stable);
    }

    #[test]
    fn modality_serde_roundtrip() {
        let json = serde_json::to_string(&Modality::Embedding).unwrap();
        assert_eq!(json, "\"embedding\"");
        let parsed: Modality = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Modality::Embedding);
    }

    #[test]
    fn tier_serde_roundtrip() {
        let json = serde_json::to_string(&ModelTier::Enterprise).unwrap();
        assert_eq!(json, "\"enterprise\"");
        let parsed: ModelTier = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ModelTier::Enterprise);
    }
}
