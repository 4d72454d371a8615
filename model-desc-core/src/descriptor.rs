//! The model descriptor: one immutable record per addressable hosted model.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::features::ModelFeatures;
use crate::parameters::ModelParameters;
use crate::provider::Provider;
use crate::taxonomy::{Modality, ModelCategory, ModelStatus, ModelTier};

/// Optional USD pricing. Token rates are per 1K tokens.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPricing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_per_1k_tokens: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_per_1k_tokens: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_image: Option<f64>,
}

impl ModelPricing {
    /// Per-1K-token pricing for text models.
    pub fn per_tokens(input: f64, output: f64) -> Self {
        Self {
            input_per_1k_tokens: Some(input),
            output_per_1k_tokens: Some(output),
            per_image: None,
        }
    }

    /// Per-image pricing for image generation models.
    pub fn per_image(rate: f64) -> Self {
        Self {
            input_per_1k_tokens: None,
            output_per_1k_tokens: None,
            per_image: Some(rate),
        }
    }
}

/// Usage guidance surfaced next to the model picker.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseCases {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommended: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub not_recommended: Vec<String>,
}

/// An immutable record describing one hosted model.
///
/// Built via [`ModelDescriptor::builder`]; [`DescriptorBuilder::build`]
/// enforces the invariants (`validate`). No component mutates a descriptor
/// after it has been registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Globally unique identifier, often provider+version encoded
    /// (e.g. `"anthropic.claude-3-haiku-20240307-v1:0"`).
    pub id: String,
    /// Display name.
    pub name: String,
    pub provider: Provider,
    /// Free-form version string.
    #[serde(default)]
    pub version: String,
    /// Category tags; never empty.
    pub category: Vec<ModelCategory>,
    #[serde(default)]
    pub tier: ModelTier,
    /// Human-readable capability strings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub capabilities: Vec<String>,
    /// Accepted input modalities; never empty.
    pub input_modalities: Vec<Modality>,
    /// Produced output modalities; never empty.
    pub output_modalities: Vec<Modality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_input_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(default)]
    pub streaming: bool,
    /// Region identifiers where the model is available.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<String>,
    pub parameters: ModelParameters,
    pub features: ModelFeatures,
    #[serde(default, skip_serializing_if = "UseCases::is_empty")]
    pub use_cases: UseCases,
    #[serde(default)]
    pub status: ModelStatus,
    /// Last-updated date, `YYYY-MM-DD`.
    pub last_updated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<ModelPricing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compliance: Vec<String>,
    /// Alternative lookup names; share the registry's id namespace.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl UseCases {
    fn is_empty(&self) -> bool {
        self.recommended.is_empty() && self.not_recommended.is_empty()
    }
}

impl ModelDescriptor {
    /// Start building a descriptor. `id`, `name`, and `provider` are the only
    /// positional fields; everything else is set through the builder.
    pub fn builder(
        id: impl Into<String>,
        name: impl Into<String>,
        provider: Provider,
    ) -> DescriptorBuilder {
        DescriptorBuilder::new(id.into(), name.into(), provider)
    }

    /// Whether the descriptor carries the given category tag.
    pub fn has_category(&self, category: ModelCategory) -> bool {
        self.category.contains(&category)
    }

    /// Whether `name` matches the id or one of the aliases, ignoring case.
    pub fn answers_to(&self, name: &str) -> bool {
        self.id.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }

    /// Re-check the construction invariants.
    ///
    /// [`DescriptorBuilder::build`] already enforces these, but descriptors can
    /// also arrive via deserialization or literal construction, so the registry
    /// validates again at registration time.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::MissingField { field: "id" });
        }
        if self.name.is_empty() {
            return Err(ValidationError::MissingField { field: "name" });
        }
        if self.last_updated.is_empty() {
            return Err(ValidationError::MissingField {
                field: "last_updated",
            });
        }
        if self.category.is_empty() {
            return Err(ValidationError::EmptyList { field: "category" });
        }
        if self.input_modalities.is_empty() {
            return Err(ValidationError::EmptyList {
                field: "input_modalities",
            });
        }
        if self.output_modalities.is_empty() {
            return Err(ValidationError::EmptyList {
                field: "output_modalities",
            });
        }
        self.parameters.validate()
    }
}

/// Builder for [`ModelDescriptor`]. `build` validates and fails with
/// [`ValidationError`] on a missing required field or an invalid range.
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
    id: String,
    name: String,
    provider: Provider,
    version: String,
    category: Vec<ModelCategory>,
    tier: ModelTier,
    capabilities: Vec<String>,
    input_modalities: Vec<Modality>,
    output_modalities: Vec<Modality>,
    max_input_tokens: Option<u32>,
    max_output_tokens: Option<u32>,
    streaming: bool,
    regions: Vec<String>,
    parameters: Option<ModelParameters>,
    features: Option<ModelFeatures>,
    use_cases: UseCases,
    status: Option<ModelStatus>,
    last_updated: String,
    pricing: Option<ModelPricing>,
    documentation_url: Option<String>,
    compliance: Vec<String>,
    aliases: Vec<String>,
}

impl DescriptorBuilder {
    fn new(id: String, name: String, provider: Provider) -> Self {
        Self {
            id,
            name,
            provider,
            version: String::new(),
            category: Vec::new(),
            tier: ModelTier::default(),
            capabilities: Vec::new(),
            input_modalities: Vec::new(),
            output_modalities: Vec::new(),
            max_input_tokens: None,
            max_output_tokens: None,
            streaming: false,
            regions: Vec::new(),
            parameters: None,
            features: None,
            use_cases: UseCases::default(),
            status: None,
            last_updated: String::new(),
            pricing: None,
            documentation_url: None,
            compliance: Vec::new(),
            aliases: Vec::new(),
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn categories<I>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = ModelCategory>,
    {
        self.category = categories.into_iter().collect();
        self
    }

    pub fn tier(mut self, tier: ModelTier) -> Self {
        self.tier = tier;
        self
    }

    pub fn capabilities<I, S>(mut self, capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.capabilities = capabilities.into_iter().map(Into::into).collect();
        self
    }

    pub fn input_modalities<I>(mut self, modalities: I) -> Self
    where
        I: IntoIterator<Item = Modality>,
    {
        self.input_modalities = modalities.into_iter().collect();
        self
    }

    pub fn output_modalities<I>(mut self, modalities: I) -> Self
    where
        I: IntoIterator<Item = Modality>,
    {
        self.output_modalities = modalities.into_iter().collect();
        self
    }

    pub fn max_input_tokens(mut self, tokens: u32) -> Self {
        self.max_input_tokens = Some(tokens);
        self
    }

    pub fn max_output_tokens(mut self, tokens: u32) -> Self {
        self.max_output_tokens = Some(tokens);
        self
    }

    pub fn streaming(mut self, streaming: bool) -> Self {
        self.streaming = streaming;
        self
    }

    pub fn regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions = regions.into_iter().map(Into::into).collect();
        self
    }

    pub fn parameters(mut self, parameters: ModelParameters) -> Self {
        self.parameters = Some(parameters);
        self
    }

    pub fn features(mut self, features: ModelFeatures) -> Self {
        self.features = Some(features);
        self
    }

    pub fn recommended_for<I, S>(mut self, uses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.use_cases.recommended = uses.into_iter().map(Into::into).collect();
        self
    }

    pub fn not_recommended_for<I, S>(mut self, uses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.use_cases.not_recommended = uses.into_iter().map(Into::into).collect();
        self
    }

    pub fn status(mut self, status: ModelStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn last_updated(mut self, date: impl Into<String>) -> Self {
        self.last_updated = date.into();
        self
    }

    pub fn pricing(mut self, pricing: ModelPricing) -> Self {
        self.pricing = Some(pricing);
        self
    }

    pub fn documentation_url(mut self, url: impl Into<String>) -> Self {
        self.documentation_url = Some(url.into());
        self
    }

    pub fn compliance<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.compliance = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Validate and produce the immutable descriptor.
    pub fn build(self) -> Result<ModelDescriptor, ValidationError> {
        let parameters = self
            .parameters
            .ok_or(ValidationError::MissingField { field: "parameters" })?;
        let features = self
            .features
            .ok_or(ValidationError::MissingField { field: "features" })?;
        let status = self
            .status
            .ok_or(ValidationError::MissingField { field: "status" })?;

        let descriptor = ModelDescriptor {
            id: self.id,
            name: self.name,
            provider: self.provider,
            version: self.version,
            category: self.category,
            tier: self.tier,
            capabilities: self.capabilities,
            input_modalities: self.input_modalities,
            output_modalities: self.output_modalities,
            max_input_tokens: self.max_input_tokens,
            max_output_tokens: self.max_output_tokens,
            streaming: self.streaming,
            regions: self.regions,
            parameters,
            features,
            use_cases: self.use_cases,
            status,
            last_updated: self.last_updated,
            pricing: self.pricing,
            documentation_url: self.documentation_url,
            compliance: self.compliance,
            aliases: self.aliases,
        };
        descriptor.validate()?;
        Ok(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::TextFeatures;
    use crate::parameters::ParameterRange;

    fn minimal_builder() -> DescriptorBuilder {
        ModelDescriptor::builder("test.model-v1", "Test Model", Provider::Amazon)
            .categories([ModelCategory::Chat])
            .input_modalities([Modality::Text])
            .output_modalities([Modality::Text])
            .parameters(ModelParameters::none())
            .features(ModelFeatures::Text(TextFeatures::default()))
            .status(ModelStatus::Stable)
            .last_updated("2024-06-01")
    }

    #[test]
    fn minimal_descriptor_builds() {
        let descriptor = minimal_builder().build().unwrap();
        assert_eq!(descriptor.id, "test.model-v1");
        assert_eq!(descriptor.tier, ModelTier::Standard);
        assert!(!descriptor.streaming);
    }

    #[test]
    fn missing_parameters_is_rejected() {
        let result = ModelDescriptor::builder("m", "M", Provider::Amazon)
            .categories([ModelCategory::Chat])
            .input_modalities([Modality::Text])
            .output_modalities([Modality::Text])
            .features(ModelFeatures::Text(TextFeatures::default()))
            .status(ModelStatus::Stable)
            .last_updated("2024-06-01")
            .build();
        assert_eq!(
            result.unwrap_err(),
            ValidationError::MissingField { field: "parameters" }
        );
    }

    #[test]
    fn missing_status_is_rejected() {
        let result = ModelDescriptor::builder("m", "M", Provider::Amazon)
            .categories([ModelCategory::Chat])
            .input_modalities([Modality::Text])
            .output_modalities([Modality::Text])
            .parameters(ModelParameters::none())
            .features(ModelFeatures::Text(TextFeatures::default()))
            .last_updated("2024-06-01")
            .build();
        assert_eq!(
            result.unwrap_err(),
            ValidationError::MissingField { field: "status" }
        );
    }

    #[test]
    fn empty_category_is_rejected() {
        let result = minimal_builder().categories([]).build();
        assert_eq!(
            result.unwrap_err(),
            ValidationError::EmptyList { field: "category" }
        );
    }

    #[test]
    fn empty_modalities_are_rejected() {
        let result = minimal_builder().input_modalities([]).build();
        assert_eq!(
            result.unwrap_err(),
            ValidationError::EmptyList {
                field: "input_modalities"
            }
        );
    }

    #[test]
    fn empty_id_is_rejected() {
        let result = ModelDescriptor::builder("", "M", Provider::Amazon)
            .categories([ModelCategory::Chat])
            .input_modalities([Modality::Text])
            .output_modalities([Modality::Text])
            .parameters(ModelParameters::none())
            .features(ModelFeatures::Text(TextFeatures::default()))
            .status(ModelStatus::Stable)
            .last_updated("2024-06-01")
            .build();
        assert_eq!(
            result.unwrap_err(),
            ValidationError::MissingField { field: "id" }
        );
    }

    #[test]
    fn invalid_parameter_range_is_rejected() {
        let params = ModelParameters {
            temperature: Some(ParameterRange::new(0.0, 2.0, 1.0)),
            ..ModelParameters::default()
        };
        let result = minimal_builder().parameters(params).build();
        assert!(matches!(
            result.unwrap_err(),
            ValidationError::InvalidRange { .. }
        ));
    }

    #[test]
    fn answers_to_matches_id_and_aliases_case_insensitively() {
        let descriptor = minimal_builder()
            .aliases(["test-model", "tm-1"])
            .build()
            .unwrap();
        assert!(descriptor.answers_to("TEST.MODEL-V1"));
        assert!(descriptor.answers_to("Test-Model"));
        assert!(!descriptor.answers_to("other"));
    }

    #[test]
    fn serde_roundtrip_preserves_descriptor() {
        let descriptor = minimal_builder()
            .version("1.0")
            .max_input_tokens(8_192)
            .streaming(true)
            .pricing(ModelPricing::per_tokens(0.0002, 0.0006))
            .build()
            .unwrap();
        let json = serde_json::to_string(&descriptor).unwrap();
        let parsed: ModelDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, descriptor);
    }
}
