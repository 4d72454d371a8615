//! Catalog override configuration, shared between the loader and the registry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Deployment-time adjustments applied while the catalog is built.
///
/// Loaded from `catalog.toml` by the `config` crate and consulted by the
/// registry at registration time; descriptors stay immutable afterwards.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogOverrides {
    /// Model ids to drop from the catalog.
    #[serde(default)]
    pub disabled: Vec<String>,
    /// Per-model parameter default overrides, keyed by model id.
    #[serde(default)]
    pub parameters: BTreeMap<String, ParameterOverride>,
    /// When set, descriptors keep only these regions; a descriptor left with
    /// no region is dropped.
    #[serde(default)]
    pub regions: Option<Vec<String>>,
}

/// New defaults for a model's generation parameters. Bounds are never
/// overridden; a default outside the descriptor's declared bounds is a
/// validation error at registration.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl CatalogOverrides {
    pub fn is_empty(&self) -> bool {
        self.disabled.is_empty() && self.parameters.is_empty() && self.regions.is_none()
    }

    pub fn is_disabled(&self, id: &str) -> bool {
        self.disabled.iter().any(|d| d == id)
    }

    pub fn parameter_override(&self, id: &str) -> Option<&ParameterOverride> {
        self.parameters.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_overrides_are_empty() {
        let overrides = CatalogOverrides::default();
        assert!(overrides.is_empty());
        assert!(!overrides.is_disabled("any"));
        assert!(overrides.parameter_override("any").is_none());
    }

    #[test]
    fn disabled_lookup_is_exact() {
        let overrides = CatalogOverrides {
            disabled: vec!["amazon.titan-text-lite-v1".to_string()],
            ..CatalogOverrides::default()
        };
        assert!(overrides.is_disabled("amazon.titan-text-lite-v1"));
        assert!(!overrides.is_disabled("amazon.titan-text-express-v1"));
    }

    #[test]
    fn toml_shape_deserializes() {
        let overrides: CatalogOverrides = serde_json::from_str(
            r#"{
                "disabled": ["a"],
                "parameters": { "b": { "temperature": 0.5, "max_tokens": 2048 } },
                "regions": ["us-east-1"]
            }"#,
        )
        .unwrap();
        assert!(overrides.is_disabled("a"));
        let p = overrides.parameter_override("b").unwrap();
        assert_eq!(p.temperature, Some(0.5));
        assert_eq!(p.max_tokens, Some(2048));
        assert_eq!(overrides.regions.as_deref(), Some(&["us-east-1".to_string()][..]));
    }
}
