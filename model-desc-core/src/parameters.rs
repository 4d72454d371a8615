//! Generation parameter contract: supported parameters, defaults, and bounds.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A bounded floating-point parameter: `min <= default <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    pub min: f64,
    pub default: f64,
    pub max: f64,
}

impl ParameterRange {
    /// Create a new range. Bounds are checked by [`ParameterRange::validate`],
    /// not here, so descriptor construction reports one uniform error type.
    pub fn new(min: f64, default: f64, max: f64) -> Self {
        Self { min, default, max }
    }

    /// Check `min <= default <= max` and that all bounds are finite.
    pub fn validate(&self, parameter: &str) -> Result<(), ValidationError> {
        let finite = self.min.is_finite() && self.default.is_finite() && self.max.is_finite();
        if !finite || self.min > self.default || self.default > self.max {
            return Err(ValidationError::InvalidRange {
                parameter: parameter.to_string(),
                min: self.min,
                default: self.default,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// A bounded integer parameter: `min <= default <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: u32,
    pub default: u32,
    pub max: u32,
}

impl IntRange {
    pub fn new(min: u32, default: u32, max: u32) -> Self {
        Self { min, default, max }
    }

    /// Check `min <= default <= max`.
    pub fn validate(&self, parameter: &str) -> Result<(), ValidationError> {
        if self.min > self.default || self.default > self.max {
            return Err(ValidationError::InvalidRange {
                parameter: parameter.to_string(),
                min: f64::from(self.min),
                default: f64::from(self.default),
                max: f64::from(self.max),
            });
        }
        Ok(())
    }
}

/// Which generation parameters a model supports, with defaults and bounds.
///
/// Absent fields mean the parameter is not supported (embedding models
/// typically support none). Drives UI controls and request validation.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<ParameterRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<ParameterRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<IntRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<IntRange>,
    /// Classifier-free guidance scale, for image generation models.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cfg_scale: Option<ParameterRange>,
    /// Maximum number of stop sequences accepted per request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_sequences_max: Option<u32>,
}

impl ModelParameters {
    /// An empty parameter contract (no supported parameters).
    pub fn none() -> Self {
        Self::default()
    }

    /// Validate every present range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(r) = &self.temperature {
            r.validate("temperature")?;
        }
        if let Some(r) = &self.top_p {
            r.validate("top_p")?;
        }
        if let Some(r) = &self.top_k {
            r.validate("top_k")?;
        }
        if let Some(r) = &self.max_tokens {
            r.validate("max_tokens")?;
        }
        if let Some(r) = &self.cfg_scale {
            r.validate("cfg_scale")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_range_passes() {
        assert!(ParameterRange::new(0.0, 0.7, 1.0).validate("temperature").is_ok());
        assert!(IntRange::new(1, 2048, 8192).validate("max_tokens").is_ok());
    }

    #[test]
    fn default_outside_bounds_fails() {
        let err = ParameterRange::new(0.0, 1.5, 1.0)
            .validate("temperature")
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidRange { ref parameter, .. } if parameter == "temperature"
        ));
    }

    #[test]
    fn inverted_bounds_fail() {
        assert!(IntRange::new(100, 50, 10).validate("top_k").is_err());
    }

    #[test]
    fn non_finite_bound_fails() {
        assert!(ParameterRange::new(0.0, 0.5, f64::NAN)
            .validate("top_p")
            .is_err());
    }

    #[test]
    fn empty_parameters_validate() {
        assert!(ModelParameters::none().validate().is_ok());
    }

    #[test]
    fn validate_reports_offending_parameter() {
        let params = ModelParameters {
            temperature: Some(ParameterRange::new(0.0, 0.7, 1.0)),
            top_p: Some(ParameterRange::new(0.5, 0.2, 1.0)),
            ..ModelParameters::default()
        };
        let err = params.validate().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidRange { ref parameter, .. } if parameter == "top_p"
        ));
    }

    #[test]
    fn serde_skips_absent_parameters() {
        let json = serde_json::to_string(&ModelParameters::none()).unwrap();
        assert_eq!(json, "{}");
    }
}
