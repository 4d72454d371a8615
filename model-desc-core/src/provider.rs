//! Upstream providers that host models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The upstream vendor/service that hosts a model.
///
/// Serialized form is the lowercase id (`"amazon"`, `"stability"`, ...), the
/// same string [`Provider::id`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Amazon,
    Anthropic,
    Meta,
    Mistral,
    Cohere,
    #[serde(rename = "stability")]
    StabilityAi,
    OpenAi,
    Groq,
    Sambanova,
    DeepSeek,
}

impl Provider {
    /// Stable lowercase identifier, matching the serialized form.
    pub fn id(&self) -> &'static str {
        match self {
            Provider::Amazon => "amazon",
            Provider::Anthropic => "anthropic",
            Provider::Meta => "meta",
            Provider::Mistral => "mistral",
            Provider::Cohere => "cohere",
            Provider::StabilityAi => "stability",
            Provider::OpenAi => "openai",
            Provider::Groq => "groq",
            Provider::Sambanova => "sambanova",
            Provider::DeepSeek => "deepseek",
        }
    }

    /// Human-readable display name.
    pub fn label(&self) -> &'static str {
        match self {
            Provider::Amazon => "Amazon",
            Provider::Anthropic => "Anthropic",
            Provider::Meta => "Meta",
            Provider::Mistral => "Mistral AI",
            Provider::Cohere => "Cohere",
            Provider::StabilityAi => "Stability AI",
            Provider::OpenAi => "OpenAI",
            Provider::Groq => "Groq",
            Provider::Sambanova => "SambaNova",
            Provider::DeepSeek => "DeepSeek",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned by [`Provider::from_str`] for an unrecognized provider id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown provider: {0}")]
pub struct UnknownProvider(pub String);

impl FromStr for Provider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "amazon" => Ok(Provider::Amazon),
            "anthropic" => Ok(Provider::Anthropic),
            "meta" => Ok(Provider::Meta),
            "mistral" => Ok(Provider::Mistral),
            "cohere" => Ok(Provider::Cohere),
            "stability" => Ok(Provider::StabilityAi),
            "openai" => Ok(Provider::OpenAi),
            "groq" => Ok(Provider::Groq),
            "sambanova" => Ok(Provider::Sambanova),
            "deepseek" => Ok(Provider::DeepSeek),
            other => Err(UnknownProvider(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_id() {
        assert_eq!(Provider::StabilityAi.to_string(), "stability");
        assert_eq!(Provider::OpenAi.to_string(), "openai");
        assert_eq!(Provider::DeepSeek.to_string(), "deepseek");
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("Anthropic".parse::<Provider>(), Ok(Provider::Anthropic));
        assert_eq!("OPENAI".parse::<Provider>(), Ok(Provider::OpenAi));
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "aether".parse::<Provider>().unwrap_err();
        assert_eq!(err, UnknownProvider("aether".to_string()));
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&Provider::StabilityAi).unwrap();
        assert_eq!(json, "\"stability\"");
        let parsed: Provider = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Provider::StabilityAi);
    }
}
