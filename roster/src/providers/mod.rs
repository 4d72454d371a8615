//! Per-provider descriptor generators.
//!
//! One independent module per upstream provider; each implements
//! [`crate::ModelGenerator`] and registers its active models. Shared
//! parameter archetypes come from [`crate::defaults`]. The build order is
//! fixed in [`crate::builder`], not here.

mod amazon;
mod anthropic;
mod cohere;
mod deepseek;
mod groq;
mod meta;
mod mistral;
mod openai;
mod sambanova;
mod stability;

pub use amazon::AmazonGenerator;
pub use anthropic::AnthropicGenerator;
pub use cohere::CohereGenerator;
pub use deepseek::DeepSeekGenerator;
pub use groq::GroqGenerator;
pub use meta::MetaGenerator;
pub use mistral::MistralGenerator;
pub use openai::OpenAiGenerator;
pub use sambanova::SambanovaGenerator;
pub use stability::StabilityGenerator;
