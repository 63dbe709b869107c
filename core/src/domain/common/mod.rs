use std::{fmt, str::FromStr};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct HealthflowConfig {
    pub llm: LLMConfig,
    pub generation: GenerationConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub provider: LLMProvider,
    pub api_key: String,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LLMProvider {
    OpenAi,
    Gemini,
}

impl LLMProvider {
    pub fn default_model(&self) -> &'static str {
        match self {
            LLMProvider::OpenAi => "gpt-4.1-mini",
            LLMProvider::Gemini => "gemini-2.0-flash",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            LLMProvider::OpenAi => "https://api.openai.com/v1",
            LLMProvider::Gemini => "https://generativelanguage.googleapis.com/v1beta",
        }
    }
}

impl FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "openai" => Ok(LLMProvider::OpenAi),
            "gemini" => Ok(LLMProvider::Gemini),
            other => Err(format!("unknown LLM provider: {other}")),
        }
    }
}

impl fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LLMProvider::OpenAi => write!(f, "openai"),
            LLMProvider::Gemini => write!(f, "gemini"),
        }
    }
}

/// How strictly the extracted JSON is checked before being returned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlanValidation {
    /// Extracted JSON must deserialize into a [`Plan`](crate::domain::plan::entities::Plan).
    #[default]
    Strict,
    /// Any syntactically valid JSON value is accepted.
    Lenient,
}

impl FromStr for PlanValidation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(PlanValidation::Strict),
            "lenient" => Ok(PlanValidation::Lenient),
            other => Err(format!("unknown plan validation mode: {other}")),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GenerationConfig {
    pub max_attempts: u8,
    pub max_output_tokens: u32,
    pub plan_validation: PlanValidation,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            max_output_tokens: 1100,
            plan_validation: PlanValidation::Strict,
        }
    }
}
