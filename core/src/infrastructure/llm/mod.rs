pub mod gemini_client;
pub mod openai_client;

pub use gemini_client::GeminiLLMClient;
pub use openai_client::OpenAiLLMClient;

use crate::domain::{
    common::{LLMConfig, LLMProvider, entities::app_errors::CoreError},
    plan::{ports::LLMClient, schema::plan_json_schema},
};

/// The LLM client selected by configuration.
#[derive(Debug, Clone)]
pub enum ProviderLLMClient {
    OpenAi(OpenAiLLMClient),
    Gemini(GeminiLLMClient),
}

impl ProviderLLMClient {
    pub fn from_config(config: &LLMConfig) -> Self {
        let model = config
            .model
            .clone()
            .unwrap_or_else(|| config.provider.default_model().to_string());
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| config.provider.default_base_url().to_string());

        match config.provider {
            LLMProvider::OpenAi => {
                ProviderLLMClient::OpenAi(OpenAiLLMClient::new(config.api_key.clone(), model, base_url))
            }
            LLMProvider::Gemini => ProviderLLMClient::Gemini(
                GeminiLLMClient::new(config.api_key.clone(), model, base_url)
                    .with_response_schema(plan_json_schema()),
            ),
        }
    }
}

impl LLMClient for ProviderLLMClient {
    async fn generate(
        &self,
        system_prompt: String,
        user_context: String,
        max_output_tokens: u32,
    ) -> Result<String, CoreError> {
        match self {
            ProviderLLMClient::OpenAi(client) => {
                client
                    .generate(system_prompt, user_context, max_output_tokens)
                    .await
            }
            ProviderLLMClient::Gemini(client) => {
                client
                    .generate(system_prompt, user_context, max_output_tokens)
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_selects_provider() {
        let openai = ProviderLLMClient::from_config(&LLMConfig {
            provider: LLMProvider::OpenAi,
            api_key: "key".to_string(),
            model: None,
            base_url: None,
        });
        assert!(matches!(openai, ProviderLLMClient::OpenAi(_)));

        let gemini = ProviderLLMClient::from_config(&LLMConfig {
            provider: LLMProvider::Gemini,
            api_key: "key".to_string(),
            model: Some("gemini-1.5-pro".to_string()),
            base_url: None,
        });
        assert!(matches!(gemini, ProviderLLMClient::Gemini(_)));
    }
}
