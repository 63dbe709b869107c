use crate::{
    domain::common::{HealthflowConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::llm::ProviderLLMClient,
};

pub type HealthflowService = Service<ProviderLLMClient>;

pub async fn create_service(config: HealthflowConfig) -> Result<HealthflowService, CoreError> {
    if config.llm.api_key.trim().is_empty() {
        return Err(CoreError::Validation(
            "an API key for the LLM provider is required".to_string(),
        ));
    }

    tracing::info!(
        provider = %config.llm.provider,
        max_attempts = config.generation.max_attempts,
        "Creating plan service"
    );

    let llm_client = ProviderLLMClient::from_config(&config.llm);

    Ok(Service::new(llm_client, config.generation))
}
