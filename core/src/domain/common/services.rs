use crate::domain::{common::GenerationConfig, plan::ports::LLMClient};

#[derive(Clone)]
pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) llm_client: LLM,
    pub(crate) generation: GenerationConfig,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: LLM, generation: GenerationConfig) -> Self {
        Self {
            llm_client,
            generation,
        }
    }
}
