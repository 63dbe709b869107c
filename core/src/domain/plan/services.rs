use serde_json::Value;
use tracing::{info, warn};

use crate::domain::{
    common::{PlanValidation, entities::app_errors::CoreError, services::Service},
    plan::{
        entities::Plan,
        extractor::{ExtractionError, extract_json_object, validate_plan},
        ports::{LLMClient, PlanService},
        prompt::{SYSTEM_PROMPT, build_user_context},
        value_objects::{GeneratePlanInput, GeneratedPlan},
    },
};

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    fn extract_plan(&self, raw_output: &str) -> Result<(Value, Option<Plan>), ExtractionError> {
        let payload = extract_json_object(raw_output)?;

        let plan = match self.generation.plan_validation {
            PlanValidation::Strict => Some(validate_plan(&payload)?),
            PlanValidation::Lenient => None,
        };

        Ok((payload, plan))
    }
}

impl<LLM> PlanService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn generate_plan(&self, input: GeneratePlanInput) -> Result<GeneratedPlan, CoreError> {
        // 1. Validate input
        input.validate()?;

        // 2. Build user context
        let user_context = build_user_context(&input);

        // 3. Generate and extract, one attempt after another
        let max_attempts = self.generation.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            // Upstream errors are not retried
            let raw_output = self
                .llm_client
                .generate(
                    SYSTEM_PROMPT.to_string(),
                    user_context.clone(),
                    self.generation.max_output_tokens,
                )
                .await?;

            match self.extract_plan(&raw_output) {
                Ok((payload, plan)) => {
                    info!(attempt, "Plan generated");
                    return Ok(GeneratedPlan {
                        payload,
                        plan,
                        attempts: attempt,
                    });
                }
                Err(e) => {
                    warn!(attempt, max_attempts, error = %e, "Discarding unusable model output");
                }
            }
        }

        Err(CoreError::ExtractionFailure {
            attempts: max_attempts,
        })
    }
}
