use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    plan::value_objects::{GeneratePlanInput, GeneratedPlan},
};

/// Client for a hosted text-generation model.
pub trait LLMClient: Send + Sync {
    /// Runs one completion and returns the model's output text.
    fn generate(
        &self,
        system_prompt: String,
        user_context: String,
        max_output_tokens: u32,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for plan generation
pub trait PlanService: Send + Sync {
    fn generate_plan(
        &self,
        input: GeneratePlanInput,
    ) -> impl Future<Output = Result<GeneratedPlan, CoreError>> + Send;
}
