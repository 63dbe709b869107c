use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{common::entities::app_errors::CoreError, plan::entities::Plan};

pub const MIN_TEXT_LENGTH: usize = 3;
pub const MISSING_TEXT_MESSAGE: &str = "Missing text";

/// A single plan submission. Only `text` is checked; everything else is passed
/// through to the prompt as given.
///
/// Serializes to the request body accepted by the plan endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratePlanInput {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet: Option<String>,
    #[serde(default, rename = "lowUPF", skip_serializing_if = "Option::is_none")]
    pub low_upf: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub favourites: Vec<String>,
}

/// Whether the trimmed notes are long enough to plan from. Length is counted
/// in UTF-16 code units, the way browser clients count it.
pub fn has_enough_text(text: &str) -> bool {
    text.trim().encode_utf16().count() >= MIN_TEXT_LENGTH
}

impl GeneratePlanInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        if !has_enough_text(&self.text) {
            return Err(CoreError::Validation(MISSING_TEXT_MESSAGE.to_string()));
        }

        Ok(())
    }
}

/// Outcome of a successful generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPlan {
    /// The extracted JSON object, exactly as the model produced it.
    pub payload: Value,
    /// Typed view of the payload; `None` when validation is lenient.
    pub plan: Option<Plan>,
    pub attempts: u8,
}
