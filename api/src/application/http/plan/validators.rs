use std::borrow::Cow;

use healthflow_core::domain::plan::value_objects::{
    GeneratePlanInput, MISSING_TEXT_MESSAGE, has_enough_text,
};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct GeneratePlanRequest {
    /// Free-text notes about the day; at least three characters once trimmed.
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schema(example = "Busy day, gym at 6, need something quick for lunch")]
    #[validate(custom(function = validate_plan_text))]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Balanced")]
    pub diet: Option<String>,
    #[serde(default, rename = "lowUPF", skip_serializing_if = "Option::is_none")]
    pub low_upf: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Normal")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub favourites: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn validate_plan_text(text: &str) -> Result<(), ValidationError> {
    if !has_enough_text(text) {
        let mut err = ValidationError::new("text_too_short");
        err.message = Some(Cow::from(MISSING_TEXT_MESSAGE));
        return Err(err);
    }

    Ok(())
}

impl From<GeneratePlanRequest> for GeneratePlanInput {
    fn from(request: GeneratePlanRequest) -> Self {
        GeneratePlanInput {
            text: request.text,
            diet: request.diet,
            low_upf: request.low_upf,
            time: request.time,
            favourites: request.favourites,
        }
    }
}
