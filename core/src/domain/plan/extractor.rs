use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::domain::plan::entities::Plan;

/// Why a single attempt's output could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("no JSON object found in model output")]
    NoJsonObject,

    #[error("model output is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("model output does not match the plan schema: {0}")]
    SchemaMismatch(String),
}

/// Pulls the outermost `{...}` span out of free-form model text and parses it.
///
/// The span runs from the first `{` to the last `}`. Prose or code fences
/// around the object are ignored; braces in prose before the object are not.
pub fn extract_json_object(text: &str) -> Result<Value, ExtractionError> {
    let start = text.find('{').ok_or(ExtractionError::NoJsonObject)?;
    let end = text.rfind('}').ok_or(ExtractionError::NoJsonObject)?;

    if end <= start {
        return Err(ExtractionError::NoJsonObject);
    }

    serde_json::from_str(&text[start..=end])
        .map_err(|e| ExtractionError::InvalidJson(e.to_string()))
}

/// Checks an extracted value against the [`Plan`] shape.
///
/// Unknown keys are tolerated; missing or mistyped fields are not.
pub fn validate_plan(value: &Value) -> Result<Plan, ExtractionError> {
    Plan::deserialize(value).map_err(|e| ExtractionError::SchemaMismatch(e.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::plan::test_support::sample_plan_json;

    #[test]
    fn test_extracts_object_surrounded_by_prose() {
        let value = extract_json_object("Sure! {\"a\":1} thanks").unwrap();
        assert_eq!(value, json!({ "a": 1 }));
    }

    #[test]
    fn test_extracts_object_inside_code_fence() {
        let text = "```json\n{\"do_this_first\": \"Drink water\"}\n```";
        let value = extract_json_object(text).unwrap();
        assert_eq!(value, json!({ "do_this_first": "Drink water" }));
    }

    #[test]
    fn test_nested_braces_use_outermost_span() {
        let value = extract_json_object("Here you go: {\"a\":{\"b\":[1,2]}} Enjoy!").unwrap();
        assert_eq!(value, json!({ "a": { "b": [1, 2] } }));
    }

    #[test]
    fn test_no_braces_fails() {
        assert_eq!(
            extract_json_object("no json here"),
            Err(ExtractionError::NoJsonObject)
        );
        assert_eq!(extract_json_object(""), Err(ExtractionError::NoJsonObject));
    }

    #[test]
    fn test_only_opening_brace_fails() {
        assert_eq!(
            extract_json_object("{ almost"),
            Err(ExtractionError::NoJsonObject)
        );
    }

    #[test]
    fn test_closing_before_opening_fails() {
        assert_eq!(extract_json_object("} {"), Err(ExtractionError::NoJsonObject));
    }

    #[test]
    fn test_unparseable_span_fails() {
        assert!(matches!(
            extract_json_object("{not: json}"),
            Err(ExtractionError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_prose_brace_before_object_misfires() {
        let text = "Use {braces} carefully: {\"a\":1}";
        assert!(matches!(
            extract_json_object(text),
            Err(ExtractionError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_validate_accepts_full_plan() {
        let plan = validate_plan(&sample_plan_json()).unwrap();
        assert_eq!(plan.do_this_first, "Prep overnight oats");
        assert_eq!(plan.meals.len(), 2);
    }

    #[test]
    fn test_validate_tolerates_extra_keys() {
        let mut value = sample_plan_json();
        value["mood"] = json!("calm");
        assert!(validate_plan(&value).is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        assert!(matches!(
            validate_plan(&json!({ "a": 1 })),
            Err(ExtractionError::SchemaMismatch(_))
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_meal_type() {
        let mut value = sample_plan_json();
        value["meals"][0]["type"] = json!("brunch");
        assert!(matches!(
            validate_plan(&value),
            Err(ExtractionError::SchemaMismatch(_))
        ));
    }
}
