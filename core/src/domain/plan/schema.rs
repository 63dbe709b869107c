use serde_json::json;

fn string_list() -> serde_json::Value {
    json!({ "type": "array", "items": { "type": "string" } })
}

/// Returns the JSON schema for plan responses
pub fn plan_json_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "do_this_first": { "type": "string" },
            "todays_plan": {
                "type": "object",
                "properties": {
                    "work": string_list(),
                    "personal": string_list(),
                    "errands": string_list(),
                    "health_meals": string_list()
                },
                "required": ["work", "personal", "errands", "health_meals"]
            },
            "meals": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "type": {
                            "type": "string",
                            "enum": ["breakfast", "lunch", "dinner", "snack"]
                        },
                        "prep_time_min": { "type": "number" },
                        "low_upf": { "type": "boolean" },
                        "highlights_good": string_list(),
                        "highlights_caution": string_list(),
                        "nutrition": {
                            "type": "object",
                            "properties": {
                                "calories": { "type": "number" },
                                "protein_g": { "type": "number" },
                                "carbs_g": { "type": "number" },
                                "fat_g": { "type": "number" },
                                "fibre_g": { "type": "number" }
                            },
                            "required": ["calories", "protein_g", "carbs_g", "fat_g", "fibre_g"]
                        },
                        "ingredients": string_list(),
                        "steps": string_list()
                    },
                    "required": [
                        "name", "type", "prep_time_min", "low_upf", "highlights_good",
                        "highlights_caution", "nutrition", "ingredients", "steps"
                    ]
                }
            },
            "shopping_list": {
                "type": "object",
                "properties": {
                    "produce": string_list(),
                    "protein": string_list(),
                    "dairy": string_list(),
                    "pantry": string_list(),
                    "other": string_list()
                },
                "required": ["produce", "protein", "dairy", "pantry", "other"]
            },
            "health_notes": string_list()
        },
        "required": [
            "do_this_first", "todays_plan", "meals", "shopping_list", "health_notes"
        ]
    })
}
