use crate::domain::plan::value_objects::GeneratePlanInput;

pub const SYSTEM_PROMPT: &str = r#"You are HealthFlow.

You must output ONLY valid JSON that matches the schema exactly.
No markdown. No extra keys. No commentary.

Goal:
Turn the user's input into ONE calm, clear daily plan plus meals plus shopping list.

Rules:
- Supportive, practical tone
- Short phrases
- No guilt, no pressure
- Focus on low-UPF, real food when requested
- No medical advice
- No extreme dieting
- Keep it realistic for one day
- Suggest exactly ONE priority action

Schema (must match exactly):
{
  "do_this_first": "string",
  "todays_plan": {
    "work": ["string"],
    "personal": ["string"],
    "errands": ["string"],
    "health_meals": ["string"]
  },
  "meals": [
    {
      "name": "string",
      "type": "breakfast|lunch|dinner|snack",
      "prep_time_min": number,
      "low_upf": boolean,
      "highlights_good": ["string"],
      "highlights_caution": ["string"],
      "nutrition": {
        "calories": number,
        "protein_g": number,
        "carbs_g": number,
        "fat_g": number,
        "fibre_g": number
      },
      "ingredients": ["string"],
      "steps": ["string"]
    }
  ],
  "shopping_list": {
    "produce": ["string"],
    "protein": ["string"],
    "dairy": ["string"],
    "pantry": ["string"],
    "other": ["string"]
  },
  "health_notes": ["string"]
}

Constraints:
- Use 2 to 4 meals total unless user asks otherwise.
- Each list should have 0 to 6 items max.
- prep_time_min: 5 to 60
- Nutrition numbers must be reasonable estimates."#;

/// Builds the user message sent next to [`SYSTEM_PROMPT`].
///
/// One line per field, in a fixed order. Absent or empty fields add no line.
pub fn build_user_context(input: &GeneratePlanInput) -> String {
    let mut lines = vec![format!("User notes: {}", input.text.trim())];

    if let Some(diet) = input.diet.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("Diet preference: {diet}"));
    }

    if let Some(low_upf) = input.low_upf {
        let flag = if low_upf { "Yes" } else { "No" };
        lines.push(format!("Low-UPF focus: {flag}"));
    }

    if let Some(time) = input.time.as_deref().filter(|t| !t.is_empty()) {
        lines.push(format!("Time available: {time}"));
    }

    if !input.favourites.is_empty() {
        lines.push(format!(
            "Favourites to prioritise where possible: {}",
            input.favourites.join(", ")
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_with_text_only() {
        let input = GeneratePlanInput {
            text: "Busy day, gym at 6".to_string(),
            ..Default::default()
        };

        assert_eq!(build_user_context(&input), "User notes: Busy day, gym at 6");
    }

    #[test]
    fn test_context_with_all_fields_in_order() {
        let input = GeneratePlanInput {
            text: "Long meetings".to_string(),
            diet: Some("High protein".to_string()),
            low_upf: Some(false),
            time: Some("Quick".to_string()),
            favourites: vec!["lunch: Soup".to_string(), "dinner: Curry".to_string()],
        };

        assert_eq!(
            build_user_context(&input),
            "User notes: Long meetings\n\
             Diet preference: High protein\n\
             Low-UPF focus: No\n\
             Time available: Quick\n\
             Favourites to prioritise where possible: lunch: Soup, dinner: Curry"
        );
    }

    #[test]
    fn test_context_skips_empty_optional_values() {
        let input = GeneratePlanInput {
            text: "Rest day".to_string(),
            diet: Some(String::new()),
            low_upf: Some(true),
            time: None,
            favourites: vec![],
        };

        assert_eq!(
            build_user_context(&input),
            "User notes: Rest day\nLow-UPF focus: Yes"
        );
    }

    #[test]
    fn test_system_prompt_names_every_top_level_field() {
        for field in [
            "do_this_first",
            "todays_plan",
            "meals",
            "shopping_list",
            "health_notes",
        ] {
            assert!(SYSTEM_PROMPT.contains(field), "missing {field}");
        }
    }
}
