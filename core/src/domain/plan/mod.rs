pub mod entities;
pub mod extractor;
pub mod ports;
pub mod prompt;
pub mod schema;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;

#[cfg(test)]
pub(crate) mod test_support {
    use serde_json::{Value, json};

    pub fn sample_plan_json() -> Value {
        json!({
            "do_this_first": "Prep overnight oats",
            "todays_plan": {
                "work": ["Finish the quarterly report"],
                "personal": ["Call Sam"],
                "errands": ["Pick up parcel"],
                "health_meals": ["Walk at lunch"]
            },
            "meals": [
                {
                    "name": "Overnight oats",
                    "type": "breakfast",
                    "prep_time_min": 5,
                    "low_upf": true,
                    "highlights_good": ["Slow-release energy"],
                    "highlights_caution": [],
                    "nutrition": {
                        "calories": 380,
                        "protein_g": 18,
                        "carbs_g": 52,
                        "fat_g": 10,
                        "fibre_g": 8
                    },
                    "ingredients": ["Oats", "Milk", "Berries"],
                    "steps": ["Mix", "Chill overnight"]
                },
                {
                    "name": "Lentil soup",
                    "type": "lunch",
                    "prep_time_min": 25,
                    "low_upf": true,
                    "highlights_good": ["High fibre"],
                    "highlights_caution": ["Watch the salt"],
                    "nutrition": {
                        "calories": 420,
                        "protein_g": 22,
                        "carbs_g": 55,
                        "fat_g": 9,
                        "fibre_g": 14
                    },
                    "ingredients": ["Red lentils", "Carrot", "Onion"],
                    "steps": ["Chop", "Simmer 20 minutes"]
                }
            ],
            "shopping_list": {
                "produce": ["Berries", "Carrot", "Onion"],
                "protein": [],
                "dairy": ["Milk"],
                "pantry": ["Oats", "Red lentils"],
                "other": []
            },
            "health_notes": ["Stay hydrated"]
        })
    }
}
