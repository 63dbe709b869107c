use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// A full day plan as produced by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Plan {
    pub do_this_first: String,
    pub todays_plan: DayPlan,
    pub meals: Vec<Meal>,
    pub shopping_list: ShoppingList,
    pub health_notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DayPlan {
    pub work: Vec<String>,
    pub personal: Vec<String>,
    pub errands: Vec<String>,
    pub health_meals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Meal {
    pub name: String,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub prep_time_min: f64,
    pub low_upf: bool,
    pub highlights_good: Vec<String>,
    pub highlights_caution: Vec<String>,
    pub nutrition: Nutrition,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl Meal {
    /// Key under which this meal is stored in the favourites set.
    pub fn favourite_key(&self) -> String {
        format!("{}: {}", self.meal_type, self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        };
        f.write_str(value)
    }
}

/// Nutrition estimates. Values come straight from the model and are not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Nutrition {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fibre_g: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingList {
    pub produce: Vec<String>,
    pub protein: Vec<String>,
    pub dairy: Vec<String>,
    pub pantry: Vec<String>,
    pub other: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShoppingCategory {
    Produce,
    Protein,
    Dairy,
    Pantry,
    Other,
}

impl ShoppingCategory {
    pub const ORDER: [ShoppingCategory; 5] = [
        ShoppingCategory::Produce,
        ShoppingCategory::Protein,
        ShoppingCategory::Dairy,
        ShoppingCategory::Pantry,
        ShoppingCategory::Other,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ShoppingCategory::Produce => "Produce",
            ShoppingCategory::Protein => "Protein",
            ShoppingCategory::Dairy => "Dairy",
            ShoppingCategory::Pantry => "Pantry",
            ShoppingCategory::Other => "Other",
        }
    }
}

impl ShoppingList {
    pub fn items(&self, category: ShoppingCategory) -> &[String] {
        match category {
            ShoppingCategory::Produce => &self.produce,
            ShoppingCategory::Protein => &self.protein,
            ShoppingCategory::Dairy => &self.dairy,
            ShoppingCategory::Pantry => &self.pantry,
            ShoppingCategory::Other => &self.other,
        }
    }

    /// Reads a shopping list from an unchecked payload. Missing or malformed
    /// categories count as empty; non-string items are skipped.
    pub fn from_value(value: &Value) -> Option<ShoppingList> {
        let object = value.as_object()?;
        let category = |key: &str| -> Vec<String> {
            object
                .get(key)
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default()
        };

        Some(ShoppingList {
            produce: category("produce"),
            protein: category("protein"),
            dairy: category("dairy"),
            pantry: category("pantry"),
            other: category("other"),
        })
    }

    /// Flattens the list into copyable text, one block per non-empty category.
    pub fn to_text(&self) -> String {
        ShoppingCategory::ORDER
            .iter()
            .filter(|category| !self.items(**category).is_empty())
            .map(|category| {
                format!(
                    "{}:\n- {}",
                    category.title(),
                    self.items(*category).join("\n- ")
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
