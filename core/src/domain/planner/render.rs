use std::fmt::Write;

use crate::domain::plan::entities::Plan;

fn push_list(out: &mut String, items: &[String]) {
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
}

/// Plain-text rendering of a plan, as shown on screen and sent to the printer.
pub fn render_plan(plan: &Plan, favourites: &[String]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Do This First");
    let _ = writeln!(out, "- {}", plan.do_this_first);

    let day = &plan.todays_plan;
    let sections = [
        ("Work", &day.work),
        ("Personal", &day.personal),
        ("Errands", &day.errands),
        ("Health & meals", &day.health_meals),
    ];
    if sections.iter().any(|(_, items)| !items.is_empty()) {
        let _ = writeln!(out, "\nToday's Plan");
        for (title, items) in sections.iter().filter(|(_, items)| !items.is_empty()) {
            let _ = writeln!(out, "{title}:");
            push_list(&mut out, items);
        }
    }

    if !plan.meals.is_empty() {
        let _ = writeln!(out, "\nMeals");
        for meal in &plan.meals {
            let saved = favourites.contains(&meal.favourite_key());
            let _ = writeln!(
                out,
                "{} - {} ({} min){}",
                meal.meal_type.to_string().to_uppercase(),
                meal.name,
                meal.prep_time_min,
                if saved { " [saved]" } else { "" }
            );
            let n = &meal.nutrition;
            let _ = writeln!(
                out,
                "  {} kcal, protein {}g, carbs {}g, fat {}g, fibre {}g",
                n.calories, n.protein_g, n.carbs_g, n.fat_g, n.fibre_g
            );
            push_list(&mut out, &meal.ingredients);
        }
    }

    let shopping = plan.shopping_list.to_text();
    if !shopping.is_empty() {
        let _ = writeln!(out, "\nShopping List");
        let _ = writeln!(out, "{shopping}");
    }

    if !plan.health_notes.is_empty() {
        let _ = writeln!(out, "\nHealth Notes");
        push_list(&mut out, &plan.health_notes);
    }

    out
}
