//! Static reference data: workout categories, the exercise template
//! library and MET-based calorie estimates.

use crate::models::{Category, CategoryInfo, DurationUnit, ExerciseTemplate};

pub const DEFAULT_WEIGHT_KG: f64 = 70.0;

pub fn categories() -> Vec<CategoryInfo> {
    Category::ALL
        .into_iter()
        .map(|id| {
            let (name, icon) = match id {
                Category::Cardio => ("Cardio", "ri-run-line"),
                Category::Strength => ("Strength Training", "ri-boxing-line"),
                Category::Flexibility => ("Flexibility", "ri-yoga-line"),
                Category::Hiit => ("HIIT", "ri-heart-pulse-line"),
                Category::Sports => ("Sports", "ri-basketball-line"),
                Category::Other => ("Other", "ri-fitness-line"),
            };
            CategoryInfo { id, name, icon }
        })
        .collect()
}

const fn template(
    id: &'static str,
    name: &'static str,
    category: Category,
    description: &'static str,
    calories: u32,
) -> ExerciseTemplate {
    ExerciseTemplate {
        id,
        name,
        category,
        description,
        calories,
        is_template: true,
    }
}

static LIBRARY: [ExerciseTemplate; 9] = [
    template("lib-1", "Running", Category::Cardio, "Outdoor cardio activity", 500),
    template("lib-2", "Push-ups", Category::Strength, "Upper body strength exercise", 100),
    template("lib-3", "Burpees", Category::Hiit, "Full body HIIT exercise", 600),
    template("lib-4", "Squats", Category::Strength, "Lower body strength exercise", 200),
    template("lib-5", "Cycling", Category::Cardio, "Indoor or outdoor cycling", 400),
    template("lib-6", "Yoga", Category::Flexibility, "Mind-body flexibility training", 150),
    template("lib-7", "Swimming", Category::Cardio, "Full body water-based exercise", 450),
    template("lib-8", "Bench Press", Category::Strength, "Upper body strength training", 180),
    template("lib-9", "Jumping Rope", Category::Cardio, "High-intensity cardio exercise", 350),
];

/// Templates matching `category` and a case-insensitive `search` over
/// name and description. `None` for either means no filter.
pub fn search_library(category: Option<Category>, search: Option<&str>) -> Vec<&'static ExerciseTemplate> {
    let needle = search.map(str::to_lowercase).unwrap_or_default();
    LIBRARY
        .iter()
        .filter(|item| category.is_none_or(|c| item.category == c))
        .filter(|item| {
            needle.is_empty()
                || item.name.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Metabolic equivalent of task per category.
pub fn met(category: Category) -> f64 {
    match category {
        Category::Cardio => 8.0,
        Category::Strength => 4.0,
        Category::Flexibility => 2.5,
        Category::Hiit => 10.0,
        Category::Sports => 6.0,
        Category::Other => 4.0,
    }
}

/// kcal = MET x weight (kg) x hours, rounded to the nearest whole number.
pub fn estimate_calories(category: Category, duration: u32, unit: DurationUnit, weight_kg: f64) -> u64 {
    let hours = unit.to_minutes(duration) as f64 / 60.0;
    (met(category) * weight_kg * hours).round().max(0.0) as u64
}
