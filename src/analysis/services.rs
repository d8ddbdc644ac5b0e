use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use super::raw::{FoodLabel, RawAnalysisResponse};
use super::types::{MealAnalysis, NutritionFacts};

pub const UNKNOWN_FOOD: &str = "Unknown Food";
pub const NOT_AVAILABLE: &str = "N/A";

pub const GENERIC_SUGGESTIONS: [&str; 3] = [
    "Try to balance your meal with more vegetables and lean proteins",
    "Consider portion control and mindful eating",
    "Add more whole grains and fiber to your diet",
];

const CALORIE_LIMIT: f64 = 500.0;
const FAT_LIMIT_G: f64 = 15.0;
const UNHEALTHY_WORDS: [&str; 3] = ["fried", "cake", "dessert"];

/// Turn whatever the classification service returned into a `MealAnalysis`.
/// Never fails: unknown shapes fall back to defaults.
pub fn normalize(raw: &Value) -> MealAnalysis {
    analyze(RawAnalysisResponse::from_value(raw))
}

pub fn analyze(response: RawAnalysisResponse) -> MealAnalysis {
    let (label, nutrition, category) = match response {
        RawAnalysisResponse::Detailed {
            label,
            nutrition,
            category,
        } => (label, nutrition, category),
        RawAnalysisResponse::Simple { label, nutrition } => (label, nutrition, None),
        RawAnalysisResponse::Unrecognized => (FoodLabel::Unlabeled, None, None),
    };

    let primary_food_label = format_label(&label);
    let suggestions = suggestions_for(nutrition.as_ref());
    let is_unhealthy = is_unhealthy(&primary_food_label, nutrition.as_ref());
    debug!(label = %primary_food_label, has_nutrition = nutrition.is_some(), is_unhealthy, "normalized analysis");

    MealAnalysis {
        primary_food_label,
        nutrition,
        category,
        additional_labels: Vec::new(),
        suggestions,
        is_unhealthy,
    }
}

pub fn format_label(label: &FoodLabel) -> String {
    match label {
        FoodLabel::Text(s) | FoodLabel::Named(s) => s.replace('_', " "),
        FoodLabel::Unlabeled => UNKNOWN_FOOD.to_string(),
    }
}

pub fn suggestions_for(nutrition: Option<&NutritionFacts>) -> Vec<String> {
    match nutrition.and_then(|n| n.healthier_suggestion.as_deref()) {
        Some(s) => vec![s.to_string()],
        None => GENERIC_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
    }
}

/// Numeric checks apply only when nutrition data exists; the label check always applies.
pub fn is_unhealthy(label: &str, nutrition: Option<&NutritionFacts>) -> bool {
    let too_rich = nutrition.is_some_and(|n| {
        n.calories.is_some_and(|c| c > CALORIE_LIMIT) || n.fat_grams.is_some_and(|f| f > FAT_LIMIT_G)
    });
    let lower = label.to_lowercase();
    too_rich || UNHEALTHY_WORDS.iter().any(|w| lower.contains(w))
}

/// Display strings keyed by stat label: Calories, Carbs, Fats, Proteins.
pub fn stats_for(nutrition: Option<&NutritionFacts>) -> BTreeMap<String, String> {
    let calories = nutrition.and_then(|n| n.calories);
    let carbs = nutrition.and_then(|n| n.carbs_grams);
    let fat = nutrition.and_then(|n| n.fat_grams);
    let protein = nutrition.and_then(|n| n.protein_grams);

    BTreeMap::from([
        ("Calories".to_string(), plain(calories)),
        ("Carbs".to_string(), grams(carbs)),
        ("Fats".to_string(), grams(fat)),
        ("Proteins".to_string(), grams(protein)),
    ])
}

pub fn serving_size_for(nutrition: Option<&NutritionFacts>) -> String {
    nutrition
        .and_then(|n| n.serving_size.clone())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn plain(value: Option<f64>) -> String {
    value.map(display_number).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn grams(value: Option<f64>) -> String {
    value
        .map(|v| format!("{}g", display_number(v)))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// `600.0` renders as `600`, `12.5` stays `12.5`.
pub fn display_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
