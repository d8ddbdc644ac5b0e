use serde_json::{Map, Value};

use super::types::NutritionFacts;

/// Candidate for the primary food name, as it appeared in the response.
#[derive(Debug, Clone, PartialEq)]
pub enum FoodLabel {
    /// A bare string, e.g. `"Fried_Chicken"`.
    Text(String),
    /// A mapping with a string `name` field.
    Named(String),
    Unlabeled,
}

/// The shapes the classification service is known to answer with.
#[derive(Debug, Clone, PartialEq)]
pub enum RawAnalysisResponse {
    /// `[[label, nutrition?], category]`
    Detailed {
        label: FoodLabel,
        nutrition: Option<NutritionFacts>,
        category: Option<Vec<String>>,
    },
    /// `[label, nutrition]`
    Simple {
        label: FoodLabel,
        nutrition: Option<NutritionFacts>,
    },
    Unrecognized,
}

impl RawAnalysisResponse {
    /// Classify an untyped response. First matching shape wins.
    pub fn from_value(raw: &Value) -> Self {
        let Some(items) = raw.as_array().filter(|items| items.len() >= 2) else {
            return Self::Unrecognized;
        };

        match &items[0] {
            Value::Array(inner) => Self::Detailed {
                label: inner
                    .first()
                    .map(FoodLabel::from_value)
                    .unwrap_or(FoodLabel::Unlabeled),
                nutrition: inner
                    .get(1)
                    .and_then(Value::as_object)
                    .filter(|map| map.contains_key("calories"))
                    .map(nutrition_from_map),
                category: category_from(&items[1]),
            },
            first => Self::Simple {
                label: FoodLabel::from_value(first),
                nutrition: items[1].as_object().map(nutrition_from_map),
            },
        }
    }
}

impl FoodLabel {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) if !s.is_empty() => Self::Text(s.clone()),
            Value::Object(map) => match map.get("name").and_then(Value::as_str) {
                Some(name) if !name.is_empty() => Self::Named(name.to_string()),
                _ => Self::Unlabeled,
            },
            _ => Self::Unlabeled,
        }
    }
}

fn nutrition_from_map(map: &Map<String, Value>) -> NutritionFacts {
    NutritionFacts {
        calories: number_field(map, "calories"),
        carbs_grams: number_field(map, "carbs_g"),
        fat_grams: number_field(map, "fat_g"),
        protein_grams: number_field(map, "protein_g"),
        serving_size: text_field(map, "serving_size"),
        healthier_suggestion: text_field(map, "healthier_suggestion"),
    }
}

// The service is not strict about numbers; "600" and 600 both occur.
fn number_field(map: &Map<String, Value>, key: &str) -> Option<f64> {
    let n = match map.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

fn text_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn category_from(value: &Value) -> Option<Vec<String>> {
    value.as_array().map(|items| {
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    })
}
