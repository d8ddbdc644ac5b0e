use serde::{Deserialize, Serialize};

/// Nutrition estimate attached to a classification. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionFacts {
    pub calories: Option<f64>,
    pub carbs_grams: Option<f64>,
    pub fat_grams: Option<f64>,
    pub protein_grams: Option<f64>,
    pub serving_size: Option<String>,
    pub healthier_suggestion: Option<String>,
}

/// Display model for one scanned meal. Built per scan, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealAnalysis {
    pub primary_food_label: String,
    pub nutrition: Option<NutritionFacts>,
    pub category: Option<Vec<String>>,
    pub additional_labels: Vec<String>,
    pub suggestions: Vec<String>,
    pub is_unhealthy: bool,
}

impl MealAnalysis {
    /// All detected labels, primary first.
    pub fn detected(&self) -> Vec<String> {
        std::iter::once(self.primary_food_label.clone())
            .chain(self.additional_labels.iter().cloned())
            .collect()
    }
}
