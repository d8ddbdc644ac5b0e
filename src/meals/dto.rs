use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::repo_types::MealRecord;

#[derive(Debug, Serialize)]
pub struct MealHistoryResponse {
    pub meals: Vec<MealRecord>,
    /// Set when stored history could not be read and samples are shown instead.
    pub warning: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SaveMealRequest {
    /// Local URI or remote URL of the captured photo.
    pub image: String,
    /// Raw classification response for that photo.
    pub response: Value,
}
