pub mod dto;
pub mod handlers;
pub mod raw;
pub mod services;
pub mod types;

use crate::state::AppState;
use axum::Router;

pub use raw::{FoodLabel, RawAnalysisResponse};
pub use services::normalize;
pub use types::{MealAnalysis, NutritionFacts};

pub fn router() -> Router<AppState> {
    handlers::analysis_routes()
}
