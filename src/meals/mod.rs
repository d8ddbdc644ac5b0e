pub mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub use repo::{LoadedHistory, MealStore, DEFAULT_HISTORY_KEY};
pub use repo_types::{MealHistory, MealRecord, SaveContext};

pub fn router() -> Router<AppState> {
    handlers::meals_routes()
}
