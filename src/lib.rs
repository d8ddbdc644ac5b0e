//! Meal scanning core: turns loosely-shaped food classification responses into
//! display-ready analyses and keeps a persisted history of saved meals.

pub mod analysis;
pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod meals;
pub mod state;
pub mod storage;

pub use analysis::{normalize, MealAnalysis, NutritionFacts, RawAnalysisResponse};
pub use error::StoreError;
pub use meals::{LoadedHistory, MealHistory, MealRecord, MealStore, SaveContext};
pub use storage::{KeyValueStore, MemoryStore};
