use std::collections::BTreeMap;

use time::{format_description::FormatItem, macros::format_description, OffsetDateTime, UtcOffset};

use super::repo_types::{MealHistory, MealRecord, SaveContext};
use crate::analysis::{
    services::{serving_size_for, stats_for, NOT_AVAILABLE},
    MealAnalysis,
};

// "October 26, 2024"
const DISPLAY_DATE: &[FormatItem<'static>] =
    format_description!("[month repr:long] [day padding:none], [year]");

impl SaveContext {
    /// Context for a save happening now: millisecond timestamp id and a display date.
    pub fn now(image_reference: impl Into<String>, offset: UtcOffset) -> Self {
        Self::at(image_reference, OffsetDateTime::now_utc().to_offset(offset))
    }

    pub fn at(image_reference: impl Into<String>, at: OffsetDateTime) -> Self {
        let generated_id = (at.unix_timestamp_nanos() / 1_000_000).to_string();
        let timestamp_display = at
            .format(DISPLAY_DATE)
            .unwrap_or_else(|_| at.date().to_string());
        Self {
            image_reference: image_reference.into(),
            generated_id,
            timestamp_display,
        }
    }
}

pub fn build_record(analysis: &MealAnalysis, context: SaveContext) -> MealRecord {
    MealRecord {
        id: context.generated_id,
        title: analysis.primary_food_label.clone(),
        date: context.timestamp_display,
        image_reference: context.image_reference,
        is_healthy: !analysis.is_unhealthy,
        detected: analysis.detected(),
        suggestions: analysis.suggestions.clone(),
        stats: stats_for(analysis.nutrition.as_ref()),
        serving_size: serving_size_for(analysis.nutrition.as_ref()),
    }
}

/// Shown until the user saves a first meal.
pub fn sample_history() -> MealHistory {
    MealHistory::new(vec![
        sample(
            "sample1",
            "Spaghetti Bolognese",
            "October 26, 2024",
            "https://images.unsplash.com/photo-1551892374-ecf8985c9da3?w=400",
            ["560", "65g", "22g", "25g"],
            false,
        ),
        sample(
            "sample2",
            "Avocado Toast",
            "October 25, 2024",
            "https://images.unsplash.com/photo-1525351484163-7529414344d8?w=400",
            ["320", "30g", "20g", "8g"],
            true,
        ),
    ])
}

fn sample(
    id: &str,
    title: &str,
    date: &str,
    image: &str,
    [calories, carbs, fats, proteins]: [&str; 4],
    is_healthy: bool,
) -> MealRecord {
    let stats = BTreeMap::from([
        ("Calories".to_string(), calories.to_string()),
        ("Carbs".to_string(), carbs.to_string()),
        ("Fats".to_string(), fats.to_string()),
        ("Proteins".to_string(), proteins.to_string()),
    ]);
    MealRecord {
        id: id.to_string(),
        title: title.to_string(),
        date: date.to_string(),
        image_reference: image.to_string(),
        is_healthy,
        detected: Vec::new(),
        suggestions: Vec::new(),
        stats,
        serving_size: NOT_AVAILABLE.to_string(),
    }
}
