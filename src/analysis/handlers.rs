use axum::{routing::post, Json, Router};
use serde_json::Value;
use tracing::{info, instrument};

use super::dto::AnalysisView;
use super::services::normalize;
use crate::state::AppState;

pub fn analysis_routes() -> Router<AppState> {
    Router::new().route("/analysis", post(analyze_response))
}

/// POST /analysis: body is the raw classification response, whatever its shape.
#[instrument(skip(raw))]
pub async fn analyze_response(Json(raw): Json<Value>) -> Json<AnalysisView> {
    let analysis = normalize(&raw);
    info!(label = %analysis.primary_food_label, is_unhealthy = analysis.is_unhealthy, "analysis normalized");
    Json(AnalysisView::from(analysis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn analyze_renders_stats_and_badge() {
        let raw = json!([["Green_Salad", {"calories": 150, "protein_g": 4}], ["salad"]]);
        let Json(view) = analyze_response(Json(raw)).await;
        assert_eq!(view.analysis.primary_food_label, "Green Salad");
        assert!(view.healthy);
        assert!(view.nutrition_available);
        assert_eq!(view.stats["Calories"], "150");
        assert_eq!(view.stats["Carbs"], "N/A");

        let body = serde_json::to_value(&view).unwrap();
        assert_eq!(body["primaryFoodLabel"], "Green Salad");
        assert_eq!(body["servingSize"], "N/A");
        assert_eq!(body["stats"]["Proteins"], "4g");
        assert_eq!(body["nutrition"]["proteinGrams"], 4.0);
        assert_eq!(body["nutrition"]["carbsGrams"], serde_json::Value::Null);
        assert!(body["nutrition"].get("protein_g").is_none());
    }

    #[tokio::test]
    async fn analyze_unknown_shape_reports_no_nutrition() {
        let Json(view) = analyze_response(Json(json!({"error": "model offline"}))).await;
        assert_eq!(view.analysis.primary_food_label, "Unknown Food");
        assert!(!view.nutrition_available);
        assert_eq!(view.analysis.suggestions.len(), 3);
    }
}
