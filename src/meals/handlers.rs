use axum::{
    extract::{DefaultBodyLimit, Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    routing::{delete, get},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use super::dto::{MealHistoryResponse, SaveMealRequest};
use super::repo_types::{MealRecord, SaveContext};
use crate::{analysis::normalize, error::StoreError, state::AppState};

pub fn meals_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", get(list_meals).post(save_meal))
        .route("/meals/:id", delete(delete_meal))
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024)) // 2MB
}

#[instrument(skip(state))]
pub async fn list_meals(State(state): State<AppState>) -> Json<MealHistoryResponse> {
    let loaded = state.meals.load_all().await;
    let warning = loaded.warning.map(|e| {
        warn!(error = %e, "serving sample history");
        e.to_string()
    });
    Json(MealHistoryResponse {
        meals: loaded.history.into_records(),
        warning,
    })
}

/// POST /meals { image, response }
#[instrument(skip(state, body))]
pub async fn save_meal(
    State(state): State<AppState>,
    Json(body): Json<SaveMealRequest>,
) -> Result<(StatusCode, HeaderMap, Json<MealRecord>), (StatusCode, String)> {
    if body.image.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "image is required".into()));
    }

    let analysis = normalize(&body.response);
    let context = SaveContext::now(body.image, state.config.display_offset);
    let record = state
        .meals
        .save(&analysis, context)
        .await
        .map_err(store_failure)?;

    let mut headers = HeaderMap::new();
    if let Ok(location) = HeaderValue::from_str(&format!("/api/v1/meals/{}", record.id)) {
        headers.insert(header::LOCATION, location);
    }

    info!(id = %record.id, title = %record.title, "meal created");
    Ok((StatusCode::CREATED, headers, Json(record)))
}

#[instrument(skip(state))]
pub async fn delete_meal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<MealRecord>>, (StatusCode, String)> {
    let remaining = state.meals.delete(&id).await.map_err(store_failure)?;
    Ok(Json(remaining.into_records()))
}

fn store_failure(e: StoreError) -> (StatusCode, String) {
    error!(error = %e, "meal store operation failed");
    let status = if e.is_persistence() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn list_on_fresh_state_returns_samples() {
        let state = AppState::fake();
        let Json(body) = list_meals(State(state)).await;
        assert_eq!(body.meals.len(), 2);
        assert!(body.warning.is_none());
    }

    #[tokio::test]
    async fn save_then_list_then_delete() {
        let state = AppState::fake();
        let request = SaveMealRequest {
            image: "file:///cache/photo.jpg".into(),
            response: json!([["Chocolate_Cake", {"calories": 450, "fat_g": 18}], ["dessert"]]),
        };

        let (status, headers, Json(record)) = save_meal(State(state.clone()), Json(request))
            .await
            .expect("save succeeds");
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(record.title, "Chocolate Cake");
        assert!(!record.is_healthy);
        assert_eq!(
            headers.get(header::LOCATION).unwrap(),
            &format!("/api/v1/meals/{}", record.id)
        );

        let Json(listed) = list_meals(State(state.clone())).await;
        assert_eq!(listed.meals[0], record);
        assert_eq!(listed.meals.len(), 3);

        let Json(remaining) = delete_meal(State(state), Path(record.id.clone()))
            .await
            .expect("delete succeeds");
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|m| m.id != record.id));
    }

    #[tokio::test]
    async fn save_rejects_blank_image() {
        let request = SaveMealRequest {
            image: "  ".into(),
            response: json!(null),
        };
        let err = save_meal(State(AppState::fake()), Json(request))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn persistence_failures_map_to_service_unavailable() {
        let (status, msg) = store_failure(StoreError::Persistence(anyhow::anyhow!("disk full")));
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(msg.contains("disk full"));
    }
}
