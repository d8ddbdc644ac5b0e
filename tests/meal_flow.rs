//! Scan → save → list → delete through the public API, using the in-memory store.

use std::sync::Arc;

use mealscan::{normalize, MealStore, MemoryStore, SaveContext};
use serde_json::json;

fn context(id: &str) -> SaveContext {
    SaveContext {
        image_reference: format!("file:///scans/{id}.jpg"),
        generated_id: id.to_string(),
        timestamp_display: "March 3, 2025".to_string(),
    }
}

#[tokio::test]
async fn scan_save_list_delete() {
    let store = MealStore::new(Arc::new(MemoryStore::new()), "mealHistory");

    let first = store.load_all().await;
    assert!(first.warning.is_none());
    let samples: Vec<String> = first.history.records().iter().map(|r| r.id.clone()).collect();
    assert_eq!(samples, vec!["sample1", "sample2"]);

    let apple = normalize(&json!(["Apple", null]));
    let fries = normalize(&json!([
        ["French_Fries", {"calories": 365, "fat_g": 17, "carbs_g": 48, "protein_g": 4}],
        ["fast food", "fried"]
    ]));
    assert!(!apple.is_unhealthy);
    assert!(fries.is_unhealthy);

    store.save(&apple, context("100")).await.expect("save apple");
    let saved = store.save(&fries, context("200")).await.expect("save fries");
    assert_eq!(saved.stats["Fats"], "17g");
    assert_eq!(saved.stats["Calories"], "365");

    let listed = store.load_all().await.history;
    let ids: Vec<&str> = listed.records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["200", "100", "sample1", "sample2"]);

    let apple_record = &listed.records()[1];
    assert_eq!(apple_record.title, "Apple");
    assert!(apple_record.stats.values().all(|v| v == "N/A"));
    assert_eq!(apple_record.serving_size, "N/A");

    let after = store.delete("100").await.expect("delete apple");
    let ids: Vec<&str> = after.records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["200", "sample1", "sample2"]);

    let unchanged = store.delete("missing").await.expect("noop delete");
    assert_eq!(unchanged, after);
}

#[tokio::test]
async fn stored_blob_uses_app_field_names() {
    let kv = Arc::new(MemoryStore::new());
    let store = MealStore::new(kv.clone(), "mealHistory");
    store
        .save(&normalize(&json!(null)), context("7"))
        .await
        .expect("save");

    use mealscan::KeyValueStore;
    let blob = kv.get("mealHistory").await.unwrap().expect("blob written");
    let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(value[0]["id"], "7");
    assert_eq!(value[0]["title"], "Unknown Food");
    assert_eq!(value[0]["image"], "file:///scans/7.jpg");
    assert_eq!(value[0]["isHealthy"], true);
    assert_eq!(value[0]["servingSize"], "N/A");
    assert_eq!(value.as_array().unwrap().len(), 3);
}
