use std::collections::BTreeMap;

use serde::Serialize;

use super::services::{serving_size_for, stats_for};
use super::types::MealAnalysis;

/// Breakdown screen payload: the analysis plus its rendered stats.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisView {
    #[serde(flatten)]
    pub analysis: MealAnalysis,
    pub healthy: bool,
    pub nutrition_available: bool,
    pub stats: BTreeMap<String, String>,
    pub serving_size: String,
}

impl From<MealAnalysis> for AnalysisView {
    fn from(analysis: MealAnalysis) -> Self {
        let stats = stats_for(analysis.nutrition.as_ref());
        let serving_size = serving_size_for(analysis.nutrition.as_ref());
        Self {
            healthy: !analysis.is_unhealthy,
            nutrition_available: analysis.nutrition.is_some(),
            stats,
            serving_size,
            analysis,
        }
    }
}
