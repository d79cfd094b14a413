//! Touchpoint attribution records.

use serde::{Deserialize, Serialize};

/// How credit for a conversion is distributed across touchpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributionModel {
    FirstTouch,
    #[default]
    LastTouch,
    Linear,
    TimeDecay,
}

/// Flow measured along one edge in one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeMetrics {
    pub users_flowed: f64,
    /// Share of exposed users that moved along the edge, 0-1.
    pub click_through_rate: f64,
    /// Absent when no baseline was measured; not the same as zero lift.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lift_vs_baseline: Option<f64>,
}

/// Directed flow between two touchpoints for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributionEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub period: String,
    pub metrics: EdgeMetrics,
    #[serde(default)]
    pub attribution_model: AttributionModel,
}

impl AttributionEdge {
    /// Key grouping the same source/target pair across periods.
    pub fn pair_key(&self) -> String {
        pair_key(&self.source, &self.target)
    }
}

pub fn pair_key(source: &str, target: &str) -> String {
    format!("{}→{}", source, target)
}

/// Direction of search demand for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Rising,
    Stable,
    Declining,
}

/// Raw demand and supply measured for a touchpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapInput {
    pub touchpoint_id: String,
    pub search_demand: f64,
    pub supply_count: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_potential: Option<f64>,
}

/// A scored supply/demand gap with the action it calls for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapOpportunity {
    pub touchpoint_id: String,
    pub search_demand: f64,
    pub supply_count: f64,
    /// 0 (fully supplied) to 1 (no supply at all).
    pub gap_score: f64,
    pub recommended_action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_potential: Option<f64>,
}
