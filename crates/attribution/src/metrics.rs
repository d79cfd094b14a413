//! Click-through rate, lift, and edge construction.

use lineboard_core::round_to;
use serde::{Deserialize, Serialize};

use crate::model::{AttributionEdge, AttributionModel, EdgeMetrics};

/// `flowed / impressions` to two decimals; 0 with no impressions.
pub fn compute_click_through_rate(flowed: f64, impressions: f64) -> f64 {
    if impressions <= 0.0 {
        return 0.0;
    }
    round_to(flowed / impressions, 2)
}

/// Difference from baseline to two decimals.
///
/// Without a positive baseline any positive rate counts as a full lift of 1.
pub fn compute_lift(current: f64, baseline: f64) -> f64 {
    if baseline <= 0.0 {
        return if current > 0.0 { 1.0 } else { 0.0 };
    }
    round_to(current - baseline, 2)
}

/// Raw counts observed for one touchpoint pair in one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeObservation {
    pub id: String,
    pub source: String,
    pub target: String,
    pub period: String,
    pub users_flowed: f64,
    pub impressions: f64,
    /// Click-through rate of the comparison period, when one was measured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_rate: Option<f64>,
    #[serde(default)]
    pub attribution_model: AttributionModel,
}

/// Build an edge from raw counts. Lift is only set when a baseline exists.
pub fn create_attribution_edge(observation: EdgeObservation) -> AttributionEdge {
    let click_through_rate =
        compute_click_through_rate(observation.users_flowed, observation.impressions);
    let lift_vs_baseline = observation
        .baseline_rate
        .map(|baseline| compute_lift(click_through_rate, baseline));

    AttributionEdge {
        id: observation.id,
        source: observation.source,
        target: observation.target,
        period: observation.period,
        metrics: EdgeMetrics {
            users_flowed: observation.users_flowed,
            click_through_rate,
            lift_vs_baseline,
        },
        attribution_model: observation.attribution_model,
    }
}
