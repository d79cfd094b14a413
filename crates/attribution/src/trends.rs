//! Grouping attribution edges across periods.

use std::collections::BTreeMap;

use lineboard_core::round_to;
use serde::{Deserialize, Serialize};

use crate::model::{AttributionEdge, EdgeMetrics};

/// All edges measured for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSnapshot {
    pub period: String,
    pub edges: Vec<AttributionEdge>,
}

/// Metrics for each `source→target` pair, in snapshot order.
pub fn aggregate_edges(snapshots: &[EdgeSnapshot]) -> BTreeMap<String, Vec<EdgeMetrics>> {
    let mut grouped: BTreeMap<String, Vec<EdgeMetrics>> = BTreeMap::new();
    for snapshot in snapshots {
        for edge in &snapshot.edges {
            grouped
                .entry(edge.pair_key())
                .or_default()
                .push(edge.metrics.clone());
        }
    }
    grouped
}

/// Mean click-through rate to two decimals; 0 for no samples.
pub fn average_click_through_rate(metrics: &[EdgeMetrics]) -> f64 {
    if metrics.is_empty() {
        return 0.0;
    }
    let total: f64 = metrics.iter().map(|m| m.click_through_rate).sum();
    round_to(total / metrics.len() as f64, 2)
}

/// One touchpoint pair summarized over every period it was measured in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeTrend {
    pub key: String,
    pub source: String,
    pub target: String,
    pub periods: Vec<String>,
    pub average_click_through_rate: f64,
    pub total_users_flowed: f64,
}

/// Per-pair trend records, ordered by pair key.
pub fn edge_trends(snapshots: &[EdgeSnapshot]) -> Vec<EdgeTrend> {
    let mut trends: BTreeMap<String, (EdgeTrend, Vec<EdgeMetrics>)> = BTreeMap::new();
    for snapshot in snapshots {
        for edge in &snapshot.edges {
            let (trend, samples) = trends.entry(edge.pair_key()).or_insert_with(|| {
                (
                    EdgeTrend {
                        key: edge.pair_key(),
                        source: edge.source.clone(),
                        target: edge.target.clone(),
                        periods: Vec::new(),
                        average_click_through_rate: 0.0,
                        total_users_flowed: 0.0,
                    },
                    Vec::new(),
                )
            });
            if trend.periods.last() != Some(&snapshot.period) {
                trend.periods.push(snapshot.period.clone());
            }
            trend.total_users_flowed += edge.metrics.users_flowed;
            samples.push(edge.metrics.clone());
        }
    }

    trends
        .into_values()
        .map(|(mut trend, samples)| {
            trend.average_click_through_rate = average_click_through_rate(&samples);
            trend
        })
        .collect()
}
