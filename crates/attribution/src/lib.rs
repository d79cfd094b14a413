//! lineboard-attribution: insights over the touchpoint attribution graph.
//!
//! Edges between marketing touchpoints carry a measured flow and
//! click-through rate per period. This crate derives those rates from raw
//! counts, picks out the best-converting path and the main bridge
//! touchpoint, scores supply/demand gaps, and groups edges across periods.

pub mod gap;
pub mod insights;
pub mod metrics;
pub mod model;
pub mod trends;

pub use gap::{
    build_gap_opportunity, compute_demand_ratio_gap_score, compute_gap_score,
    rank_gap_opportunities, recommend_action,
};
pub use insights::{
    compute_snapshot_insights, compute_snapshot_insights_with_depth, find_biggest_bridge,
    find_highest_conversion_path, SnapshotInsights, DEFAULT_MAX_DEPTH,
};
pub use metrics::{
    compute_click_through_rate, compute_lift, create_attribution_edge, EdgeObservation,
};
pub use model::{
    pair_key, AttributionEdge, AttributionModel, EdgeMetrics, GapInput, GapOpportunity, Trend,
};
pub use trends::{aggregate_edges, average_click_through_rate, edge_trends, EdgeSnapshot, EdgeTrend};
