//! Supply/demand gap scoring.
//!
//! Two formulas are kept side by side because different views consume them
//! and they disagree numerically for the same inputs:
//!
//! - [`compute_gap_score`] measures supply against a coverage target of 10%
//!   of demand. This is the score persisted on [`GapOpportunity`].
//! - [`compute_demand_ratio_gap_score`] is a continuous `1 - 1/ratio` curve
//!   over the demand-to-supply ratio.

use lineboard_core::round_to;

use crate::model::{GapInput, GapOpportunity};

/// Share of demand that counts as fully supplied.
pub const COVERAGE_TARGET: f64 = 0.1;

/// Gap score at or above which new supply should be launched.
pub const LAUNCH_THRESHOLD: f64 = 0.7;
/// Gap score at or above which existing supply should be expanded.
pub const EXPAND_THRESHOLD: f64 = 0.4;

/// Shortfall against the coverage target, 0-1, two decimals.
///
/// No demand is no gap; demand with no supply at all is a full gap.
pub fn compute_gap_score(demand: f64, supply: f64) -> f64 {
    if demand <= 0.0 {
        return 0.0;
    }
    if supply <= 0.0 {
        return 1.0;
    }
    let ideal_supply = demand * COVERAGE_TARGET;
    // subnormal demand underflows to zero here
    if ideal_supply <= 0.0 {
        return 0.0;
    }
    round_to((ideal_supply - supply).max(0.0) / ideal_supply, 2)
}

/// `1 - supply/demand` once demand exceeds supply, two decimals.
pub fn compute_demand_ratio_gap_score(demand: f64, supply: f64) -> f64 {
    if demand <= 0.0 {
        return 0.0;
    }
    if supply <= 0.0 {
        return 1.0;
    }
    let ratio = demand / supply;
    if ratio <= 1.0 {
        return 0.0;
    }
    round_to(1.0 - 1.0 / ratio, 2)
}

pub fn recommend_action(gap_score: f64) -> &'static str {
    if gap_score >= LAUNCH_THRESHOLD {
        "Launch new supply: demand far exceeds coverage"
    } else if gap_score >= EXPAND_THRESHOLD {
        "Expand existing supply"
    } else if gap_score > 0.0 {
        "Monitor and optimize listings"
    } else {
        "Maintain current coverage"
    }
}

/// Score a measured gap and attach its recommended action.
pub fn build_gap_opportunity(input: GapInput) -> GapOpportunity {
    let gap_score = compute_gap_score(input.search_demand, input.supply_count);
    GapOpportunity {
        touchpoint_id: input.touchpoint_id,
        search_demand: input.search_demand,
        supply_count: input.supply_count,
        gap_score,
        recommended_action: recommend_action(gap_score).to_string(),
        category: input.category,
        trend: input.trend,
        revenue_potential: input.revenue_potential,
    }
}

/// Largest gaps first, then highest demand; otherwise input order.
pub fn rank_gap_opportunities(gaps: &[GapOpportunity]) -> Vec<GapOpportunity> {
    let mut ranked = gaps.to_vec();
    ranked.sort_by(|a, b| {
        b.gap_score
            .total_cmp(&a.gap_score)
            .then(b.search_demand.total_cmp(&a.search_demand))
    });
    ranked
}
