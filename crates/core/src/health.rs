//! Health status engine.
//!
//! Derives a [`RagStatus`] from each metric family and composes them into a
//! station status. Thresholds:
//!
//! | family       | red                               | amber            |
//! |--------------|-----------------------------------|------------------|
//! | fair pricing | variance > 20%                    | variance > 10%   |
//! | world class  | standard not met, or qa gap < -1  | qa gap < 0       |
//!
//! Being under budget is always green, however far under.

use serde::Serialize;

use crate::model::{
    FairPricingMetrics, RagStatus, ServiceLine, Station, StationMetrics, WorldClassMetrics,
};

/// Variance percentage above which fair pricing is red.
pub const VARIANCE_RED_PCT: f64 = 20.0;
/// Variance percentage above which fair pricing is amber.
pub const VARIANCE_AMBER_PCT: f64 = 10.0;
/// QA gap below which world class is red.
pub const QA_GAP_RED: f64 = -1.0;

/// Percentage by which actual hours exceed planned hours.
///
/// With no planned hours, any actual spend counts as 100% over budget and
/// no spend as 0%.
pub fn compute_variance_pct(fair_pricing: &FairPricingMetrics) -> f64 {
    let planned = fair_pricing.planned_hrs;
    let actual = fair_pricing.actual_hrs;
    if planned == 0.0 {
        return if actual > 0.0 { 100.0 } else { 0.0 };
    }
    (actual - planned) / planned * 100.0
}

/// QA score minus benchmark; a missing benchmark counts as met (gap 0).
pub fn compute_qa_gap(world_class: &WorldClassMetrics) -> f64 {
    match world_class.industry_benchmark {
        Some(benchmark) => world_class.internal_qa_score - benchmark,
        None => 0.0,
    }
}

pub fn compute_fair_pricing_rag(fair_pricing: &FairPricingMetrics) -> RagStatus {
    let variance_pct = compute_variance_pct(fair_pricing);
    if variance_pct > VARIANCE_RED_PCT {
        RagStatus::Red
    } else if variance_pct > VARIANCE_AMBER_PCT {
        RagStatus::Amber
    } else {
        RagStatus::Green
    }
}

/// `standard_met == false` is red regardless of the numeric gap.
pub fn compute_world_class_rag(world_class: &WorldClassMetrics) -> RagStatus {
    if !world_class.standard_met {
        return RagStatus::Red;
    }
    let gap = compute_qa_gap(world_class);
    if gap < QA_GAP_RED {
        RagStatus::Red
    } else if gap < 0.0 {
        RagStatus::Amber
    } else {
        RagStatus::Green
    }
}

/// Most severe status present; green when there is none.
pub fn worst_rag<I>(statuses: I) -> RagStatus
where
    I: IntoIterator<Item = RagStatus>,
{
    statuses
        .into_iter()
        .fold(RagStatus::Green, RagStatus::worst)
}

/// Status computed from metrics alone, ignoring any manual override.
pub fn compute_metrics_rag(metrics: &StationMetrics) -> RagStatus {
    worst_rag([
        compute_fair_pricing_rag(&metrics.fair_pricing),
        compute_world_class_rag(&metrics.world_class),
    ])
}

/// Effective station status: an explicit status wins outright.
pub fn compute_station_rag(metrics: &StationMetrics, explicit: Option<RagStatus>) -> RagStatus {
    match explicit {
        Some(status) => status,
        None => compute_metrics_rag(metrics),
    }
}

/// Per-station breakdown of every derived health value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationHealth {
    pub station_id: String,
    pub name: String,
    pub variance_pct: f64,
    pub qa_gap: f64,
    pub fair_pricing_rag: RagStatus,
    pub world_class_rag: RagStatus,
    pub computed_rag: RagStatus,
    pub effective_rag: RagStatus,
    pub overridden: bool,
}

pub fn station_health(station: &Station) -> StationHealth {
    let metrics = &station.metrics;
    let computed_rag = compute_metrics_rag(metrics);
    StationHealth {
        station_id: station.station_id.clone(),
        name: station.name.clone(),
        variance_pct: compute_variance_pct(&metrics.fair_pricing),
        qa_gap: compute_qa_gap(&metrics.world_class),
        fair_pricing_rag: compute_fair_pricing_rag(&metrics.fair_pricing),
        world_class_rag: compute_world_class_rag(&metrics.world_class),
        computed_rag,
        effective_rag: compute_station_rag(metrics, station.rag_status),
        overridden: station.rag_status.is_some(),
    }
}

/// Health breakdown for every station, in service-line order.
pub fn service_line_health(line: &ServiceLine) -> Vec<StationHealth> {
    line.nodes.iter().map(station_health).collect()
}
