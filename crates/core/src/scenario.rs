//! Scenario overlay for what-if analysis.
//!
//! A scenario shifts hours and quality scores by fixed deltas, either for
//! every station or per station. The result is always a well-formed metrics
//! record: hours are floored at zero, scores clamped to 0-10, and
//! `labor_variance` re-derived.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{FairPricingMetrics, ServiceLine, Station, StationMetrics, WorldClassMetrics};

/// Upper bound of the QA and benchmark scale.
pub const MAX_QUALITY_SCORE: f64 = 10.0;

/// Deltas applied to one station's metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDeltas {
    /// Added to actual hours.
    #[serde(default, alias = "laborDelta")]
    pub labor_delta: f64,
    /// Added to planned hours.
    #[serde(default, alias = "timeDelta")]
    pub time_delta: f64,
    /// Added to the QA score and, when present, the benchmark.
    #[serde(default, alias = "qualityDelta")]
    pub quality_delta: f64,
}

impl ScenarioDeltas {
    pub const ZERO: ScenarioDeltas = ScenarioDeltas {
        labor_delta: 0.0,
        time_delta: 0.0,
        quality_delta: 0.0,
    };
}

/// Global deltas plus optional per-station replacements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub global: ScenarioDeltas,
    #[serde(default, alias = "byStation", skip_serializing_if = "BTreeMap::is_empty")]
    pub by_station: BTreeMap<String, ScenarioDeltas>,
}

impl ScenarioConfig {
    /// Deltas for `station_id`: its own entry when present, else the global set.
    pub fn deltas_for(&self, station_id: Option<&str>) -> ScenarioDeltas {
        station_id
            .and_then(|id| self.by_station.get(id))
            .copied()
            .unwrap_or(self.global)
    }
}

/// Apply `scenario` to one station's metrics, returning a new record.
///
/// A missing scenario applies zero deltas. Without a benchmark the
/// `standard_met` flag is carried over; with one it is re-derived as
/// `qa >= benchmark`. `performance_proof` is passed through untouched.
pub fn apply_scenario_to_metrics(
    metrics: &StationMetrics,
    scenario: Option<&ScenarioConfig>,
    station_id: Option<&str>,
) -> StationMetrics {
    let deltas = scenario
        .map(|s| s.deltas_for(station_id))
        .unwrap_or(ScenarioDeltas::ZERO);

    let fp = &metrics.fair_pricing;
    let fair_pricing = FairPricingMetrics::new(
        (fp.planned_hrs + deltas.time_delta).max(0.0),
        (fp.actual_hrs + deltas.labor_delta).max(0.0),
        fp.market_value,
    );

    let wc = &metrics.world_class;
    let internal_qa_score = clamp_score(wc.internal_qa_score + deltas.quality_delta);
    let industry_benchmark = wc
        .industry_benchmark
        .map(|b| clamp_score(b + deltas.quality_delta));
    let standard_met = match industry_benchmark {
        Some(benchmark) => internal_qa_score >= benchmark,
        None => wc.standard_met,
    };

    StationMetrics {
        fair_pricing,
        world_class: WorldClassMetrics {
            internal_qa_score,
            industry_benchmark,
            standard_met,
        },
        performance_proof: metrics.performance_proof.clone(),
    }
}

/// Apply `scenario` to every station, each looked up by its own id.
pub fn apply_scenario_to_service_line(
    line: &ServiceLine,
    scenario: Option<&ScenarioConfig>,
) -> ServiceLine {
    let nodes = line
        .nodes
        .iter()
        .map(|station| Station {
            metrics: apply_scenario_to_metrics(
                &station.metrics,
                scenario,
                Some(&station.station_id),
            ),
            ..station.clone()
        })
        .collect();

    tracing::debug!(
        service_line = %line.id,
        overrides = scenario.map_or(0, |s| s.by_station.len()),
        "applied scenario to service line"
    );

    ServiceLine {
        nodes,
        ..line.clone()
    }
}

fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, MAX_QUALITY_SCORE)
}
