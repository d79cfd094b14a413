//! Service-line rollup.
//!
//! One pass over the stations of a line, summing hours and quality scores
//! and folding every station's effective status into the worst one.

use serde::{Deserialize, Serialize};

use crate::health::compute_station_rag;
use crate::model::{RagStatus, ServiceLine};

/// Aggregate metrics for one service line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rollup {
    pub total_planned_hrs: f64,
    pub total_actual_hrs: f64,
    pub total_variance_hrs: f64,
    pub variance_pct: f64,
    pub avg_qa_score: f64,
    pub stations_at_standard: usize,
    pub total_stations: usize,
    pub overall_rag: RagStatus,
}

/// Roll up every station of `line`.
///
/// `variance_pct` is computed on the totals, not averaged per station. Unlike
/// the per-station rule, a line with zero total planned hours reports 0%
/// even when hours were spent.
pub fn compute_service_line_rollup(line: &ServiceLine) -> Rollup {
    let mut rollup = Rollup::default();
    let mut qa_sum = 0.0;

    for station in &line.nodes {
        let fp = &station.metrics.fair_pricing;
        let wc = &station.metrics.world_class;

        rollup.total_planned_hrs += fp.planned_hrs;
        rollup.total_actual_hrs += fp.actual_hrs;
        rollup.total_variance_hrs += fp.labor_variance;
        qa_sum += wc.internal_qa_score;
        if wc.standard_met {
            rollup.stations_at_standard += 1;
        }
        rollup.total_stations += 1;
        rollup.overall_rag = rollup
            .overall_rag
            .worst(compute_station_rag(&station.metrics, station.rag_status));
    }

    if rollup.total_planned_hrs > 0.0 {
        rollup.variance_pct = (rollup.total_actual_hrs - rollup.total_planned_hrs)
            / rollup.total_planned_hrs
            * 100.0;
    }
    if rollup.total_stations > 0 {
        rollup.avg_qa_score = qa_sum / rollup.total_stations as f64;
    }

    tracing::debug!(
        service_line = %line.id,
        stations = rollup.total_stations,
        overall_rag = %rollup.overall_rag,
        "computed service line rollup"
    );

    rollup
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FairPricingMetrics, Station, StationMetrics, WorldClassMetrics};
    use std::collections::BTreeMap;

    fn station(id: &str, planned: f64, actual: f64, qa: f64, met: bool) -> Station {
        Station {
            station_id: id.to_string(),
            name: id.to_uppercase(),
            description: None,
            metrics: StationMetrics {
                fair_pricing: FairPricingMetrics::new(planned, actual, None),
                world_class: WorldClassMetrics {
                    internal_qa_score: qa,
                    industry_benchmark: None,
                    standard_met: met,
                },
                performance_proof: BTreeMap::new(),
            },
            rag_status: None,
            position: None,
        }
    }

    fn line(nodes: Vec<Station>) -> ServiceLine {
        ServiceLine {
            id: "sl".to_string(),
            name: "Line".to_string(),
            description: None,
            nodes,
            edges: vec![],
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn empty_line_is_all_zero_and_green() {
        let rollup = compute_service_line_rollup(&line(vec![]));
        assert_eq!(rollup, Rollup::default());
        assert_eq!(rollup.overall_rag, RagStatus::Green);
    }

    #[test]
    fn variance_uses_totals_not_station_average() {
        let rollup = compute_service_line_rollup(&line(vec![
            station("a", 10.0, 11.0, 8.0, true),
            station("b", 20.0, 18.0, 7.0, true),
            station("c", 0.0, 5.0, 6.0, false),
        ]));
        assert_eq!(rollup.total_planned_hrs, 30.0);
        assert_eq!(rollup.total_actual_hrs, 34.0);
        assert_eq!(rollup.total_variance_hrs, 4.0);
        // 4 / 30; the per-station average would be (10 - 10 + 100) / 3.
        assert!((rollup.variance_pct - 13.333_333).abs() < 1e-3);
        assert_eq!(rollup.stations_at_standard, 2);
        assert_eq!(rollup.total_stations, 3);
        assert_eq!(rollup.avg_qa_score, 7.0);
        assert_eq!(rollup.overall_rag, RagStatus::Red);
    }

    #[test]
    fn zero_planned_totals_report_zero_pct() {
        let rollup = compute_service_line_rollup(&line(vec![station("a", 0.0, 5.0, 8.0, true)]));
        assert_eq!(rollup.variance_pct, 0.0);
        // The station itself is still red by the per-station rule.
        assert_eq!(rollup.overall_rag, RagStatus::Red);
    }

    #[test]
    fn overrides_feed_overall_status() {
        let mut a = station("a", 10.0, 10.0, 8.0, true);
        a.rag_status = Some(RagStatus::Amber);
        let b = station("b", 10.0, 10.0, 8.0, true);
        let rollup = compute_service_line_rollup(&line(vec![a, b]));
        assert_eq!(rollup.overall_rag, RagStatus::Amber);
    }
}
