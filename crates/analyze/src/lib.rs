//! lineboard-analyze: one-call health report for a service line.
//!
//! The analyzer checks metrics are finite, applies an optional what-if
//! scenario, then derives per-station health, the rollup and the ranked
//! routes between two stations. Findings summarize what needs attention.

pub mod error;
pub mod report;

use lineboard_core::{
    apply_scenario_to_service_line, compute_service_line_rollup, service_line_health,
    ScenarioConfig, ServiceLine,
};
use lineboard_paths::{station_route, DEFAULT_MAX_PATHS};

pub use error::AnalyzeError;
pub use report::{Finding, FindingSeverity, RouteReport, ServiceLineReport};

/// What to include in a report beyond health and rollup.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub scenario: Option<ScenarioConfig>,
    /// `(from, to)` station ids to route between.
    pub route: Option<(String, String)>,
    pub max_paths: usize,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        AnalyzeOptions {
            scenario: None,
            route: None,
            max_paths: DEFAULT_MAX_PATHS,
        }
    }
}

/// Build the full report for `line`.
///
/// Health, rollup and routes are computed on the scenario-adjusted line.
/// The unadjusted rollup is kept as `baseline_rollup` for comparison.
pub fn analyze_service_line(
    line: &ServiceLine,
    options: &AnalyzeOptions,
) -> Result<ServiceLineReport, AnalyzeError> {
    line.ensure_finite()?;

    if let Some((from, to)) = &options.route {
        for station_id in [from, to] {
            if !line.contains_station(station_id) {
                return Err(AnalyzeError::UnknownStation {
                    service_line: line.id.clone(),
                    station_id: station_id.clone(),
                });
            }
        }
    }

    let adjusted = options
        .scenario
        .as_ref()
        .map(|scenario| apply_scenario_to_service_line(line, Some(scenario)));
    let effective = adjusted.as_ref().unwrap_or(line);

    let route = options.route.as_ref().map(|(from, to)| {
        let search = station_route(effective, from, to, options.max_paths);
        RouteReport {
            from: from.clone(),
            to: to.clone(),
            paths: search.paths,
            truncated: search.truncated,
            max_paths: options.max_paths,
        }
    });

    let mut report = ServiceLineReport {
        service_line_id: line.id.clone(),
        service_line_name: line.name.clone(),
        scenario_applied: adjusted.is_some(),
        rollup: compute_service_line_rollup(effective),
        baseline_rollup: adjusted
            .as_ref()
            .map(|_| compute_service_line_rollup(line)),
        stations: service_line_health(effective),
        route,
        findings: Vec::new(),
    };

    report.extract_findings();

    tracing::debug!(
        service_line = %line.id,
        findings = report.findings.len(),
        overall = %report.rollup.overall_rag,
        "analyzed service line"
    );

    Ok(report)
}
