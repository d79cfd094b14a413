//! ServiceLineReport: derived health, rollups and routes for one line.
//!
//! The report collects every derived value for a service line and extracts
//! notable findings (warnings, info) for summary display.

use lineboard_core::{RagStatus, Rollup, StationHealth};
use lineboard_paths::PathResult;
use serde::Serialize;

/// Severity level for a report finding.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum FindingSeverity {
    Info,
    Warning,
}

/// A notable finding from the report.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// Which part of the report raised it: "health", "override" or "route".
    pub analysis: String,
    pub severity: FindingSeverity,
    pub message: String,
    pub station_id: Option<String>,
    pub details: Option<serde_json::Value>,
}

/// Ranked routes between two requested stations.
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    pub from: String,
    pub to: String,
    pub paths: Vec<PathResult>,
    pub truncated: bool,
    pub max_paths: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceLineReport {
    pub service_line_id: String,
    pub service_line_name: String,
    pub scenario_applied: bool,
    /// Rollup of the line as analyzed, scenario included.
    pub rollup: Rollup,
    /// Rollup before the scenario; only set when one was applied.
    pub baseline_rollup: Option<Rollup>,
    pub stations: Vec<StationHealth>,
    pub route: Option<RouteReport>,
    pub findings: Vec<Finding>,
}

impl ServiceLineReport {
    /// Extract findings from the populated station health and route.
    pub fn extract_findings(&mut self) {
        self.findings.clear();

        for station in &self.stations {
            match station.effective_rag {
                RagStatus::Red => self.findings.push(Finding {
                    analysis: "health".to_string(),
                    severity: FindingSeverity::Warning,
                    message: format!("Station '{}' is red", station.station_id),
                    station_id: Some(station.station_id.clone()),
                    details: Some(serde_json::json!({
                        "variance_pct": station.variance_pct,
                        "qa_gap": station.qa_gap,
                    })),
                }),
                RagStatus::Amber => self.findings.push(Finding {
                    analysis: "health".to_string(),
                    severity: FindingSeverity::Info,
                    message: format!("Station '{}' is amber", station.station_id),
                    station_id: Some(station.station_id.clone()),
                    details: Some(serde_json::json!({
                        "variance_pct": station.variance_pct,
                        "qa_gap": station.qa_gap,
                    })),
                }),
                RagStatus::Green => {}
            }

            // Manual status masking a worse computed one
            if station.overridden && station.computed_rag > station.effective_rag {
                self.findings.push(Finding {
                    analysis: "override".to_string(),
                    severity: FindingSeverity::Info,
                    message: format!(
                        "Station '{}' is set to {} but its metrics compute {}",
                        station.station_id, station.effective_rag, station.computed_rag
                    ),
                    station_id: Some(station.station_id.clone()),
                    details: Some(serde_json::json!({
                        "effective_rag": station.effective_rag,
                        "computed_rag": station.computed_rag,
                    })),
                });
            }
        }

        if let Some(ref route) = self.route {
            if route.paths.is_empty() {
                self.findings.push(Finding {
                    analysis: "route".to_string(),
                    severity: FindingSeverity::Warning,
                    message: format!("No path from '{}' to '{}'", route.from, route.to),
                    station_id: None,
                    details: None,
                });
            }
            if route.truncated {
                self.findings.push(Finding {
                    analysis: "route".to_string(),
                    severity: FindingSeverity::Warning,
                    message: format!(
                        "Path enumeration from '{}' to '{}' truncated at {} paths",
                        route.from, route.to, route.max_paths
                    ),
                    station_id: None,
                    details: Some(serde_json::json!({
                        "path_count": route.paths.len(),
                        "max_paths": route.max_paths,
                    })),
                });
            }
        }

        // Sort findings for deterministic output
        self.findings.sort_by(|a, b| {
            a.analysis
                .cmp(&b.analysis)
                .then_with(|| a.severity.cmp(&b.severity))
                .then_with(|| a.message.cmp(&b.message))
        });
    }

    /// Number of findings at `severity`.
    pub fn count(&self, severity: FindingSeverity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }
}
