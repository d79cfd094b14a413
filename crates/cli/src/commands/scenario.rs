use std::path::Path;

use lineboard_core::{
    apply_scenario_to_service_line, compute_service_line_rollup, compute_station_rag, Rollup,
    ScenarioConfig, ServiceLine,
};
use serde::Serialize;

use super::{print_rollup, rag_label};
use crate::input::load_or_exit;
use crate::{print_json, OutputFormat};

/// JSON shape of `lineboard scenario`.
#[derive(Serialize)]
struct ScenarioOutput<'a> {
    scenario: &'a ScenarioConfig,
    service_line: &'a ServiceLine,
    rollup: &'a Rollup,
    baseline_rollup: &'a Rollup,
}

pub(crate) fn cmd_scenario(
    line_path: &Path,
    scenario_path: &Path,
    output: OutputFormat,
    quiet: bool,
) {
    let line: ServiceLine = load_or_exit(line_path, "service line", output, quiet);
    let scenario: ScenarioConfig = load_or_exit(scenario_path, "scenario", output, quiet);

    for station_id in scenario.by_station.keys() {
        if !line.contains_station(station_id) {
            tracing::warn!(station = %station_id, "scenario names a station not in the line");
        }
    }

    let adjusted = apply_scenario_to_service_line(&line, Some(&scenario));
    let baseline_rollup = compute_service_line_rollup(&line);
    let rollup = compute_service_line_rollup(&adjusted);

    if quiet {
        return;
    }
    match output {
        OutputFormat::Json => print_json(&ScenarioOutput {
            scenario: &scenario,
            service_line: &adjusted,
            rollup: &rollup,
            baseline_rollup: &baseline_rollup,
        }),
        OutputFormat::Text => {
            println!("Scenario: {} ({})", line.name, line.id);
            println!();
            println!("Baseline:");
            print_rollup(&baseline_rollup);
            println!();
            println!("With scenario:");
            print_rollup(&rollup);
            println!();
            println!("Station changes:");
            let mut changed = 0;
            for (before, after) in line.nodes.iter().zip(&adjusted.nodes) {
                let was = compute_station_rag(&before.metrics, before.rag_status);
                let now = compute_station_rag(&after.metrics, after.rag_status);
                if was != now {
                    changed += 1;
                    println!(
                        "  {}: {} -> {}",
                        after.station_id,
                        rag_label(was),
                        rag_label(now)
                    );
                }
            }
            if changed == 0 {
                println!("  (no status changes)");
            }
        }
    }
}
