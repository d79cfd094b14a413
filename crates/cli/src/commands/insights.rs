use std::path::Path;

use lineboard_attribution::{
    build_gap_opportunity, compute_snapshot_insights_with_depth, AttributionEdge, GapInput,
    GapOpportunity,
};

use crate::input::load_or_exit;
use crate::{print_json, OutputFormat};

pub(crate) fn cmd_insights(
    edges_path: &Path,
    gaps_path: Option<&Path>,
    max_depth: usize,
    output: OutputFormat,
    quiet: bool,
) {
    let edges: Vec<AttributionEdge> = load_or_exit(edges_path, "attribution edges", output, quiet);
    let gaps: Vec<GapOpportunity> = match gaps_path {
        Some(path) => {
            let inputs: Vec<GapInput> = load_or_exit(path, "gaps", output, quiet);
            inputs.into_iter().map(build_gap_opportunity).collect()
        }
        None => Vec::new(),
    };

    let insights = compute_snapshot_insights_with_depth(&edges, &gaps, max_depth);

    if quiet {
        return;
    }
    match output {
        OutputFormat::Json => print_json(&insights),
        OutputFormat::Text => {
            println!("Attribution Insights ({} edges)", edges.len());
            if insights.highest_click_through_path.is_empty() {
                println!("  Best path:     (none)");
            } else {
                println!(
                    "  Best path:     {}",
                    insights.highest_click_through_path.join(" -> ")
                );
            }
            println!(
                "  Bridge:        {}",
                insights.biggest_bridge.as_deref().unwrap_or("(none)")
            );
            if !insights.gap_opportunities.is_empty() {
                println!();
                println!("Gap opportunities:");
                for gap in &insights.gap_opportunities {
                    println!(
                        "  {:<20} gap {:.2}  demand {:>8.0}  supply {:>6.0}  {}",
                        gap.touchpoint_id,
                        gap.gap_score,
                        gap.search_demand,
                        gap.supply_count,
                        gap.recommended_action
                    );
                }
            }
        }
    }
}
