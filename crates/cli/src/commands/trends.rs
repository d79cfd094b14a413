use std::path::Path;

use lineboard_attribution::{edge_trends, EdgeSnapshot};

use crate::input::load_or_exit;
use crate::{print_json, OutputFormat};

pub(crate) fn cmd_trends(snapshots_path: &Path, output: OutputFormat, quiet: bool) {
    let snapshots: Vec<EdgeSnapshot> = load_or_exit(snapshots_path, "snapshots", output, quiet);
    let trends = edge_trends(&snapshots);

    if quiet {
        return;
    }
    match output {
        OutputFormat::Json => print_json(&trends),
        OutputFormat::Text => {
            println!(
                "Edge Trends ({} periods, {} pairs)",
                snapshots.len(),
                trends.len()
            );
            for t in &trends {
                println!(
                    "  {:<32} avg ctr {:.2}  users {:>8.0}  periods {}",
                    t.key,
                    t.average_click_through_rate,
                    t.total_users_flowed,
                    t.periods.join(", ")
                );
            }
        }
    }
}
