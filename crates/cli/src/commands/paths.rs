use std::path::Path;
use std::process;

use lineboard_core::ServiceLine;
use lineboard_paths::station_route;

use crate::input::load_or_exit;
use crate::{print_json, report_error, OutputFormat};

pub(crate) fn cmd_paths(
    line_path: &Path,
    from: &str,
    to: &str,
    max_paths: usize,
    output: OutputFormat,
    quiet: bool,
) {
    let line: ServiceLine = load_or_exit(line_path, "service line", output, quiet);

    for station_id in [from, to] {
        if !line.contains_station(station_id) {
            let msg = format!(
                "error: service line '{}' has no station '{}'",
                line.id, station_id
            );
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    }

    let search = station_route(&line, from, to, max_paths);

    if quiet {
        return;
    }
    match output {
        OutputFormat::Json => print_json(&search),
        OutputFormat::Text => {
            if search.paths.is_empty() {
                println!("No path from {} to {}", from, to);
                return;
            }
            println!(
                "Routes from {} to {} ({} found)",
                from,
                to,
                search.paths.len()
            );
            for (i, p) in search.paths.iter().enumerate() {
                println!(
                    "  {}. {}  (weight {:.2})",
                    i + 1,
                    p.path.join(" -> "),
                    p.total_weight
                );
            }
            if search.truncated {
                println!(
                    "  (truncated at {} paths; ranking covers found paths only)",
                    max_paths
                );
            }
        }
    }
}
