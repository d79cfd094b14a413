use std::path::Path;

use lineboard_core::{compute_service_line_rollup, ServiceLine};

use crate::input::load_or_exit;
use crate::{print_json, OutputFormat};

pub(crate) fn cmd_rollup(line_path: &Path, output: OutputFormat, quiet: bool) {
    let line: ServiceLine = load_or_exit(line_path, "service line", output, quiet);
    let rollup = compute_service_line_rollup(&line);

    if quiet {
        return;
    }
    match output {
        OutputFormat::Json => print_json(&rollup),
        OutputFormat::Text => {
            println!("Service Line Rollup: {} ({})", line.name, line.id);
            super::print_rollup(&rollup);
        }
    }
}
