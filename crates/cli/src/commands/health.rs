use std::path::Path;

use lineboard_core::{service_line_health, ServiceLine};

use super::rag_label;
use crate::input::load_or_exit;
use crate::{print_json, OutputFormat};

pub(crate) fn cmd_health(line_path: &Path, output: OutputFormat, quiet: bool) {
    let line: ServiceLine = load_or_exit(line_path, "service line", output, quiet);
    let stations = service_line_health(&line);

    if quiet {
        return;
    }
    match output {
        OutputFormat::Json => print_json(&stations),
        OutputFormat::Text => {
            println!("Station Health: {} ({})", line.name, line.id);
            if stations.is_empty() {
                println!("  (no stations)");
            }
            for s in &stations {
                let note = if s.overridden && s.computed_rag != s.effective_rag {
                    format!("  (set manually; metrics compute {})", s.computed_rag)
                } else if s.overridden {
                    "  (set manually)".to_string()
                } else {
                    String::new()
                };
                println!(
                    "  {:<16} {:<6} variance {:>8.2}%  qa gap {:>6.2}{}",
                    s.station_id,
                    rag_label(s.effective_rag),
                    s.variance_pct,
                    s.qa_gap,
                    note
                );
            }
        }
    }
}
