use std::path::Path;
use std::process;

use lineboard_analyze::{analyze_service_line, AnalyzeOptions, FindingSeverity};
use lineboard_core::{ScenarioConfig, ServiceLine};

use super::{print_rollup, rag_label};
use crate::input::load_or_exit;
use crate::{print_json, report_error, OutputFormat};

pub(crate) struct ReportOptions<'a> {
    pub line: &'a Path,
    pub scenario: Option<&'a Path>,
    pub route: Option<(String, String)>,
    pub max_paths: usize,
    pub output: OutputFormat,
    pub quiet: bool,
}

pub(crate) fn cmd_report(opts: ReportOptions<'_>) {
    let output = opts.output;
    let quiet = opts.quiet;

    let line: ServiceLine = load_or_exit(opts.line, "service line", output, quiet);
    let scenario: Option<ScenarioConfig> = opts
        .scenario
        .map(|path| load_or_exit(path, "scenario", output, quiet));

    let options = AnalyzeOptions {
        scenario,
        route: opts.route,
        max_paths: opts.max_paths,
    };
    let report = match analyze_service_line(&line, &options) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!("analysis error: {}", e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    if quiet {
        return;
    }
    match output {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            println!(
                "Service Line Report: {} ({})",
                report.service_line_name, report.service_line_id
            );
            println!("======================");
            println!();

            if let Some(ref baseline) = report.baseline_rollup {
                println!("Baseline:");
                print_rollup(baseline);
                println!();
                println!("With scenario:");
            } else {
                println!("Rollup:");
            }
            print_rollup(&report.rollup);
            println!();

            println!("Stations:");
            for s in &report.stations {
                println!(
                    "  {:<16} {:<6} variance {:>8.2}%  qa gap {:>6.2}",
                    s.station_id,
                    rag_label(s.effective_rag),
                    s.variance_pct,
                    s.qa_gap
                );
            }

            if let Some(ref route) = report.route {
                println!();
                println!("Routes from {} to {}:", route.from, route.to);
                for (i, p) in route.paths.iter().enumerate() {
                    println!(
                        "  {}. {}  (weight {:.2})",
                        i + 1,
                        p.path.join(" -> "),
                        p.total_weight
                    );
                }
            }

            println!();
            println!("Findings:");
            if report.findings.is_empty() {
                println!("  No findings.");
            }
            for finding in &report.findings {
                let severity = match finding.severity {
                    FindingSeverity::Warning => "WARNING",
                    FindingSeverity::Info => "INFO",
                };
                println!("  [{}] {}", severity, finding.message);
            }
        }
    }
}
