mod commands;
mod config;
mod input;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::config::LineboardConfig;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Environment variable holding the tracing filter directive.
const LOG_ENV: &str = "LINEBOARD_LOG";

/// Service-line health and touchpoint attribution reporting.
#[derive(Parser)]
#[command(
    name = "lineboard",
    version,
    about = "Service-line health and touchpoint attribution reporting"
)]
struct Cli {
    /// Output format (text or json) [default: text, or the config file's]
    #[arg(long, global = true, value_enum)]
    output: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Log debug events to stderr
    #[arg(long, global = true)]
    verbose: bool,

    /// Path to a lineboard.toml config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll up the metrics of a service line
    Rollup {
        /// Path to the service line JSON file
        line: PathBuf,
    },

    /// Show the derived health of every station
    Health {
        /// Path to the service line JSON file
        line: PathBuf,
    },

    /// Apply a what-if scenario to a service line
    Scenario {
        /// Path to the service line JSON file
        line: PathBuf,
        /// Path to the scenario JSON file
        #[arg(long)]
        scenario: PathBuf,
    },

    /// Rank every route between two stations
    Paths {
        /// Path to the service line JSON file
        line: PathBuf,
        /// Starting station id
        #[arg(long)]
        from: String,
        /// Destination station id
        #[arg(long)]
        to: String,
        /// Stop after this many paths
        #[arg(long)]
        max_paths: Option<usize>,
    },

    /// Full service-line report with findings
    Report {
        /// Path to the service line JSON file
        line: PathBuf,
        /// Path to a scenario JSON file to apply first
        #[arg(long)]
        scenario: Option<PathBuf>,
        /// Starting station id of a route to include (requires --to)
        #[arg(long, requires = "to")]
        from: Option<String>,
        /// Destination station id of a route to include (requires --from)
        #[arg(long, requires = "from")]
        to: Option<String>,
        /// Stop route enumeration after this many paths
        #[arg(long)]
        max_paths: Option<usize>,
    },

    /// Attribution insights for one snapshot of touchpoint edges
    Insights {
        /// Path to the attribution edges JSON file
        edges: PathBuf,
        /// Path to a JSON file of demand/supply gap inputs
        #[arg(long)]
        gaps: Option<PathBuf>,
        /// Hop limit for the best-converting path
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Per-pair click-through trends across periods
    Trends {
        /// Path to a JSON list of {period, edges} snapshots
        snapshots: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = match config::load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            report_error(
                &format!("error: {}", e),
                cli.output.unwrap_or(OutputFormat::Text),
                cli.quiet,
            );
            process::exit(1);
        }
    };
    let output = resolve_output(cli.output, &config);
    let quiet = cli.quiet;

    match cli.command {
        Commands::Rollup { line } => {
            commands::rollup::cmd_rollup(&line, output, quiet);
        }
        Commands::Health { line } => {
            commands::health::cmd_health(&line, output, quiet);
        }
        Commands::Scenario { line, scenario } => {
            commands::scenario::cmd_scenario(&line, &scenario, output, quiet);
        }
        Commands::Paths {
            line,
            from,
            to,
            max_paths,
        } => {
            let max_paths = max_paths.unwrap_or(config.paths.max_paths);
            commands::paths::cmd_paths(&line, &from, &to, max_paths, output, quiet);
        }
        Commands::Report {
            line,
            scenario,
            from,
            to,
            max_paths,
        } => {
            commands::report::cmd_report(commands::report::ReportOptions {
                line: &line,
                scenario: scenario.as_deref(),
                route: from.zip(to),
                max_paths: max_paths.unwrap_or(config.paths.max_paths),
                output,
                quiet,
            });
        }
        Commands::Insights {
            edges,
            gaps,
            max_depth,
        } => {
            let max_depth = max_depth.unwrap_or(config.attribution.max_depth);
            commands::insights::cmd_insights(&edges, gaps.as_deref(), max_depth, output, quiet);
        }
        Commands::Trends { snapshots } => {
            commands::trends::cmd_trends(&snapshots, output, quiet);
        }
    }
}

/// Install the stderr subscriber. `--verbose` overrides `LINEBOARD_LOG`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// The flag wins over the config file; text when neither says.
fn resolve_output(flag: Option<OutputFormat>, config: &LineboardConfig) -> OutputFormat {
    flag.or(config.output.format).unwrap_or(OutputFormat::Text)
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}

/// Pretty JSON on stdout, falling back to an error object.
pub(crate) fn print_json<T: Serialize>(value: &T) {
    let json = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"serialization: {}\"}}", e));
    println!("{}", json);
}
