pub(crate) mod health;
pub(crate) mod insights;
pub(crate) mod paths;
pub(crate) mod report;
pub(crate) mod rollup;
pub(crate) mod scenario;
pub(crate) mod trends;

use lineboard_core::{RagStatus, Rollup};

pub(crate) fn rag_label(status: RagStatus) -> String {
    status.as_str().to_uppercase()
}

/// Indented rollup block shared by the text outputs.
pub(crate) fn print_rollup(rollup: &Rollup) {
    println!("  Planned hours:  {:.2}", rollup.total_planned_hrs);
    println!("  Actual hours:   {:.2}", rollup.total_actual_hrs);
    println!(
        "  Variance:       {:.2} hrs ({:.2}%)",
        rollup.total_variance_hrs, rollup.variance_pct
    );
    println!("  Avg QA score:   {:.2}", rollup.avg_qa_score);
    println!(
        "  At standard:    {}/{}",
        rollup.stations_at_standard, rollup.total_stations
    );
    println!("  Overall status: {}", rag_label(rollup.overall_rag));
}
