//! Structural insights over the touchpoint attribution graph.
//!
//! The graph is rebuilt as an adjacency list on every call. Nothing here
//! keeps state between calls.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::gap::rank_gap_opportunities;
use crate::model::{AttributionEdge, GapOpportunity};

/// Hop limit for the greedy conversion walk.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Outgoing edges per node, in input order.
fn adjacency(edges: &[AttributionEdge]) -> HashMap<&str, Vec<&AttributionEdge>> {
    let mut out: HashMap<&str, Vec<&AttributionEdge>> = HashMap::new();
    for edge in edges {
        out.entry(edge.source.as_str()).or_default().push(edge);
    }
    out
}

/// Nodes that only ever appear as a source, in first-appearance order.
fn source_only_nodes(edges: &[AttributionEdge]) -> Vec<&str> {
    let targets: HashSet<&str> = edges.iter().map(|e| e.target.as_str()).collect();
    let mut seen = HashSet::new();
    edges
        .iter()
        .map(|e| e.source.as_str())
        .filter(|source| !targets.contains(source) && seen.insert(*source))
        .collect()
}

/// Greedy walk following the highest click-through edge at every step.
///
/// Cycles are not guarded against; `max_depth` bounds the walk.
fn greedy_walk<'a>(
    outgoing: &HashMap<&'a str, Vec<&'a AttributionEdge>>,
    start: &'a str,
    max_depth: usize,
) -> (Vec<&'a str>, f64) {
    let mut path = vec![start];
    let mut score = 0.0;
    let mut current = start;

    for _ in 0..max_depth {
        let Some(candidates) = outgoing.get(current) else {
            break;
        };
        let mut best: Option<&AttributionEdge> = None;
        for &edge in candidates {
            // strict comparison keeps the earliest edge on ties
            let rate = edge.metrics.click_through_rate;
            if best.map_or(true, |b| rate > b.metrics.click_through_rate) {
                best = Some(edge);
            }
        }
        let Some(next) = best else {
            break;
        };
        score += next.metrics.click_through_rate;
        current = next.target.as_str();
        path.push(current);
    }

    (path, score)
}

/// Best-converting path from any entry touchpoint.
///
/// Entry points are nodes that are never a target; with none, the walk
/// starts at the first edge's source. A candidate replaces the current
/// best when it is longer or scores higher, so a long low-scoring path can
/// win over a short high-scoring one.
pub fn find_highest_conversion_path(edges: &[AttributionEdge], max_depth: usize) -> Vec<String> {
    let Some(first) = edges.first() else {
        return Vec::new();
    };

    let outgoing = adjacency(edges);
    let mut starts = source_only_nodes(edges);
    if starts.is_empty() {
        starts.push(first.source.as_str());
    }

    let mut best_path: Vec<&str> = Vec::new();
    let mut best_score = 0.0;
    for start in starts {
        let (path, score) = greedy_walk(&outgoing, start, max_depth);
        if path.len() > best_path.len() || score > best_score {
            best_path = path;
            best_score = score;
        }
    }

    tracing::debug!(
        hops = best_path.len().saturating_sub(1),
        score = best_score,
        "highest conversion path"
    );
    best_path.into_iter().map(str::to_string).collect()
}

/// Intermediate touchpoint with the most edge endpoints.
///
/// Only nodes that are both a source and a target qualify. Ties go to the
/// node seen first.
pub fn find_biggest_bridge(edges: &[AttributionEdge]) -> Option<String> {
    let sources: HashSet<&str> = edges.iter().map(|e| e.source.as_str()).collect();
    let targets: HashSet<&str> = edges.iter().map(|e| e.target.as_str()).collect();

    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for node in edges
        .iter()
        .flat_map(|e| [e.source.as_str(), e.target.as_str()])
    {
        let count = counts.entry(node).or_insert(0);
        if *count == 0 {
            order.push(node);
        }
        *count += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for node in order {
        if !(sources.contains(node) && targets.contains(node)) {
            continue;
        }
        let count = counts.get(node).copied().unwrap_or(0);
        if best.map_or(true, |(_, max)| count > max) {
            best = Some((node, count));
        }
    }
    best.map(|(node, _)| node.to_string())
}

/// Summary of one attribution snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotInsights {
    pub highest_click_through_path: Vec<String>,
    pub biggest_bridge: Option<String>,
    /// Ranked, largest gap first.
    pub gap_opportunities: Vec<GapOpportunity>,
}

/// Bundle the conversion path, bridge and gaps of one snapshot.
///
/// `gaps` are re-ranked with [`rank_gap_opportunities`], so the caller's
/// order is not preserved.
pub fn compute_snapshot_insights(
    edges: &[AttributionEdge],
    gaps: &[GapOpportunity],
) -> SnapshotInsights {
    compute_snapshot_insights_with_depth(edges, gaps, DEFAULT_MAX_DEPTH)
}

/// [`compute_snapshot_insights`] with an explicit hop limit.
pub fn compute_snapshot_insights_with_depth(
    edges: &[AttributionEdge],
    gaps: &[GapOpportunity],
    max_depth: usize,
) -> SnapshotInsights {
    SnapshotInsights {
        highest_click_through_path: find_highest_conversion_path(edges, max_depth),
        biggest_bridge: find_biggest_bridge(edges),
        gap_opportunities: rank_gap_opportunities(gaps),
    }
}
