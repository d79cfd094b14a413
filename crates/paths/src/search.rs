//! Simple-path enumeration between two nodes of a weighted directed graph.
//!
//! Depth-first search from the start node, carrying a visited set so that a
//! node already on the current path is never re-entered. This keeps the
//! search finite even when the input is not a true DAG. Every arrival at the
//! end node is recorded; the search then backtracks and tries sibling edges.
//!
//! Enumeration is exponential in the worst case (a dense DAG has
//! exponentially many paths). Track graphs are tens of nodes, so the search
//! is left unoptimized; callers wanting a hard bound use
//! [`find_all_paths_capped`].

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Default result cap used by callers that do not choose one.
pub const DEFAULT_MAX_PATHS: usize = 10_000;

/// A directed edge with a single scalar weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// One path from start to end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Node ids, start and end included.
    pub path: Vec<String>,
    /// Edge ids in traversal order.
    pub edges: Vec<String>,
    pub total_weight: f64,
}

/// Paths found by a capped search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathSearch {
    /// Sorted ascending by `total_weight`, ties in discovery order.
    pub paths: Vec<PathResult>,
    /// True when the cap stopped the search before it finished.
    pub truncated: bool,
}

/// Every simple path from `start` to `end`, cheapest first.
///
/// `start == end` yields exactly one edge-less, zero-weight path. Parallel
/// edges between the same pair are distinct options and each yields its
/// own path. No path yields an empty vector.
pub fn find_all_paths<'a>(
    edges: &'a [WeightedEdge],
    start: &'a str,
    end: &'a str,
) -> Vec<PathResult> {
    find_all_paths_capped(edges, start, end, usize::MAX).paths
}

/// Cheapest path from `start` to `end`, if any.
pub fn find_shortest_path<'a>(
    edges: &'a [WeightedEdge],
    start: &'a str,
    end: &'a str,
) -> Option<PathResult> {
    find_all_paths(edges, start, end).into_iter().next()
}

/// [`find_all_paths`] that stops after `max_paths` paths have been found.
///
/// The paths found before the cap are still sorted by weight. The trivial
/// `start == end` path is returned regardless of the cap.
pub fn find_all_paths_capped<'a>(
    edges: &'a [WeightedEdge],
    start: &'a str,
    end: &'a str,
    max_paths: usize,
) -> PathSearch {
    if start == end {
        return PathSearch {
            paths: vec![PathResult {
                path: vec![start.to_string()],
                edges: Vec::new(),
                total_weight: 0.0,
            }],
            truncated: false,
        };
    }

    // Adjacency list: source -> outgoing edges, in input order.
    let mut adjacency: HashMap<&str, Vec<&WeightedEdge>> = HashMap::new();
    for edge in edges {
        adjacency.entry(edge.source.as_str()).or_default().push(edge);
    }

    let mut walk = Walk {
        adjacency: &adjacency,
        end,
        max_paths,
        path: vec![start],
        edge_ids: Vec::new(),
        visited: HashSet::from([start]),
        found: Vec::new(),
        truncated: false,
    };
    walk.visit(start, 0.0);

    let Walk {
        found: mut paths,
        truncated,
        ..
    } = walk;

    // Stable sort keeps discovery order among equal weights.
    paths.sort_by(|a, b| a.total_weight.total_cmp(&b.total_weight));

    if truncated {
        tracing::warn!(start, end, max_paths, "path enumeration truncated");
    }
    tracing::debug!(start, end, paths = paths.len(), "enumerated paths");

    PathSearch { paths, truncated }
}

/// DFS state for one enumeration.
struct Walk<'g, 'a> {
    adjacency: &'g HashMap<&'a str, Vec<&'a WeightedEdge>>,
    end: &'a str,
    max_paths: usize,
    path: Vec<&'a str>,
    edge_ids: Vec<&'a str>,
    visited: HashSet<&'a str>,
    found: Vec<PathResult>,
    truncated: bool,
}

impl<'g, 'a> Walk<'g, 'a> {
    fn visit(&mut self, node: &'a str, weight: f64) {
        let adjacency = self.adjacency;
        let Some(outgoing) = adjacency.get(node) else {
            return;
        };

        for &edge in outgoing {
            if self.truncated {
                return;
            }
            let next = edge.target.as_str();
            if self.visited.contains(next) {
                continue;
            }

            let total = weight + edge.weight;
            self.path.push(next);
            self.edge_ids.push(edge.id.as_str());

            if next == self.end {
                self.record(total);
            } else {
                self.visited.insert(next);
                self.visit(next, total);
                self.visited.remove(next);
            }

            self.path.pop();
            self.edge_ids.pop();
        }
    }

    fn record(&mut self, total_weight: f64) {
        if self.found.len() >= self.max_paths {
            self.truncated = true;
            return;
        }
        self.found.push(PathResult {
            path: self.path.iter().map(|s| s.to_string()).collect(),
            edges: self.edge_ids.iter().map(|s| s.to_string()).collect(),
            total_weight,
        });
    }
}
