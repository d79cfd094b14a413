//! Adapter from service-line tracks to the generic weighted graph.

use lineboard_core::{ServiceLine, TrackEdge, TrackWeight};

use crate::search::{find_all_paths_capped, PathSearch, WeightedEdge};

/// Cost assumed for a track that declares none.
pub const DEFAULT_TRACK_COST: f64 = 1.0;
/// Time assumed for a track that declares none.
pub const DEFAULT_TRACK_TIME: f64 = 1.0;

/// Fold a `{cost, time}` pair into one scalar by addition.
///
/// Each missing part counts as 1, so an unweighted track costs 2.
pub fn track_weight(weight: &TrackWeight) -> f64 {
    weight.cost.unwrap_or(DEFAULT_TRACK_COST) + weight.time.unwrap_or(DEFAULT_TRACK_TIME)
}

pub fn to_weighted_edges(tracks: &[TrackEdge]) -> Vec<WeightedEdge> {
    tracks
        .iter()
        .map(|track| WeightedEdge {
            id: track.id.clone(),
            source: track.source.clone(),
            target: track.target.clone(),
            weight: track_weight(&track.weight),
        })
        .collect()
}

/// Ranked routes between two stations of a service line.
pub fn station_route(line: &ServiceLine, from: &str, to: &str, max_paths: usize) -> PathSearch {
    let edges = to_weighted_edges(&line.edges);
    find_all_paths_capped(&edges, from, to, max_paths)
}
