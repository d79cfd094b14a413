//! lineboard-paths: weighted pathfinder for station graphs.
//!
//! The search itself works on an opaque node/edge graph ([`WeightedEdge`]);
//! [`tracks`] adapts service-line tracks onto it. The adjacency list is
//! built per call, so nothing is shared between concurrent callers.

pub mod search;
pub mod tracks;

pub use search::{
    find_all_paths, find_all_paths_capped, find_shortest_path, PathResult, PathSearch,
    WeightedEdge, DEFAULT_MAX_PATHS,
};
pub use tracks::{station_route, to_weighted_edges, track_weight};
