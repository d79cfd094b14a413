//! lineboard-core: service-line model and metric derivations.
//!
//! Everything in this crate is a pure function over immutable records.
//! Records arrive already validated by the persistence layer; this crate
//! only derives values from them and never mutates its inputs.
//!
//! # Public API
//!
//! - [`model`] -- stations, tracks, service lines and their metrics
//! - [`health`] -- RAG status derivation and worst-case composition
//! - [`rollup`] -- service-line level aggregation
//! - [`scenario`] -- what-if deltas applied to metrics
//! - [`numeric`] -- shared rounding helper

pub mod error;
pub mod health;
pub mod model;
pub mod numeric;
pub mod rollup;
pub mod scenario;

// ── Convenience re-exports ───────────────────────────────────────────

pub use error::MetricsError;
pub use health::{
    compute_fair_pricing_rag, compute_metrics_rag, compute_qa_gap, compute_station_rag,
    compute_variance_pct, compute_world_class_rag, service_line_health, station_health,
    worst_rag, StationHealth,
};
pub use model::{
    FairPricingMetrics, PerformanceProofMetrics, Position, ProofValue, RagStatus, ServiceLine,
    Station, StationMetrics, TrackEdge, TrackWeight, WorldClassMetrics,
};
pub use numeric::round_to;
pub use rollup::{compute_service_line_rollup, Rollup};
pub use scenario::{
    apply_scenario_to_metrics, apply_scenario_to_service_line, ScenarioConfig, ScenarioDeltas,
};
