//! Service-line records as delivered by the persistence layer.
//!
//! A service line is a small directed acyclic graph: stations are the
//! nodes, track edges the weighted connections between them. Each station
//! carries three metric families -- fair pricing (hours), world class
//! (quality) and an open-schema performance-proof bag.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::MetricsError;

/// Three-level health classification.
///
/// The derived ordering is the severity ordering: `Green < Amber < Red`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RagStatus {
    #[default]
    Green,
    Amber,
    Red,
}

impl RagStatus {
    /// The more severe of two statuses.
    pub fn worst(self, other: RagStatus) -> RagStatus {
        self.max(other)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RagStatus::Green => "green",
            RagStatus::Amber => "amber",
            RagStatus::Red => "red",
        }
    }
}

impl std::fmt::Display for RagStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Planned versus actual labor hours for a station.
///
/// `labor_variance` is always `actual_hrs - planned_hrs`. It is never read
/// from input: deserialization recomputes it, and the only constructors
/// are [`FairPricingMetrics::new`] and [`FairPricingMetrics::normalized`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawFairPricing")]
pub struct FairPricingMetrics {
    pub planned_hrs: f64,
    pub actual_hrs: f64,
    pub labor_variance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_value: Option<f64>,
}

#[derive(Deserialize)]
struct RawFairPricing {
    planned_hrs: f64,
    actual_hrs: f64,
    #[serde(default)]
    market_value: Option<f64>,
}

impl From<RawFairPricing> for FairPricingMetrics {
    fn from(raw: RawFairPricing) -> Self {
        FairPricingMetrics::new(raw.planned_hrs, raw.actual_hrs, raw.market_value)
    }
}

impl FairPricingMetrics {
    pub fn new(planned_hrs: f64, actual_hrs: f64, market_value: Option<f64>) -> Self {
        FairPricingMetrics {
            planned_hrs,
            actual_hrs,
            labor_variance: actual_hrs - planned_hrs,
            market_value,
        }
    }

    /// Re-derive `labor_variance` from the hour fields.
    pub fn normalized(self) -> Self {
        FairPricingMetrics::new(self.planned_hrs, self.actual_hrs, self.market_value)
    }
}

/// Quality score against an optional industry benchmark, both on 0-10.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldClassMetrics {
    pub internal_qa_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_benchmark: Option<f64>,
    pub standard_met: bool,
}

/// A single performance-proof value: numbers and free text both occur.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProofValue {
    Number(f64),
    Text(String),
}

/// Open-schema evidence bag. Scenario deltas and derivations never touch it.
pub type PerformanceProofMetrics = BTreeMap<String, ProofValue>;

/// All metrics attached to one station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationMetrics {
    pub fair_pricing: FairPricingMetrics,
    pub world_class: WorldClassMetrics,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub performance_proof: PerformanceProofMetrics,
}

impl StationMetrics {
    /// Reject NaN or infinite values in the numeric metric fields.
    pub fn ensure_finite(&self, station_id: &str) -> Result<(), MetricsError> {
        let fp = &self.fair_pricing;
        let wc = &self.world_class;
        let fields = [
            ("planned_hrs", Some(fp.planned_hrs)),
            ("actual_hrs", Some(fp.actual_hrs)),
            ("market_value", fp.market_value),
            ("internal_qa_score", Some(wc.internal_qa_score)),
            ("industry_benchmark", wc.industry_benchmark),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                if !value.is_finite() {
                    return Err(MetricsError::NonFinite {
                        station_id: station_id.to_string(),
                        field,
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Layout coordinates used by the diagram renderer. Ignored here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A work unit inside a service line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub station_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub metrics: StationMetrics,
    /// Manual status override; wins over the computed status when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rag_status: Option<RagStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Two-part weight of a track. Missing parts default at fold time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackWeight {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
}

/// Directed connection between two stations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub weight: TrackWeight,
}

/// A workflow: stations connected by tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceLine {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub nodes: Vec<Station>,
    #[serde(default)]
    pub edges: Vec<TrackEdge>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<OffsetDateTime>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<OffsetDateTime>,
}

impl ServiceLine {
    pub fn station(&self, station_id: &str) -> Option<&Station> {
        self.nodes.iter().find(|s| s.station_id == station_id)
    }

    pub fn contains_station(&self, station_id: &str) -> bool {
        self.station(station_id).is_some()
    }

    /// Run [`StationMetrics::ensure_finite`] over every station.
    pub fn ensure_finite(&self) -> Result<(), MetricsError> {
        self.nodes
            .iter()
            .try_for_each(|s| s.metrics.ensure_finite(&s.station_id))
    }
}
