use lineboard_core::MetricsError;

/// Reasons a service-line report cannot be produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalyzeError {
    #[error("invalid metrics: {0}")]
    InvalidMetrics(#[from] MetricsError),

    /// A requested route endpoint is not a station of the line.
    #[error("service line '{service_line}' has no station '{station_id}'")]
    UnknownStation {
        service_line: String,
        station_id: String,
    },
}
