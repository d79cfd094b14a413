/// Errors raised when metrics cannot be used for derivation.
///
/// The derivations themselves are total; this is only produced by the
/// opt-in finiteness check so that NaN or infinite inputs fail loudly
/// instead of flowing into a status.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricsError {
    /// A numeric metric field holds NaN or an infinity.
    #[error("station {station_id}: field '{field}' is not a finite number ({value})")]
    NonFinite {
        station_id: String,
        field: &'static str,
        value: f64,
    },
}
