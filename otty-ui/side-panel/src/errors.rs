use thiserror::Error;

/// Errors emitted while building or loading a panel configuration.
///
/// A panel is never constructed from a configuration that produced one of
/// these; live reconfiguration keeps the previous configuration instead.
#[derive(Debug, Error)]
pub enum PanelConfigError {
    /// The upper width bound is below the lower one.
    #[error("max width {max} is below min width {min}")]
    MaxBelowMin { min: f32, max: f32 },
    /// The start width lies outside `[min, max]`.
    #[error("start width {start} is outside [{min}, {max}]")]
    StartOutOfRange { start: f32, min: f32, max: f32 },
    /// A width or breakpoint is `NaN` or infinite.
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    /// The lower width bound is negative.
    #[error("min width {min} must not be negative")]
    NegativeMin { min: f32 },
    /// JSON deserialization failed.
    #[error("panel config JSON failed: {0}")]
    Json(#[from] serde_json::Error),
}
