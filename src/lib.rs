//! cascade-extrema: distance extrema for a pure Rust CAD kernel
//!
//! Two families of queries share one result vocabulary:
//! point-curve extrema found by grid sampling and Newton refinement, and
//! closed-form extrema between pairs of analytic surfaces.

pub mod precision;
pub mod gp;
pub mod adaptor;
pub mod math;
pub mod extrema;

// Re-exports for convenience
pub use adaptor::{BezierCurve, Curve3d, Surface3d};
pub use extrema::{
    normalize_angle, shift_periodic, Domain1D, Domain2D, Domain4D, ExtremaConfig, SearchMode, Status,
};
pub use extrema::pc::{CurveExtrema, GridEvaluator, GridPoint, PcExtremum, PcResult};
pub use extrema::ss::{
    AnalyticSurface, PlaneSphere, PlaneTorus, SsExtremum, SsResult, SurfacePairSolver,
};

/// Result type for extrema operations
pub type Result<T> = std::result::Result<T, ExtremaError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExtremaError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    #[error("Invalid sample count: {0} (at least 2 required)")]
    InvalidSampleCount(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unsupported surface pair: {0}")]
    UnsupportedSurfacePair(String),
}
