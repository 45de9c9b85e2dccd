use thiserror::Error;

/// Top-level error type for the GEOLib utilities.
#[derive(Debug, Error)]
pub enum GeolibError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("{parameter} = {value} is not between the polyline start {min} and end {max}")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("unsupported intersection type: {0}")]
    UnsupportedIntersection(String),

    #[error("vertical segment at x = {x} cannot be interpolated")]
    VerticalSegment { x: f64 },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("expected at least {expected} points, got {actual}")]
    TooFewPoints { expected: usize, actual: usize },
}

/// Convenience type alias for results using [`GeolibError`].
pub type Result<T> = std::result::Result<T, GeolibError>;
