//! Error type for degenerate geometric configurations.

/// Raised when the input violates a precondition of a construction
/// (the result would be undefined or infinite), never for "no solution".
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeomError {
    #[error("invalid geometry: {what}")]
    InvalidGeometry { what: &'static str },

    #[error("coincident circles have infinitely many common points")]
    CoincidentCircles,

    #[error("not enough distinct points: expected at least {expected}, got {actual}")]
    InsufficientPoints { expected: usize, actual: usize },

    #[error("all {count} points are collinear")]
    CollinearPoints { count: usize },
}

impl GeomError {
    #[inline]
    pub(crate) fn invalid(what: &'static str) -> Self {
        GeomError::InvalidGeometry { what }
    }
}

pub type Result<T> = std::result::Result<T, GeomError>;
