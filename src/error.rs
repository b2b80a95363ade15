//! Error types for Voronoi computation.

use std::fmt;

/// Errors that can occur during Voronoi computation.
#[derive(Debug, Clone)]
pub enum VoronoiError {
    /// An input point has a NaN or infinite coordinate.
    NonFiniteCoordinate { index: usize },

    /// Internal sweep invariant violation.
    /// This should not happen with valid input and indicates a bug.
    ComputationFailed(String),
}

impl fmt::Display for VoronoiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoronoiError::NonFiniteCoordinate { index } => {
                write!(f, "input point {} has a non-finite coordinate", index)
            }
            VoronoiError::ComputationFailed(msg) => {
                write!(f, "computation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for VoronoiError {}
