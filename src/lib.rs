//! Planar Voronoi diagrams via Fortune's sweep-line algorithm.
//!
//! This crate computes the Voronoi tessellation of a set of 2D points as a
//! planar graph: each node is either a Voronoi vertex (equidistant from three
//! sites) or a midpoint placeholder for an unbounded edge, and each edge
//! separates two Voronoi cells. The diagram is not clipped to a window;
//! unbounded edges keep their degree-1 midpoint nodes.
//!
//! # Example
//!
//! ```
//! use fortune_voronoi::{compute, Point};
//!
//! // An equilateral triangle has a single Voronoi vertex at its centroid.
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(2.0, 0.0),
//!     Point::new(1.0, 3.0f64.sqrt()),
//! ];
//!
//! let diagram = compute(&points).expect("computation should succeed");
//! assert_eq!(diagram.num_nodes(), 4); // one vertex, three midpoints
//! assert_eq!(diagram.num_edges(), 3);
//!
//! let vertex = diagram.iter_vertices().next().expect("one vertex");
//! assert!((vertex.position.x - 1.0).abs() < 1e-9);
//! ```

mod diagram;
mod error;
mod types;
pub mod validation;

pub(crate) mod fortune;

pub use diagram::{Edge, Node, VoronoiDiagram};
pub use error::VoronoiError;
pub use types::{Point, PointLike};

/// Configuration for Voronoi computation.
#[derive(Debug, Clone)]
pub struct VoronoiConfig {
    /// If true, re-verify beach-line ordering after every event.
    ///
    /// This catches comparator inconsistencies as soon as they appear instead
    /// of at the next misplaced lookup, at the cost of a linear pass per
    /// event. Intended for debugging and tests; leave off in production.
    pub audit_beach_line: bool,
}

impl Default for VoronoiConfig {
    fn default() -> Self {
        Self {
            audit_beach_line: false,
        }
    }
}

/// Compute a Voronoi diagram with default settings.
///
/// Errors are reserved for invalid inputs (non-finite coordinates) or
/// unrecoverable internal failures.
pub fn compute<P: PointLike>(points: &[P]) -> Result<VoronoiDiagram, VoronoiError> {
    compute_with(points, VoronoiConfig::default())
}

/// Compute a Voronoi diagram with explicit configuration.
pub fn compute_with<P: PointLike>(
    points: &[P],
    config: VoronoiConfig,
) -> Result<VoronoiDiagram, VoronoiError> {
    let sites: Vec<Point> = points.iter().map(Point::from_like).collect();
    fortune::compute_diagram(sites, &config)
}
