//! Voronoi construction via Fortune's sweep line.
//!
//! The plane is swept top to bottom. Sites above the sweep line carve the
//! *beach line*, the lower envelope of their parabolas; its arc boundaries
//! trace the Voronoi edges. Two priorities drive the sweep: the next input
//! site (by y) and the next circle event (by circumcircle bottom), whichever
//! is higher. The submodules split the machinery along those seams: the
//! geometric kernel, the beach line, the event queue, node interning, and the
//! event loop itself.

mod beach;
mod engine;
mod events;
mod geometry;
mod graph;

use std::sync::OnceLock;

use crate::diagram::VoronoiDiagram;
use crate::error::VoronoiError;
use crate::{Point, VoronoiConfig};

fn log_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| {
        std::env::var("FV_LOG")
            .ok()
            .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
    })
}

/// Run the full sweep over `sites` and assemble the output diagram.
pub(crate) fn compute_diagram(
    sites: Vec<Point>,
    config: &VoronoiConfig,
) -> Result<VoronoiDiagram, VoronoiError> {
    for (index, point) in sites.iter().enumerate() {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(VoronoiError::NonFiniteCoordinate { index });
        }
    }

    let bounds = bounding_box(&sites);

    // Sites are consumed in decreasing y; ties fall back to input order so
    // the sweep is deterministic.
    let mut order: Vec<usize> = (0..sites.len()).collect();
    order.sort_unstable_by(|&i, &j| sites[j].y.total_cmp(&sites[i].y).then(i.cmp(&j)));

    if log_enabled() {
        eprintln!("sweep: {} sites", sites.len());
    }

    let sweep = engine::Sweep::new(&sites, config.audit_beach_line);
    let (nodes, edges, circle_events) = sweep.run(&order)?;

    if log_enabled() {
        eprintln!(
            "sweep: {} circle events -> {} nodes, {} edges",
            circle_events,
            nodes.len(),
            edges.len()
        );
    }

    Ok(VoronoiDiagram::from_parts(sites, nodes, edges, bounds))
}

fn bounding_box(sites: &[Point]) -> Option<(Point, Point)> {
    let mut iter = sites.iter();
    let first = *iter.next()?;
    let (mut min, mut max) = (first, first);
    for point in iter {
        min.x = min.x.min(point.x);
        min.y = min.y.min(point.y);
        max.x = max.x.max(point.x);
        max.y = max.y.max(point.y);
    }
    Some((min, max))
}
