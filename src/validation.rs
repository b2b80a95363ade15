//! Geometric and combinatorial validation for Voronoi diagrams.
//!
//! Provides functions to verify correctness of a computed diagram.
//! Useful for debugging, testing, and catching numerical issues.

use std::collections::HashSet;
use std::fmt;

use crate::VoronoiDiagram;

/// Detailed validation report for a Voronoi diagram.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Number of input sites.
    pub num_sites: usize,
    /// Number of graph nodes.
    pub num_nodes: usize,
    /// Number of graph edges.
    pub num_edges: usize,
    /// Nodes with three parents (Voronoi vertices).
    pub num_vertices: usize,
    /// Nodes with two parents (midpoint placeholders).
    pub num_midpoints: usize,

    /// Upper bound on vertices for n sites in general position: 2n - 5.
    pub max_vertices: usize,
    /// Upper bound on distinct separating pairs, i.e. Voronoi edges proper,
    /// for n sites: 3n - 6. Each pair is represented by its midpoint node.
    pub max_midpoints: usize,
    /// Upper bound on graph edges: 3 * (2n - 5). Every vertex event emits
    /// exactly three edges, and a bounded Voronoi edge is subdivided by its
    /// midpoint node into two graph segments, so the graph carries more
    /// segments than there are Voronoi edges.
    pub max_edges: usize,

    /// Vertices whose distances to their three parents disagree.
    pub equidistance_failures: usize,
    /// Midpoint nodes not equidistant from their two parents.
    pub midpoint_failures: usize,
    /// Edges whose parents differ from the intersection of their endpoints'
    /// parents, or are empty.
    pub edge_parent_failures: usize,
    /// Edges or nodes missing their mutual registration.
    pub asymmetric_incidences: usize,
    /// Nodes sharing an identical parent set with another node.
    pub duplicate_parent_sets: usize,
    /// Nodes with a parent count other than 2 or 3.
    pub malformed_nodes: usize,

    /// Absolute tolerance used for the distance checks.
    pub tolerance: f64,
}

impl ValidationReport {
    /// Check that the diagram satisfies every structural property and, for
    /// at least three sites, the Euler count bounds.
    pub fn is_valid(&self) -> bool {
        let counts_ok = self.num_sites < 3
            || (self.num_vertices <= self.max_vertices
                && self.num_midpoints <= self.max_midpoints
                && self.num_edges <= self.max_edges);

        counts_ok
            && self.equidistance_failures == 0
            && self.midpoint_failures == 0
            && self.edge_parent_failures == 0
            && self.asymmetric_incidences == 0
            && self.duplicate_parent_sets == 0
            && self.malformed_nodes == 0
    }

    /// Format a summary of any issues found.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            return "Valid".to_string();
        }

        let mut issues = Vec::new();
        if self.num_sites >= 3 && self.num_vertices > self.max_vertices {
            issues.push(format!(
                "{} vertices (max {})",
                self.num_vertices, self.max_vertices
            ));
        }
        if self.num_sites >= 3 && self.num_midpoints > self.max_midpoints {
            issues.push(format!(
                "{} midpoints (max {})",
                self.num_midpoints, self.max_midpoints
            ));
        }
        if self.num_sites >= 3 && self.num_edges > self.max_edges {
            issues.push(format!(
                "{} edges (max {})",
                self.num_edges, self.max_edges
            ));
        }
        if self.equidistance_failures > 0 {
            issues.push(format!(
                "{} vertices not equidistant from parents",
                self.equidistance_failures
            ));
        }
        if self.midpoint_failures > 0 {
            issues.push(format!("{} midpoints off-center", self.midpoint_failures));
        }
        if self.edge_parent_failures > 0 {
            issues.push(format!(
                "{} edges with wrong parent sets",
                self.edge_parent_failures
            ));
        }
        if self.asymmetric_incidences > 0 {
            issues.push(format!(
                "{} asymmetric incidence registrations",
                self.asymmetric_incidences
            ));
        }
        if self.duplicate_parent_sets > 0 {
            issues.push(format!(
                "{} duplicate parent sets",
                self.duplicate_parent_sets
            ));
        }
        if self.malformed_nodes > 0 {
            issues.push(format!("{} malformed nodes", self.malformed_nodes));
        }
        issues.join(", ")
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} sites, {} nodes ({} vertices, {} midpoints), {} edges: {}",
            self.num_sites,
            self.num_nodes,
            self.num_vertices,
            self.num_midpoints,
            self.num_edges,
            self.summary()
        )
    }
}

/// Validate a diagram against the defining properties of a Voronoi graph.
///
/// Distance checks use a tolerance of `1e-4` times the input bounding-box
/// diagonal.
pub fn validate(diagram: &VoronoiDiagram) -> ValidationReport {
    let tolerance = 1e-4 * diagram.bounds_diagonal();

    let mut report = ValidationReport {
        num_sites: diagram.num_sites(),
        num_nodes: diagram.num_nodes(),
        num_edges: diagram.num_edges(),
        num_vertices: 0,
        num_midpoints: 0,
        max_vertices: (2 * diagram.num_sites()).saturating_sub(5),
        max_midpoints: (3 * diagram.num_sites()).saturating_sub(6),
        max_edges: 3 * (2 * diagram.num_sites()).saturating_sub(5),
        equidistance_failures: 0,
        midpoint_failures: 0,
        edge_parent_failures: 0,
        asymmetric_incidences: 0,
        duplicate_parent_sets: 0,
        malformed_nodes: 0,
        tolerance,
    };

    let mut seen_parent_sets: HashSet<Vec<usize>> = HashSet::new();

    for (index, node) in diagram.nodes().iter().enumerate() {
        match node.parents.len() {
            2 => report.num_midpoints += 1,
            3 => report.num_vertices += 1,
            _ => report.malformed_nodes += 1,
        }

        // Every parent must be equidistant from the node.
        let distances: Vec<f64> = node
            .parents
            .iter()
            .map(|&site| node.position.distance(diagram.site(site)))
            .collect();
        let spread = distances.iter().cloned().fold(f64::NAN, f64::max)
            - distances.iter().cloned().fold(f64::NAN, f64::min);
        if !(spread <= tolerance) {
            if node.is_vertex() {
                report.equidistance_failures += 1;
            } else {
                report.midpoint_failures += 1;
            }
        }

        let key: Vec<usize> = node.parents.iter().copied().collect();
        if !seen_parent_sets.insert(key) {
            report.duplicate_parent_sets += 1;
        }

        // Incidence symmetry: every recorded edge must point back here.
        for &edge_index in &node.edges {
            if edge_index >= diagram.num_edges()
                || !diagram.edge(edge_index).nodes.contains(&index)
            {
                report.asymmetric_incidences += 1;
            }
        }
    }

    for (index, edge) in diagram.edges().iter().enumerate() {
        let [x, y] = edge.nodes;
        let expected: Vec<usize> = diagram
            .node(x)
            .parents
            .intersection(&diagram.node(y).parents)
            .copied()
            .collect();
        if expected.is_empty() || !edge.parents.iter().copied().eq(expected) {
            report.edge_parent_failures += 1;
        }
        for endpoint in [x, y] {
            if !diagram.node(endpoint).edges.contains(&index) {
                report.asymmetric_incidences += 1;
            }
        }
        if !diagram.node(x).neighbors.contains(&y) || !diagram.node(y).neighbors.contains(&x) {
            report.asymmetric_incidences += 1;
        }
    }

    report
}
