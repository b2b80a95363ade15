//! Public API integration tests for fortune-voronoi.

mod support;

use std::collections::BTreeSet;

use fortune_voronoi::{compute, compute_with, Point, VoronoiConfig, VoronoiError};
use support::points::random_points;

fn parents_of(node: &fortune_voronoi::Node) -> Vec<usize> {
    node.parents.iter().copied().collect()
}

#[test]
fn test_empty_input() {
    let diagram = compute::<Point>(&[]).expect("empty input should succeed");
    assert_eq!(diagram.num_sites(), 0);
    assert_eq!(diagram.num_nodes(), 0);
    assert_eq!(diagram.num_edges(), 0);
    assert!(diagram.bounds().is_none());
}

#[test]
fn test_single_site() {
    let diagram = compute(&[Point::new(0.0, 0.0)]).unwrap();
    assert_eq!(diagram.num_nodes(), 0, "a lone site has no boundaries");
    assert_eq!(diagram.num_edges(), 0);
}

#[test]
fn test_two_sites() {
    let diagram = compute(&[Point::new(0.0, 0.0), Point::new(2.0, 0.0)]).unwrap();

    // One midpoint placeholder for the single unbounded edge; no vertex and,
    // degenerately, no edges to hang off it.
    assert_eq!(diagram.num_nodes(), 1);
    assert_eq!(diagram.num_edges(), 0);
    let node = diagram.node(0);
    assert!(node.is_midpoint());
    assert_eq!(node.position, Point::new(1.0, 0.0));
    assert_eq!(parents_of(node), vec![0, 1]);
}

#[test]
fn test_equilateral_triangle() {
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(1.0, 3.0f64.sqrt()),
    ];
    let diagram = compute(&points).unwrap();

    assert_eq!(diagram.num_nodes(), 4);
    assert_eq!(diagram.num_edges(), 3);

    let vertex = diagram
        .iter_vertices()
        .next()
        .expect("one Voronoi vertex");
    assert_eq!(parents_of(vertex), vec![0, 1, 2]);
    // The vertex is the centroid (1, sqrt(3)/3).
    assert!((vertex.position.x - 1.0).abs() < 1e-9);
    assert!((vertex.position.y - 3.0f64.sqrt() / 3.0).abs() < 1e-9);
    assert_eq!(vertex.edges.len(), 3);

    // Three midpoints, each linked to the vertex by one edge with two parents.
    let midpoints: Vec<_> = diagram.nodes().iter().filter(|n| n.is_midpoint()).collect();
    assert_eq!(midpoints.len(), 3);
    for midpoint in midpoints {
        assert_eq!(midpoint.edges.len(), 1);
    }
    for edge in diagram.edges() {
        assert_eq!(edge.parents.len(), 2);
    }
}

#[test]
fn test_right_triangle() {
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(0.0, 3.0),
    ];
    let diagram = compute(&points).unwrap();

    // Topology identical to the equilateral case; the circumcenter (2, 1.5)
    // lies inside the triangle (on the hypotenuse, in fact, which also makes
    // it coincide with the hypotenuse midpoint node).
    assert_eq!(diagram.num_nodes(), 4);
    assert_eq!(diagram.num_edges(), 3);
    let vertex = diagram.iter_vertices().next().expect("one vertex");
    assert!((vertex.position.x - 2.0).abs() < 1e-9);
    assert!((vertex.position.y - 1.5).abs() < 1e-9);
    assert_eq!(vertex.edges.len(), 3);
}

#[test]
fn test_obtuse_triangle_odd_side_hub() {
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(5.0, 1.0),
    ];
    let diagram = compute(&points).unwrap();

    assert_eq!(diagram.num_nodes(), 4);
    assert_eq!(diagram.num_edges(), 3);

    // The circumcenter lies outside the triangle, below the long side; the
    // midpoint of that side becomes the hub connected to everything else.
    let vertex = diagram.iter_vertices().next().expect("one vertex");
    assert!((vertex.position.x - 5.0).abs() < 1e-9);
    assert!((vertex.position.y + 12.0).abs() < 1e-9);
    assert_eq!(vertex.edges.len(), 1);

    let hub = diagram
        .nodes()
        .iter()
        .find(|n| n.is_midpoint() && parents_of(n) == vec![0, 1])
        .expect("midpoint of the long side");
    assert_eq!(hub.position, Point::new(5.0, 0.0));
    assert_eq!(hub.edges.len(), 3);
    assert_eq!(hub.neighbors.len(), 3);
}

#[test]
fn test_square_cocircular() {
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(0.0, 2.0),
        Point::new(2.0, 2.0),
    ];
    let diagram = compute(&points).unwrap();

    // All four sites are cocircular around (1, 1). Each processed triple
    // interns its own vertex, so several vertex nodes share that position
    // while keeping distinct parent triples.
    let vertices: Vec<_> = diagram.iter_vertices().collect();
    assert!(!vertices.is_empty());
    for vertex in &vertices {
        assert!((vertex.position.x - 1.0).abs() < 1e-9);
        assert!((vertex.position.y - 1.0).abs() < 1e-9);
    }

    // Parent triples are pairwise distinct.
    let triples: BTreeSet<Vec<usize>> = vertices.iter().map(|v| parents_of(v)).collect();
    assert_eq!(triples.len(), vertices.len());

    // Every edge still separates at least one pair of cells.
    for edge in diagram.edges() {
        assert!(!edge.parents.is_empty());
    }
}

#[test]
fn test_collinear_sites() {
    // No circumcircle ever solves, so no vertices and no edges; the surviving
    // beach boundaries still leave one midpoint per consecutive pair.
    let points = vec![
        Point::new(0.0, 6.0),
        Point::new(0.0, 4.0),
        Point::new(0.0, 2.0),
        Point::new(0.0, 0.0),
    ];
    let diagram = compute(&points).unwrap();

    assert_eq!(diagram.num_edges(), 0);
    assert_eq!(diagram.iter_vertices().count(), 0);
    let mut midpoints: Vec<Point> = diagram.nodes().iter().map(|n| n.position).collect();
    midpoints.sort_by(|a, b| b.y.total_cmp(&a.y));
    assert_eq!(
        midpoints,
        vec![
            Point::new(0.0, 5.0),
            Point::new(0.0, 3.0),
            Point::new(0.0, 1.0)
        ]
    );
}

#[test]
fn test_non_finite_input_rejected() {
    let points = vec![Point::new(0.0, 0.0), Point::new(1.0, f64::INFINITY)];
    let result = compute(&points);
    assert!(matches!(
        result,
        Err(VoronoiError::NonFiniteCoordinate { index: 1 })
    ));
}

#[test]
fn test_input_types() {
    let base = vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(0.0, 3.0),
    ];

    let arr_points: Vec<[f64; 2]> = base.iter().map(|p| [p.x, p.y]).collect();
    let diagram = compute(&arr_points).expect("array input should work");
    assert_eq!(diagram.num_nodes(), 4);

    let tuple_points: Vec<(f64, f64)> = base.iter().map(|p| (p.x, p.y)).collect();
    let diagram = compute(&tuple_points).expect("tuple input should work");
    assert_eq!(diagram.num_nodes(), 4);
}

#[test]
fn test_audit_config() {
    let points = random_points(24, 10.0, 4242);
    let config = VoronoiConfig {
        audit_beach_line: true,
    };
    let diagram = compute_with(&points, config).expect("audited sweep should succeed");
    assert_eq!(diagram.num_sites(), 24);
}

#[test]
fn test_sites_preserved() {
    let points = random_points(16, 10.0, 77777);
    let diagram = compute(&points).unwrap();
    assert_eq!(diagram.sites(), &points[..]);
}

#[test]
fn test_permutation_isomorphic() {
    let points = random_points(12, 10.0, 20240);
    let diagram = compute(&points).unwrap();

    // Reverse the input; site index i becomes n - 1 - i.
    let n = points.len();
    let reversed: Vec<Point> = points.iter().rev().copied().collect();
    let permuted = compute(&reversed).unwrap();

    let signature = |diagram: &fortune_voronoi::VoronoiDiagram, remap: &dyn Fn(usize) -> usize| {
        let mut nodes: Vec<Vec<usize>> = diagram
            .nodes()
            .iter()
            .map(|node| {
                let mut parents: Vec<usize> = node.parents.iter().map(|&p| remap(p)).collect();
                parents.sort_unstable();
                parents
            })
            .collect();
        nodes.sort();
        let mut edges: Vec<Vec<Vec<usize>>> = diagram
            .edges()
            .iter()
            .map(|edge| {
                let mut endpoints: Vec<Vec<usize>> = edge
                    .nodes
                    .iter()
                    .map(|&node| {
                        let mut parents: Vec<usize> = diagram
                            .node(node)
                            .parents
                            .iter()
                            .map(|&p| remap(p))
                            .collect();
                        parents.sort_unstable();
                        parents
                    })
                    .collect();
                endpoints.sort();
                endpoints
            })
            .collect();
        edges.sort();
        (nodes, edges)
    };

    let original = signature(&diagram, &|p| p);
    let relabeled = signature(&permuted, &|p| n - 1 - p);
    assert_eq!(original, relabeled);
}
