//! Node interning and graph assembly.
//!
//! Voronoi vertices and midpoint placeholders are canonicalized by their
//! *unordered* parent-site sets: looking a triple up in any permutation yields
//! the same node. Nodes and edges are append-only for the duration of the
//! sweep and handed over as flat vectors at the end.

use glam::DVec2;
use rustc_hash::FxHashMap;

use super::geometry::{circumcircle, site};
use crate::error::VoronoiError;
use crate::{Edge, Node, Point};

/// Canonical key for a node: its parent sites, sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum NodeKey {
    Pair(usize, usize),
    Triple(usize, usize, usize),
}

impl NodeKey {
    fn pair(a: usize, b: usize) -> Self {
        if a <= b {
            NodeKey::Pair(a, b)
        } else {
            NodeKey::Pair(b, a)
        }
    }

    fn triple(a: usize, b: usize, c: usize) -> Self {
        let (a, b, c) = sort3(a, b, c);
        NodeKey::Triple(a, b, c)
    }
}

#[inline]
fn sort3(mut a: usize, mut b: usize, mut c: usize) -> (usize, usize, usize) {
    if a > b {
        std::mem::swap(&mut a, &mut b);
    }
    if b > c {
        std::mem::swap(&mut b, &mut c);
    }
    if a > b {
        std::mem::swap(&mut a, &mut b);
    }
    (a, b, c)
}

/// Unordered equality of two site triples.
#[inline]
pub(crate) fn same_triple(lhs: (usize, usize, usize), rhs: (usize, usize, usize)) -> bool {
    sort3(lhs.0, lhs.1, lhs.2) == sort3(rhs.0, rhs.1, rhs.2)
}

/// Append-only node/edge arena with canonical interning.
pub(crate) struct GraphBuilder<'a> {
    sites: &'a [Point],
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    registry: FxHashMap<NodeKey, usize>,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(sites: &'a [Point]) -> Self {
        Self {
            sites,
            nodes: Vec::new(),
            edges: Vec::new(),
            registry: FxHashMap::default(),
        }
    }

    fn intern(&mut self, key: NodeKey, position: DVec2, parents: &[usize]) -> usize {
        if let Some(&index) = self.registry.get(&key) {
            return index;
        }
        let index = self.nodes.len();
        self.nodes.push(Node {
            position: Point::from_dvec2(position),
            parents: parents.iter().copied().collect(),
            edges: Default::default(),
            neighbors: Default::default(),
        });
        self.registry.insert(key, index);
        index
    }

    /// Node at the midpoint of two sites: the placeholder end of an unbounded
    /// Voronoi edge between their cells.
    pub fn node_for_pair(&mut self, a: usize, b: usize) -> usize {
        let key = NodeKey::pair(a, b);
        let midpoint = 0.5 * (site(self.sites, a) + site(self.sites, b));
        self.intern(key, midpoint, &[a, b])
    }

    /// Node at the circumcenter of three sites: a Voronoi vertex.
    ///
    /// The caller guarantees the triple solved at event-insertion time, so a
    /// singular circumcircle here is an engine bug.
    pub fn node_for_triple(&mut self, a: usize, b: usize, c: usize) -> Result<usize, VoronoiError> {
        let key = NodeKey::triple(a, b, c);
        if let Some(&index) = self.registry.get(&key) {
            return Ok(index);
        }
        let circle = circumcircle(site(self.sites, a), site(self.sites, b), site(self.sites, c))
            .ok_or_else(|| {
                VoronoiError::ComputationFailed(format!(
                    "vertex requested for collinear sites {}, {}, {}",
                    a, b, c
                ))
            })?;
        Ok(self.intern(key, circle.center, &[a, b, c]))
    }

    /// Create the edge between two nodes and register it on both.
    ///
    /// The edge inherits the parents common to its endpoints: the sites whose
    /// cells it separates.
    pub fn add_edge(&mut self, x: usize, y: usize) -> usize {
        let parents = self.nodes[x]
            .parents
            .intersection(&self.nodes[y].parents)
            .copied()
            .collect();
        let index = self.edges.len();
        self.edges.push(Edge {
            nodes: [x, y],
            parents,
            neighbors: Default::default(),
        });
        self.nodes[x].edges.insert(index);
        self.nodes[y].edges.insert(index);
        self.nodes[x].neighbors.insert(y);
        self.nodes[y].neighbors.insert(x);
        index
    }

    /// Connect three nodes to a common hub.
    pub fn add_triplet(&mut self, hub: usize, n1: usize, n2: usize, n3: usize) {
        self.add_edge(n1, hub);
        self.add_edge(n2, hub);
        self.add_edge(n3, hub);
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Fill in edge adjacency and release the arena.
    ///
    /// Two edges are neighbors when they share an endpoint node.
    pub fn finish(mut self) -> (Vec<Node>, Vec<Edge>) {
        for index in 0..self.edges.len() {
            let [x, y] = self.edges[index].nodes;
            let mut adjacent: Vec<usize> = Vec::new();
            adjacent.extend(self.nodes[x].edges.iter().copied());
            adjacent.extend(self.nodes[y].edges.iter().copied());
            for other in adjacent {
                if other != index {
                    self.edges[index].neighbors.insert(other);
                }
            }
        }
        (self.nodes, self.edges)
    }
}
