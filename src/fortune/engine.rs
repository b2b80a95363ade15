//! The sweep loop: merges site and circle events in descending-y order and
//! drives the beach line.
//!
//! A site event splits the arc above the new site into three, creating two
//! boundaries. A circle event removes the squeezed-out middle arc, destroying
//! two boundaries and creating one, and emits the graph elements for the
//! vertex it pins down. The sweep y is owned here and advanced only between
//! beach-line operations; at a circle event the two meeting boundaries are
//! erased *before* the advance, because exactly at the event y their order is
//! ambiguous.

use super::beach::{BeachLine, Intersection};
use super::events::{CircleEvent, CircleQueue};
use super::geometry::perp;
use super::graph::{same_triple, GraphBuilder};
use crate::error::VoronoiError;
use crate::{Edge, Node, Point};

pub(super) struct Sweep<'a> {
    sites: &'a [Point],
    sweep_y: f64,
    beach: BeachLine,
    events: CircleQueue,
    graph: GraphBuilder<'a>,
    audit: bool,
    circle_events_handled: usize,
}

impl<'a> Sweep<'a> {
    pub fn new(sites: &'a [Point], audit: bool) -> Self {
        Self {
            sites,
            sweep_y: f64::INFINITY,
            beach: BeachLine::new(),
            events: CircleQueue::new(),
            graph: GraphBuilder::new(sites),
            audit,
            circle_events_handled: 0,
        }
    }

    /// Run the sweep over sites pre-sorted by decreasing y.
    pub fn run(mut self, order: &[usize]) -> Result<(Vec<Node>, Vec<Edge>, usize), VoronoiError> {
        let mut next_site = 0;
        while next_site < order.len() || !self.events.is_empty() {
            let next_event_y = self.events.peek_last().map(CircleEvent::event_y);
            // Whichever lies higher happens first.
            let take_site = match next_event_y {
                None => true,
                Some(event_y) => {
                    next_site < order.len() && self.sites[order[next_site]].y > event_y
                }
            };
            if take_site {
                self.process_site(order[next_site])?;
                next_site += 1;
            } else {
                let event = self
                    .events
                    .pop_last()
                    .expect("event queue cannot be empty here");
                self.process_circle(event)?;
            }

            if self.audit {
                if let Some(index) = self.beach.audit(self.sites, self.sweep_y) {
                    return Err(VoronoiError::ComputationFailed(format!(
                        "beach line out of order at position {} (sweep y {})",
                        index, self.sweep_y
                    )));
                }
            }
        }

        // Boundaries still on the beach are the unbounded Voronoi edges; each
        // gets its midpoint placeholder node even if no circle event ever
        // referenced the pair.
        let remaining: Vec<Intersection> = self.beach.iter().copied().collect();
        for boundary in remaining {
            if let (Some(a), Some(b)) = (boundary.left, boundary.right) {
                self.graph.node_for_pair(a, b);
            }
        }

        let handled = self.circle_events_handled;
        let (nodes, edges) = self.graph.finish();
        Ok((nodes, edges, handled))
    }

    /// Insert the arc of a new site into the beach line.
    fn process_site(&mut self, new_site: usize) -> Result<(), VoronoiError> {
        self.sweep_y = self.sites[new_site].y;

        if self.beach.is_empty() {
            self.beach.insert(0, Intersection::new(None, Some(new_site)));
            self.beach.insert(1, Intersection::new(Some(new_site), None));
            return Ok(());
        }

        // The arc directly above the new site is shared by the boundary at
        // the probe's lower bound and its predecessor.
        let probe = Intersection::probe(new_site);
        let upper = self.beach.lower_bound(self.sites, self.sweep_y, &probe);
        if upper == 0 || upper >= self.beach.len() {
            return Err(VoronoiError::ComputationFailed(format!(
                "site {} probed outside the beach sentinels",
                new_site
            )));
        }
        let left = self.beach.get(upper - 1);
        let right = self.beach.get(upper);
        debug_assert_eq!(left.right, right.left, "split arc must be shared");
        let Some(split) = left.right else {
            return Err(VoronoiError::ComputationFailed(format!(
                "site {} probed onto a sentinel boundary",
                new_site
            )));
        };

        let new_left = Intersection::between(split, new_site);
        let new_right = Intersection::between(new_site, split);
        self.beach.insert(upper, new_left);
        self.beach.insert(upper + 1, new_right);

        // The left remnant of the split arc can now meet its left neighbor,
        // and symmetrically on the right.
        if left.left.is_some() {
            self.events.insert(self.sites, self.sweep_y, left, new_left);
        }
        if right.right.is_some() {
            self.events.insert(self.sites, self.sweep_y, new_right, right);
        }
        // The old neighbors no longer touch; their meeting is off.
        if left.left.is_some() && right.right.is_some() {
            self.events.erase(self.sites, &left, &right);
        }
        Ok(())
    }

    /// Remove the arc squeezed out by a circle event and emit its vertex.
    fn process_circle(&mut self, event: CircleEvent) -> Result<(), VoronoiError> {
        let left_index = self.beach.find(&event.left_int).ok_or_else(|| {
            VoronoiError::ComputationFailed(format!(
                "circle event boundary {:?} missing from beach line",
                event.left_int
            ))
        })?;
        let right_index = left_index + 1;
        if right_index >= self.beach.len() || self.beach.get(right_index) != event.right_int {
            return Err(VoronoiError::ComputationFailed(format!(
                "circle event boundaries {:?}, {:?} not adjacent",
                event.left_int, event.right_int
            )));
        }
        if left_index == 0 || right_index + 1 >= self.beach.len() {
            return Err(VoronoiError::ComputationFailed(
                "circle event at the beach sentinels".to_string(),
            ));
        }
        let left_neighbor = self.beach.get(left_index - 1);
        let right_neighbor = self.beach.get(right_index + 1);
        debug_assert_eq!(left_neighbor.right, event.left_int.left);
        debug_assert_eq!(right_neighbor.left, event.right_int.right);

        let (a, b, c) = match (event.left_int.left, event.left_int.right, event.right_int.right) {
            (Some(a), Some(b), Some(c)) => (a, b, c),
            _ => {
                return Err(VoronoiError::ComputationFailed(
                    "circle event with a sentinel site".to_string(),
                ))
            }
        };

        // The meeting boundaries are about to vanish; any event involving
        // them on the outside can no longer occur.
        self.events.erase(self.sites, &left_neighbor, &event.left_int);
        self.events.erase(self.sites, &event.right_int, &right_neighbor);

        // Erase before advancing the sweep: at the event y the two boundaries
        // coincide and the comparator cannot tell them apart.
        self.beach.remove(right_index);
        self.beach.remove(left_index);
        self.sweep_y = event.event_y();

        let merged = Intersection::between(a, c);
        self.beach.insert(left_index, merged);

        // The merged boundary may meet either neighbor later, except for the
        // triple just consumed.
        if let Some(outer) = left_neighbor.left {
            if !same_triple((outer, a, c), (a, b, c)) {
                self.events
                    .insert(self.sites, self.sweep_y, left_neighbor, merged);
            }
        }
        if let Some(outer) = right_neighbor.right {
            if !same_triple((a, c, outer), (a, b, c)) {
                self.events
                    .insert(self.sites, self.sweep_y, merged, right_neighbor);
            }
        }

        self.emit_vertex(a, b, c, event)?;
        self.circle_events_handled += 1;
        Ok(())
    }

    /// Emit the vertex for sites `(a, b, c)` and its three edges.
    ///
    /// When the circumcenter falls inside the site triangle, the vertex is the
    /// hub and each side's midpoint connects to it. When it falls outside, it
    /// does so across exactly one side; that side's midpoint becomes the hub,
    /// because the Voronoi edge toward the vertex passes through it.
    fn emit_vertex(
        &mut self,
        a: usize,
        b: usize,
        c: usize,
        event: CircleEvent,
    ) -> Result<(), VoronoiError> {
        let vertex = self.graph.node_for_triple(a, b, c)?;
        let mid_ab = self.graph.node_for_pair(a, b);
        let mid_bc = self.graph.node_for_pair(b, c);
        let mid_ca = self.graph.node_for_pair(c, a);

        let center = event.circle.center;
        let (pa, pb, pc) = (
            self.sites[a].to_dvec2(),
            self.sites[b].to_dvec2(),
            self.sites[c].to_dvec2(),
        );
        let d_ab = perp(center, pa, pb);
        let d_bc = perp(center, pb, pc);
        let d_ca = perp(center, pc, pa);

        let all_non_positive = d_ab <= 0.0 && d_bc <= 0.0 && d_ca <= 0.0;
        let all_non_negative = d_ab >= 0.0 && d_bc >= 0.0 && d_ca >= 0.0;
        if all_non_positive || all_non_negative {
            self.graph.add_triplet(vertex, mid_ab, mid_bc, mid_ca);
        } else if (d_bc <= 0.0 && d_ca >= 0.0 && d_ab >= 0.0)
            || (d_bc >= 0.0 && d_ca <= 0.0 && d_ab <= 0.0)
        {
            self.graph.add_triplet(mid_bc, vertex, mid_ca, mid_ab);
        } else if (d_ca <= 0.0 && d_ab >= 0.0 && d_bc >= 0.0)
            || (d_ca >= 0.0 && d_ab <= 0.0 && d_bc <= 0.0)
        {
            self.graph.add_triplet(mid_ca, vertex, mid_ab, mid_bc);
        } else {
            self.graph.add_triplet(mid_ab, vertex, mid_bc, mid_ca);
        }
        Ok(())
    }
}
