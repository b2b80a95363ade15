//! The circle-event queue.
//!
//! A circle event records that two neighboring arc boundaries will meet when
//! the sweep reaches the bottom of the circumcircle of their three sites,
//! squeezing out the arc between them. The queue is kept sorted by that
//! event y, ascending; the sweep consumes from the back, highest first.
//!
//! Validity is enforced at insertion rather than with a deferred "stale" flag:
//! an event that touches a sentinel, repeats a site, lies above the sweep, or
//! whose boundaries diverge from the circle center never enters the queue, and
//! the engine erases the two flanking events whenever it destroys their
//! boundaries. Distinct events may share an event y (cocircular sites); all of
//! them are kept and processed.

use super::beach::Intersection;
use super::geometry::{circumcircle, site, Circle};
use crate::Point;

/// A scheduled meeting of two neighboring boundaries.
///
/// The boundaries share their middle site: `left_int.right == right_int.left`
/// is the arc that vanishes when the event fires.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CircleEvent {
    pub left_int: Intersection,
    pub right_int: Intersection,
    pub circle: Circle,
}

impl CircleEvent {
    #[inline]
    pub fn event_y(&self) -> f64 {
        self.circle.event_y()
    }
}

/// Queue of pending circle events, sorted by event y ascending.
#[derive(Debug, Default)]
pub(crate) struct CircleQueue {
    events: Vec<CircleEvent>,
}

impl CircleQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The next event the sweep will reach (highest event y).
    #[inline]
    pub fn peek_last(&self) -> Option<&CircleEvent> {
        self.events.last()
    }

    pub fn pop_last(&mut self) -> Option<CircleEvent> {
        self.events.pop()
    }

    /// Schedule the meeting of `left_int` and `right_int`, unless the event
    /// cannot happen.
    ///
    /// Rejected outright: boundaries touching a sentinel, triples with a
    /// repeated site, and collinear triples (no circumcircle). Rejected
    /// against the sweep: an event y above `sweep_y` is already in the past.
    /// Finally both boundaries are evaluated *at the event y*; unless both
    /// land on the circle center (within the radius), they are diverging and
    /// will never meet.
    pub fn insert(
        &mut self,
        sites: &[Point],
        sweep_y: f64,
        left_int: Intersection,
        right_int: Intersection,
    ) {
        let Some(a) = left_int.left else { return };
        let Some(c) = right_int.right else { return };
        let Some(b) = left_int.right else { return };
        debug_assert_eq!(left_int.right, right_int.left, "boundaries must share the middle arc");
        if a == b || b == c || a == c {
            return;
        }

        let Some(circle) = circumcircle(site(sites, a), site(sites, b), site(sites, c)) else {
            return;
        };
        let event_y = circle.event_y();
        if event_y > sweep_y {
            return;
        }

        let d_left = left_int.position(sites, event_y).distance(circle.center);
        let d_right = right_int.position(sites, event_y).distance(circle.center);
        if !(d_left <= circle.radius && d_right <= circle.radius) {
            return;
        }

        let event = CircleEvent {
            left_int,
            right_int,
            circle,
        };
        let pos = self
            .events
            .partition_point(|queued| queued.event_y() < event_y);
        self.events.insert(pos, event);
    }

    /// Remove the event scheduled for this exact pair of boundaries, if any.
    ///
    /// The event y is recomputed from the three sites, then events at or above
    /// that key are scanned for an identity match. The recomputation repeats
    /// the insertion-time arithmetic on the same inputs, so the keys agree
    /// bit-for-bit.
    pub fn erase(&mut self, sites: &[Point], left_int: &Intersection, right_int: &Intersection) {
        let Some(a) = left_int.left else { return };
        let Some(c) = right_int.right else { return };
        let Some(b) = left_int.right else { return };

        let Some(circle) = circumcircle(site(sites, a), site(sites, b), site(sites, c)) else {
            return;
        };
        let event_y = circle.event_y();

        let start = self
            .events
            .partition_point(|queued| queued.event_y() < event_y);
        for index in start..self.events.len() {
            let event = &self.events[index];
            if event.left_int == *left_int && event.right_int == *right_int {
                self.events.remove(index);
                return;
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CircleEvent> {
        self.events.iter()
    }
}
