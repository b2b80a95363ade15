//! Core types for planar Voronoi computation.

use bytemuck::{Pod, Zeroable};
use glam::DVec2;

/// A point in the plane.
///
/// This type provides a small `#[repr(C)]` representation with a stable layout.
/// Input points are *identity-bearing*: the engine refers to them by index into
/// the frozen input slice, so two points with equal coordinates remain distinct
/// sites.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create from any type implementing `PointLike`.
    #[inline]
    pub fn from_like<P: PointLike>(p: &P) -> Self {
        Self::new(p.x(), p.y())
    }

    /// Convert to a `glam::DVec2`.
    #[inline]
    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Create from a `glam::DVec2`.
    #[inline]
    pub fn from_dvec2(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        self.to_dvec2().distance(other.to_dvec2())
    }
}

impl From<[f64; 2]> for Point {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    #[inline]
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl From<DVec2> for Point {
    #[inline]
    fn from(v: DVec2) -> Self {
        Self::from_dvec2(v)
    }
}

impl From<Point> for DVec2 {
    #[inline]
    fn from(p: Point) -> DVec2 {
        p.to_dvec2()
    }
}

/// Trait for types that can be used as input points.
///
/// This allows zero-copy input from various math libraries.
pub trait PointLike {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl PointLike for Point {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl PointLike for [f64; 2] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

impl PointLike for (f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }
    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl PointLike for DVec2 {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}
