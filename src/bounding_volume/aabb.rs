//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector};
use num_traits::Bounded;

/// An Axis-Aligned Bounding Box.
///
/// Invariant: `mins.x <= maxs.x` and `mins.y <= maxs.y` for any box built by
/// [`Aabb::from_points`] over at least one point.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The point with the smallest coordinates of this AABB.
    pub mins: Point,
    /// The point with the greatest coordinates of this AABB.
    pub maxs: Point,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point, maxs: Point) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with inverted bounds.
    ///
    /// Useful as the accumulator of a component-wise min/max scan.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(<Real as Bounded>::max_value()).into(),
            Vector::repeat(-<Real as Bounded>::max_value()).into(),
        )
    }

    /// The smallest AABB enclosing all the given points.
    pub fn from_points<'a>(pts: impl IntoIterator<Item = &'a Point>) -> Self {
        let mut result = Aabb::new_invalid();

        for pt in pts {
            result.mins = result.mins.inf(pt);
            result.maxs = result.maxs.sup(pt);
        }

        result
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point {
        na::center(&self.mins, &self.maxs)
    }

    /// The extents (widths along each axis) of this AABB.
    #[inline]
    pub fn extents(&self) -> Vector {
        self.maxs - self.mins
    }

    /// Tests whether this AABB overlaps `other`.
    ///
    /// The comparison is strict: boxes that merely touch are reported as
    /// non-overlapping. This is a conservative filter only; an overlap does
    /// not imply that the enclosed shapes collide.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.mins.x < other.maxs.x
            && self.maxs.x > other.mins.x
            && self.mins.y < other.maxs.y
            && self.maxs.y > other.mins.y
    }
}
