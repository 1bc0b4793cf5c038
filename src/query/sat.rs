//! Narrow-phase polygon-polygon overlap test based on the Separating Axis
//! Theorem.

use crate::math::{Real, UnitVector};
use crate::shape::ConvexPolygon;
use crate::utils;

/// The minimum-translation axis of two overlapping polygons.
#[derive(Copy, Clone, Debug)]
pub struct Penetration {
    /// The unit minimum-translation axis, pointing from the first polygon
    /// toward the second.
    pub normal: UnitVector,
    /// The penetration depth along `normal`.
    pub depth: Real,
}

/// Tests two polygons for overlap with the Separating Axis Theorem.
///
/// Every edge of both polygons contributes one candidate axis, the outward
/// edge normal. Both polygons are projected onto each axis; the test exits as
/// soon as one axis separates the projections, otherwise it keeps the axis
/// with the smallest overlap as the contact normal and its overlap as the
/// penetration depth.
///
/// Degenerate (near-zero-length) edges contribute no axis.
///
/// Both polygons must have up-to-date world vertices.
pub fn polygons_intersection(p1: &ConvexPolygon, p2: &ConvexPolygon) -> Option<Penetration> {
    let mut best: Option<Penetration> = None;

    for polygon in [p1, p2] {
        for (a, b) in polygon.world_edges() {
            let axis = match utils::ccw_face_normal(a, b) {
                Some(axis) => axis,
                None => continue, // degenerate edge
            };

            let (min1, max1) = project(p1, &axis);
            let (min2, max2) = project(p2, &axis);

            let overlap1 = max1 - min2;
            let overlap2 = max2 - min1;

            if overlap1 <= 0.0 || overlap2 <= 0.0 {
                // Separating axis: the whole pair is non-colliding.
                return None;
            }

            let overlap = overlap1.min(overlap2);
            if best.map_or(true, |pen| overlap < pen.depth) {
                best = Some(Penetration {
                    normal: axis,
                    depth: overlap,
                });
            }
        }
    }

    // Make the normal point from the first polygon toward the second.
    best.map(|mut pen| {
        let centers = p2.world_center() - p1.world_center();
        if centers.dot(&pen.normal) < 0.0 {
            pen.normal = -pen.normal;
        }
        pen
    })
}

/// The projection interval of a polygon's vertices onto `axis`.
fn project(polygon: &ConvexPolygon, axis: &UnitVector) -> (Real, Real) {
    let mut min = Real::MAX;
    let mut max = -Real::MAX;

    for pt in polygon.world_vertices() {
        let dot = pt.coords.dot(axis);
        min = min.min(dot);
        max = max.max(dot);
    }

    (min, max)
}
