//! Contact-point extraction for a colliding polygon pair.

use crate::math::{Point, Real};
use crate::shape::ConvexPolygon;
use crate::utils;
use arrayvec::ArrayVec;

/// Squared-distance tolerance within which a candidate ties with the current
/// closest point, producing a two-point (flush edge-edge) manifold.
const SAME_DISTANCE_EPSILON: Real = 5.0e-4;

/// Squared-distance tolerance under which two candidates count as the same
/// contact point.
const SAME_POINT_EPSILON: Real = 1.0e-6;

/// The world-space contact points shared by two overlapping polygons.
#[derive(Clone, Debug, Default)]
pub struct ContactPoints {
    /// One point for vertex contacts, two for flush edge-edge contacts.
    pub points: ArrayVec<Point, 2>,
}

/// Finds up to two world-space contact points between two overlapping
/// polygons.
///
/// Every vertex of each polygon is tested against every edge segment of the
/// other; the closest pair overall becomes the first contact point. A second
/// candidate whose distance ties with the minimum, without coinciding with
/// the first point, becomes the second contact point. This covers the two
/// manifold cases of convex polygons: a single vertex contact, or a flush
/// edge-edge contact.
///
/// Both polygons must have up-to-date world vertices.
pub fn contact_points(p1: &ConvexPolygon, p2: &ConvexPolygon) -> ContactPoints {
    let mut min_dist_sq = Real::MAX;
    let mut contact1 = Point::origin();
    let mut contact2: Option<Point> = None;

    let mut scan = |vertices: &ConvexPolygon, edges: &ConvexPolygon| {
        for pt in vertices.world_vertices() {
            for (a, b) in edges.world_edges() {
                let closest = utils::closest_point_on_segment(pt, &a, &b);
                let dist_sq = na::distance_squared(pt, &closest);

                if (dist_sq - min_dist_sq).abs() < SAME_DISTANCE_EPSILON {
                    if na::distance_squared(&closest, &contact1) > SAME_POINT_EPSILON {
                        contact2 = Some(closest);
                    }
                } else if dist_sq < min_dist_sq {
                    min_dist_sq = dist_sq;
                    contact1 = closest;
                    contact2 = None;
                }
            }
        }
    };

    scan(p1, p2);
    scan(p2, p1);

    let mut points = ArrayVec::new();
    points.push(contact1);
    if let Some(contact2) = contact2 {
        points.push(contact2);
    }

    ContactPoints { points }
}
