use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Rotation, Vector};
use crate::utils;
use thiserror::Error;

/// Error indicating that a vertex list does not describe a usable convex
/// polygon.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidPolygonError {
    /// A polygon needs at least three vertices.
    #[error("a convex polygon needs at least 3 vertices, got {got}")]
    TooFewVertices {
        /// The number of vertices that was provided.
        got: usize,
    },
    /// Every edge of the polygon is (almost) zero-length.
    #[error("the vertices describe a degenerate polygon")]
    Degenerate,
}

/// A 2D convex polygon with a cached world-space image of its vertices.
///
/// The local-space vertices are in counter-clockwise order and never change
/// after construction. The world-space cache is refreshed by
/// [`ConvexPolygon::update_world_vertices`] and is only meaningful after the
/// owning body's transform has been applied for the current substep; readers
/// must not rely on it across a position change.
#[derive(Clone, Debug)]
pub struct ConvexPolygon {
    local_vertices: Vec<Point>,
    world_vertices: Vec<Point>,
}

impl ConvexPolygon {
    /// Creates a polygon from vertices assumed to describe a counter-clockwise
    /// convex polyline.
    ///
    /// Convexity of the input is not checked.
    pub fn try_new(local_vertices: Vec<Point>) -> Result<Self, InvalidPolygonError> {
        if local_vertices.len() < 3 {
            return Err(InvalidPolygonError::TooFewVertices {
                got: local_vertices.len(),
            });
        }

        let num = local_vertices.len();
        let has_edge = (0..num).any(|i1| {
            let i2 = (i1 + 1) % num;
            utils::ccw_face_normal(local_vertices[i1], local_vertices[i2]).is_some()
        });

        if !has_edge {
            return Err(InvalidPolygonError::Degenerate);
        }

        let world_vertices = local_vertices.clone();
        Ok(ConvexPolygon {
            local_vertices,
            world_vertices,
        })
    }

    /// The local-space vertices of this polygon.
    #[inline]
    pub fn local_vertices(&self) -> &[Point] {
        &self.local_vertices
    }

    /// The world-space vertices cached by the last transform update.
    #[inline]
    pub fn world_vertices(&self) -> &[Point] {
        &self.world_vertices
    }

    /// Recomputes the world-space vertex cache for the given body transform.
    ///
    /// Every world vertex becomes `position + rotation * local_vertex`.
    pub fn update_world_vertices(&mut self, position: &Point, rotation: Real) {
        let rot = Rotation::new(rotation);

        for (world, local) in self.world_vertices.iter_mut().zip(self.local_vertices.iter()) {
            *world = *position + rot * local.coords;
        }
    }

    /// The AABB enclosing the cached world-space vertices.
    #[inline]
    pub fn world_aabb(&self) -> Aabb {
        Aabb::from_points(&self.world_vertices)
    }

    /// The mean of the cached world-space vertices.
    pub fn world_center(&self) -> Point {
        let sum = self
            .world_vertices
            .iter()
            .fold(Vector::zeros(), |acc, pt| acc + pt.coords);

        Point::from(sum / self.world_vertices.len() as Real)
    }

    /// Iterates over the world-space edges `(a, b)` of this polygon.
    pub fn world_edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let num = self.world_vertices.len();
        (0..num).map(move |i1| {
            let i2 = (i1 + 1) % num;
            (self.world_vertices[i1], self.world_vertices[i2])
        })
    }
}

#[cfg(test)]
mod test {
    use super::{ConvexPolygon, InvalidPolygonError};
    use crate::math::{Point, Real};

    fn unit_square() -> Vec<Point> {
        vec![
            Point::new(-0.5, -0.5),
            Point::new(0.5, -0.5),
            Point::new(0.5, 0.5),
            Point::new(-0.5, 0.5),
        ]
    }

    #[test]
    fn rejects_invalid_vertex_lists() {
        assert_eq!(
            ConvexPolygon::try_new(vec![Point::origin(); 2]).unwrap_err(),
            InvalidPolygonError::TooFewVertices { got: 2 }
        );
        assert_eq!(
            ConvexPolygon::try_new(vec![Point::new(1.0, 1.0); 3]).unwrap_err(),
            InvalidPolygonError::Degenerate
        );
    }

    #[test]
    fn transform_update_rotates_and_translates() {
        let mut polygon = ConvexPolygon::try_new(unit_square()).unwrap();
        polygon.update_world_vertices(&Point::new(10.0, 0.0), Real::to_radians(90.0));

        // The local (0.5, -0.5) corner ends up at (10.5, 0.5).
        assert_relative_eq!(
            polygon.world_vertices()[1],
            Point::new(10.5, 0.5),
            epsilon = 1.0e-5
        );

        let aabb = polygon.world_aabb();
        assert_relative_eq!(aabb.mins, Point::new(9.5, -0.5), epsilon = 1.0e-5);
        assert_relative_eq!(aabb.maxs, Point::new(10.5, 0.5), epsilon = 1.0e-5);
        assert_relative_eq!(polygon.world_center(), Point::new(10.0, 0.0), epsilon = 1.0e-5);
    }

    #[test]
    fn world_cache_has_one_entry_per_local_vertex() {
        let polygon = ConvexPolygon::try_new(unit_square()).unwrap();
        assert_eq!(polygon.world_vertices().len(), polygon.local_vertices().len());
    }
}
