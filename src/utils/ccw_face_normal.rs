use crate::math::{Point, UnitVector, Vector, DEFAULT_EPSILON};

/// Computes the direction pointing toward the right-hand-side of the oriented
/// segment `a -> b`.
///
/// For an edge of a counter-clockwise polygon this is the outward normal of
/// that edge. Returns `None` if the segment is degenerate.
#[inline]
pub fn ccw_face_normal(a: Point, b: Point) -> Option<UnitVector> {
    let ab = b - a;

    UnitVector::try_new(Vector::new(ab.y, -ab.x), DEFAULT_EPSILON)
}

#[cfg(test)]
mod test {
    use super::ccw_face_normal;
    use crate::math::Point;

    #[test]
    fn points_outward_for_ccw_winding() {
        // Bottom edge of a CCW square must have a downward normal.
        let normal = ccw_face_normal(Point::new(-1.0, -1.0), Point::new(1.0, -1.0)).unwrap();
        assert_relative_eq!(normal.x, 0.0);
        assert_relative_eq!(normal.y, -1.0);
    }

    #[test]
    fn degenerate_segment_has_no_normal() {
        assert!(ccw_face_normal(Point::new(2.0, 3.0), Point::new(2.0, 3.0)).is_none());
    }
}
