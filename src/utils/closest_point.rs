use crate::math::Point;

/// Projects `pt` onto the segment `[a, b]`, clamping the parametric coordinate
/// of the projection to `[0, 1]`.
pub fn closest_point_on_segment(pt: &Point, a: &Point, b: &Point) -> Point {
    let ab = b - a;
    let sq_len = ab.norm_squared();

    if sq_len == 0.0 {
        return *a;
    }

    let t = ((pt - a).dot(&ab) / sq_len).clamp(0.0, 1.0);
    a + ab * t
}
