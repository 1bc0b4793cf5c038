use crate::math::Vector;

/// The counter-clockwise perpendicular of `v`.
///
/// This is `v` rotated by 90°; `perp(r) * w` is the velocity contributed at
/// lever arm `r` by the angular velocity `w`.
#[inline]
pub fn perp(v: &Vector) -> Vector {
    Vector::new(-v.y, v.x)
}
