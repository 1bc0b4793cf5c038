//! Various geometrical operators shared by the collision and dynamics modules.

pub use self::ccw_face_normal::ccw_face_normal;
pub use self::closest_point::closest_point_on_segment;
pub use self::normalize::{try_normalize, DegenerateVector};
pub use self::perp::perp;

mod ccw_face_normal;
mod closest_point;
mod normalize;
mod perp;
