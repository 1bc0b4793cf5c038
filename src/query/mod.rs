//! Pairwise geometric queries between world-space polygons.

pub use self::contact::{contact_points, ContactPoints};
pub use self::sat::{polygons_intersection, Penetration};

mod contact;
mod sat;
