//! Axis-aligned bounding boxes, used for broad-phase culling.

pub use self::aabb::Aabb;

mod aabb;
