//! Collision shapes supported by the engine.

pub use self::convex_polygon::{ConvexPolygon, InvalidPolygonError};
pub use self::mass_properties::MassProperties;

mod convex_polygon;
mod mass_properties;
