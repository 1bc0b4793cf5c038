/*!
impulse2d
=========

**impulse2d** is a 2-dimensional rigid-body physics engine for convex
polygons written with the rust programming language.

It implements the classic pipeline of a small impulse-based engine:
AABB broad-phase culling, narrow-phase collision detection with the
Separating Axis Theorem, contact-manifold extraction, and a
sequential-impulse solver with Coulomb friction and rotational response,
advanced through fixed-size integration substeps.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]

#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod dynamics;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation-flag dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    use na::{Point2, Rotation2, Unit, Vector2};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The point type.
    pub type Point = Point2<Real>;

    /// The vector type.
    pub type Vector = Vector2<Real>;

    /// A vector with a unit norm.
    pub type UnitVector = Unit<Vector2<Real>>;

    /// The rotation type.
    pub type Rotation = Rotation2<Real>;
}
