use super::BodyHandle;
use crate::math::{Point, Real, UnitVector};
use arrayvec::ArrayVec;

/// The contact information of one colliding body pair, valid for one substep.
///
/// The bodies are referenced by handle rather than borrowed, so that both can
/// be mutated during resolution. Manifolds are transient: they are created,
/// consumed, and discarded within one substep, and impulses are never carried
/// over to the next one.
#[derive(Clone, Debug)]
pub struct ContactManifold {
    /// The first body of the pair.
    pub body1: BodyHandle,
    /// The second body of the pair.
    pub body2: BodyHandle,
    /// The unit contact normal, pointing from `body1` toward `body2`.
    pub normal: UnitVector,
    /// The penetration depth along `normal`.
    pub depth: Real,
    /// The world-space contact points. One point for vertex contacts, two for
    /// flush edge-edge contacts.
    pub points: ArrayVec<Point, 2>,
}
