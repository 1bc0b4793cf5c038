//! Rigid bodies, contact manifolds, and the substep simulation loop.

pub use self::manifold::ContactManifold;
pub use self::rigid_body::{BodyDesc, BodyHandle, RigidBody};
pub use self::world::{BodyCreationError, PhysicsWorld};

mod manifold;
mod rigid_body;
mod solver;
mod world;
