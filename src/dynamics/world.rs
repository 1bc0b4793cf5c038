use super::{solver, BodyDesc, BodyHandle, ContactManifold, RigidBody};
use crate::math::{Real, Vector};
use crate::query;
use crate::shape::{ConvexPolygon, InvalidPolygonError, MassProperties};
use thiserror::Error;

/// Error returned when inserting a body into a world fails.
///
/// Both variants are recoverable: a failed insertion leaves the world
/// unchanged.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum BodyCreationError {
    /// The world already holds its maximum number of bodies.
    #[error("the world is full ({capacity} bodies)")]
    CapacityExceeded {
        /// The fixed capacity of the world.
        capacity: usize,
    },
    /// The vertex list cannot form a collision polygon.
    #[error(transparent)]
    InvalidPolygon(#[from] InvalidPolygonError),
}

/// The simulation context: a fixed-capacity arena of rigid bodies and the
/// substep loop advancing them.
///
/// Bodies are stored in an index-stable arena and referenced by
/// [`BodyHandle`]; they are never reachable through raw addresses. The whole
/// pipeline is single-threaded and synchronous: a call to
/// [`PhysicsWorld::step`] runs every substep to completion before returning,
/// and callers may freely read or steer bodies in between.
#[derive(Clone, Debug)]
pub struct PhysicsWorld {
    bodies: Vec<RigidBody>,
    capacity: usize,
    gravity: Vector,
    substeps: usize,
}

impl PhysicsWorld {
    /// The default number of integration substeps per frame.
    pub const DEFAULT_SUBSTEPS: usize = 20;

    /// Creates an empty world holding at most `capacity` bodies.
    ///
    /// The default gravity is `(0, 0.6)` world units per frame squared
    /// (y points down), applied over [`PhysicsWorld::DEFAULT_SUBSTEPS`]
    /// substeps per frame.
    pub fn with_capacity(capacity: usize) -> Self {
        PhysicsWorld {
            bodies: Vec::with_capacity(capacity),
            capacity,
            gravity: Vector::new(0.0, 0.6),
            substeps: Self::DEFAULT_SUBSTEPS,
        }
    }

    /// The maximum number of bodies this world can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The number of bodies currently in this world.
    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether this world contains no body.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// The gravity applied to dynamic bodies, per frame.
    #[inline]
    pub fn gravity(&self) -> Vector {
        self.gravity
    }

    /// Sets the gravity applied to dynamic bodies, per frame.
    pub fn set_gravity(&mut self, gravity: Vector) {
        self.gravity = gravity;
    }

    /// The number of integration substeps per frame.
    #[inline]
    pub fn substeps(&self) -> usize {
        self.substeps
    }

    /// Sets the number of integration substeps per frame (at least one).
    pub fn set_substeps(&mut self, substeps: usize) {
        self.substeps = substeps.max(1);
    }

    /// Creates a body from `desc` and inserts it into this world.
    ///
    /// The mass properties are computed from the polygon's geometry, unless
    /// the body is static, in which case mass, inertia, and their inverses
    /// are all zero.
    pub fn create_body(&mut self, mut desc: BodyDesc) -> Result<BodyHandle, BodyCreationError> {
        if self.bodies.len() >= self.capacity {
            return Err(BodyCreationError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let vertices = std::mem::take(&mut desc.vertices);
        let shape = ConvexPolygon::try_new(vertices)?;
        let mass_properties = if desc.is_static {
            MassProperties::zero()
        } else {
            MassProperties::from_convex_polygon(desc.mass, shape.local_vertices())
        };

        let handle = BodyHandle(self.bodies.len());
        self.bodies.push(RigidBody::new(shape, mass_properties, &desc));
        Ok(handle)
    }

    /// A reference to the body identified by `handle`.
    #[inline]
    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle.0)
    }

    /// A mutable reference to the body identified by `handle`.
    ///
    /// Mutations (pointer dragging, velocity overrides) must happen between
    /// steps, never concurrently with a running substep.
    #[inline]
    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle.0)
    }

    /// Iterates over every body of this world.
    pub fn bodies(&self) -> impl Iterator<Item = &RigidBody> {
        self.bodies.iter()
    }

    /// Advances the simulation by one frame.
    ///
    /// A frame is `substeps` fixed-size substeps; each substep integrates
    /// every dynamic body, then detects and resolves the collisions of every
    /// pair involving it. The iteration order over bodies and pairs is fixed,
    /// which makes the simulation deterministic but order-dependent, the
    /// expected behavior of a sequential-impulse solver.
    pub fn step(&mut self) {
        let dt = 1.0 / self.substeps as Real;

        for _ in 0..self.substeps {
            self.substep(dt);
        }
    }

    fn substep(&mut self, dt: Real) {
        let num = self.bodies.len();
        let gravity = self.gravity;

        for i1 in 0..num {
            if self.bodies[i1].is_static() {
                continue;
            }

            self.bodies[i1].integrate(&gravity, dt);
            self.bodies[i1].update_transform();

            for i2 in 0..num {
                if i2 == i1 {
                    continue;
                }

                let manifold =
                    match self.contact_manifold(BodyHandle(i1), BodyHandle(i2)) {
                        Some(manifold) => manifold,
                        None => continue,
                    };

                solver::solve(&mut self.bodies, &manifold);
            }
        }
    }

    /// Runs the broad phase, the narrow phase, and the contact-point
    /// extraction for one pair, in that order.
    fn contact_manifold(&self, h1: BodyHandle, h2: BodyHandle) -> Option<ContactManifold> {
        let body1 = &self.bodies[h1.0];
        let body2 = &self.bodies[h2.0];

        // Broad phase: disjoint AABBs cannot collide.
        if !body1.aabb().intersects(body2.aabb()) {
            return None;
        }

        let penetration = query::polygons_intersection(body1.shape(), body2.shape())?;
        let contacts = query::contact_points(body1.shape(), body2.shape());

        log::trace!(
            "contact pair ({}, {}): depth = {}, {} point(s)",
            h1.index(),
            h2.index(),
            penetration.depth,
            contacts.points.len(),
        );

        Some(ContactManifold {
            body1: h1,
            body2: h2,
            normal: penetration.normal,
            depth: penetration.depth,
            points: contacts.points,
        })
    }
}
