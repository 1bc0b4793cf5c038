use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::{ConvexPolygon, MassProperties};

/// The index-stable identifier of a body inside a
/// [`PhysicsWorld`](crate::dynamics::PhysicsWorld).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub(crate) usize);

impl BodyHandle {
    /// The index of this body in its world's storage.
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// The description of a body to insert into a world.
#[derive(Clone, Debug)]
pub struct BodyDesc {
    /// Local-space vertices of the body's collision polygon, in
    /// counter-clockwise order.
    pub vertices: Vec<Point>,
    /// Initial world-space position of the center of mass.
    pub position: Point,
    /// Initial orientation, in radians.
    pub rotation: Real,
    /// Whether the body is static. Static bodies have infinite mass and are
    /// never integrated.
    pub is_static: bool,
    /// The mass. Ignored for static bodies.
    pub mass: Real,
    /// Static friction coefficient of the body's material.
    pub static_friction: Real,
    /// Dynamic friction coefficient of the body's material.
    pub dynamic_friction: Real,
    /// Restitution coefficient of the body's material.
    pub restitution: Real,
}

impl Default for BodyDesc {
    fn default() -> Self {
        BodyDesc {
            vertices: Vec::new(),
            position: Point::origin(),
            rotation: 0.0,
            is_static: false,
            mass: 1.0,
            static_friction: 0.6,
            dynamic_friction: 0.4,
            restitution: 0.2,
        }
    }
}

/// A rigid body and its exclusively-owned collision polygon.
///
/// Invariant: a static body has zero mass, zero inertia, and zero inverses;
/// the integrator and the solver never change its kinematic state.
#[derive(Clone, Debug)]
pub struct RigidBody {
    position: Point,
    rotation: Real,
    linvel: Vector,
    angvel: Real,
    mass_properties: MassProperties,
    is_static: bool,
    static_friction: Real,
    dynamic_friction: Real,
    restitution: Real,
    aabb: Aabb,
    shape: ConvexPolygon,
}

impl RigidBody {
    pub(crate) fn new(
        shape: ConvexPolygon,
        mass_properties: MassProperties,
        desc: &BodyDesc,
    ) -> Self {
        let mut result = RigidBody {
            position: desc.position,
            rotation: desc.rotation,
            linvel: Vector::zeros(),
            angvel: 0.0,
            mass_properties,
            is_static: desc.is_static,
            static_friction: desc.static_friction,
            dynamic_friction: desc.dynamic_friction,
            restitution: desc.restitution,
            aabb: Aabb::new_invalid(),
            shape,
        };
        result.update_transform();
        result
    }

    /// The world-space position of this body's center of mass.
    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// The orientation of this body, in radians.
    #[inline]
    pub fn rotation(&self) -> Real {
        self.rotation
    }

    /// The linear velocity of this body.
    #[inline]
    pub fn linvel(&self) -> Vector {
        self.linvel
    }

    /// The angular velocity of this body, in radians per frame.
    #[inline]
    pub fn angvel(&self) -> Real {
        self.angvel
    }

    /// Whether this body is static.
    #[inline]
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// The mass properties of this body. All fields are zero for a static
    /// body.
    #[inline]
    pub fn mass_properties(&self) -> MassProperties {
        self.mass_properties
    }

    /// The inverse mass of this body.
    #[inline]
    pub fn inv_mass(&self) -> Real {
        self.mass_properties.inv_mass
    }

    /// The inverse angular inertia of this body.
    #[inline]
    pub fn inv_inertia(&self) -> Real {
        self.mass_properties.inv_inertia
    }

    /// The static friction coefficient of this body's material.
    #[inline]
    pub fn static_friction(&self) -> Real {
        self.static_friction
    }

    /// The dynamic friction coefficient of this body's material.
    #[inline]
    pub fn dynamic_friction(&self) -> Real {
        self.dynamic_friction
    }

    /// The restitution coefficient of this body's material.
    #[inline]
    pub fn restitution(&self) -> Real {
        self.restitution
    }

    /// This body's collision polygon.
    #[inline]
    pub fn shape(&self) -> &ConvexPolygon {
        &self.shape
    }

    /// The AABB enclosing this body's shape, as of the last transform update.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// Overwrites this body's linear velocity.
    ///
    /// Intended for external steering (e.g. pointer dragging) between steps.
    /// Ignored for static bodies.
    pub fn set_linvel(&mut self, linvel: Vector) {
        if !self.is_static {
            self.linvel = linvel;
        }
    }

    /// Overwrites this body's angular velocity. Ignored for static bodies.
    pub fn set_angvel(&mut self, angvel: Real) {
        if !self.is_static {
            self.angvel = angvel;
        }
    }

    /// Teleports this body and refreshes its world vertices and AABB.
    ///
    /// Intended for external repositioning (e.g. dragging a static body)
    /// between steps; never call this while a step is in progress.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
        self.update_transform();
    }

    /// Integrates gravity, position, and rotation over one substep.
    ///
    /// Static bodies are left untouched; they accumulate no gravity.
    pub(crate) fn integrate(&mut self, gravity: &Vector, dt: Real) {
        if self.is_static {
            return;
        }

        self.linvel += gravity * dt;
        self.position += self.linvel * dt;
        self.rotation += self.angvel * dt;
    }

    /// Moves this body by `delta` and refreshes its world vertices and AABB.
    pub(crate) fn translate(&mut self, delta: Vector) {
        self.position += delta;
        self.update_transform();
    }

    /// Applies an impulse at lever arm `r`, updating both linear and angular
    /// velocity. A no-op for static bodies since their inverses are zero.
    pub(crate) fn apply_impulse(&mut self, impulse: Vector, r: &Vector) {
        self.linvel += impulse * self.mass_properties.inv_mass;
        self.angvel += r.perp(&impulse) * self.mass_properties.inv_inertia;
    }

    /// Recomputes the cached world vertices and AABB from the current
    /// position and rotation.
    pub(crate) fn update_transform(&mut self) {
        self.shape.update_world_vertices(&self.position, self.rotation);
        self.aabb = self.shape.world_aabb();
    }
}
