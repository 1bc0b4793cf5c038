//! Sequential-impulse resolution of one colliding pair.

use super::{ContactManifold, RigidBody};
use crate::math::{Real, UnitVector, Vector};
use crate::utils;
use arrayvec::ArrayVec;

/// Tangential velocities with a norm below this threshold produce no friction
/// impulse.
const FRICTION_VELOCITY_EPSILON: Real = 1.0e-6;

/// Resolves one colliding pair: positional depenetration followed by
/// sequential normal and friction impulses at each contact point.
pub(crate) fn solve(bodies: &mut [RigidBody], manifold: &ContactManifold) {
    let (body1, body2) =
        disjoint_pair_mut(bodies, manifold.body1.index(), manifold.body2.index());

    correct_positions(body1, body2, manifold);
    apply_impulses(body1, body2, manifold);
}

/// Two mutable references to distinct slots of `bodies`.
fn disjoint_pair_mut(
    bodies: &mut [RigidBody],
    i1: usize,
    i2: usize,
) -> (&mut RigidBody, &mut RigidBody) {
    debug_assert!(i1 != i2);

    if i1 < i2 {
        let (head, tail) = bodies.split_at_mut(i2);
        (&mut head[i1], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(i1);
        (&mut tail[0], &mut head[i2])
    }
}

/// Moves the bodies out of overlap along the contact normal.
///
/// A pair with one static body moves the dynamic body by the full penetration
/// vector; two dynamic bodies split the correction in equal halves. Moved
/// bodies get their world vertices and AABB refreshed immediately.
fn correct_positions(body1: &mut RigidBody, body2: &mut RigidBody, manifold: &ContactManifold) {
    // The normal points from body1 toward body2.
    let correction = *manifold.normal * manifold.depth;

    match (body1.is_static(), body2.is_static()) {
        (false, false) => {
            body1.translate(-correction * 0.5);
            body2.translate(correction * 0.5);
        }
        (true, false) => body2.translate(correction),
        (false, true) => body1.translate(-correction),
        (true, true) => {}
    }
}

/// Applies normal impulses at every contact point, then Coulomb friction
/// impulses over the updated velocities.
fn apply_impulses(body1: &mut RigidBody, body2: &mut RigidBody, manifold: &ContactManifold) {
    // Material properties are combined by pairwise average.
    let restitution = (body1.restitution() + body2.restitution()) * 0.5;
    let static_friction = (body1.static_friction() + body2.static_friction()) * 0.5;
    let dynamic_friction = (body1.dynamic_friction() + body2.dynamic_friction()) * 0.5;

    let normal = *manifold.normal;
    let count = manifold.points.len() as Real;
    let mut normal_impulses = ArrayVec::<Real, 2>::new();

    for point in &manifold.points {
        let r1 = point - body1.position();
        let r2 = point - body2.position();

        let rel_vel = relative_velocity(body1, body2, &r1, &r2);
        let contact_vel = rel_vel.dot(&normal);

        // Already separating at this contact.
        if contact_vel > 0.0 {
            normal_impulses.push(0.0);
            continue;
        }

        let inv_mass_term = effective_inv_mass(body1, body2, &r1, &r2, &normal);
        if inv_mass_term <= 0.0 {
            normal_impulses.push(0.0);
            continue;
        }

        let j = -(1.0 + restitution) * contact_vel / inv_mass_term / count;
        let impulse = normal * j;

        body1.apply_impulse(-impulse, &r1);
        body2.apply_impulse(impulse, &r2);
        normal_impulses.push(j);
    }

    for (point, j) in manifold.points.iter().zip(normal_impulses) {
        if j <= 0.0 {
            continue;
        }

        let r1 = point - body1.position();
        let r2 = point - body2.position();

        let rel_vel = relative_velocity(body1, body2, &r1, &r2);
        let tangent_vel = rel_vel - normal * rel_vel.dot(&normal);

        // No tangential motion, no friction.
        let tangent = match UnitVector::try_new(tangent_vel, FRICTION_VELOCITY_EPSILON) {
            Some(tangent) => tangent,
            None => continue,
        };

        let inv_mass_term = effective_inv_mass(body1, body2, &r1, &r2, &tangent);
        if inv_mass_term <= 0.0 {
            continue;
        }

        let jt = -rel_vel.dot(&tangent) / inv_mass_term / count;

        // Coulomb's law: stay unclamped within the static cone, otherwise
        // slide with the dynamic coefficient.
        let impulse = if jt.abs() <= j * static_friction {
            *tangent * jt
        } else {
            *tangent * (-j * dynamic_friction)
        };

        body1.apply_impulse(-impulse, &r1);
        body2.apply_impulse(impulse, &r2);
    }
}

/// The velocity of `body2` relative to `body1` at a contact, including the
/// angular contribution at the lever arms `r1` and `r2`.
fn relative_velocity(
    body1: &RigidBody,
    body2: &RigidBody,
    r1: &Vector,
    r2: &Vector,
) -> Vector {
    let vel1 = body1.linvel() + utils::perp(r1) * body1.angvel();
    let vel2 = body2.linvel() + utils::perp(r2) * body2.angvel();
    vel2 - vel1
}

/// The denominator of the impulse formula along `dir`: the sum of the inverse
/// masses plus the rotational terms of both lever arms.
fn effective_inv_mass(
    body1: &RigidBody,
    body2: &RigidBody,
    r1: &Vector,
    r2: &Vector,
    dir: &Vector,
) -> Real {
    let rd1 = utils::perp(r1).dot(dir);
    let rd2 = utils::perp(r2).dot(dir);

    body1.inv_mass()
        + body2.inv_mass()
        + body1.inv_inertia() * rd1 * rd1
        + body2.inv_inertia() * rd2 * rd2
}
