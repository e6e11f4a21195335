//! Motion strategies for composite bodies
//!
//! - `Rigid`       the cluster is one point mass at its center of mass and
//!                 translates without deforming
//! - `Distributed` every member is integrated on its own, feeling the rest
//!                 of the population plus its fellow members, so the
//!                 cluster can stretch under tidal forces
//!
//! Strategies are stateless `Copy` values, so each composite owns its own.

use log::trace;

use crate::simulation::forces::{probe_mass, ForceField};
use crate::simulation::integrator::explicit_euler;
use crate::simulation::states::{Body, CompositeBody};
use crate::simulation::vector::NVec2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MotionStrategy {
    #[default]
    Rigid,
    Distributed,
}

impl MotionStrategy {
    /// Move `next` (a fresh clone of `current`) forward by `dt`
    ///
    /// `current` is the pre-tick composite as it sits in the population;
    /// it is both the identity excluded from the outside sources and the
    /// snapshot of member positions used for intra-cluster forces
    pub fn advance(&self, next: &mut CompositeBody, current: &CompositeBody, dt: f64, field: &ForceField) {
        match self {
            MotionStrategy::Rigid => advance_rigid(next, dt, field),
            MotionStrategy::Distributed => advance_distributed(next, current, dt, field),
        }
    }
}

fn advance_rigid(next: &mut CompositeBody, dt: f64, field: &ForceField) {
    let mass = next.mass();
    let x = next.position();
    let force = field.force_on(mass, x);
    let (x_next, v_next) = explicit_euler(x, next.velocity(), force / mass, dt);
    trace!("rigid '{}': F = {:?}", next.name(), force);
    next.set_velocity(v_next);
    next.set_position(x_next);
}

fn advance_distributed(next: &mut CompositeBody, current: &CompositeBody, dt: f64, field: &ForceField) {
    let siblings = current.members();
    for member in next.members_mut().iter_mut() {
        let m = probe_mass(member.mass());
        let x = member.position();
        let force = field.force_on_excluding(m, x, current) + field.force_from(siblings, m, x);
        move_member(member, force / m, dt);
    }
}

// A member follows its own variant's rules: fixed members stay put and
// nested composites shift as a whole
fn move_member(member: &mut Body, accel: NVec2, dt: f64) {
    if let Body::Fixed(_) = member {
        return;
    }
    let (x_next, v_next) = explicit_euler(member.position(), member.velocity(), accel, dt);
    member.set_velocity(v_next);
    member.set_position(x_next);
}
