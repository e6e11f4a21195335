//! Gravitational force law and force accumulation over a population
//!
//! Force on A from B is `G * mA * mB * unit(pB - pA) / |pB - pA|^2`, pointing
//! from A toward B. Coincident positions give a zero force instead of a
//! singularity, which is how a body's contribution to itself vanishes.

use std::ptr;

use crate::simulation::states::{Body, CompositeBody};
use crate::simulation::vector::NVec2;

/// SI gravitational constant (m^3 kg^-1 s^-2)
pub const G: f64 = 6.67428e-11;

/// Plain Newtonian gravity, no softening
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self { G }
    }
}

impl NewtonianGravity {
    /// Force experienced by a mass `ma` at `pa` due to a mass `mb` at `pb`
    pub fn force_between(&self, ma: f64, pa: NVec2, mb: f64, pb: NVec2) -> NVec2 {
        // r points from a to b
        let r = pb - pa;
        if pa == pb {
            return NVec2::zeros();
        }
        let r2 = r.norm_squared();
        let coef = self.G * ma * mb / r2;
        coef * (r / r2.sqrt())
    }

    /// Force on `a` due to `b`; negate for the force on `b`
    pub fn force(&self, a: &Body, b: &Body) -> NVec2 {
        self.force_between(a.mass(), a.position(), b.mass(), b.position())
    }
}

/// Mass a body is treated as having when probing the field
///
/// Massless bodies are test particles and take the acceleration a unit
/// mass would feel, instead of `0 / 0`
pub fn probe_mass(mass: f64) -> f64 {
    if mass > 0.0 { mass } else { 1.0 }
}

/// Force between two bodies with the SI constant
pub fn force(a: &Body, b: &Body) -> NVec2 {
    NewtonianGravity::default().force(a, b)
}

/// A read-only population used as the gravity source for one tick
///
/// Every force evaluation within a tick goes through the same `ForceField`,
/// so all of them observe the pre-tick state
#[derive(Debug, Clone, Copy)]
pub struct ForceField<'a> {
    sources: &'a [Body],
    gravity: NewtonianGravity,
}

impl<'a> ForceField<'a> {
    pub fn new(sources: &'a [Body], gravity: NewtonianGravity) -> Self {
        Self { sources, gravity }
    }

    /// Total force on a mass at `position` from every source
    pub fn force_on(&self, mass: f64, position: NVec2) -> NVec2 {
        self.sum_over(self.sources.iter(), mass, position)
    }

    /// Total force from every source except the composite `owner` itself
    ///
    /// The exclusion is by identity: a different composite that happens to
    /// compare equal still contributes
    pub fn force_on_excluding(&self, mass: f64, position: NVec2, owner: &CompositeBody) -> NVec2 {
        let others = self.sources.iter().filter(|b| match b {
            Body::Composite(c) => !ptr::eq(c, owner),
            _ => true,
        });
        self.sum_over(others, mass, position)
    }

    /// Force from an arbitrary set of bodies (e.g. the members of a cluster)
    pub fn force_from<'b>(&self, bodies: impl IntoIterator<Item = &'b Body>, mass: f64, position: NVec2) -> NVec2 {
        self.sum_over(bodies.into_iter(), mass, position)
    }

    fn sum_over<'b>(&self, bodies: impl Iterator<Item = &'b Body>, mass: f64, position: NVec2) -> NVec2 {
        bodies.fold(NVec2::zeros(), |acc, b| {
            acc + self.gravity.force_between(mass, position, b.mass(), b.position())
        })
    }
}
