//! The live population and the lockstep time step
//!
//! A [`Registry`] owns every top-level body. `step` computes the next
//! generation from the current one without touching it, then swaps the whole
//! population in one move and drops the old generation. If any body fails
//! to update the tick is abandoned and the population is left as it was.
//!
//! At most one registry is expected to drive a simulation at a time. Most
//! callers hold one as an explicit context object; [`with_instance`] and
//! [`release`] provide a lazily created process-wide one for callers that
//! want a single implicit registry.

use std::sync::{Mutex, MutexGuard};

use log::{debug, warn};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{SimError, SimResult};
use crate::simulation::forces::{ForceField, NewtonianGravity};
use crate::simulation::states::Body;
use crate::simulation::visitor::Mover;

#[derive(Debug, Clone, Default)]
pub struct Registry {
    bodies: Vec<Body>, // top-level population, registration order
    gravity: NewtonianGravity,
    t: f64, // simulated time (s)
    steps: u64, // completed ticks
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gravity(gravity: NewtonianGravity) -> Self {
        Self { gravity, ..Self::default() }
    }

    pub fn gravity(&self) -> NewtonianGravity {
        self.gravity
    }

    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Append a body; the registry owns it from now on
    pub fn register(&mut self, body: Body) {
        debug!("register '{}' (m = {:e})", body.name(), body.mass());
        self.bodies.push(body);
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Deep copy of the current population, decoupled from later steps
    pub fn snapshot(&self) -> Vec<Body> {
        self.bodies.clone()
    }

    /// Replace the population wholesale, returning the previous one
    pub fn swap(&mut self, bodies: Vec<Body>) -> Vec<Body> {
        std::mem::replace(&mut self.bodies, bodies)
    }

    /// Drop every registered body
    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    /// Advance every body by `dt` seconds from one consistent snapshot
    pub fn step(&mut self, dt: f64) -> SimResult<()> {
        if !dt.is_finite() {
            return Err(SimError::InvalidTimeStep(dt));
        }

        let field = ForceField::new(&self.bodies, self.gravity);
        let next = match Self::advance_all(&self.bodies, Mover::new(dt, field)) {
            Ok(next) => next,
            Err(e) => {
                warn!("tick {} aborted at t = {}: {}", self.steps + 1, self.t, e);
                return Err(e);
            }
        };

        drop(self.swap(next));
        self.t += dt;
        self.steps += 1;
        debug!("tick {} done, t = {} s", self.steps, self.t);
        Ok(())
    }

    #[cfg(not(feature = "parallel"))]
    fn advance_all(bodies: &[Body], mut mover: Mover) -> SimResult<Vec<Body>> {
        bodies.iter().map(|b| mover.advance(b)).collect()
    }

    // Workers only read the shared pre-tick slice; results are collected
    // before anything is swapped in
    #[cfg(feature = "parallel")]
    fn advance_all(bodies: &[Body], mover: Mover) -> SimResult<Vec<Body>> {
        bodies
            .par_iter()
            .map(move |b| {
                let mut mover = mover;
                mover.advance(b)
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}

static INSTANCE: Mutex<Option<Registry>> = Mutex::new(None);

fn lock_instance() -> MutexGuard<'static, Option<Registry>> {
    // a panic mid-step never leaves a half-swapped population, so a
    // poisoned lock still holds a consistent registry
    INSTANCE.lock().unwrap_or_else(|e| e.into_inner())
}

/// Run `f` against the process-wide registry, creating it if needed
///
/// Repeated calls see the same registry until [`release`] is called.
/// The registry is locked for the duration of `f`, so do not nest calls.
pub fn with_instance<R>(f: impl FnOnce(&mut Registry) -> R) -> R {
    let mut guard = lock_instance();
    let registry = guard.get_or_insert_with(|| {
        debug!("creating process-wide registry");
        Registry::new()
    });
    f(registry)
}

/// Drop the process-wide registry and every body it owns
///
/// Returns true if there was one; the next [`with_instance`] starts fresh
pub fn release() -> bool {
    let released = lock_instance().take();
    if released.is_some() {
        debug!("released process-wide registry");
    }
    released.is_some()
}
