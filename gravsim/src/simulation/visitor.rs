//! Double-dispatch over the body variants
//!
//! A [`Visitor`] supplies one method per variant and `Body::accept` routes
//! to the right one, so callers never inspect the variant themselves.
//! Visits return their result directly.
//!
//! - [`Printer`] concatenates names, composites followed by their members
//! - [`Mover`]   produces the next-tick clone of a body

use log::trace;

use crate::error::{SimError, SimResult};
use crate::simulation::forces::{probe_mass, ForceField};
use crate::simulation::integrator::explicit_euler;
use crate::simulation::states::{Body, CompositeBody, FixedBody, PointBody};

pub trait Visitor {
    type Output;

    fn visit_fixed(&mut self, body: &FixedBody) -> Self::Output;
    fn visit_point(&mut self, body: &PointBody) -> Self::Output;
    fn visit_composite(&mut self, body: &CompositeBody) -> Self::Output;
}

/// Accumulates body names with no separator
#[derive(Debug, Default)]
pub struct Printer {
    out: String,
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print a whole population in order
    pub fn print<'a>(bodies: impl IntoIterator<Item = &'a Body>) -> String {
        let mut printer = Printer::new();
        for b in bodies {
            b.accept(&mut printer);
        }
        printer.into_string()
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl Visitor for Printer {
    type Output = ();

    fn visit_fixed(&mut self, body: &FixedBody) {
        self.out.push_str(body.name());
    }

    fn visit_point(&mut self, body: &PointBody) {
        self.out.push_str(body.name());
    }

    fn visit_composite(&mut self, body: &CompositeBody) {
        self.out.push_str(body.name());
        for m in body.members() {
            m.accept(self);
        }
    }
}

/// Computes the state of a body one step of `dt` seconds later
///
/// The visited body is never modified; each visit returns a new clone.
/// Forces come from `field`, which is the pre-tick population.
#[derive(Debug, Clone, Copy)]
pub struct Mover<'a> {
    dt: f64, // time step (s)
    field: ForceField<'a>,
}

impl<'a> Mover<'a> {
    pub fn new(dt: f64, field: ForceField<'a>) -> Self {
        Self { dt, field }
    }

    /// Move one body, failing if the update went non-finite
    pub fn advance(&mut self, body: &Body) -> SimResult<Body> {
        let next = body.accept(self);
        if !next.is_finite() {
            return Err(SimError::NonFiniteState { name: next.name().to_string() });
        }
        Ok(next)
    }
}

impl Visitor for Mover<'_> {
    type Output = Body;

    fn visit_fixed(&mut self, body: &FixedBody) -> Body {
        Body::Fixed(body.clone())
    }

    fn visit_point(&mut self, body: &PointBody) -> Body {
        let mut next = body.clone();
        let m = probe_mass(body.mass());
        let force = self.field.force_on(m, body.position());
        let (x, v) = explicit_euler(body.position(), body.velocity(), force / m, self.dt);
        next.set_velocity(v);
        next.set_position(x);
        trace!("point '{}': x = {:?}, v = {:?}", next.name(), x, v);
        Body::Point(next)
    }

    fn visit_composite(&mut self, body: &CompositeBody) -> Body {
        let mut next = body.clone();
        next.strategy().advance(&mut next, body, self.dt, &self.field);
        trace!("composite '{}': x = {:?}", next.name(), next.position());
        Body::Composite(next)
    }
}
