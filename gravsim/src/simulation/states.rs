//! Body model for the simulation.
//!
//! A [`Body`] is one of three variants:
//! - `Fixed`     an immobile anchor, velocity is always zero
//! - `Point`     a free single mass driven by accumulated force
//! - `Composite` a cluster of owned sub-bodies moved by a [`MotionStrategy`]
//!
//! Composite position and velocity are derived on demand as mass-weighted
//! averages of the members; setting them shifts every member by the same delta

use log::debug;

use crate::error::{SimError, SimResult};
use crate::simulation::strategy::MotionStrategy;
use crate::simulation::vector::NVec2;
use crate::simulation::visitor::Visitor;

#[derive(Debug, Clone)]
pub struct FixedBody {
    name: String,
    mass: f64, // kg
    position: NVec2, // m
}

impl FixedBody {
    pub fn new(name: impl Into<String>, mass: f64, position: NVec2) -> Self {
        Self { name: name.into(), mass, position }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn position(&self) -> NVec2 {
        self.position
    }

    pub fn set_position(&mut self, position: NVec2) {
        self.position = position;
    }
}

#[derive(Debug, Clone)]
pub struct PointBody {
    name: String,
    mass: f64, // kg
    position: NVec2, // m
    velocity: NVec2, // m/s
}

impl PointBody {
    pub fn new(name: impl Into<String>, mass: f64, position: NVec2, velocity: NVec2) -> Self {
        Self { name: name.into(), mass, position, velocity }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn position(&self) -> NVec2 {
        self.position
    }

    pub fn velocity(&self) -> NVec2 {
        self.velocity
    }

    pub fn set_position(&mut self, position: NVec2) {
        self.position = position;
    }

    pub fn set_velocity(&mut self, velocity: NVec2) {
        self.velocity = velocity;
    }
}

/// A cluster of bodies that moves according to its attached strategy
///
/// The total mass is fixed at construction from the initial member list.
/// Members cannot be added or removed afterwards, only moved.
#[derive(Debug, Clone)]
pub struct CompositeBody {
    name: String,
    mass: f64,
    members: Vec<Body>,
    strategy: MotionStrategy,
}

impl CompositeBody {
    /// Build a composite from its members, attaching the default rigid strategy
    pub fn new(name: impl Into<String>, members: Vec<Body>) -> SimResult<Self> {
        let name = name.into();
        if members.is_empty() {
            return Err(SimError::EmptyComposite { name });
        }
        if let Some(m) = members.iter().find(|m| !m.mass().is_finite() || m.mass() < 0.0) {
            return Err(SimError::InvalidMass { name: m.name().to_string(), mass: m.mass() });
        }
        let mass: f64 = members.iter().map(Body::mass).sum();
        if !(mass > 0.0) {
            return Err(SimError::MasslessComposite { name });
        }
        Ok(Self {
            name,
            mass,
            members,
            strategy: MotionStrategy::default(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn members(&self) -> &[Body] {
        &self.members
    }

    pub(crate) fn members_mut(&mut self) -> &mut [Body] {
        &mut self.members
    }

    pub fn strategy(&self) -> MotionStrategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: MotionStrategy) {
        debug!("composite '{}': strategy {:?} -> {:?}", self.name, self.strategy, strategy);
        self.strategy = strategy;
    }

    /// Center of mass of the current members
    pub fn position(&self) -> NVec2 {
        self.weighted_average(Body::position)
    }

    /// Mass-weighted mean velocity of the current members
    pub fn velocity(&self) -> NVec2 {
        self.weighted_average(Body::velocity)
    }

    /// Rigidly translate every member so the center of mass lands on `position`
    pub fn set_position(&mut self, position: NVec2) {
        let delta = position - self.position();
        for m in self.members.iter_mut() {
            let p = m.position();
            m.set_position(p + delta);
        }
    }

    /// Shift every member's velocity by the same delta
    pub fn set_velocity(&mut self, velocity: NVec2) {
        let delta = velocity - self.velocity();
        for m in self.members.iter_mut() {
            let v = m.velocity();
            m.set_velocity(v + delta);
        }
    }

    fn weighted_average(&self, f: fn(&Body) -> NVec2) -> NVec2 {
        let sum = self
            .members
            .iter()
            .fold(NVec2::zeros(), |acc, m| acc + m.mass() * f(m));
        sum / self.mass
    }
}

#[derive(Debug, Clone)]
pub enum Body {
    Fixed(FixedBody),
    Point(PointBody),
    Composite(CompositeBody),
}

impl Body {
    pub fn fixed(name: impl Into<String>, mass: f64, position: NVec2) -> Self {
        Body::Fixed(FixedBody::new(name, mass, position))
    }

    pub fn point(name: impl Into<String>, mass: f64, position: NVec2, velocity: NVec2) -> Self {
        Body::Point(PointBody::new(name, mass, position, velocity))
    }

    pub fn composite(name: impl Into<String>, members: Vec<Body>) -> SimResult<Self> {
        CompositeBody::new(name, members).map(Body::Composite)
    }

    pub fn name(&self) -> &str {
        match self {
            Body::Fixed(b) => b.name(),
            Body::Point(b) => b.name(),
            Body::Composite(b) => b.name(),
        }
    }

    pub fn mass(&self) -> f64 {
        match self {
            Body::Fixed(b) => b.mass(),
            Body::Point(b) => b.mass(),
            Body::Composite(b) => b.mass(),
        }
    }

    pub fn position(&self) -> NVec2 {
        match self {
            Body::Fixed(b) => b.position(),
            Body::Point(b) => b.position(),
            Body::Composite(b) => b.position(),
        }
    }

    pub fn velocity(&self) -> NVec2 {
        match self {
            Body::Fixed(_) => NVec2::zeros(),
            Body::Point(b) => b.velocity(),
            Body::Composite(b) => b.velocity(),
        }
    }

    pub fn set_position(&mut self, position: NVec2) {
        match self {
            Body::Fixed(b) => b.set_position(position),
            Body::Point(b) => b.set_position(position),
            Body::Composite(b) => b.set_position(position),
        }
    }

    /// No-op for fixed bodies
    pub fn set_velocity(&mut self, velocity: NVec2) {
        match self {
            Body::Fixed(_) => {}
            Body::Point(b) => b.set_velocity(velocity),
            Body::Composite(b) => b.set_velocity(velocity),
        }
    }

    /// Attached strategy, `None` for anything but a composite
    pub fn strategy(&self) -> Option<MotionStrategy> {
        match self {
            Body::Composite(b) => Some(b.strategy()),
            _ => None,
        }
    }

    /// Replace the strategy of a composite; ignored by other variants
    pub fn set_strategy(&mut self, strategy: MotionStrategy) {
        if let Body::Composite(b) = self {
            b.set_strategy(strategy);
        }
    }

    /// Double-dispatch entry point
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Body::Fixed(b) => visitor.visit_fixed(b),
            Body::Point(b) => visitor.visit_point(b),
            Body::Composite(b) => visitor.visit_composite(b),
        }
    }

    /// True when position and velocity (recursively, for composites) are finite
    pub fn is_finite(&self) -> bool {
        match self {
            Body::Fixed(b) => b.position.iter().all(|c| c.is_finite()),
            Body::Point(b) => b.position.iter().chain(b.velocity.iter()).all(|c| c.is_finite()),
            Body::Composite(b) => b.members.iter().all(Body::is_finite),
        }
    }
}

// Equal iff same variant, name, mass and position. Velocity is ignored.
impl PartialEq for Body {
    fn eq(&self, other: &Self) -> bool {
        let same_variant = matches!(
            (self, other),
            (Body::Fixed(_), Body::Fixed(_))
                | (Body::Point(_), Body::Point(_))
                | (Body::Composite(_), Body::Composite(_))
        );
        same_variant
            && self.name() == other.name()
            && self.mass() == other.mass()
            && self.position() == other.position()
    }
}
