pub mod error;
pub mod simulation;
pub mod configuration;

pub use error::{SimError, SimResult};

pub use simulation::vector::{NVec2, VectorExt};
pub use simulation::states::{Body, FixedBody, PointBody, CompositeBody};
pub use simulation::strategy::MotionStrategy;
pub use simulation::forces::{force, ForceField, NewtonianGravity, G};
pub use simulation::integrator::explicit_euler;
pub use simulation::visitor::{Visitor, Printer, Mover};
pub use simulation::registry::Registry;
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, ParametersConfig, BodyConfig, StrategyConfig};
