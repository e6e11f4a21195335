pub mod vector;
pub mod states;
pub mod strategy;
pub mod forces;
pub mod integrator;
pub mod visitor;
pub mod registry;
pub mod params;
pub mod scenario;
