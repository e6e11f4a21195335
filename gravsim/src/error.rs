//! Error type shared by the simulation core and the scenario loader.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("cannot normalize a zero-length vector")]
    ZeroNorm,

    #[error("vector length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("cross product is only defined for 3-component vectors, got {len}")]
    CrossDimension { len: usize },

    #[error("composite '{name}' has no members")]
    EmptyComposite { name: String },

    #[error("composite '{name}' has zero total mass")]
    MasslessComposite { name: String },

    #[error("body '{name}' has invalid mass {mass}")]
    InvalidMass { name: String, mass: f64 },

    #[error("invalid time step: {0}")]
    InvalidTimeStep(f64),

    #[error("body '{name}' reached a non-finite state")]
    NonFiniteState { name: String },

    #[error("scenario parse error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
