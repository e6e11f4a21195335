//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – step size, end time and gravitational constant
//! - [`BodyConfig`]       – initial state for each body, nested for composites
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   t_end: 31554195.932106006  # total simulated time (s)
//!   h0: 100.0                  # fixed step size (s)
//!   G: 6.67428e-11             # optional, SI constant by default
//!
//! bodies:
//!   - kind: fixed
//!     name: sun
//!     m: 1.98892e30
//!     x: [0.0, 0.0]
//!   - kind: point
//!     name: earth
//!     m: 5.9742e24
//!     x: [149597870700.0, 0.0]
//!     v: [0.0, 29788.4676]
//!   - kind: composite
//!     name: cluster
//!     strategy: distributed     # or "rigid" (default)
//!     members:
//!       - kind: point
//!         name: a
//!         m: 1.0e24
//!         x: [0.0, 1.0e11]
//! ```
//!
//! The scenario builder maps this into runtime bodies and a populated registry.

use serde::Deserialize;

use crate::error::SimResult;
use crate::simulation::strategy::MotionStrategy;

/// Which motion strategy a composite uses
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StrategyConfig {
    #[default]
    #[serde(rename = "rigid")] // whole cluster moves as one point mass
    Rigid,

    #[serde(rename = "distributed", alias = "realistic")] // members move individually
    Distributed,
}

impl From<StrategyConfig> for MotionStrategy {
    fn from(cfg: StrategyConfig) -> Self {
        match cfg {
            StrategyConfig::Rigid => MotionStrategy::Rigid,
            StrategyConfig::Distributed => MotionStrategy::Distributed,
        }
    }
}

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // time end
    pub h0: f64, // time step size
    #[serde(default)]
    pub G: Option<f64>, // gravitational constant, SI when absent
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BodyConfig {
    Fixed {
        name: String,
        m: f64, // mass (kg)
        #[serde(default = "origin")]
        x: Vec<f64>, // position (m)
    },
    Point {
        name: String,
        m: f64,
        #[serde(default = "origin")]
        x: Vec<f64>,
        #[serde(default = "origin")]
        v: Vec<f64>, // velocity (m/s)
    },
    Composite {
        name: String,
        #[serde(default)]
        strategy: StrategyConfig,
        members: Vec<BodyConfig>,
    },
}

fn origin() -> Vec<f64> {
    vec![0.0, 0.0]
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // Top-level bodies in registration order
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> SimResult<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_reader(reader: impl std::io::Read) -> SimResult<Self> {
        Ok(serde_yaml::from_reader(reader)?)
    }
}
