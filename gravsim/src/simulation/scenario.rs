//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime `Scenario`
//! containing:
//! - numerical parameters (`Parameters`)
//! - a `Registry` populated with the configured bodies at t = 0
//!
//! `Scenario::run` then drives the registry to `t_end`, handing the
//! registry to an observer after every tick.

use log::info;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::SimResult;
use crate::simulation::forces::{NewtonianGravity, G};
use crate::simulation::params::Parameters;
use crate::simulation::registry::Registry;
use crate::simulation::states::Body;
use crate::simulation::vector::vec2_from_slice;

pub struct Scenario {
    pub parameters: Parameters,
    pub registry: Registry,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            h0: p_cfg.h0,
            G: p_cfg.G.unwrap_or(G),
        };

        // Bodies: map `BodyConfig` -> runtime `Body`, registration order kept
        let mut registry = Registry::with_gravity(NewtonianGravity { G: parameters.G });
        for bc in &cfg.bodies {
            registry.register(build_body(bc)?);
        }

        info!("scenario built: {} top-level bodies, h0 = {} s, t_end = {} s",
            registry.len(), parameters.h0, parameters.t_end);

        Ok(Self { parameters, registry })
    }

    /// Step the registry until `t_end`, calling `observer` after every tick
    pub fn run(&mut self, mut observer: impl FnMut(&Registry)) -> SimResult<()> {
        self.run_steps(self.parameters.step_count(), &mut observer)
    }

    /// Step the registry exactly `n` times with step size `h0`
    pub fn run_steps(&mut self, n: u64, mut observer: impl FnMut(&Registry)) -> SimResult<()> {
        for _ in 0..n {
            self.registry.step(self.parameters.h0)?;
            observer(&self.registry);
        }
        Ok(())
    }
}

/// Convert one body configuration, recursing into composite members
pub fn build_body(bc: &BodyConfig) -> SimResult<Body> {
    let body = match bc {
        BodyConfig::Fixed { name, m, x } => Body::fixed(name.as_str(), *m, vec2_from_slice(x)?),
        BodyConfig::Point { name, m, x, v } => {
            Body::point(name.as_str(), *m, vec2_from_slice(x)?, vec2_from_slice(v)?)
        }
        BodyConfig::Composite { name, strategy, members } => {
            let members = members.iter().map(build_body).collect::<SimResult<Vec<_>>>()?;
            let mut body = Body::composite(name.as_str(), members)?;
            body.set_strategy((*strategy).into());
            body
        }
    };
    Ok(body)
}
