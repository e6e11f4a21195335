//! Numerical and physical parameters for a run
//!
//! `Parameters` holds runtime settings:
//! - step size and end time,
//! - gravitational constant (`G`)

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // time end (s)
    pub h0: f64, // step size (s)
    pub G: f64, // gravitational constant
}

impl Parameters {
    /// Number of whole steps of `h0` needed to reach `t_end`
    pub fn step_count(&self) -> u64 {
        if self.h0 <= 0.0 || self.t_end <= 0.0 {
            return 0;
        }
        (self.t_end / self.h0).ceil() as u64
    }
}
