//! First-order explicit Euler update shared by every moving body
//!
//! v' = v + a * dt
//! x' = x + v' * dt
//!
//! The new velocity is used for the position update (semi-implicit order),
//! matching how point bodies and composites are advanced in one tick

use super::vector::NVec2;

/// Advance a state `(x, v)` under constant acceleration `a` for `dt` seconds
/// Returns the new `(x, v)`
pub fn explicit_euler(x: NVec2, v: NVec2, a: NVec2, dt: f64) -> (NVec2, NVec2) {
    let v_next = v + a * dt;
    let x_next = x + v_next * dt;
    (x_next, v_next)
}
