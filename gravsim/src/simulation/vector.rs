//! Vector helpers for the 2D simulation.
//!
//! `NVec2` is nalgebra's `Vector2<f64>`, which already provides addition,
//! subtraction, negation, scalar multiply/divide (both orders), `dot`,
//! `norm` and `norm_squared`. [`VectorExt`] adds the operations nalgebra
//! leaves unchecked: normalization that refuses a zero vector and the
//! scalar 2D cross product.
//!
//! The `checked_*` functions generalize the same operations to
//! variable-length `DVector<f64>` operands, failing with
//! [`SimError::LengthMismatch`] when sizes differ.

use nalgebra::{DVector, Vector2};

use crate::error::{SimError, SimResult};

pub type NVec2 = Vector2<f64>;

pub trait VectorExt: Sized {
    /// Normalize in place, returning `self` for chaining
    /// Fails with [`SimError::ZeroNorm`] when the norm is exactly zero
    fn normalize_checked(&mut self) -> SimResult<&mut Self>;

    /// Scalar z-component of the 3D cross product of two planar vectors
    fn cross2(&self, rhs: &Self) -> f64;
}

impl VectorExt for NVec2 {
    fn normalize_checked(&mut self) -> SimResult<&mut Self> {
        let n = self.norm();
        if n == 0.0 {
            return Err(SimError::ZeroNorm);
        }
        *self /= n;
        Ok(self)
    }

    fn cross2(&self, rhs: &Self) -> f64 {
        self.perp(rhs)
    }
}

/// Build an `NVec2` from a slice that must hold exactly two components
pub fn vec2_from_slice(xs: &[f64]) -> SimResult<NVec2> {
    match xs {
        [x, y] => Ok(NVec2::new(*x, *y)),
        _ => Err(SimError::LengthMismatch { expected: 2, actual: xs.len() }),
    }
}

fn same_len(a: &DVector<f64>, b: &DVector<f64>) -> SimResult<()> {
    if a.len() != b.len() {
        return Err(SimError::LengthMismatch { expected: a.len(), actual: b.len() });
    }
    Ok(())
}

pub fn checked_add(a: &DVector<f64>, b: &DVector<f64>) -> SimResult<DVector<f64>> {
    same_len(a, b)?;
    Ok(a + b)
}

pub fn checked_sub(a: &DVector<f64>, b: &DVector<f64>) -> SimResult<DVector<f64>> {
    same_len(a, b)?;
    Ok(a - b)
}

pub fn checked_dot(a: &DVector<f64>, b: &DVector<f64>) -> SimResult<f64> {
    same_len(a, b)?;
    Ok(a.dot(b))
}

/// Cross product of two 3-component vectors
pub fn checked_cross(a: &DVector<f64>, b: &DVector<f64>) -> SimResult<DVector<f64>> {
    same_len(a, b)?;
    if a.len() != 3 {
        return Err(SimError::CrossDimension { len: a.len() });
    }
    Ok(DVector::from_vec(vec![
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]))
}

/// Normalize a variable-length vector in place
pub fn normalize_dyn(v: &mut DVector<f64>) -> SimResult<&mut DVector<f64>> {
    let n = v.norm();
    if n == 0.0 {
        return Err(SimError::ZeroNorm);
    }
    *v /= n;
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero_is_domain_error() {
        let mut z = NVec2::zeros();
        assert!(matches!(z.normalize_checked(), Err(SimError::ZeroNorm)));
    }

    #[test]
    fn normalize_chains_in_place() {
        let mut v = NVec2::new(3.0, 4.0);
        let n = v.normalize_checked().unwrap().norm();
        assert!((n - 1.0).abs() < 1e-15);
        assert!((v.x - 0.6).abs() < 1e-15 && (v.y - 0.8).abs() < 1e-15);
    }

    #[test]
    fn cross2_is_signed_area() {
        let a = NVec2::new(1.0, 0.0);
        let b = NVec2::new(0.0, 2.0);
        assert_eq!(a.cross2(&b), 2.0);
        assert_eq!(b.cross2(&a), -2.0);
    }

    #[test]
    fn scalar_ops_commute() {
        let v = NVec2::new(1.5, -2.0);
        assert_eq!(2.0 * v, v * 2.0);
        assert_eq!((v * 4.0) / 4.0, v);
        assert_eq!(-v + v, NVec2::zeros());
    }

    #[test]
    fn dynamic_ops_reject_mismatched_lengths() {
        let a = DVector::from_vec(vec![1.0, 2.0]);
        let b = DVector::from_vec(vec![1.0, 2.0, 3.0]);
        assert!(matches!(
            checked_add(&a, &b),
            Err(SimError::LengthMismatch { expected: 2, actual: 3 })
        ));
        assert!(checked_sub(&a, &b).is_err());
        assert!(checked_dot(&a, &b).is_err());
        assert_eq!(checked_dot(&b, &b).unwrap(), 14.0);
    }

    #[test]
    fn dynamic_cross_requires_three_components() {
        let a = DVector::from_vec(vec![1.0, 0.0]);
        assert!(matches!(checked_cross(&a, &a), Err(SimError::CrossDimension { len: 2 })));

        let x = DVector::from_vec(vec![1.0, 0.0, 0.0]);
        let y = DVector::from_vec(vec![0.0, 1.0, 0.0]);
        let z = checked_cross(&x, &y).unwrap();
        assert_eq!(z.as_slice(), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn slice_conversion_checks_length() {
        assert_eq!(vec2_from_slice(&[1.0, 2.0]).unwrap(), NVec2::new(1.0, 2.0));
        assert!(matches!(
            vec2_from_slice(&[1.0]),
            Err(SimError::LengthMismatch { expected: 2, actual: 1 })
        ));
        let mut d = DVector::<f64>::zeros(4);
        assert!(normalize_dyn(&mut d).is_err());
    }
}
