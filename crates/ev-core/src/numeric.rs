use crate::{EvError, EvResult};

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Purely absolute tolerance.
    pub const fn absolute(abs: Real) -> Self {
        Self { abs, rel: 0.0 }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> EvResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(EvError::NonFinite { what, value: v })
    }
}

/// Finite and >= 0.
pub fn ensure_non_negative(v: Real, what: &'static str) -> EvResult<Real> {
    ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(EvError::Negative { what, value: v });
    }
    Ok(v)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn nearly_equal_is_symmetric(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            let tol = Tolerances { abs: 1e-6, rel: 1e-9 };
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }

        #[test]
        fn finite_values_pass_through(v in prop::num::f64::NORMAL) {
            prop_assert_eq!(ensure_finite(v, "v").unwrap(), v);
        }
    }
}
