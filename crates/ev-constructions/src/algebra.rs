//! Closed-form inversion of parallel-path resistance networks.
//!
//! Every framed category reduces to
//!
//! ```text
//! U_target = Σ fᵢ / (bᵢ + sᵢ·x)
//! ```
//!
//! where the paths that do not involve the unknown `x` have already been
//! subtracted from `U_target`. One remaining path gives a linear equation, two
//! give a quadratic.

use ev_core::units::RValue;
use ev_core::Real;

/// One heat-flow path whose resistance is affine in the unknown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathTerm {
    /// Area fraction of the path.
    pub fraction: Real,
    /// Path resistance with the unknown at zero.
    pub base_r: RValue,
    /// How much of the unknown the path sees (1 = full depth).
    pub slope: Real,
}

impl PathTerm {
    pub const fn new(fraction: Real, base_r: RValue, slope: Real) -> Self {
        Self {
            fraction,
            base_r,
            slope,
        }
    }

    /// Contribution of this path to the assembly U-factor.
    pub fn conductance(&self, x: RValue) -> Real {
        if self.fraction == 0.0 {
            return 0.0;
        }
        self.fraction / (self.base_r + self.slope * x)
    }
}

/// Solve `target_u = f / (b + s·x)` for `x`.
///
/// The raw solution is returned even when negative; callers decide whether it
/// is physical. `None` means no finite solution exists (the fixed paths already
/// carry all of the target conductance, or the path never sees the unknown).
pub fn solve_one_path(target_u: Real, path: PathTerm) -> Option<RValue> {
    if !target_u.is_finite() || target_u <= 0.0 || path.slope <= 0.0 {
        return None;
    }
    let x = (path.fraction / target_u - path.base_r) / path.slope;
    x.is_finite().then_some(x)
}

/// Solve `target_u = p.f/(p.b + p.s·x) + q.f/(q.b + q.s·x)` for `x`.
///
/// Clearing denominators gives `a·x² + b·x + c = 0` with
///
/// ```text
/// a = U·sp·sq
/// b = U·(bp·sq + bq·sp) − fp·sq − fq·sp
/// c = U·bp·bq − fp·bq − fq·bp
/// ```
///
/// The returned root follows [`smallest_non_negative_root`].
pub fn solve_two_paths(target_u: Real, p: PathTerm, q: PathTerm) -> Option<RValue> {
    if !target_u.is_finite() || target_u <= 0.0 {
        return None;
    }
    let a = target_u * p.slope * q.slope;
    let b = target_u * (p.base_r * q.slope + q.base_r * p.slope)
        - p.fraction * q.slope
        - q.fraction * p.slope;
    let c = target_u * p.base_r * q.base_r - p.fraction * q.base_r - q.fraction * p.base_r;
    smallest_non_negative_root(a, b, c)
}

/// Physically valid root of `a·x² + b·x + c = 0`.
///
/// Root selection rule:
/// 1. complex roots (negative discriminant) yield `None`;
/// 2. negative roots are discarded;
/// 3. if both roots are non-negative, the smaller one is returned.
///
/// A vanishing quadratic coefficient falls back to the linear solution.
pub fn smallest_non_negative_root(a: Real, b: Real, c: Real) -> Option<Real> {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return None;
    }
    let scale = a.abs().max(b.abs()).max(c.abs());
    if scale == 0.0 {
        return None;
    }

    if a.abs() <= Real::EPSILON * scale {
        if b == 0.0 {
            return None;
        }
        let x = -c / b;
        return (x.is_finite() && x >= 0.0).then_some(x);
    }

    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return None;
    }

    // Cancellation-free form
    let q = -0.5 * (b + b.signum() * disc.sqrt());
    let r1 = q / a;
    let r2 = if q != 0.0 { c / q } else { r1 };

    [r1, r2]
        .into_iter()
        .filter(|r| r.is_finite() && *r >= 0.0)
        .fold(None, |best: Option<Real>, r| match best {
            Some(prev) if prev <= r => Some(prev),
            _ => Some(r),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_smaller_of_two_positive_roots() {
        // (x-2)(x-5) = x² - 7x + 10
        assert_eq!(smallest_non_negative_root(1.0, -7.0, 10.0), Some(2.0));
    }

    #[test]
    fn discards_negative_root() {
        // (x+3)(x-4) = x² - x - 12
        let x = smallest_non_negative_root(1.0, -1.0, -12.0).unwrap();
        assert!((x - 4.0).abs() < 1e-12);
    }

    #[test]
    fn complex_roots_have_no_solution() {
        assert_eq!(smallest_non_negative_root(1.0, 0.0, 1.0), None);
    }

    #[test]
    fn both_negative_has_no_solution() {
        // (x+1)(x+2)
        assert_eq!(smallest_non_negative_root(1.0, 3.0, 2.0), None);
    }

    #[test]
    fn degenerate_linear() {
        let x = smallest_non_negative_root(0.0, 2.0, -6.0).unwrap();
        assert!((x - 3.0).abs() < 1e-12);
        assert_eq!(smallest_non_negative_root(0.0, 2.0, 6.0), None);
        assert_eq!(smallest_non_negative_root(0.0, 0.0, 0.0), None);
    }

    #[test]
    fn one_path_round_trip() {
        let path = PathTerm::new(0.75, 1.13, 1.0);
        let x = 14.0;
        let u = path.conductance(x);
        let solved = solve_one_path(u, path).unwrap();
        assert!((solved - x).abs() < 1e-10);
    }

    #[test]
    fn one_path_rejects_non_positive_target() {
        let path = PathTerm::new(0.75, 1.13, 1.0);
        assert_eq!(solve_one_path(0.0, path), None);
        assert_eq!(solve_one_path(-0.1, path), None);
    }

    #[test]
    fn two_path_round_trip() {
        let p = PathTerm::new(0.0625, 10.5, 1.0 / 3.0);
        let q = PathTerm::new(0.77, 2.5, 1.0);
        let x = 30.0;
        let u = p.conductance(x) + q.conductance(x);
        let solved = solve_two_paths(u, p, q).unwrap();
        assert!((solved - x).abs() < 1e-9);
    }

    #[test]
    fn two_path_with_flat_first_path_is_linear() {
        let p = PathTerm::new(0.08, 1.6, 0.0);
        let q = PathTerm::new(0.91, 0.9, 1.0);
        let x = 5.0;
        let u = p.conductance(x) + q.conductance(x);
        let solved = solve_two_paths(u, p, q).unwrap();
        assert!((solved - x).abs() < 1e-9);
    }
}
