//! Post-materialization check of the delivered R-value.

use ev_core::units::RValue;
use ev_core::Real;

use crate::assembly::Assembly;
use crate::category::SolvedConstruction;
use crate::error::{ConstructionError, ConstructionResult};

/// Allowed difference between requested and materialized R-value.
pub const DEFAULT_RVALUE_TOLERANCE: Real = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verification {
    Matched { achieved: RValue },
    /// Fallback construction; the request could not be met.
    Degraded { requested: RValue, achieved: RValue },
}

impl Verification {
    pub fn achieved(&self) -> RValue {
        match *self {
            Verification::Matched { achieved } | Verification::Degraded { achieved, .. } => {
                achieved
            }
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Verification::Degraded { .. })
    }
}

/// Compare the materialized assembly against the request.
///
/// A matched construction outside `tolerance` is an internal inconsistency
/// and fails. Unmatched constructions are reported as degraded.
pub fn verify(
    surface: &str,
    solved: &SolvedConstruction,
    assembly: &Assembly,
    tolerance: Real,
) -> ConstructionResult<Verification> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(ConstructionError::NonPhysical {
            what: "R-value tolerance",
            value: tolerance,
        });
    }
    let achieved = assembly.assembly_r();
    if !solved.matched {
        return Ok(Verification::Degraded {
            requested: solved.requested_r,
            achieved,
        });
    }
    if !achieved.is_finite() || (achieved - solved.requested_r).abs() > tolerance {
        return Err(ConstructionError::Mismatch {
            surface: surface.to_string(),
            computed: achieved,
            requested: solved.requested_r,
            tolerance,
        });
    }
    Ok(Verification::Matched { achieved })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{WallType, wall_category};
    use crate::category::synthesize;
    use ev_materials::SidingType;

    fn walls() -> crate::ConstructionCategory {
        wall_category(WallType::WoodStud, 0.5, SidingType::Vinyl).unwrap()
    }

    #[test]
    fn matched_within_tolerance() {
        let solved = synthesize(&walls(), 15.0, 0.85).unwrap();
        let assembly = solved.materialize("Wall1").unwrap();
        let v = verify("Wall1", &solved, &assembly, DEFAULT_RVALUE_TOLERANCE).unwrap();
        assert!(!v.is_degraded());
        assert!((v.achieved() - 15.0).abs() < 1e-6);
    }

    #[test]
    fn fallback_is_degraded() {
        let solved = synthesize(&walls(), 0.85, 0.85).unwrap();
        let assembly = solved.materialize("Wall1").unwrap();
        let v = verify("Wall1", &solved, &assembly, DEFAULT_RVALUE_TOLERANCE).unwrap();
        match v {
            Verification::Degraded { requested, achieved } => {
                assert_eq!(requested, 0.85);
                assert!(achieved > requested);
            }
            other => panic!("expected degraded, got {other:?}"),
        }
    }

    #[test]
    fn tampered_assembly_is_a_mismatch() {
        let solved = synthesize(&walls(), 15.0, 0.85).unwrap();
        let mut assembly = solved.materialize("Wall1").unwrap();
        assembly.film_r += 1.0;
        let err = verify("Wall1", &solved, &assembly, DEFAULT_RVALUE_TOLERANCE).unwrap_err();
        assert!(matches!(err, ConstructionError::Mismatch { ref surface, .. } if surface == "Wall1"));
    }

    #[test]
    fn negative_tolerance_is_rejected() {
        let solved = synthesize(&walls(), 15.0, 0.85).unwrap();
        let assembly = solved.materialize("Wall1").unwrap();
        for tolerance in [-0.1, Real::NAN] {
            assert!(matches!(
                verify("Wall1", &solved, &assembly, tolerance),
                Err(ConstructionError::NonPhysical { what: "R-value tolerance", .. })
            ));
        }
        assert!(verify("Wall1", &solved, &assembly, 1e-6).is_ok());
    }
}
