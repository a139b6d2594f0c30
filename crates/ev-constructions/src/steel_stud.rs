//! Steel stud framing via the correction-factor method.
//!
//! Steel conducts so well that the stud/cavity split is not modeled as two
//! paths. Instead the cavity insulation is derated by a correction factor and
//! the assembly is a single series path.

use ev_core::units::{Length, RValue, inch, to_inch};
use ev_core::Real;
use ev_materials::BaseMaterial;

use crate::assembly::{AssemblyBuilder, insulation};
use crate::error::ConstructionResult;
use crate::traits::{ConstructionSet, FixedLayers};

/// Steel-framed candidate; the nominal cavity R-value is solved.
#[derive(Debug, Clone, PartialEq)]
pub struct SteelStudSet {
    pub cavity_depth: Length,
    /// Fraction of nominal cavity R-value realized in the assembly.
    pub correction_factor: Real,
    pub fixed: FixedLayers,
}

impl SteelStudSet {
    pub fn new(cavity_depth_in: Real, correction_factor: Real, fixed: FixedLayers) -> Self {
        Self {
            cavity_depth: inch(cavity_depth_in),
            correction_factor,
            fixed,
        }
    }
}

impl ConstructionSet for SteelStudSet {
    fn describe(&self) -> String {
        format!(
            "steel stud {:.2} in, cf {:.2}, rigid R{}",
            to_inch(self.cavity_depth),
            self.correction_factor,
            self.fixed.rigid_r
        )
    }

    fn fixed(&self) -> &FixedLayers {
        &self.fixed
    }

    fn solve_unknown(&self, assembly_r: RValue, non_cavity_r: RValue) -> Option<RValue> {
        if self.correction_factor <= 0.0 {
            return None;
        }
        let x = (assembly_r - non_cavity_r) / self.correction_factor;
        x.is_finite().then_some(x)
    }

    fn assembly_r(&self, non_cavity_r: RValue, unknown_r: RValue) -> RValue {
        non_cavity_r + self.correction_factor * unknown_r
    }

    fn path_fractions(&self) -> Vec<Real> {
        vec![1.0]
    }

    fn core_layers(
        &self,
        unknown_r: RValue,
        builder: &mut AssemblyBuilder,
    ) -> ConstructionResult<()> {
        let effective = insulation(
            "StudAndCavity",
            self.cavity_depth,
            self.correction_factor * unknown_r,
            BaseMaterial::CAVITY_FILL,
        )?;
        builder.uniform("StudAndCavity", effective);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::materialize;

    #[test]
    fn linear_in_cavity() {
        let fixed = FixedLayers::framed(0.23).with_sheathing(0.5).with_drywall(0.5);
        let set = SteelStudSet::new(3.5, 0.45, fixed);
        let n = set.non_cavity_r(0.85);
        let x = set.solve_unknown(n + 4.5, n).unwrap();
        assert!((x - 10.0).abs() < 1e-12);
    }

    #[test]
    fn materialized_matches_forward() {
        let fixed = FixedLayers::framed(0.2)
            .with_rigid(5.0)
            .with_sheathing(0.5)
            .with_drywall(0.5);
        let set = SteelStudSet::new(5.5, 0.45, fixed);
        let n = set.non_cavity_r(0.85);
        let a = set.assembly_r(n, 21.0);
        let assembly = materialize("Wall", &set, 0.85, 21.0).unwrap();
        assert!((assembly.assembly_r() - a).abs() < 1e-9);
    }

    #[test]
    fn zero_correction_has_no_solution() {
        let set = SteelStudSet::new(3.5, 0.0, FixedLayers::framed(0.2));
        assert!(set.solve_unknown(10.0, 1.0).is_none());
    }
}
