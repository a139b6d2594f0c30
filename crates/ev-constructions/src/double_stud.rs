//! Double wood stud walls.
//!
//! Two stud rows separated by a gap of the same depth, studs aligned (not
//! staggered). Insulation fills both stud cavities and the gap, so the unknown
//! cavity R-value is split evenly across the three layers.
//!
//! Paths, with `S` the R-value of one stud depth:
//!
//! ```text
//! stud   (sf = 1.5 in / spacing)   S  + x/3 + S
//! misc   (mf = ff − sf)            S  + S   + S
//! cavity (1 − sf − mf)             x/3 + x/3 + x/3
//! ```

use ev_core::units::{RValue, inch};
use ev_core::Real;
use ev_materials::{BaseMaterial, Material};

use crate::algebra::{PathTerm, solve_two_paths};
use crate::assembly::{AssemblyBuilder, insulation};
use crate::error::ConstructionResult;
use crate::traits::{ConstructionSet, FixedLayers};

/// Actual width of a nominal 2x stud, inches.
pub const STUD_WIDTH_IN: Real = 1.5;

#[derive(Debug, Clone, PartialEq)]
pub struct DoubleStudSet {
    pub stud: Material,
    /// On-center stud spacing, inches.
    pub spacing_in: Real,
    pub fixed: FixedLayers,
}

impl DoubleStudSet {
    pub fn new(stud_depth_in: Real, spacing_in: Real, fixed: FixedLayers) -> Self {
        Self {
            stud: Material::stud(inch(stud_depth_in)),
            spacing_in,
            fixed,
        }
    }

    /// (stud, misc framing, cavity) area fractions.
    fn fractions(&self) -> (Real, Real, Real) {
        let stud = STUD_WIDTH_IN / self.spacing_in;
        let misc = (self.fixed.framing_factor - stud).max(0.0);
        (stud, misc, 1.0 - stud - misc)
    }

    fn paths(&self, non_cavity_r: RValue) -> [PathTerm; 3] {
        let s = self.stud.rvalue();
        let (stud, misc, cavity) = self.fractions();
        [
            PathTerm::new(stud, 2.0 * s + non_cavity_r, 1.0 / 3.0),
            PathTerm::new(misc, 3.0 * s + non_cavity_r, 0.0),
            PathTerm::new(cavity, non_cavity_r, 1.0),
        ]
    }
}

impl ConstructionSet for DoubleStudSet {
    fn describe(&self) -> String {
        format!(
            "double stud {:.2} in @ {} in o.c., ff {:.2}",
            self.stud.thickness_in(),
            self.spacing_in,
            self.fixed.framing_factor
        )
    }

    fn fixed(&self) -> &FixedLayers {
        &self.fixed
    }

    fn solve_unknown(&self, assembly_r: RValue, non_cavity_r: RValue) -> Option<RValue> {
        if self.spacing_in <= STUD_WIDTH_IN {
            return None;
        }
        let [stud, misc, cavity] = self.paths(non_cavity_r);
        solve_two_paths(1.0 / assembly_r - misc.conductance(0.0), stud, cavity)
    }

    fn assembly_r(&self, non_cavity_r: RValue, unknown_r: RValue) -> RValue {
        let u: Real = self
            .paths(non_cavity_r)
            .iter()
            .map(|p| p.conductance(unknown_r))
            .sum();
        1.0 / u
    }

    fn path_fractions(&self) -> Vec<Real> {
        let (stud, misc, cavity) = self.fractions();
        vec![stud, misc, cavity]
    }

    fn core_layers(
        &self,
        unknown_r: RValue,
        builder: &mut AssemblyBuilder,
    ) -> ConstructionResult<()> {
        let depth = self.stud.thickness;
        let third = insulation(
            "CavityInsulation",
            depth,
            unknown_r / 3.0,
            BaseMaterial::CAVITY_FILL,
        )?;
        let stud = self.stud.clone();

        builder.layer(
            "ExteriorStudRow",
            vec![stud.clone(), stud.clone(), third.clone()],
        )?;
        builder.layer("Gap", vec![third.clone(), stud.clone(), third.clone()])?;
        builder.layer("InteriorStudRow", vec![stud.clone(), stud, third])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::materialize;

    fn set() -> DoubleStudSet {
        let fixed = FixedLayers::framed(0.23).with_sheathing(0.5).with_drywall(0.5);
        DoubleStudSet::new(3.5, 24.0, fixed)
    }

    #[test]
    fn fractions_split_framing() {
        let f = set().path_fractions();
        assert!((f[0] - 0.0625).abs() < 1e-12);
        assert!((f[1] - 0.1675).abs() < 1e-12);
        assert!((f[2] - 0.77).abs() < 1e-12);
    }

    #[test]
    fn quadratic_round_trip() {
        let set = set();
        let n = set.non_cavity_r(0.85);
        for x in [5.0, 20.0, 40.0] {
            let a = set.assembly_r(n, x);
            let solved = set.solve_unknown(a, n).unwrap();
            assert!((solved - x).abs() < 1e-6, "x = {x}, solved = {solved}");

            let assembly = materialize("Wall", &set, 0.85, x).unwrap();
            assert!((assembly.assembly_r() - a).abs() < 1e-9);
        }
    }

    #[test]
    fn framing_below_stud_fraction_has_no_misc_path() {
        let set = DoubleStudSet::new(3.5, 24.0, FixedLayers::framed(0.01));
        let f = set.path_fractions();
        assert_eq!(f[1], 0.0);
        assert!((f.iter().sum::<Real>() - 1.0).abs() < 1e-12);
    }
}
