//! Concrete masonry units with continuous rigid insulation.
//!
//! The block is two parallel paths, concrete webs and filled or hollow cores.
//! The unknown is the rigid insulation, which sits in series with both.

use ev_core::units::{ConductivityIn, Length, RValue, inch, to_inch};
use ev_core::Real;
use ev_materials::{BaseMaterial, Material};

use crate::algebra::{PathTerm, solve_two_paths};
use crate::assembly::AssemblyBuilder;
use crate::error::ConstructionResult;
use crate::traits::{ConstructionSet, FixedLayers};

#[derive(Debug, Clone, PartialEq)]
pub struct CmuSet {
    pub thickness: Length,
    /// Effective per-inch conductivity of the cores.
    pub core_k_in: ConductivityIn,
    pub fixed: FixedLayers,
}

impl CmuSet {
    pub fn new(thickness_in: Real, core_k_in: ConductivityIn, fixed: FixedLayers) -> Self {
        Self {
            thickness: inch(thickness_in),
            core_k_in,
            fixed,
        }
    }

    fn web(&self) -> Material {
        Material::concrete(self.thickness)
    }

    fn core(&self) -> Material {
        let mut core = Material::new("CMUCore", self.thickness, BaseMaterial::CMU_CORE);
        core.k_in = self.core_k_in;
        core
    }

    fn paths(&self, non_cavity_r: RValue) -> [PathTerm; 2] {
        let ff = self.fixed.framing_factor;
        [
            PathTerm::new(ff, self.web().rvalue() + non_cavity_r, 1.0),
            PathTerm::new(1.0 - ff, self.core().rvalue() + non_cavity_r, 1.0),
        ]
    }
}

impl ConstructionSet for CmuSet {
    fn describe(&self) -> String {
        format!(
            "CMU {:.1} in, core k {:.2}, ff {:.2}",
            to_inch(self.thickness),
            self.core_k_in,
            self.fixed.framing_factor
        )
    }

    fn fixed(&self) -> &FixedLayers {
        &self.fixed
    }

    fn solve_unknown(&self, assembly_r: RValue, non_cavity_r: RValue) -> Option<RValue> {
        if self.core_k_in <= 0.0 {
            return None;
        }
        let [web, core] = self.paths(non_cavity_r);
        solve_two_paths(1.0 / assembly_r, web, core)
    }

    fn assembly_r(&self, non_cavity_r: RValue, unknown_r: RValue) -> RValue {
        let [web, core] = self.paths(non_cavity_r);
        1.0 / (web.conductance(unknown_r) + core.conductance(unknown_r))
    }

    fn path_fractions(&self) -> Vec<Real> {
        let ff = self.fixed.framing_factor;
        vec![ff, 1.0 - ff]
    }

    fn core_layers(
        &self,
        unknown_r: RValue,
        builder: &mut AssemblyBuilder,
    ) -> ConstructionResult<()> {
        if unknown_r > 0.0 {
            builder.uniform("SolvedRigidInsulation", Material::rigid(unknown_r)?);
        }
        builder.layer("CMU", vec![self.web(), self.core()])?;
        Ok(())
    }
}
