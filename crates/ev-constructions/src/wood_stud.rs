//! Wood stud framing: studs in parallel with a cavity of unknown R-value.

use ev_core::units::{Length, RValue, inch};
use ev_core::Real;
use ev_materials::{BaseMaterial, Material};

use crate::algebra::{PathTerm, solve_one_path};
use crate::assembly::{AssemblyBuilder, insulation};
use crate::error::ConstructionResult;
use crate::traits::{ConstructionSet, FixedLayers};

/// Wood-framed candidate; the cavity insulation R-value is solved.
#[derive(Debug, Clone, PartialEq)]
pub struct WoodStudSet {
    pub stud: Material,
    pub fixed: FixedLayers,
}

impl WoodStudSet {
    /// Solid-wood stud of the given depth (inches).
    pub fn new(stud_depth_in: Real, fixed: FixedLayers) -> Self {
        Self::with_stud(Material::stud(inch(stud_depth_in)), fixed)
    }

    pub fn with_stud(stud: Material, fixed: FixedLayers) -> Self {
        Self { stud, fixed }
    }

    pub fn depth(&self) -> Length {
        self.stud.thickness
    }

    fn framing_path(&self, non_cavity_r: RValue) -> PathTerm {
        PathTerm::new(
            self.fixed.framing_factor,
            self.stud.rvalue() + non_cavity_r,
            0.0,
        )
    }

    fn cavity_path(&self, non_cavity_r: RValue) -> PathTerm {
        PathTerm::new(1.0 - self.fixed.framing_factor, non_cavity_r, 1.0)
    }
}

impl ConstructionSet for WoodStudSet {
    fn describe(&self) -> String {
        format!(
            "wood stud {:.2} in, ff {:.2}, rigid R{}",
            self.stud.thickness_in(),
            self.fixed.framing_factor,
            self.fixed.rigid_r
        )
    }

    fn fixed(&self) -> &FixedLayers {
        &self.fixed
    }

    fn solve_unknown(&self, assembly_r: RValue, non_cavity_r: RValue) -> Option<RValue> {
        let target = 1.0 / assembly_r - self.framing_path(non_cavity_r).conductance(0.0);
        solve_one_path(target, self.cavity_path(non_cavity_r))
    }

    fn assembly_r(&self, non_cavity_r: RValue, unknown_r: RValue) -> RValue {
        1.0 / (self.framing_path(non_cavity_r).conductance(unknown_r)
            + self.cavity_path(non_cavity_r).conductance(unknown_r))
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
        let cavity = insulation(
            "CavityInsulation",
            self.depth(),
            unknown_r,
            BaseMaterial::CAVITY_FILL,
        )?;
        builder.layer("StudAndCavity", vec![self.stud.clone(), cavity])?;
        Ok(())
    }
}
