//! Insulated concrete forms.
//!
//! A concrete core between two equal insulation forms, held together by ties
//! modeled as wood through the full depth.

use ev_core::units::{Length, RValue, inch, to_inch};
use ev_core::Real;
use ev_materials::{BaseMaterial, Material};

use crate::algebra::{PathTerm, solve_one_path};
use crate::assembly::{AssemblyBuilder, insulation};
use crate::error::ConstructionResult;
use crate::traits::{ConstructionSet, FixedLayers};

/// The unknown is the R-value of each form layer.
#[derive(Debug, Clone, PartialEq)]
pub struct IcfSet {
    pub insulation_thickness: Length,
    pub concrete_thickness: Length,
    pub fixed: FixedLayers,
}

impl IcfSet {
    pub fn new(insulation_in: Real, concrete_in: Real, fixed: FixedLayers) -> Self {
        Self {
            insulation_thickness: inch(insulation_in),
            concrete_thickness: inch(concrete_in),
            fixed,
        }
    }

    fn tie_path(&self, non_cavity_r: RValue) -> PathTerm {
        let depth = 2.0 * to_inch(self.insulation_thickness) + to_inch(self.concrete_thickness);
        PathTerm::new(
            self.fixed.framing_factor,
            Material::stud(inch(depth)).rvalue() + non_cavity_r,
            0.0,
        )
    }

    fn form_path(&self, non_cavity_r: RValue) -> PathTerm {
        PathTerm::new(
            1.0 - self.fixed.framing_factor,
            Material::concrete(self.concrete_thickness).rvalue() + non_cavity_r,
            2.0,
        )
    }

    fn form_layer(&self, unknown_r: RValue) -> ConstructionResult<Vec<Material>> {
        Ok(vec![
            Material::stud(self.insulation_thickness),
            insulation(
                "FormInsulation",
                self.insulation_thickness,
                unknown_r,
                BaseMaterial::XPS,
            )?,
        ])
    }
}

impl ConstructionSet for IcfSet {
    fn describe(&self) -> String {
        format!(
            "ICF {:.1} in forms, {:.1} in concrete",
            to_inch(self.insulation_thickness),
            to_inch(self.concrete_thickness)
        )
    }

    fn fixed(&self) -> &FixedLayers {
        &self.fixed
    }

    fn solve_unknown(&self, assembly_r: RValue, non_cavity_r: RValue) -> Option<RValue> {
        let target = 1.0 / assembly_r - self.tie_path(non_cavity_r).conductance(0.0);
        solve_one_path(target, self.form_path(non_cavity_r))
    }

    fn assembly_r(&self, non_cavity_r: RValue, unknown_r: RValue) -> RValue {
        1.0 / (self.tie_path(non_cavity_r).conductance(unknown_r)
            + self.form_path(non_cavity_r).conductance(unknown_r))
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
        let form = self.form_layer(unknown_r)?;
        builder.layer("ExteriorForm", form.clone())?;
        builder.layer(
            "Concrete",
            vec![
                Material::stud(self.concrete_thickness),
                Material::concrete(self.concrete_thickness),
            ],
        )?;
        builder.layer("InteriorForm", form)?;
        Ok(())
    }
}
