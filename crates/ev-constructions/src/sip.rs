//! Structural insulated panels.
//!
//! An insulating core between two structural skins. Panels join at 0.5 in OSB
//! splines (one 4 in spline per 48 in panel) that bridge the core at each face,
//! leaving `g = h − 1 in` of insulation between them.

use ev_core::units::{Length, RValue, inch, to_inch};
use ev_core::Real;
use ev_materials::{BaseMaterial, Material};

use crate::algebra::{PathTerm, solve_two_paths};
use crate::assembly::{AssemblyBuilder, insulation};
use crate::error::{ConstructionError, ConstructionResult};
use crate::traits::{ConstructionSet, FixedLayers};

pub const SPLINE_THICKNESS_IN: Real = 0.5;
pub const SPLINE_FRACTION: Real = 4.0 / 48.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SipSet {
    /// Core depth; at least twice the spline thickness.
    pub thickness: Length,
    pub skin_thickness: Length,
    pub fixed: FixedLayers,
}

impl SipSet {
    /// Thicknesses in inches. A core thinner than two splines cannot be laid
    /// out and is rejected.
    pub fn new(
        thickness_in: Real,
        skin_thickness_in: Real,
        fixed: FixedLayers,
    ) -> ConstructionResult<Self> {
        if !thickness_in.is_finite() || thickness_in < 2.0 * SPLINE_THICKNESS_IN {
            return Err(ConstructionError::InvalidArg {
                what: "SIP core thickness must be at least two spline thicknesses",
            });
        }
        if !skin_thickness_in.is_finite() || skin_thickness_in <= 0.0 {
            return Err(ConstructionError::InvalidArg {
                what: "SIP skin thickness must be positive",
            });
        }
        Ok(Self {
            thickness: inch(thickness_in),
            skin_thickness: inch(skin_thickness_in),
            fixed,
        })
    }

    fn skin(&self) -> Material {
        Material::sheathing(self.skin_thickness)
    }

    fn spline() -> Material {
        Material::sheathing(inch(SPLINE_THICKNESS_IN))
    }

    /// Insulation depth between the splines.
    fn gap_in(&self) -> Real {
        to_inch(self.thickness) - 2.0 * SPLINE_THICKNESS_IN
    }

    fn paths(&self, non_cavity_r: RValue) -> [PathTerm; 3] {
        let h = to_inch(self.thickness);
        let ff = self.fixed.framing_factor;
        [
            PathTerm::new(ff, Material::stud(self.thickness).rvalue() + non_cavity_r, 0.0),
            PathTerm::new(
                SPLINE_FRACTION,
                2.0 * Self::spline().rvalue() + non_cavity_r,
                self.gap_in() / h,
            ),
            PathTerm::new(1.0 - ff - SPLINE_FRACTION, non_cavity_r, 1.0),
        ]
    }
}

impl ConstructionSet for SipSet {
    fn describe(&self) -> String {
        format!(
            "SIP {:.2} in, skins {:.2} in, ff {:.2}",
            to_inch(self.thickness),
            to_inch(self.skin_thickness),
            self.fixed.framing_factor
        )
    }

    fn fixed(&self) -> &FixedLayers {
        &self.fixed
    }

    fn non_cavity_r(&self, film_r: RValue) -> RValue {
        self.fixed.non_cavity_r(film_r) + 2.0 * self.skin().rvalue()
    }

    fn solve_unknown(&self, assembly_r: RValue, non_cavity_r: RValue) -> Option<RValue> {
        let [framing, spline, core] = self.paths(non_cavity_r);
        solve_two_paths(1.0 / assembly_r - framing.conductance(0.0), spline, core)
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
        self.paths(0.0).iter().map(|p| p.fraction).collect()
    }

    fn core_layers(
        &self,
        unknown_r: RValue,
        builder: &mut AssemblyBuilder,
    ) -> ConstructionResult<()> {
        let h = to_inch(self.thickness);
        let g = self.gap_in();
        let spline_t = inch(SPLINE_THICKNESS_IN);
        let spline_ins = insulation(
            "CoreInsulation",
            spline_t,
            unknown_r * SPLINE_THICKNESS_IN / h,
            BaseMaterial::XPS,
        )?;
        let spline_layer = vec![Material::stud(spline_t), Self::spline(), spline_ins];

        builder.uniform("ExteriorSkin", self.skin());
        builder.layer("ExteriorSpline", spline_layer.clone())?;
        if g > 0.0 {
            let core = insulation("CoreInsulation", inch(g), unknown_r * g / h, BaseMaterial::XPS)?;
            builder.layer("Core", vec![Material::stud(inch(g)), core.clone(), core])?;
        }
        builder.layer("InteriorSpline", spline_layer)?;
        builder.uniform("InteriorSkin", self.skin());
        Ok(())
    }
}
