//! Homogeneous mass walls (concrete, masonry, earth, straw, log).

use ev_core::units::{Length, RValue, inch, to_inch};
use ev_core::Real;
use ev_materials::BaseMaterial;
use serde::{Deserialize, Serialize};

use crate::assembly::{AssemblyBuilder, insulation};
use crate::error::ConstructionResult;
use crate::traits::{ConstructionSet, FixedLayers};

/// Mass material with its standard wall thickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MassMaterial {
    Concrete,
    Brick,
    Adobe,
    StrawBale,
    Stone,
    Log,
}

impl MassMaterial {
    pub fn base(self) -> BaseMaterial {
        match self {
            MassMaterial::Concrete => BaseMaterial::CONCRETE,
            MassMaterial::Brick => BaseMaterial::BRICK,
            MassMaterial::Adobe => BaseMaterial::SOIL,
            MassMaterial::StrawBale => BaseMaterial::STRAW_BALE,
            MassMaterial::Stone => BaseMaterial::STONE,
            MassMaterial::Log => BaseMaterial::WOOD,
        }
    }

    pub fn standard_thickness_in(self) -> Real {
        match self {
            MassMaterial::Concrete => 6.0,
            MassMaterial::Brick => 8.0,
            MassMaterial::Adobe => 10.0,
            MassMaterial::StrawBale => 23.0,
            MassMaterial::Stone => 6.0,
            MassMaterial::Log => 6.0,
        }
    }
}

/// Single-layer mass construction. The layer keeps the density and heat
/// capacity of its material while its R-value is solved.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericSet {
    pub base: BaseMaterial,
    pub thickness: Length,
    pub fixed: FixedLayers,
}

impl GenericSet {
    pub fn new(base: BaseMaterial, thickness_in: Real, fixed: FixedLayers) -> Self {
        Self {
            base,
            thickness: inch(thickness_in),
            fixed,
        }
    }

    /// Standard thickness of the given mass material.
    pub fn mass(material: MassMaterial, fixed: FixedLayers) -> Self {
        Self::new(material.base(), material.standard_thickness_in(), fixed)
    }
}

impl ConstructionSet for GenericSet {
    fn describe(&self) -> String {
        format!("{} {:.1} in", self.base.name, to_inch(self.thickness))
    }

    fn fixed(&self) -> &FixedLayers {
        &self.fixed
    }

    fn solve_unknown(&self, assembly_r: RValue, non_cavity_r: RValue) -> Option<RValue> {
        let x = assembly_r - non_cavity_r;
        x.is_finite().then_some(x)
    }

    fn assembly_r(&self, non_cavity_r: RValue, unknown_r: RValue) -> RValue {
        non_cavity_r + unknown_r
    }

    fn path_fractions(&self) -> Vec<Real> {
        vec![1.0]
    }

    fn core_layers(
        &self,
        unknown_r: RValue,
        builder: &mut AssemblyBuilder,
    ) -> ConstructionResult<()> {
        let mass = insulation(self.base.name, self.thickness, unknown_r, self.base)?;
        builder.uniform("Mass", mass);
        Ok(())
    }
}
