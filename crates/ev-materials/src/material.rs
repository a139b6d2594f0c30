//! Sized material layers.

use ev_core::units::{ConductivityIn, Length, RValue, inch, to_inch};
use ev_core::Real;

use crate::base::BaseMaterial;
use crate::error::{MaterialError, MaterialResult};

/// Smallest R-value a sized layer may carry.
///
/// A solved layer can legitimately come out at zero (an unmatched fallback);
/// representing it needs a finite conductivity.
pub const MIN_LAYER_RVALUE: RValue = 1e-6;

/// A homogeneous layer of known thickness.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub thickness: Length,
    /// Per-inch conductivity, Btu·in/(h·ft²·°F)
    pub k_in: ConductivityIn,
    /// lb/ft³
    pub density: Real,
    /// Btu/(lb·°F)
    pub specific_heat: Real,
}

impl Material {
    /// Size a base material to the given thickness.
    pub fn new(name: impl Into<String>, thickness: Length, base: BaseMaterial) -> Self {
        Self {
            name: name.into(),
            thickness,
            k_in: base.k_in,
            density: base.density,
            specific_heat: base.specific_heat,
        }
    }

    /// Build a layer of `thickness` whose conductivity is chosen so that the layer
    /// has resistance `rvalue`. Density and heat capacity come from `base`.
    pub fn from_rvalue(
        name: impl Into<String>,
        thickness: Length,
        rvalue: RValue,
        base: BaseMaterial,
    ) -> MaterialResult<Self> {
        let thick_in = to_inch(thickness);
        if !thick_in.is_finite() || thick_in <= 0.0 {
            return Err(MaterialError::NonPhysical {
                what: "layer thickness",
                value: thick_in,
            });
        }
        if !rvalue.is_finite() || rvalue < 0.0 {
            return Err(MaterialError::NonPhysical {
                what: "layer R-value",
                value: rvalue,
            });
        }
        Ok(Self {
            name: name.into(),
            thickness,
            k_in: thick_in / rvalue.max(MIN_LAYER_RVALUE),
            density: base.density,
            specific_heat: base.specific_heat,
        })
    }

    /// Framing member of the given depth.
    pub fn stud(depth: Length) -> Self {
        Self::new("Framing", depth, BaseMaterial::WOOD)
    }

    pub fn gypsum(thickness: Length) -> Self {
        Self::new("Drywall", thickness, BaseMaterial::GYPSUM)
    }

    /// OSB/plywood sheathing.
    pub fn sheathing(thickness: Length) -> Self {
        Self::new("Sheathing", thickness, BaseMaterial::WOOD)
    }

    pub fn concrete(thickness: Length) -> Self {
        Self::new("Concrete", thickness, BaseMaterial::CONCRETE)
    }

    /// Continuous rigid insulation sized for the given R-value.
    pub fn rigid(rvalue: RValue) -> MaterialResult<Self> {
        let thick_in = rvalue * BaseMaterial::XPS.k_in;
        Self::from_rvalue("RigidInsulation", inch(thick_in), rvalue, BaseMaterial::XPS)
    }

    pub fn thickness_in(&self) -> Real {
        to_inch(self.thickness)
    }

    /// Layer resistance, h·ft²·°F/Btu.
    pub fn rvalue(&self) -> RValue {
        self.thickness_in() / self.k_in
    }
}
