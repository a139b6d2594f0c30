//! Base material properties.
//!
//! Conductivities are per-inch IP values (Btu·in/(h·ft²·°F)), densities are
//! lb/ft³ and specific heats Btu/(lb·°F).

use ev_core::units::ConductivityIn;
use ev_core::Real;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseMaterial {
    pub name: &'static str,
    pub k_in: ConductivityIn,
    pub density: Real,
    pub specific_heat: Real,
}

impl BaseMaterial {
    pub const WOOD: Self = Self::new("Wood", 0.8004, 32.0, 0.29);
    pub const GYPSUM: Self = Self::new("Gypsum", 1.1112, 50.0, 0.2);
    pub const CONCRETE: Self = Self::new("Concrete", 9.0912, 140.0, 0.2);
    pub const BRICK: Self = Self::new("Brick", 5.5, 110.0, 0.19);
    pub const SOIL: Self = Self::new("Soil", 12.0, 115.0, 0.1);
    pub const STRAW_BALE: Self = Self::new("StrawBale", 0.4164, 6.2, 0.32);
    pub const STONE: Self = Self::new("Stone", 20.0, 140.0, 0.2);
    pub const CMU_CORE: Self = Self::new("CMUCore", 1.4, 119.0, 0.2);
    pub const XPS: Self = Self::new("RigidXPS", 0.2, 2.0, 0.29);
    pub const CAVITY_FILL: Self = Self::new("CavityInsulation", 0.3, 2.5, 0.25);
    pub const VINYL: Self = Self::new("Vinyl", 0.625, 11.1, 0.25);
    pub const ALUMINUM_SIDING: Self = Self::new("AluminumSiding", 0.625, 10.9, 0.29);
    pub const FIBER_CEMENT: Self = Self::new("FiberCement", 1.79, 21.7, 0.24);
    pub const STUCCO: Self = Self::new("Stucco", 4.5, 80.0, 0.21);
    pub const ASPHALT_SHINGLES: Self = Self::new("AsphaltShingles", 0.568, 70.0, 0.3);
    pub const CLAY_TILE: Self = Self::new("ClayTile", 5.5, 118.0, 0.2);
    pub const METAL: Self = Self::new("Metal", 300.0, 488.0, 0.11);
    pub const CARPET: Self = Self::new("Carpet", 0.24, 3.4, 0.32);
    pub const CERAMIC_TILE: Self = Self::new("CeramicTile", 7.0, 120.0, 0.2);

    pub const fn new(
        name: &'static str,
        k_in: ConductivityIn,
        density: Real,
        specific_heat: Real,
    ) -> Self {
        Self {
            name,
            k_in,
            density,
            specific_heat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conductivities_are_positive() {
        for base in [
            BaseMaterial::WOOD,
            BaseMaterial::GYPSUM,
            BaseMaterial::CONCRETE,
            BaseMaterial::BRICK,
            BaseMaterial::SOIL,
            BaseMaterial::STRAW_BALE,
            BaseMaterial::STONE,
            BaseMaterial::CMU_CORE,
            BaseMaterial::XPS,
            BaseMaterial::CAVITY_FILL,
        ] {
            assert!(base.k_in > 0.0, "{} conductivity", base.name);
            assert!(base.density > 0.0, "{} density", base.name);
        }
    }
}
