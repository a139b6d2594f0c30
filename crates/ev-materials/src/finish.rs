//! Finish material catalog: siding, roofing and floor coverings.

use ev_core::units::inch;
use serde::{Deserialize, Serialize};

use crate::base::BaseMaterial;
use crate::material::Material;

/// Exterior wall cladding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SidingType {
    #[default]
    Vinyl,
    Aluminum,
    Wood,
    FiberCement,
    Stucco,
    BrickVeneer,
    None,
}

impl SidingType {
    /// Finish layer, or `None` for unclad surfaces.
    pub fn material(self) -> Option<Material> {
        let (thick_in, base) = match self {
            SidingType::Vinyl => (0.375, BaseMaterial::VINYL),
            SidingType::Aluminum => (0.375, BaseMaterial::ALUMINUM_SIDING),
            SidingType::Wood => (0.5, BaseMaterial::WOOD),
            SidingType::FiberCement => (0.375, BaseMaterial::FIBER_CEMENT),
            SidingType::Stucco => (1.0, BaseMaterial::STUCCO),
            SidingType::BrickVeneer => (4.0, BaseMaterial::BRICK),
            SidingType::None => return None,
        };
        Some(Material::new("ExteriorFinish", inch(thick_in), base))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoofingType {
    #[default]
    AsphaltShingles,
    WoodShingles,
    ClayTile,
    Metal,
    None,
}

impl RoofingType {
    pub fn material(self) -> Option<Material> {
        let (thick_in, base) = match self {
            RoofingType::AsphaltShingles => (0.25, BaseMaterial::ASPHALT_SHINGLES),
            RoofingType::WoodShingles => (0.375, BaseMaterial::WOOD),
            RoofingType::ClayTile => (0.75, BaseMaterial::CLAY_TILE),
            RoofingType::Metal => (0.02, BaseMaterial::METAL),
            RoofingType::None => return None,
        };
        Some(Material::new("Roofing", inch(thick_in), base))
    }
}

/// Walking surface above a framed floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FloorCovering {
    #[default]
    None,
    Carpet,
    Hardwood,
    Tile,
}

impl FloorCovering {
    pub fn material(self) -> Option<Material> {
        let (thick_in, base) = match self {
            FloorCovering::Carpet => (0.5, BaseMaterial::CARPET),
            FloorCovering::Hardwood => (0.75, BaseMaterial::WOOD),
            FloorCovering::Tile => (0.5, BaseMaterial::CERAMIC_TILE),
            FloorCovering::None => return None,
        };
        Some(Material::new("FloorCovering", inch(thick_in), base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_variants_have_no_layer() {
        assert!(SidingType::None.material().is_none());
        assert!(RoofingType::None.material().is_none());
        assert!(FloorCovering::None.material().is_none());
    }

    #[test]
    fn vinyl_siding_is_r_0_6() {
        let m = SidingType::Vinyl.material().unwrap();
        assert!((m.rvalue() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn carpet_dominates_floor_coverings() {
        let carpet = FloorCovering::Carpet.material().unwrap().rvalue();
        let tile = FloorCovering::Tile.material().unwrap().rvalue();
        assert!(carpet > 2.0);
        assert!(tile < carpet);
    }

    #[test]
    fn siding_deserializes_snake_case() {
        let s: SidingType = from_tag("fiber_cement");
        assert_eq!(s, SidingType::FiberCement);
    }

    fn from_tag(tag: &str) -> SidingType {
        use serde::de::IntoDeserializer;
        use serde::de::value::{Error, StrDeserializer};
        let de: StrDeserializer<'_, Error> = tag.into_deserializer();
        SidingType::deserialize(de).unwrap()
    }
}
