//! Default candidate lists per surface kind.
//!
//! Every list ends with a bare fallback (no finish, rigid, sheathing or
//! drywall and near-zero framing) so that synthesis always returns something.

use ev_core::units::RValue;
use ev_core::Real;
use ev_materials::{FloorCovering, Material, RoofingType, SidingType};
use serde::{Deserialize, Serialize};

use crate::category::ConstructionCategory;
use crate::error::ConstructionResult;
use crate::cmu::CmuSet;
use crate::double_stud::DoubleStudSet;
use crate::generic::{GenericSet, MassMaterial};
use crate::icf::IcfSet;
use crate::sip::SipSet;
use crate::steel_stud::SteelStudSet;
use crate::traits::FixedLayers;
use crate::wood_stud::WoodStudSet;

/// Framing factor of the fallback candidates.
pub const FALLBACK_FRAMING_FACTOR: Real = 0.01;

/// Steel-stud cavity correction factor.
pub const STEEL_CORRECTION_FACTOR: Real = 0.45;

const STUD_2X4_IN: Real = 3.5;
const STUD_2X6_IN: Real = 5.5;
const STUD_2X8_IN: Real = 7.25;

/// Wall construction types accepted in envelope descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallType {
    WoodStud,
    SteelStud,
    DoubleWoodStud,
    StructuralInsulatedPanel,
    ConcreteMasonryUnit,
    InsulatedConcreteForms,
    SolidConcrete,
    StructuralBrick,
    Adobe,
    StrawBale,
    Stone,
    Log,
}

fn bare() -> FixedLayers {
    FixedLayers::framed(FALLBACK_FRAMING_FACTOR)
}

/// Candidates for an above-grade wall.
pub fn wall_category(
    wall_type: WallType,
    drywall_in: Real,
    siding: SidingType,
) -> ConstructionResult<ConstructionCategory> {
    let d = drywall_in;
    let finish = siding.material();
    let fixed = |ff: Real, rigid: RValue, osb: Real| {
        FixedLayers::framed(ff)
            .with_rigid(rigid)
            .with_sheathing(osb)
            .with_drywall(d)
            .with_exterior_finish(finish.clone())
    };

    let category = match wall_type {
        WallType::WoodStud => ConstructionCategory::WoodStud(vec![
            WoodStudSet::new(STUD_2X6_IN, fixed(0.20, 10.0, 0.5)),
            WoodStudSet::new(STUD_2X6_IN, fixed(0.20, 5.0, 0.5)),
            WoodStudSet::new(STUD_2X6_IN, fixed(0.20, 0.0, 0.5)),
            WoodStudSet::new(STUD_2X4_IN, fixed(0.23, 0.0, 0.5)),
            WoodStudSet::new(STUD_2X4_IN, bare()),
        ]),
        WallType::SteelStud => {
            let cf = STEEL_CORRECTION_FACTOR;
            ConstructionCategory::SteelStud(vec![
                SteelStudSet::new(STUD_2X6_IN, cf, fixed(0.20, 10.0, 0.5)),
                SteelStudSet::new(STUD_2X6_IN, cf, fixed(0.20, 5.0, 0.5)),
                SteelStudSet::new(STUD_2X6_IN, cf, fixed(0.20, 0.0, 0.5)),
                SteelStudSet::new(STUD_2X4_IN, cf, fixed(0.23, 0.0, 0.5)),
                SteelStudSet::new(STUD_2X4_IN, 1.0, bare()),
            ])
        }
        WallType::DoubleWoodStud => ConstructionCategory::DoubleStud(vec![
            DoubleStudSet::new(STUD_2X4_IN, 24.0, fixed(0.23, 0.0, 0.5)),
            DoubleStudSet::new(STUD_2X4_IN, 48.0, FixedLayers::framed(0.04)),
        ]),
        WallType::StructuralInsulatedPanel => ConstructionCategory::Sip(vec![
            SipSet::new(10.0, 0.44, fixed(0.16, 0.0, 0.0))?,
            SipSet::new(5.0, 0.44, fixed(0.16, 0.0, 0.0))?,
            SipSet::new(1.0, 0.44, bare())?,
        ]),
        WallType::ConcreteMasonryUnit => ConstructionCategory::Cmu(vec![
            CmuSet::new(8.0, 1.4, fixed(0.08, 0.0, 0.0)),
            CmuSet::new(6.0, 5.29, bare()),
        ]),
        WallType::InsulatedConcreteForms => ConstructionCategory::Icf(vec![
            IcfSet::new(2.0, 4.0, fixed(0.08, 0.0, 0.0)),
            IcfSet::new(1.0, 1.0, bare()),
        ]),
        WallType::SolidConcrete => mass_walls(MassMaterial::Concrete, d, finish.clone()),
        WallType::StructuralBrick => mass_walls(MassMaterial::Brick, d, finish.clone()),
        WallType::Adobe => mass_walls(MassMaterial::Adobe, d, finish.clone()),
        WallType::StrawBale => mass_walls(MassMaterial::StrawBale, d, finish.clone()),
        WallType::Stone => mass_walls(MassMaterial::Stone, d, finish.clone()),
        WallType::Log => mass_walls(MassMaterial::Log, d, finish.clone()),
    };
    Ok(category)
}

fn mass_walls(
    material: MassMaterial,
    drywall_in: Real,
    finish: Option<Material>,
) -> ConstructionCategory {
    let finished = FixedLayers::framed(0.0)
        .with_drywall(drywall_in)
        .with_exterior_finish(finish);
    ConstructionCategory::GenericMass(vec![
        GenericSet::mass(material, finished.clone().with_rigid(10.0)),
        GenericSet::mass(material, finished),
        GenericSet::mass(material, FixedLayers::framed(0.0)),
    ])
}

/// Candidates for a pitched or flat roof deck.
pub fn roof_category(drywall_in: Real, roofing: RoofingType) -> ConstructionCategory {
    let finish = roofing.material();
    let fixed = |ff: Real, rigid: RValue, osb: Real| {
        FixedLayers::framed(ff)
            .with_rigid(rigid)
            .with_sheathing(osb)
            .with_drywall(drywall_in)
            .with_exterior_finish(finish.clone())
    };
    ConstructionCategory::WoodStud(vec![
        WoodStudSet::new(STUD_2X8_IN, fixed(0.07, 20.0, 0.75)),
        WoodStudSet::new(STUD_2X8_IN, fixed(0.07, 10.0, 0.75)),
        WoodStudSet::new(STUD_2X8_IN, fixed(0.07, 0.0, 0.75)),
        WoodStudSet::new(STUD_2X6_IN, fixed(0.07, 0.0, 0.75)),
        WoodStudSet::new(STUD_2X4_IN, fixed(0.07, 0.0, 0.5)),
        WoodStudSet::new(STUD_2X4_IN, bare()),
    ])
}

/// Candidates for a framed floor. The covering is the interior finish.
pub fn floor_category(covering: FloorCovering) -> ConstructionCategory {
    let finish = covering.material();
    let fixed = |ff: Real, rigid: RValue, osb: Real| {
        FixedLayers::framed(ff)
            .with_rigid(rigid)
            .with_sheathing(osb)
            .with_interior_finish(finish.clone())
    };
    ConstructionCategory::WoodStud(vec![
        WoodStudSet::new(STUD_2X6_IN, fixed(0.10, 20.0, 0.75)),
        WoodStudSet::new(STUD_2X6_IN, fixed(0.10, 10.0, 0.75)),
        WoodStudSet::new(STUD_2X6_IN, fixed(0.10, 0.0, 0.75)),
        WoodStudSet::new(STUD_2X4_IN, fixed(0.13, 0.0, 0.5)),
        WoodStudSet::new(STUD_2X4_IN, bare()),
    ])
}

/// Candidates for a rim joist, modeled as a 1.5 in deep framed band.
pub fn rim_joist_category(drywall_in: Real, siding: SidingType) -> ConstructionCategory {
    let fixed = FixedLayers::framed(0.17)
        .with_sheathing(0.5)
        .with_drywall(drywall_in)
        .with_exterior_finish(siding.material());
    ConstructionCategory::WoodStud(vec![
        WoodStudSet::new(1.5, fixed.clone().with_rigid(10.0)),
        WoodStudSet::new(1.5, fixed.clone().with_rigid(5.0)),
        WoodStudSet::new(1.5, fixed),
        WoodStudSet::new(1.5, bare()),
    ])
}

/// Candidates for a below-grade concrete wall of the given thickness.
pub fn foundation_wall_category(thickness_in: Real, drywall_in: Real) -> ConstructionCategory {
    let concrete = MassMaterial::Concrete.base();
    let finished = FixedLayers::framed(0.0).with_drywall(drywall_in);
    ConstructionCategory::GenericMass(vec![
        GenericSet::new(concrete, thickness_in, finished),
        GenericSet::new(concrete, thickness_in, FixedLayers::framed(0.0)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_WALLS: [WallType; 12] = [
        WallType::WoodStud,
        WallType::SteelStud,
        WallType::DoubleWoodStud,
        WallType::StructuralInsulatedPanel,
        WallType::ConcreteMasonryUnit,
        WallType::InsulatedConcreteForms,
        WallType::SolidConcrete,
        WallType::StructuralBrick,
        WallType::Adobe,
        WallType::StrawBale,
        WallType::Stone,
        WallType::Log,
    ];

    #[test]
    fn every_list_ends_with_a_bare_fallback() {
        for wall_type in ALL_WALLS {
            let category = wall_category(wall_type, 0.5, SidingType::Vinyl).unwrap();
            assert!(category.len() >= 2, "{wall_type:?}");
            let fallback = category.candidate(category.len() - 1).unwrap();
            let fixed = fallback.as_dyn().fixed();
            assert!(fixed.exterior_finish.is_none());
            assert_eq!(fixed.rigid_r, 0.0);
            assert!(fixed.drywall().is_none());
        }
    }

    #[test]
    fn fallback_has_least_fixed_resistance() {
        for category in [
            wall_category(WallType::WoodStud, 0.5, SidingType::Stucco).unwrap(),
            roof_category(0.5, RoofingType::ClayTile),
            floor_category(FloorCovering::Carpet),
            rim_joist_category(0.5, SidingType::Vinyl),
            foundation_wall_category(8.0, 0.5),
        ] {
            let last = category.len() - 1;
            let fallback_n = category.candidate(last).unwrap().as_dyn().non_cavity_r(0.85);
            for i in 0..last {
                let n = category.candidate(i).unwrap().as_dyn().non_cavity_r(0.85);
                assert!(n >= fallback_n);
            }
        }
    }

    #[test]
    fn floor_covering_is_interior() {
        let category = floor_category(FloorCovering::Carpet);
        let first = category.candidate(0).unwrap();
        let fixed = first.as_dyn().fixed();
        assert!(fixed.exterior_finish.is_none());
        assert!(fixed.interior_finish.is_some());
    }
}
