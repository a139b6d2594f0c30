//! Fallback behavior of the synthesis engine.

use ev_constructions::{
    ConstructionCategory, FixedLayers, Verification, WallType, WoodStudSet,
    DEFAULT_RVALUE_TOLERANCE, floor_category, foundation_wall_category, rim_joist_category,
    roof_category, synthesize, verify, wall_category,
};
use ev_core::units::inch;
use ev_materials::{BaseMaterial, FloorCovering, Material, RoofingType, SidingType};

const FILM: f64 = 0.85;

#[test]
fn film_only_request_always_falls_back() {
    let mut categories: Vec<ConstructionCategory> = [
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
    ]
    .into_iter()
    .map(|t| wall_category(t, 0.5, SidingType::Vinyl).unwrap())
    .collect();
    categories.push(roof_category(0.5, RoofingType::AsphaltShingles));
    categories.push(floor_category(FloorCovering::Hardwood));
    categories.push(rim_joist_category(0.5, SidingType::Vinyl));
    categories.push(foundation_wall_category(8.0, 0.5));

    for category in categories {
        let solved = synthesize(&category, FILM, FILM).unwrap();
        assert!(!solved.matched, "{}", category.kind());
        assert_eq!(solved.candidate_index, category.len() - 1, "{}", category.kind());
        assert!(solved.unknown_r >= 0.0);
    }
}

#[test]
fn quarter_framed_wall_hits_fifteen() {
    let stud = Material::from_rvalue("Framing", inch(3.5), 13.0, BaseMaterial::WOOD).unwrap();
    let category = ConstructionCategory::WoodStud(vec![
        WoodStudSet::with_stud(stud, FixedLayers::framed(0.25).with_drywall(0.5)),
        WoodStudSet::new(3.5, FixedLayers::framed(0.01)),
    ]);

    let solved = synthesize(&category, 15.0, 0.68).unwrap();
    assert!(solved.matched);
    assert!((solved.unknown_r - 14.184).abs() < 1e-3);

    let assembly = solved.materialize("Wall1").unwrap();
    let verification = verify("Wall1", &solved, &assembly, DEFAULT_RVALUE_TOLERANCE).unwrap();
    assert!(matches!(verification, Verification::Matched { achieved } if (achieved - 15.0).abs() < 1e-9));
}

#[test]
fn r2_wall_is_degraded_but_usable() {
    let walls = wall_category(WallType::WoodStud, 0.5, SidingType::Vinyl).unwrap();
    let solved = synthesize(&walls, 2.0, FILM).unwrap();
    assert!(!solved.matched);
    assert_eq!(solved.candidate_index, walls.len() - 1);

    let assembly = solved.materialize("Wall2").unwrap();
    let verification = verify("Wall2", &solved, &assembly, DEFAULT_RVALUE_TOLERANCE).unwrap();
    assert!(verification.is_degraded());
    assert!((verification.achieved() - solved.achieved_r()).abs() < 1e-9);
}
