//! Conservation of slab perimeter and area across Kiva instances.

use ev_core::units::{to_ft, to_sqft};
use ev_foundation::{
    ApportionConfig, FoundationSpace, FoundationWall, Slab, apportion, apportion_with_config,
    check_consistency, group_by_space,
};
use proptest::prelude::*;

const SPACE: FoundationSpace = FoundationSpace::BasementUnconditioned;

fn totals(instances: &[ev_foundation::KivaInstance]) -> (f64, f64) {
    instances.iter().fold((0.0, 0.0), |(p, a), i| {
        (p + to_ft(i.exposed_perimeter), a + to_sqft(i.area))
    })
}

#[test]
fn partial_wall_gives_sixty_foot_remainder() {
    let walls = [FoundationWall::new("FW1", SPACE, true, 40.0 * 8.0, 8.0, 6.0)];
    let slabs = [Slab::new("S1", SPACE, 100.0, 1000.0, 6.0)];
    let instances = apportion(&walls, &slabs).unwrap();

    let bare: Vec<_> = instances.iter().filter(|i| i.wall.is_none()).collect();
    assert_eq!(bare.len(), 1);
    assert!((to_ft(bare[0].exposed_perimeter) - 60.0).abs() < 1e-9);
}

#[test]
fn mixed_house_apportions_each_group() {
    let walls = vec![
        FoundationWall::new("BsmtN", FoundationSpace::BasementConditioned, true, 320.0, 8.0, 7.0),
        FoundationWall::new("BsmtS", FoundationSpace::BasementConditioned, true, 320.0, 8.0, 7.0),
        FoundationWall::new("BsmtInt", FoundationSpace::BasementConditioned, false, 160.0, 8.0, 7.0),
        FoundationWall::new("Crawl", FoundationSpace::CrawlspaceVented, true, 120.0, 2.0, 1.0),
    ];
    let slabs = vec![
        Slab::new("BsmtSlab", FoundationSpace::BasementConditioned, 100.0, 1200.0, 7.0),
        Slab::new("CrawlSlab", FoundationSpace::CrawlspaceVented, 60.0, 500.0, 1.0),
        Slab::new("Garage", FoundationSpace::Garage, 50.0, 480.0, 0.0),
    ];
    check_consistency(&walls, &slabs).unwrap();

    for group in group_by_space(&walls, &slabs) {
        let instances = group.apportion(&ApportionConfig::default()).unwrap();
        let (p, a) = totals(&instances);
        let expected_p: f64 = group.slabs.iter().map(|s| to_ft(s.exposed_perimeter)).sum();
        let expected_a: f64 = group.slabs.iter().map(|s| to_sqft(s.area)).sum();
        assert!((p - expected_p).abs() < 1e-6, "{}", group.space);
        assert!((a - expected_a).abs() < 1e-6, "{}", group.space);

        for inst in &instances {
            if let Some(w) = inst.wall {
                assert!(group.walls[w.position()].exterior);
            }
        }
    }
}

#[test]
fn repeated_apportionment_is_identical() {
    let walls = [
        FoundationWall::new("FW1", SPACE, true, 200.0, 8.0, 6.0),
        FoundationWall::new("FW2", SPACE, true, 120.0, 8.0, 6.0),
    ];
    let slabs = [
        Slab::new("S1", SPACE, 70.0, 900.0, 6.0),
        Slab::new("S2", SPACE, 20.0, 150.0, 6.0),
    ];
    assert_eq!(
        apportion(&walls, &slabs).unwrap(),
        apportion(&walls, &slabs).unwrap()
    );
}

proptest! {
    #[test]
    fn instances_conserve_slab_totals(
        wall_lengths in prop::collection::vec(0.5_f64..200.0, 1..6),
        slab_dims in prop::collection::vec((0.0_f64..300.0, 1.0_f64..3000.0), 1..5),
    ) {
        let walls: Vec<_> = wall_lengths
            .iter()
            .enumerate()
            .map(|(i, l)| FoundationWall::new(format!("FW{i}"), SPACE, true, l * 8.0, 8.0, 7.0))
            .collect();
        let slabs: Vec<_> = slab_dims
            .iter()
            .enumerate()
            .map(|(i, (p, a))| Slab::new(format!("S{i}"), SPACE, *p, *a, 7.0))
            .collect();

        let instances = apportion_with_config(&walls, &slabs, &ApportionConfig::default()).unwrap();

        let (p, a) = totals(&instances);
        let expected_p: f64 = slab_dims.iter().map(|(p, _)| p).sum();
        let expected_a: f64 = slab_dims.iter().map(|(_, a)| a).sum();
        prop_assert!((p - expected_p).abs() < 1e-6, "perimeter {p} vs {expected_p}");
        prop_assert!((a - expected_a).abs() < 1e-6, "area {a} vs {expected_a}");

        for inst in &instances {
            prop_assert!(to_ft(inst.exposed_perimeter) >= 0.0);
            prop_assert!(to_sqft(inst.area) >= 0.0);
        }
    }
}
