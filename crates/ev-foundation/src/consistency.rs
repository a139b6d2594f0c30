//! Cross-checks between foundation walls and slabs.

use crate::error::{FoundationError, FoundationResult};
use crate::types::{FoundationWall, Slab};

/// Every slab needs a wall in its space (unless slab-on-grade) and every wall
/// needs a slab in its space.
pub fn check_consistency(walls: &[FoundationWall], slabs: &[Slab]) -> FoundationResult<()> {
    for slab in slabs {
        if slab.space.is_wall_less() {
            continue;
        }
        if !walls.iter().any(|w| w.space == slab.space) {
            return Err(FoundationError::MissingWall {
                slab: slab.name.clone(),
                space: slab.space,
            });
        }
    }

    for wall in walls {
        if !slabs.iter().any(|s| s.space == wall.space) {
            return Err(FoundationError::MissingSlab {
                wall: wall.name.clone(),
                space: wall.space,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::FoundationSpace;

    #[test]
    fn basement_slab_without_wall() {
        let slabs = [Slab::new("S1", FoundationSpace::BasementConditioned, 40.0, 400.0, 7.0)];
        let err = check_consistency(&[], &slabs).unwrap_err();
        assert_eq!(
            err,
            FoundationError::MissingWall {
                slab: "S1".into(),
                space: FoundationSpace::BasementConditioned,
            }
        );
    }

    #[test]
    fn slab_on_grade_needs_no_wall() {
        let slabs = [
            Slab::new("S1", FoundationSpace::ConditionedSpace, 120.0, 1200.0, 0.0),
            Slab::new("S2", FoundationSpace::Garage, 60.0, 400.0, 0.0),
        ];
        assert!(check_consistency(&[], &slabs).is_ok());
    }

    #[test]
    fn wall_without_slab() {
        let walls = [FoundationWall::new(
            "FW1",
            FoundationSpace::CrawlspaceVented,
            true,
            80.0,
            2.0,
            1.0,
        )];
        let slabs = [Slab::new("S1", FoundationSpace::Garage, 60.0, 400.0, 0.0)];
        assert!(matches!(
            check_consistency(&walls, &slabs),
            Err(FoundationError::MissingSlab { ref wall, .. }) if wall == "FW1"
        ));
    }
}
