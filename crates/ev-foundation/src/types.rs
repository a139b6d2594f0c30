//! Foundation surfaces, Kiva instances and space grouping.

use ev_core::units::{Area, Length, ft, sqft, to_ft, to_sqft};
use ev_core::{Real, SlabId, WallId};

use crate::space::FoundationSpace;

/// A below-grade (or partially below-grade) wall.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundationWall {
    pub name: String,
    pub space: FoundationSpace,
    /// Exterior walls bound the foundation; interior walls separate spaces.
    pub exterior: bool,
    /// Gross wall area.
    pub area: Area,
    pub height: Length,
    pub depth_below_grade: Length,
}

impl FoundationWall {
    /// Dimensions in ft and ft².
    pub fn new(
        name: impl Into<String>,
        space: FoundationSpace,
        exterior: bool,
        area_sqft: Real,
        height_ft: Real,
        depth_below_grade_ft: Real,
    ) -> Self {
        Self {
            name: name.into(),
            space,
            exterior,
            area: sqft(area_sqft),
            height: ft(height_ft),
            depth_below_grade: ft(depth_below_grade_ft),
        }
    }

    /// Horizontal length: area over height.
    pub fn length(&self) -> Length {
        ft(to_sqft(self.area) / to_ft(self.height))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slab {
    pub name: String,
    pub space: FoundationSpace,
    pub exposed_perimeter: Length,
    pub area: Area,
    pub depth_below_grade: Length,
}

impl Slab {
    /// Dimensions in ft and ft².
    pub fn new(
        name: impl Into<String>,
        space: FoundationSpace,
        exposed_perimeter_ft: Real,
        area_sqft: Real,
        depth_below_grade_ft: Real,
    ) -> Self {
        Self {
            name: name.into(),
            space,
            exposed_perimeter: ft(exposed_perimeter_ft),
            area: sqft(area_sqft),
            depth_below_grade: ft(depth_below_grade_ft),
        }
    }
}

/// One 2D ground heat-transfer calculation: a wall/slab pairing (or a bare
/// slab edge) with its share of exposed perimeter and floor area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KivaInstance {
    /// `None` for slab perimeter not bounded by any foundation wall.
    pub wall: Option<WallId>,
    pub slab: SlabId,
    pub exposed_perimeter: Length,
    pub area: Area,
    /// Top of the instance relative to grade (negative below grade).
    pub z_origin: Length,
}

/// Walls and slabs that share one interior space.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundationSpaceGroup {
    pub space: FoundationSpace,
    pub walls: Vec<FoundationWall>,
    pub slabs: Vec<Slab>,
}

impl FoundationSpaceGroup {
    fn empty(space: FoundationSpace) -> Self {
        Self {
            space,
            walls: Vec::new(),
            slabs: Vec::new(),
        }
    }
}

/// Partition walls and slabs by interior space.
///
/// Groups appear in the order their space is first seen, walls before slabs.
/// Surfaces keep their input order within a group.
pub fn group_by_space(walls: &[FoundationWall], slabs: &[Slab]) -> Vec<FoundationSpaceGroup> {
    let mut groups: Vec<FoundationSpaceGroup> = Vec::new();

    fn slot(groups: &mut Vec<FoundationSpaceGroup>, space: FoundationSpace) -> usize {
        match groups.iter().position(|g| g.space == space) {
            Some(i) => i,
            None => {
                groups.push(FoundationSpaceGroup::empty(space));
                groups.len() - 1
            }
        }
    }

    for wall in walls {
        let i = slot(&mut groups, wall.space);
        groups[i].walls.push(wall.clone());
    }
    for slab in slabs {
        let i = slot(&mut groups, slab.space);
        groups[i].slabs.push(slab.clone());
    }
    groups
}
