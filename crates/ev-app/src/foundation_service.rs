//! Foundation grouping and Kiva apportionment.

use ev_core::units::{to_ft, to_sqft};
use ev_foundation::{
    FoundationSpace, FoundationWall, KivaInstance, Slab, check_consistency, group_by_space,
};
use serde::Serialize;
use tracing::debug;

use crate::error::AppResult;
use crate::options::EnvelopeOptions;

/// Kiva instances for one foundation space.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundationReport {
    pub space: FoundationSpace,
    pub wall_ids: Vec<String>,
    pub slab_ids: Vec<String>,
    pub instances: Vec<KivaInstance>,
}

/// Serializable Kiva instance with surface names resolved.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InstanceSummary {
    pub space: FoundationSpace,
    pub wall: Option<String>,
    pub slab: String,
    pub exposed_perimeter_ft: f64,
    pub area_sqft: f64,
    pub z_origin_ft: f64,
}

impl FoundationReport {
    pub fn summaries(&self) -> Vec<InstanceSummary> {
        self.instances
            .iter()
            .map(|i| InstanceSummary {
                space: self.space,
                wall: i.wall.map(|w| self.wall_ids[w.position()].clone()),
                slab: self.slab_ids[i.slab.position()].clone(),
                exposed_perimeter_ft: to_ft(i.exposed_perimeter),
                area_sqft: to_sqft(i.area),
                z_origin_ft: to_ft(i.z_origin),
            })
            .collect()
    }
}

/// Check wall/slab consistency, then apportion each foundation space.
pub fn apportion_foundations(
    walls: &[FoundationWall],
    slabs: &[Slab],
    options: &EnvelopeOptions,
) -> AppResult<Vec<FoundationReport>> {
    check_consistency(walls, slabs)?;

    group_by_space(walls, slabs)
        .into_iter()
        .map(|group| {
            let instances = group.apportion(&options.apportion)?;
            debug!(
                space = %group.space,
                walls = group.walls.len(),
                slabs = group.slabs.len(),
                instances = instances.len(),
                "apportioned foundation space"
            );
            Ok(FoundationReport {
                space: group.space,
                wall_ids: group.walls.iter().map(|w| w.name.clone()).collect(),
                slab_ids: group.slabs.iter().map(|s| s.name.clone()).collect(),
                instances,
            })
        })
        .collect()
}
