//! Kiva instance apportionment.
//!
//! Each exterior foundation wall is paired with each slab of its space. A pair
//! receives the slab's perimeter and area in proportion to the wall's share of
//! total wall length, capped so that a wall never carries more perimeter than
//! its length scaled by the slab's share of total exposed perimeter. Whatever
//! the caps cut off becomes a no-wall instance for that slab.

use ev_core::numeric::{Tolerances, ensure_non_negative, nearly_equal};
use ev_core::units::{ft, sqft, to_ft, to_sqft};
use ev_core::{Id, Real};
use tracing::debug;

use crate::error::{FoundationError, FoundationResult};
use crate::types::{FoundationSpaceGroup, FoundationWall, KivaInstance, Slab};

/// Apportionment tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApportionConfig {
    /// Smallest leftover share of a slab's exposed perimeter that gets its
    /// own no-wall instance. Smaller leftovers are cap round-off.
    pub min_remainder: Real,
    /// Tolerance for the per-slab perimeter and area sums.
    pub conservation_tolerance: Tolerances,
}

impl Default for ApportionConfig {
    fn default() -> Self {
        Self {
            min_remainder: 1e-10,
            conservation_tolerance: Tolerances {
                abs: 1e-6,
                rel: 1e-9,
            },
        }
    }
}

impl ApportionConfig {
    /// `min_remainder` must lie in [0, 1]; tolerances must be finite and
    /// non-negative.
    pub fn validate(&self) -> FoundationResult<()> {
        const NAME: &str = "apportion config";
        non_negative("minimum remainder", NAME, self.min_remainder)?;
        if self.min_remainder > 1.0 {
            return Err(non_physical("minimum remainder", NAME, self.min_remainder));
        }
        let tol = self.conservation_tolerance;
        non_negative("absolute conservation tolerance", NAME, tol.abs)?;
        non_negative("relative conservation tolerance", NAME, tol.rel)?;
        Ok(())
    }
}

/// Apportion with the default configuration.
pub fn apportion(walls: &[FoundationWall], slabs: &[Slab]) -> FoundationResult<Vec<KivaInstance>> {
    apportion_with_config(walls, slabs, &ApportionConfig::default())
}

impl FoundationSpaceGroup {
    pub fn apportion(&self, config: &ApportionConfig) -> FoundationResult<Vec<KivaInstance>> {
        apportion_with_config(&self.walls, &self.slabs, config)
    }
}

/// Exterior wall paired with slabs: (position, length ft, depth ft).
struct PairedWall {
    position: usize,
    length_ft: Real,
    depth_ft: Real,
}

/// Build the Kiva instances for one foundation space.
///
/// Wall and slab ids in the output are positions in `walls` and `slabs`.
pub fn apportion_with_config(
    walls: &[FoundationWall],
    slabs: &[Slab],
    config: &ApportionConfig,
) -> FoundationResult<Vec<KivaInstance>> {
    config.validate()?;
    validate(walls, slabs)?;

    // Zero-length walls carry nothing and are treated like interior walls
    let paired: Vec<PairedWall> = walls
        .iter()
        .enumerate()
        .filter(|(_, w)| w.exterior)
        .map(|(position, w)| PairedWall {
            position,
            length_ft: to_ft(w.length()),
            depth_ft: to_ft(w.depth_below_grade),
        })
        .filter(|w| w.length_ft > 0.0)
        .collect();

    let total_length: Real = paired.iter().map(|w| w.length_ft).sum();
    let total_perimeter: Real = slabs.iter().map(|s| to_ft(s.exposed_perimeter)).sum();

    let mut instances = Vec::with_capacity(paired.len().max(1) * slabs.len() + slabs.len());
    let mut remainders = vec![0.0; slabs.len()];

    if paired.is_empty() {
        for (s, slab) in slabs.iter().enumerate() {
            instances.push(KivaInstance {
                wall: None,
                slab: Id::from_usize(s).map_err(|_| too_many("slabs"))?,
                exposed_perimeter: slab.exposed_perimeter,
                area: slab.area,
                z_origin: -slab.depth_below_grade,
            });
        }
    }

    for wall in &paired {
        let wall_id = Id::from_usize(wall.position).map_err(|_| too_many("walls"))?;
        let wall_frac = wall.length_ft / total_length;

        for (s, slab) in slabs.iter().enumerate() {
            let slab_perimeter = to_ft(slab.exposed_perimeter);
            let slab_area = to_sqft(slab.area);
            let slab_frac = if total_perimeter > 0.0 {
                slab_perimeter / total_perimeter
            } else {
                0.0
            };

            let mut perimeter = slab_perimeter * wall_frac;
            let mut area = slab_area * wall_frac;
            let cap = wall.length_ft * slab_frac;
            if perimeter > cap {
                area *= cap / perimeter;
                remainders[s] += perimeter - cap;
                perimeter = cap;
            }

            instances.push(KivaInstance {
                wall: Some(wall_id),
                slab: Id::from_usize(s).map_err(|_| too_many("slabs"))?,
                exposed_perimeter: ft(perimeter),
                area: sqft(area),
                z_origin: ft(-wall.depth_ft),
            });
        }
    }

    for (s, (slab, remainder)) in slabs.iter().zip(&remainders).enumerate() {
        let slab_perimeter = to_ft(slab.exposed_perimeter);
        if *remainder <= config.min_remainder * slab_perimeter {
            continue;
        }
        debug!(
            slab = %slab.name,
            remainder_ft = remainder,
            "slab perimeter not covered by foundation walls"
        );
        instances.push(KivaInstance {
            wall: None,
            slab: Id::from_usize(s).map_err(|_| too_many("slabs"))?,
            exposed_perimeter: ft(*remainder),
            area: sqft(to_sqft(slab.area) * remainder / slab_perimeter),
            z_origin: ft(0.0),
        });
    }

    check_conservation(slabs, &instances, config.conservation_tolerance)?;
    Ok(instances)
}

/// Verify that the instances of every slab add up to its perimeter and area.
pub fn check_conservation(
    slabs: &[Slab],
    instances: &[KivaInstance],
    tol: Tolerances,
) -> FoundationResult<()> {
    for (s, slab) in slabs.iter().enumerate() {
        let mine = || instances.iter().filter(move |i| i.slab.position() == s);
        let perimeter: Real = mine().map(|i| to_ft(i.exposed_perimeter)).sum();
        let area: Real = mine().map(|i| to_sqft(i.area)).sum();

        let expected_perimeter = to_ft(slab.exposed_perimeter);
        if !nearly_equal(perimeter, expected_perimeter, tol) {
            return Err(FoundationError::ConservationViolation {
                slab: slab.name.clone(),
                quantity: "exposed perimeter",
                expected: expected_perimeter,
                actual: perimeter,
            });
        }
        let expected_area = to_sqft(slab.area);
        if !nearly_equal(area, expected_area, tol) {
            return Err(FoundationError::ConservationViolation {
                slab: slab.name.clone(),
                quantity: "area",
                expected: expected_area,
                actual: area,
            });
        }
    }
    Ok(())
}

fn too_many(what: &'static str) -> FoundationError {
    FoundationError::InvalidArg { what }
}

fn validate(walls: &[FoundationWall], slabs: &[Slab]) -> FoundationResult<()> {
    for wall in walls {
        let height = to_ft(wall.height);
        if !height.is_finite() || height <= 0.0 {
            return Err(non_physical("wall height", &wall.name, height));
        }
        non_negative("wall area", &wall.name, to_sqft(wall.area))?;
        non_negative("wall depth below grade", &wall.name, to_ft(wall.depth_below_grade))?;
    }
    for slab in slabs {
        non_negative(
            "slab exposed perimeter",
            &slab.name,
            to_ft(slab.exposed_perimeter),
        )?;
        non_negative("slab area", &slab.name, to_sqft(slab.area))?;
        non_negative("slab depth below grade", &slab.name, to_ft(slab.depth_below_grade))?;
    }
    Ok(())
}

fn non_negative(what: &'static str, name: &str, value: Real) -> FoundationResult<()> {
    ensure_non_negative(value, what)
        .map(|_| ())
        .map_err(|_| non_physical(what, name, value))
}

fn non_physical(what: &'static str, name: &str, value: Real) -> FoundationError {
    FoundationError::NonPhysical {
        what,
        name: name.to_string(),
        value,
    }
}
