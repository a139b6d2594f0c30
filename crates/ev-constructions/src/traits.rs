//! Shared candidate-set behavior.

use ev_core::units::{Length, RValue, inch, to_inch};
use ev_core::Real;
use ev_materials::Material;

use crate::assembly::AssemblyBuilder;
use crate::error::ConstructionResult;

/// Layer properties a candidate set fixes up front.
///
/// Layer order for materialization is exterior finish, rigid insulation,
/// sheathing, (category core), drywall, interior finish.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedLayers {
    /// Fraction of surface area occupied by framing
    pub framing_factor: Real,
    /// Continuous rigid insulation R-value (0 = none)
    pub rigid_r: RValue,
    /// OSB/plywood sheathing thickness (0 = none)
    pub sheathing_thickness: Length,
    /// Gypsum board thickness (0 = none)
    pub drywall_thickness: Length,
    pub exterior_finish: Option<Material>,
    /// Floor covering or other interior-side finish
    pub interior_finish: Option<Material>,
}

impl FixedLayers {
    /// Framing only: no rigid insulation, boards or finishes.
    pub fn framed(framing_factor: Real) -> Self {
        Self {
            framing_factor,
            rigid_r: 0.0,
            sheathing_thickness: inch(0.0),
            drywall_thickness: inch(0.0),
            exterior_finish: None,
            interior_finish: None,
        }
    }

    pub fn with_rigid(mut self, rigid_r: RValue) -> Self {
        self.rigid_r = rigid_r;
        self
    }

    /// Sheathing thickness in inches.
    pub fn with_sheathing(mut self, thickness_in: Real) -> Self {
        self.sheathing_thickness = inch(thickness_in);
        self
    }

    /// Drywall thickness in inches.
    pub fn with_drywall(mut self, thickness_in: Real) -> Self {
        self.drywall_thickness = inch(thickness_in);
        self
    }

    pub fn with_exterior_finish(mut self, finish: Option<Material>) -> Self {
        self.exterior_finish = finish;
        self
    }

    pub fn with_interior_finish(mut self, finish: Option<Material>) -> Self {
        self.interior_finish = finish;
        self
    }

    pub fn sheathing(&self) -> Option<Material> {
        (to_inch(self.sheathing_thickness) > 0.0)
            .then(|| Material::sheathing(self.sheathing_thickness))
    }

    pub fn drywall(&self) -> Option<Material> {
        (to_inch(self.drywall_thickness) > 0.0).then(|| Material::gypsum(self.drywall_thickness))
    }

    /// Films plus every fixed layer.
    pub fn non_cavity_r(&self, film_r: RValue) -> RValue {
        let finishes: RValue = self
            .exterior_finish
            .iter()
            .chain(self.interior_finish.iter())
            .map(Material::rvalue)
            .sum();
        let boards: RValue = self
            .sheathing()
            .iter()
            .chain(self.drywall().iter())
            .map(Material::rvalue)
            .sum();
        film_r + finishes + self.rigid_r + boards
    }
}

/// One candidate construction of a category.
///
/// Each implementation leaves exactly one layer property unknown and knows how
/// to solve for it, evaluate it forward, and lay it out as parallel paths.
pub trait ConstructionSet {
    /// Short human-readable description, used in logs.
    fn describe(&self) -> String;

    fn fixed(&self) -> &FixedLayers;

    /// Resistance of everything except the unknown layer, films included.
    fn non_cavity_r(&self, film_r: RValue) -> RValue {
        self.fixed().non_cavity_r(film_r)
    }

    /// Solve the category relation for the unknown layer R-value.
    ///
    /// Returns the raw solution, which may be non-positive; `None` when the
    /// relation has no real, finite solution.
    fn solve_unknown(&self, assembly_r: RValue, non_cavity_r: RValue) -> Option<RValue>;

    /// Forward evaluation: assembly R-value for a given unknown.
    fn assembly_r(&self, non_cavity_r: RValue, unknown_r: RValue) -> RValue;

    /// Area fractions of the parallel heat-flow paths.
    fn path_fractions(&self) -> Vec<Real>;

    /// Append the layers that carry the unknown (the framed/core region).
    fn core_layers(&self, unknown_r: RValue, builder: &mut AssemblyBuilder)
    -> ConstructionResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use ev_materials::SidingType;

    #[test]
    fn non_cavity_sums_all_fixed_layers() {
        let fixed = FixedLayers::framed(0.2)
            .with_rigid(5.0)
            .with_sheathing(0.5)
            .with_drywall(0.5)
            .with_exterior_finish(SidingType::Vinyl.material());
        let expected = 0.85
            + 0.6
            + 5.0
            + Material::sheathing(inch(0.5)).rvalue()
            + Material::gypsum(inch(0.5)).rvalue();
        assert!((fixed.non_cavity_r(0.85) - expected).abs() < 1e-12);
    }

    #[test]
    fn bare_fallback_is_films_only() {
        let fixed = FixedLayers::framed(0.01);
        assert_eq!(fixed.non_cavity_r(0.68), 0.68);
        assert!(fixed.sheathing().is_none());
        assert!(fixed.drywall().is_none());
    }

    #[test]
    fn builder_sets_each_layer_by_name() {
        let fixed = FixedLayers::framed(0.17)
            .with_drywall(0.625)
            .with_rigid(10.0)
            .with_sheathing(0.5);
        assert_eq!(fixed.framing_factor, 0.17);
        assert_eq!(fixed.rigid_r, 10.0);
        assert!((to_inch(fixed.sheathing_thickness) - 0.5).abs() < 1e-12);
        assert!((to_inch(fixed.drywall_thickness) - 0.625).abs() < 1e-12);
        assert!(fixed.exterior_finish.is_none());
        assert!(fixed.interior_finish.is_none());
    }
}
