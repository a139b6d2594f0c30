//! Materialized constructions: parallel heat-flow paths through stacked layers.

use ev_core::units::{Length, RValue, inch, to_inch};
use ev_core::Real;
use ev_materials::{BaseMaterial, Material};

use crate::error::{ConstructionError, ConstructionResult};
use crate::traits::ConstructionSet;

/// Thickness mismatch allowed between materials sharing a layer (inches).
const LAYER_THICKNESS_TOL_IN: Real = 1e-9;

/// One layer of an assembly, with one material per heat-flow path.
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyLayer {
    pub label: String,
    pub materials: Vec<Material>,
}

impl AssemblyLayer {
    pub fn thickness(&self) -> Length {
        self.materials
            .first()
            .map_or_else(|| inch(0.0), |m| m.thickness)
    }
}

/// Layer stack (outside to inside) with path fractions and air films.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    pub name: String,
    pub path_fractions: Vec<Real>,
    pub film_r: RValue,
    pub layers: Vec<AssemblyLayer>,
}

impl Assembly {
    /// Resistance of each path, films included.
    pub fn path_rvalues(&self) -> Vec<RValue> {
        (0..self.path_fractions.len())
            .map(|path| {
                self.film_r
                    + self
                        .layers
                        .iter()
                        .map(|layer| layer.materials[path].rvalue())
                        .sum::<RValue>()
            })
            .collect()
    }

    /// Parallel-path U-factor, Btu/(h·ft²·°F).
    pub fn u_factor(&self) -> Real {
        self.path_fractions
            .iter()
            .zip(self.path_rvalues())
            .filter(|(f, _)| **f > 0.0)
            .map(|(f, r)| f / r)
            .sum()
    }

    /// Overall R-value recomputed from the layers.
    pub fn assembly_r(&self) -> RValue {
        1.0 / self.u_factor()
    }

    pub fn thickness(&self) -> Length {
        inch(self.layers.iter().map(|l| to_inch(l.thickness())).sum())
    }
}

/// Incremental assembly builder with per-layer validation.
#[derive(Debug, Clone)]
pub struct AssemblyBuilder {
    name: String,
    path_fractions: Vec<Real>,
    film_r: RValue,
    layers: Vec<AssemblyLayer>,
}

impl AssemblyBuilder {
    pub fn new(name: impl Into<String>, path_fractions: Vec<Real>) -> ConstructionResult<Self> {
        if path_fractions.is_empty() {
            return Err(ConstructionError::InvalidArg {
                what: "assembly needs at least one path",
            });
        }
        if let Some(bad) = path_fractions
            .iter()
            .find(|f| !f.is_finite() || **f < 0.0)
        {
            return Err(ConstructionError::NonPhysical {
                what: "path fraction",
                value: *bad,
            });
        }
        let total: Real = path_fractions.iter().sum();
        if (total - 1.0).abs() > 1e-9 {
            return Err(ConstructionError::NonPhysical {
                what: "sum of path fractions",
                value: total,
            });
        }
        Ok(Self {
            name: name.into(),
            path_fractions,
            film_r: 0.0,
            layers: Vec::new(),
        })
    }

    pub fn path_count(&self) -> usize {
        self.path_fractions.len()
    }

    pub fn film_r(&mut self, film_r: RValue) -> &mut Self {
        self.film_r = film_r;
        self
    }

    /// Layer made of the same material in every path.
    pub fn uniform(&mut self, label: impl Into<String>, material: Material) -> &mut Self {
        let materials = vec![material; self.path_count()];
        self.layers.push(AssemblyLayer {
            label: label.into(),
            materials,
        });
        self
    }

    /// Layer with one material per path.
    pub fn layer(
        &mut self,
        label: impl Into<String>,
        materials: Vec<Material>,
    ) -> ConstructionResult<&mut Self> {
        if materials.len() != self.path_count() {
            return Err(ConstructionError::InvalidArg {
                what: "layer material count must equal path count",
            });
        }
        let t0 = materials[0].thickness_in();
        if materials
            .iter()
            .any(|m| (m.thickness_in() - t0).abs() > LAYER_THICKNESS_TOL_IN)
        {
            return Err(ConstructionError::InvalidArg {
                what: "materials within a layer must share a thickness",
            });
        }
        self.layers.push(AssemblyLayer {
            label: label.into(),
            materials,
        });
        Ok(self)
    }

    pub fn build(self) -> Assembly {
        Assembly {
            name: self.name,
            path_fractions: self.path_fractions,
            film_r: self.film_r,
            layers: self.layers,
        }
    }
}

/// Insulation layer of `thickness` sized to carry `rvalue`.
pub(crate) fn insulation(
    name: &str,
    thickness: Length,
    rvalue: RValue,
    base: BaseMaterial,
) -> ConstructionResult<Material> {
    Ok(Material::from_rvalue(name, thickness, rvalue.max(0.0), base)?)
}

/// Lay out a candidate set with its solved unknown.
pub fn materialize(
    name: impl Into<String>,
    set: &dyn ConstructionSet,
    film_r: RValue,
    unknown_r: RValue,
) -> ConstructionResult<Assembly> {
    let mut builder = AssemblyBuilder::new(name, set.path_fractions())?;
    builder.film_r(film_r);

    let fixed = set.fixed();
    if let Some(finish) = &fixed.exterior_finish {
        builder.uniform("ExteriorFinish", finish.clone());
    }
    if fixed.rigid_r > 0.0 {
        builder.uniform("RigidInsulation", Material::rigid(fixed.rigid_r)?);
    }
    if let Some(sheathing) = fixed.sheathing() {
        builder.uniform("Sheathing", sheathing);
    }

    set.core_layers(unknown_r, &mut builder)?;

    if let Some(drywall) = fixed.drywall() {
        builder.uniform("Drywall", drywall);
    }
    if let Some(finish) = &fixed.interior_finish {
        builder.uniform("InteriorFinish", finish.clone());
    }

    Ok(builder.build())
}
