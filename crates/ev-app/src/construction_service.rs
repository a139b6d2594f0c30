//! Per-surface construction synthesis.

use ev_constructions::{
    Assembly, CategoryKind, ConstructionCategory, Verification, floor_category,
    foundation_wall_category, rim_joist_category, roof_category, synthesize, verify,
    wall_category,
};
use ev_core::units::{RValue, to_inch};
use ev_materials::film_r;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::options::EnvelopeOptions;
use crate::schema::{SurfaceDef, SurfaceKindDef};

/// Synthesized, materialized and verified construction for one surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceConstruction {
    pub surface_id: String,
    pub category: CategoryKind,
    pub candidate_index: usize,
    pub matched: bool,
    pub requested_r: RValue,
    pub unknown_r: RValue,
    pub assembly: Assembly,
    pub verification: Verification,
}

impl SurfaceConstruction {
    pub fn achieved_r(&self) -> RValue {
        self.verification.achieved()
    }

    pub fn summary(&self) -> SurfaceSummary {
        SurfaceSummary {
            id: self.surface_id.clone(),
            category: self.category.to_string(),
            candidate_index: self.candidate_index,
            matched: self.matched,
            requested_r: self.requested_r,
            achieved_r: self.achieved_r(),
            unknown_r: self.unknown_r,
            thickness_in: to_inch(self.assembly.thickness()),
            path_fractions: self.assembly.path_fractions.clone(),
            layers: self
                .assembly
                .layers
                .iter()
                .map(|l| l.label.clone())
                .collect(),
        }
    }
}

/// Serializable surface report row.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SurfaceSummary {
    pub id: String,
    pub category: String,
    pub candidate_index: usize,
    pub matched: bool,
    pub requested_r: f64,
    pub achieved_r: f64,
    pub unknown_r: f64,
    pub thickness_in: f64,
    pub path_fractions: Vec<f64>,
    pub layers: Vec<String>,
}

/// Default candidate list for a surface kind.
pub fn category_for(kind: &SurfaceKindDef, drywall_in: f64) -> AppResult<ConstructionCategory> {
    let category = match kind {
        SurfaceKindDef::Wall { wall_type, siding } => {
            wall_category(*wall_type, drywall_in, *siding)?
        }
        SurfaceKindDef::RimJoist { siding } => rim_joist_category(drywall_in, *siding),
        SurfaceKindDef::Roof { roofing, .. } => roof_category(drywall_in, *roofing),
        SurfaceKindDef::Floor { covering } => floor_category(*covering),
        SurfaceKindDef::FoundationWall { thickness_in } => {
            foundation_wall_category(*thickness_in, drywall_in)
        }
    };
    Ok(category)
}

/// Synthesize, materialize and verify one surface.
pub fn synthesize_construction(
    surface: &SurfaceDef,
    options: &EnvelopeOptions,
) -> AppResult<SurfaceConstruction> {
    if !surface.drywall_thickness_in.is_finite() || surface.drywall_thickness_in < 0.0 {
        return Err(AppError::InvalidInput(format!(
            "Surface '{}' has invalid drywall thickness {}",
            surface.id, surface.drywall_thickness_in
        )));
    }

    let category = category_for(&surface.kind, surface.drywall_thickness_in)?;
    let film = film_r(surface.kind.orientation(), surface.exposure);

    let solved = synthesize(&category, surface.assembly_r, film).map_err(|e| {
        AppError::Construction(format!("Surface '{}': {}", surface.id, e))
    })?;
    let assembly = solved.materialize(surface.id.clone())?;
    let verification = verify(&surface.id, &solved, &assembly, options.rvalue_tolerance)?;

    if let Verification::Degraded {
        requested,
        achieved,
    } = verification
    {
        warn!(
            surface = %surface.id,
            category = %solved.kind(),
            requested,
            achieved,
            "could not meet requested assembly R-value; using fallback construction"
        );
    }

    Ok(SurfaceConstruction {
        surface_id: surface.id.clone(),
        category: solved.kind(),
        candidate_index: solved.candidate_index,
        matched: solved.matched,
        requested_r: solved.requested_r,
        unknown_r: solved.unknown_r,
        assembly,
        verification,
    })
}

/// Synthesize every surface, preserving input order.
pub fn synthesize_all(
    surfaces: &[SurfaceDef],
    options: &EnvelopeOptions,
) -> AppResult<Vec<SurfaceConstruction>> {
    options.validate()?;
    info!(
        surfaces = surfaces.len(),
        parallel = options.parallel,
        "synthesizing constructions"
    );
    if options.parallel {
        surfaces
            .par_iter()
            .map(|s| synthesize_construction(s, options))
            .collect()
    } else {
        surfaces
            .iter()
            .map(|s| synthesize_construction(s, options))
            .collect()
    }
}
