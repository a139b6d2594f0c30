//! Whole-envelope loading, validation and processing.

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::construction_service::{SurfaceConstruction, SurfaceSummary, synthesize_all};
use crate::error::{AppError, AppResult};
use crate::foundation_service::{FoundationReport, InstanceSummary, apportion_foundations};
use crate::options::EnvelopeOptions;
use crate::schema::EnvelopeDef;

/// Load an envelope description. JSON when the extension is `.json`, YAML
/// otherwise.
pub fn load_envelope(path: &Path) -> AppResult<EnvelopeDef> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::EnvelopeFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content)
            .map_err(|e| AppError::EnvelopeParse(format!("Invalid envelope JSON: {}", e)))
    } else {
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::EnvelopeParse(format!("Invalid envelope YAML: {}", e)))
    }
}

/// Structural checks that do not require synthesis.
pub fn validate_envelope(envelope: &EnvelopeDef) -> AppResult<()> {
    let mut seen = HashSet::new();
    let ids = envelope
        .surfaces
        .iter()
        .map(|s| &s.id)
        .chain(envelope.foundation_walls.iter().map(|w| &w.id))
        .chain(envelope.slabs.iter().map(|s| &s.id));
    for id in ids {
        if !seen.insert(id.as_str()) {
            return Err(AppError::Validation(format!("Duplicate surface id '{}'", id)));
        }
    }

    for surface in &envelope.surfaces {
        if !surface.assembly_r.is_finite() || surface.assembly_r <= 0.0 {
            return Err(AppError::Validation(format!(
                "Surface '{}' must have a positive assembly R-value, got {}",
                surface.id, surface.assembly_r
            )));
        }
    }

    let walls: Vec<_> = envelope.foundation_walls.iter().map(|w| w.to_wall()).collect();
    let slabs: Vec<_> = envelope.slabs.iter().map(|s| s.to_slab()).collect();
    ev_foundation::check_consistency(&walls, &slabs)?;
    Ok(())
}

/// Constructions and Kiva instances for a whole envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvelopeReport {
    pub name: String,
    pub constructions: Vec<SurfaceConstruction>,
    pub foundations: Vec<FoundationReport>,
}

impl EnvelopeReport {
    /// Surfaces that fell back to an unmatched construction.
    pub fn degraded_surfaces(&self) -> Vec<&str> {
        self.constructions
            .iter()
            .filter(|c| c.verification.is_degraded())
            .map(|c| c.surface_id.as_str())
            .collect()
    }

    pub fn summary(&self) -> EnvelopeSummary {
        EnvelopeSummary {
            name: self.name.clone(),
            surfaces: self.constructions.iter().map(|c| c.summary()).collect(),
            kiva_instances: self
                .foundations
                .iter()
                .flat_map(|f| f.summaries())
                .collect(),
            degraded_surfaces: self
                .degraded_surfaces()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Serializable envelope report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EnvelopeSummary {
    pub name: String,
    pub surfaces: Vec<SurfaceSummary>,
    pub kiva_instances: Vec<InstanceSummary>,
    pub degraded_surfaces: Vec<String>,
}

/// Synthesize every surface and apportion every foundation space.
pub fn materialize_envelope(
    envelope: &EnvelopeDef,
    options: &EnvelopeOptions,
) -> AppResult<EnvelopeReport> {
    validate_envelope(envelope)?;

    let constructions = synthesize_all(&envelope.surfaces, options)?;

    let walls: Vec<_> = envelope.foundation_walls.iter().map(|w| w.to_wall()).collect();
    let slabs: Vec<_> = envelope.slabs.iter().map(|s| s.to_slab()).collect();
    let foundations = apportion_foundations(&walls, &slabs, options)?;

    let report = EnvelopeReport {
        name: envelope.name.clone(),
        constructions,
        foundations,
    };
    info!(
        envelope = %report.name,
        surfaces = report.constructions.len(),
        degraded = report.degraded_surfaces().len(),
        "envelope processed"
    );
    Ok(report)
}

/// Write the envelope summary as pretty JSON.
pub fn write_report(path: &Path, report: &EnvelopeReport) -> AppResult<()> {
    let content = serde_json::to_string_pretty(&report.summary())
        .map_err(|e| AppError::InvalidInput(format!("Failed to serialize report: {}", e)))?;
    std::fs::write(path, content).map_err(|e| AppError::ReportWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{SlabDef, SurfaceDef, SurfaceKindDef};
    use ev_foundation::FoundationSpace;
    use ev_materials::{Exposure, FloorCovering};

    fn floor(id: &str) -> SurfaceDef {
        SurfaceDef {
            id: id.into(),
            kind: SurfaceKindDef::Floor {
                covering: FloorCovering::Carpet,
            },
            assembly_r: 20.0,
            exposure: Exposure::Interior,
            drywall_thickness_in: 0.0,
        }
    }

    #[test]
    fn duplicate_ids_rejected() {
        let envelope = EnvelopeDef {
            version: 1,
            name: "dup".into(),
            surfaces: vec![floor("F1"), floor("F1")],
            foundation_walls: vec![],
            slabs: vec![],
        };
        assert!(matches!(
            validate_envelope(&envelope),
            Err(AppError::Validation(ref m)) if m.contains("F1")
        ));
    }

    #[test]
    fn slab_on_grade_only_envelope() {
        let envelope = EnvelopeDef {
            version: 1,
            name: "slab".into(),
            surfaces: vec![floor("F1")],
            foundation_walls: vec![],
            slabs: vec![SlabDef {
                id: "Slab".into(),
                space: FoundationSpace::ConditionedSpace,
                exposed_perimeter_ft: 140.0,
                area_sqft: 1200.0,
                depth_below_grade_ft: 0.0,
            }],
        };
        let report = materialize_envelope(&envelope, &EnvelopeOptions::default()).unwrap();
        assert_eq!(report.foundations.len(), 1);
        assert_eq!(report.foundations[0].instances.len(), 1);
        assert!(report.degraded_surfaces().is_empty());

        let summary = report.summary();
        assert_eq!(summary.kiva_instances[0].wall, None);
        assert!(serde_json::to_string(&summary).is_ok());
    }
}
