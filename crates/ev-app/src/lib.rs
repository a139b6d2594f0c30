//! Shared application service layer for envelope processing.
//!
//! Loads envelope descriptions, synthesizes a construction for every opaque
//! surface and apportions foundation slabs into Kiva instances. Used by the
//! CLI.

pub mod construction_service;
pub mod envelope_service;
pub mod error;
pub mod foundation_service;
pub mod options;
pub mod schema;

// Re-export key types for convenience
pub use construction_service::{
    SurfaceConstruction, SurfaceSummary, category_for, synthesize_all, synthesize_construction,
};
pub use envelope_service::{
    EnvelopeReport, EnvelopeSummary, load_envelope, materialize_envelope, validate_envelope,
    write_report,
};
pub use error::{AppError, AppResult};
pub use foundation_service::{FoundationReport, InstanceSummary, apportion_foundations};
pub use options::EnvelopeOptions;
pub use schema::{EnvelopeDef, FoundationWallDef, SlabDef, SurfaceDef, SurfaceKindDef};
