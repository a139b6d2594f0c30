//! Error types for construction synthesis.

use ev_materials::MaterialError;
use thiserror::Error;

/// Errors that can occur while synthesizing or verifying a construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstructionError {
    #[error("Non-physical value for {what}: {value}")]
    NonPhysical { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error(
        "Construction R-value ({computed:.3}) for surface '{surface}' does not match assembly R-value ({requested:.3}), tolerance {tolerance}"
    )]
    Mismatch {
        surface: String,
        computed: f64,
        requested: f64,
        tolerance: f64,
    },

    #[error("Material error: {0}")]
    Material(#[from] MaterialError),
}

pub type ConstructionResult<T> = Result<T, ConstructionError>;
