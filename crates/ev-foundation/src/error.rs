//! Foundation-specific error types.


use crate::space::FoundationSpace;

/// Foundation validation and apportionment errors.
#[derive(Debug, Clone, PartialEq)]
pub enum FoundationError {
    InvalidArg { what: &'static str },

    /// A wall or slab dimension is negative, non-finite or zero where it
    /// must be positive.
    NonPhysical {
        what: &'static str,
        name: String,
        value: f64,
    },

    /// A slab's space has no foundation wall.
    MissingWall {
        slab: String,
        space: FoundationSpace,
    },

    /// A foundation wall's space has no slab.
    MissingSlab {
        wall: String,
        space: FoundationSpace,
    },

    /// Apportioned instances do not add up to the slab totals.
    ConservationViolation {
        slab: String,
        quantity: &'static str,
        expected: f64,
        actual: f64,
    },
}

impl std::fmt::Display for FoundationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FoundationError::InvalidArg { what } => write!(f, "Invalid argument: {}", what),
            FoundationError::NonPhysical { what, name, value } => {
                write!(f, "Non-physical {} for '{}': {}", what, name, value)
            }
            FoundationError::MissingWall { slab, space } => write!(
                f,
                "Slab '{}' is in space {} but no foundation wall shares that space",
                slab, space
            ),
            FoundationError::MissingSlab { wall, space } => write!(
                f,
                "Foundation wall '{}' is in space {} but no slab shares that space",
                wall, space
            ),
            FoundationError::ConservationViolation {
                slab,
                quantity,
                expected,
                actual,
            } => write!(
                f,
                "Kiva instances for slab '{}' do not conserve {}: expected {}, got {}",
                slab, quantity, expected, actual
            ),
        }
    }
}

impl std::error::Error for FoundationError {}

pub type FoundationResult<T> = Result<T, FoundationError>;
