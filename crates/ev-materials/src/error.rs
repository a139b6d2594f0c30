//! Material property errors.

use thiserror::Error;

/// Result type for material operations.
pub type MaterialResult<T> = Result<T, MaterialError>;

/// Errors that can occur while sizing material layers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MaterialError {
    /// Non-physical values (zero thickness, negative conductivity, etc.).
    #[error("Non-physical value for {what}: {value}")]
    NonPhysical { what: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MaterialError::NonPhysical {
            what: "thickness",
            value: -1.0,
        };
        assert!(err.to_string().contains("thickness"));
    }
}
