//! Service-layer configuration.

use ev_constructions::DEFAULT_RVALUE_TOLERANCE;
use ev_core::Real;
use ev_core::numeric::ensure_non_negative;
use ev_foundation::ApportionConfig;

use crate::error::{AppError, AppResult};

/// Options for envelope processing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeOptions {
    /// Allowed difference between requested and materialized R-value.
    pub rvalue_tolerance: Real,
    /// Synthesize surfaces on the rayon pool.
    pub parallel: bool,
    pub apportion: ApportionConfig,
}

impl Default for EnvelopeOptions {
    fn default() -> Self {
        Self {
            rvalue_tolerance: DEFAULT_RVALUE_TOLERANCE,
            parallel: true,
            apportion: ApportionConfig::default(),
        }
    }
}

impl EnvelopeOptions {
    /// Reject tolerances and remainders that would make every surface or
    /// slab fail downstream.
    pub fn validate(&self) -> AppResult<()> {
        ensure_non_negative(self.rvalue_tolerance, "R-value tolerance").map_err(|e| {
            AppError::InvalidInput(e.to_string())
        })?;
        self.apportion.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(EnvelopeOptions::default().validate().is_ok());
    }

    #[test]
    fn rejects_negative_tolerance_and_remainder() {
        let options = EnvelopeOptions {
            rvalue_tolerance: -0.1,
            ..EnvelopeOptions::default()
        };
        assert!(matches!(options.validate(), Err(AppError::InvalidInput(_))));

        let options = EnvelopeOptions {
            rvalue_tolerance: Real::INFINITY,
            ..EnvelopeOptions::default()
        };
        assert!(options.validate().is_err());

        let options = EnvelopeOptions {
            apportion: ApportionConfig {
                min_remainder: -1e-3,
                ..ApportionConfig::default()
            },
            ..EnvelopeOptions::default()
        };
        assert!(matches!(options.validate(), Err(AppError::Foundation(_))));
    }
}
