//! ev-core: stable foundation for the envelope workspace.
//!
//! Contains:
//! - units (uom SI types + IP constructors, R-value conventions)
//! - numeric (Real + tolerances + float helpers)
//! - ids (compact wall/slab identifiers)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{EvError, EvResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
