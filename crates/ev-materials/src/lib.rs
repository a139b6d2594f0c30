//! ev-materials: building material properties for envelope constructions.
//!
//! Provides:
//! - Base material properties (wood, gypsum, concrete, masonry, insulation)
//! - Sized `Material` layers with IP R-value arithmetic
//! - Exterior/interior finish catalogs (siding, roofing, floor coverings)
//! - Air film resistances by orientation and exposure
//!
//! # Example
//!
//! ```
//! use ev_materials::Material;
//! use ev_core::units::inch;
//!
//! let drywall = Material::gypsum(inch(0.5));
//! assert!((drywall.rvalue() - 0.45).abs() < 0.01);
//! ```

pub mod base;
pub mod error;
pub mod films;
pub mod finish;
pub mod material;

// Re-exports for ergonomics
pub use base::BaseMaterial;
pub use error::{MaterialError, MaterialResult};
pub use films::{Exposure, FilmOrientation, film_r, inside_film};
pub use finish::{FloorCovering, RoofingType, SidingType};
pub use material::{MIN_LAYER_RVALUE, Material};
